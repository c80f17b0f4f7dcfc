use crate::constants::{IMAGE_HEIGHT, IMAGE_WIDTH};
use clap::Parser;

/// Command line arguments, parsed with clap's derive macros.
#[derive(Parser)]
#[command(name = "rayscape")]
#[command(about = "A small Whitted-style ray tracer writing binary PPM images")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = IMAGE_WIDTH)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = IMAGE_HEIGHT)]
    pub height: usize,

    /// Output file path (binary PPM)
    #[arg(short, long, default_value = "render.ppm")]
    pub output: String,

    /// OBJ file whose triangles are added to the scene
    #[arg(long)]
    pub mesh: Option<String>,

    /// Uniform scale applied to imported mesh vertices
    #[arg(long, default_value_t = 1.0)]
    pub mesh_scale: f32,

    /// Log at debug level instead of info
    #[arg(short, long)]
    pub verbose: bool,
}
