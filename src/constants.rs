use crate::vec3::Vec3;

pub const IMAGE_WIDTH: usize = 1600;
pub const IMAGE_HEIGHT: usize = 1600;

pub const MAX_RECURSION_DEPTH: u32 = 10;

pub const BACKGROUND_COLOR: Vec3 = Vec3::new(0.0, 0.0, 0.3);
pub const AMBIENT_LIGHT: Vec3 = Vec3::new(0.1, 0.1, 0.1);

/// Scale applied to each channel before truncation to a byte.
pub const COLOR_SCALE: f32 = 254.0;

pub const VIEWPORT_WIDTH: f32 = 2.0;
pub const VIEWPORT_HEIGHT: f32 = 2.0;
pub const FOCAL_LENGTH: f32 = 1.0;
