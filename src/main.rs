use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug, info};
use rayon::prelude::*;
use std::time::Instant;

mod camera;
mod cli;
mod constants;
mod material;
mod objects;
mod output;
mod ray;
mod scene;
mod vec3;

use camera::Camera;
use cli::Args;
use constants::*;
use material::Material;
use objects::{Plane, Sphere, Triangle, load_obj};
use ray::Ray;
use scene::Scene;
use vec3::Vec3;

/// Cast a ray into the scene and return its unclamped color: diffuse shading
/// from the light directions blended with a recursively traced mirror
/// reflection, plus a constant ambient term. The depth cap is checked before
/// any intersection work; a capped ray reports the background even with
/// geometry in front of it.
fn trace_ray(scene: &Scene, ray: &Ray, depth: u32) -> Vec3 {
    if depth >= MAX_RECURSION_DEPTH {
        return BACKGROUND_COLOR;
    }

    if let Some(hit) = scene.nearest_hit(ray) {
        let shade: f32 = scene
            .lights
            .iter()
            .map(|light| hit.normal.dot(*light).max(0.0))
            .sum();

        let reflection_direction =
            (ray.direction - 2.0 * ray.direction.dot(hit.normal) * hit.normal).normalize();
        let reflection_ray = Ray::new(hit.point, reflection_direction);
        let reflection_color = trace_ray(scene, &reflection_ray, depth + 1);

        let direct = hit.material.color * (shade * (1.0 - hit.material.reflection));
        let reflected = reflection_color * hit.material.reflection;
        direct + reflected + AMBIENT_LIGHT
    } else {
        BACKGROUND_COLOR
    }
}

/// Trace one ray per pixel into an interleaved RGB buffer, top row first.
/// Rows render independently and in parallel.
fn render(scene: &Scene, camera: &Camera, width: usize, height: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; width * height * 3];

    buffer
        .par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(row, pixels)| {
            // Buffer rows run top-down; viewport t runs bottom-up.
            let j = height - 1 - row;
            let t = j as f32 / (height - 1) as f32;
            for i in 0..width {
                let s = i as f32 / (width - 1) as f32;
                let ray = camera.ray_at(s, t);
                let color = trace_ray(scene, &ray, 0);
                let [r, g, b] = color.to_rgb_bytes();
                pixels[i * 3] = r;
                pixels[i * 3 + 1] = g;
                pixels[i * 3 + 2] = b;
            }
        });

    buffer
}

fn init_scene(args: &Args) -> Result<Scene> {
    let mut scene = Scene {
        spheres: vec![
            Sphere {
                center: Vec3::new(-1.0, -0.25, -1.0),
                radius: 0.25,
                mat: Material {
                    color: Vec3::new(1.0, 0.0, 0.0),
                    reflection: 0.5,
                },
            },
            Sphere {
                center: Vec3::new(-1.0, -0.25, -2.0),
                radius: 0.25,
                mat: Material {
                    color: Vec3::new(0.0, 1.0, 0.0),
                    reflection: 0.5,
                },
            },
            Sphere {
                center: Vec3::new(1.0, 1.0, -2.0),
                radius: 1.0,
                mat: Material {
                    color: Vec3::new(0.0, 0.0, 1.0),
                    reflection: 0.5,
                },
            },
        ],
        planes: vec![Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            d: -0.5,
            mat: Material {
                color: Vec3::new(0.1, 0.1, 0.1),
                reflection: 0.1,
            },
        }],
        triangles: vec![Triangle {
            v0: Vec3::new(0.25, 0.5, -1.0),
            v1: Vec3::new(0.0, 0.5, -1.0),
            v2: Vec3::new(0.0, 0.0, -1.0),
            mat: Material {
                color: Vec3::new(1.0, 0.0, 1.0),
                reflection: 0.0,
            },
        }],
        // Light directions are used raw, not normalized.
        lights: vec![Vec3::new(-0.8, 0.8, 0.2), Vec3::new(0.8, 0.8, 0.2)],
    };

    if let Some(path) = &args.mesh {
        let mat = Material {
            color: Vec3::new(0.8, 0.6, 0.2),
            reflection: 0.2,
        };
        let mesh = load_obj(path, Vec3::new(0.0, 0.5, -1.5), args.mesh_scale, mat)?;
        scene.triangles.extend(mesh);
    }

    Ok(scene)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let scene = init_scene(&args)?;
    info!(
        "scene: {} spheres, {} planes, {} triangles, {} lights",
        scene.spheres.len(),
        scene.planes.len(),
        scene.triangles.len(),
        scene.lights.len()
    );

    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        VIEWPORT_WIDTH,
        VIEWPORT_HEIGHT,
        FOCAL_LENGTH,
    );
    debug!("camera at (0, 0, 1) looking at the origin");

    let start = Instant::now();
    let pixels = render(&scene, &camera, args.width, args.height);
    info!(
        "rendered {}x{} in {:.2?}",
        args.width,
        args.height,
        start.elapsed()
    );

    output::write_ppm(&args.output, &pixels, args.width, args.height)?;
    Ok(())
}
