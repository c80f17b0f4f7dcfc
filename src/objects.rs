use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;
use anyhow::Context;
use std::path::Path;

pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub mat: Material,
}

impl Sphere {
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3, Material)> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);
        // The smaller root decides alone: a ray starting inside the sphere
        // has t0 < 0 < t1 and counts as a miss.
        let t = t0.min(t1);
        if t < 0.0 {
            return None;
        }
        let hit_point = ray.origin + t * ray.direction;
        let normal = (hit_point - self.center).normalize();
        Some((t, normal, self.mat))
    }
}

pub struct Plane {
    /// Expected unit length; never renormalized.
    pub normal: Vec3,
    pub d: f32,
    pub mat: Material,
}

impl Plane {
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3, Material)> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= 1e-6 {
            return None;
        }
        // The plane is anchored at `normal * d`, and the ray origin does not
        // enter the formula: t depends on the direction only. Planes off the
        // normal axis are not representable.
        let p0 = self.normal * self.d;
        let t = p0.dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }
        Some((t, self.normal, self.mat))
    }
}

pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub mat: Material,
}

impl Triangle {
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3, Material)> {
        let epsilon = 1e-6;
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);
        if a.abs() < epsilon {
            return None;
        }
        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = f * edge2.dot(q);
        if t > epsilon {
            // Normal comes straight from the vertex winding and is not
            // turned toward the ray.
            // TODO: back-facing windings shade as ambient-only; decide on a
            // sign convention (the magenta triangle in the default scene).
            let normal = edge1.cross(edge2).normalize();
            return Some((t, normal, self.mat));
        }
        None
    }
}

pub fn load_obj(
    path: &str,
    translation: Vec3,
    scale: f32,
    mat: Material,
) -> anyhow::Result<Vec<Triangle>> {
    let path_obj = Path::new(path);
    let (models, _materials) = tobj::load_obj(
        path_obj,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("failed to load OBJ file {path}"))?;

    let mut triangles = Vec::new();

    for model in models {
        let mesh = model.mesh;

        for i in (0..mesh.indices.len()).step_by(3) {
            let idx0 = mesh.indices[i] as usize;
            let idx1 = mesh.indices[i + 1] as usize;
            let idx2 = mesh.indices[i + 2] as usize;

            let v0_raw = Vec3::new(
                mesh.positions[3 * idx0],
                mesh.positions[3 * idx0 + 1],
                mesh.positions[3 * idx0 + 2],
            );
            let v1_raw = Vec3::new(
                mesh.positions[3 * idx1],
                mesh.positions[3 * idx1 + 1],
                mesh.positions[3 * idx1 + 2],
            );
            let v2_raw = Vec3::new(
                mesh.positions[3 * idx2],
                mesh.positions[3 * idx2 + 1],
                mesh.positions[3 * idx2 + 2],
            );

            triangles.push(Triangle {
                v0: v0_raw * scale + translation,
                v1: v1_raw * scale + translation,
                v2: v2_raw * scale + translation,
                mat,
            });
        }
    }

    log::info!("loaded {} triangles from {path}", triangles.len());
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mat() -> Material {
        Material {
            color: Vec3::new(1.0, 1.0, 1.0),
            reflection: 0.0,
        }
    }

    fn unit_sphere() -> Sphere {
        Sphere {
            center: Vec3::new(0.0, 0.0, 0.0),
            radius: 1.0,
            mat: flat_mat(),
        }
    }

    fn unit_triangle() -> Triangle {
        Triangle {
            v0: Vec3::new(0.0, 0.0, 0.0),
            v1: Vec3::new(1.0, 0.0, 0.0),
            v2: Vec3::new(0.0, 1.0, 0.0),
            mat: flat_mat(),
        }
    }

    #[test]
    fn sphere_hit_toward_center() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        let (t, normal, _) = sphere.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
        assert_eq!(normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn sphere_miss_aimed_away() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_interior_origin_is_a_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_tangent_ray_misses() {
        // Grazing ray, discriminant exactly zero.
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(1.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn plane_hit_from_above() {
        let plane = Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            d: -0.5,
            mat: flat_mat(),
        };
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let (t, normal, _) = plane.intersect(&ray).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
        assert_eq!(normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn plane_t_ignores_ray_origin() {
        // The anchored-at-normal*d formula never reads the origin.
        let plane = Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            d: -0.5,
            mat: flat_mat(),
        };
        let ray = Ray::new(Vec3::new(5.0, 10.0, -3.0), Vec3::new(0.0, -1.0, 0.0));
        let (t, _, _) = plane.intersect(&ray).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn plane_parallel_ray_misses() {
        let plane = Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            d: -0.5,
            mat: flat_mat(),
        };
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn plane_negative_t_misses() {
        let plane = Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            d: -0.5,
            mat: flat_mat(),
        };
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn triangle_hit_is_inside() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(0.2, 0.3, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let (t, normal, _) = triangle.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
        assert_eq!(normal, Vec3::new(0.0, 0.0, 1.0));

        // Barycentric weights of the hit point sum to one and sit in [0, 1].
        let hit = ray.origin + t * ray.direction;
        let (u, v) = (hit.x, hit.y);
        let w0 = 1.0 - u - v;
        for w in [w0, u, v] {
            assert!((0.0..=1.0).contains(&w));
        }
        assert!((w0 + u + v - 1.0).abs() < 1e-5);
    }

    #[test]
    fn triangle_outside_barycentric_misses() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(1.2, 0.3, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(triangle.intersect(&ray).is_none());
        let ray = Ray::new(Vec3::new(0.6, 0.6, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn triangle_parallel_ray_misses() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(-1.0, 0.2, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn triangle_normal_follows_winding() {
        // Reversed winding flips the reported normal; it is not corrected
        // toward the viewer.
        let reversed = Triangle {
            v0: Vec3::new(0.0, 0.0, 0.0),
            v1: Vec3::new(0.0, 1.0, 0.0),
            v2: Vec3::new(1.0, 0.0, 0.0),
            mat: flat_mat(),
        };
        let ray = Ray::new(Vec3::new(0.2, 0.3, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let (_, normal, _) = reversed.intersect(&ray).unwrap();
        assert_eq!(normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn load_obj_quad_applies_scale_and_translation() {
        let path = std::env::temp_dir().join("rayscape_quad_test.obj");
        std::fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n",
        )
        .unwrap();

        let triangles = load_obj(
            path.to_str().unwrap(),
            Vec3::new(0.0, 0.0, -1.0),
            2.0,
            flat_mat(),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].v0, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(triangles[0].v1, Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(triangles[0].v2, Vec3::new(2.0, 2.0, -1.0));
    }
}
