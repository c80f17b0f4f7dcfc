use crate::material::Material;
use crate::objects::{Plane, Sphere, Triangle};
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Clone)]
pub struct Intersection {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

/// Read-only scene description. Lights are direction vectors, not positioned
/// sources.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub triangles: Vec<Triangle>,
    pub lights: Vec<Vec3>,
}

impl Scene {
    /// Linear scan over every primitive, keeping the smallest nonnegative t.
    /// The comparison is strict, so on an exact tie the earlier-tested
    /// primitive wins: spheres, then planes, then triangles, in insertion
    /// order within each category.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Intersection> {
        let mut closest_t = f32::MAX;
        let mut closest_hit: Option<Intersection> = None;

        for sphere in &self.spheres {
            if let Some((t, normal, material)) = sphere.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    closest_hit = Some(Intersection {
                        point: ray.origin + t * ray.direction,
                        normal,
                        material,
                    });
                }
            }
        }

        for plane in &self.planes {
            if let Some((t, normal, material)) = plane.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    closest_hit = Some(Intersection {
                        point: ray.origin + t * ray.direction,
                        normal,
                        material,
                    });
                }
            }
        }

        for triangle in &self.triangles {
            if let Some((t, normal, material)) = triangle.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    closest_hit = Some(Intersection {
                        point: ray.origin + t * ray.direction,
                        normal,
                        material,
                    });
                }
            }
        }

        closest_hit
    }
}
