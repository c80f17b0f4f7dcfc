use crate::ray::Ray;
use crate::vec3::Vec3;

/// Fixed pinhole camera. The viewport rectangle is precomputed from a
/// look-at basis; rays are generated for viewport coordinates in [0, 1]².
pub struct Camera {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    pub fn new(
        origin: Vec3,
        look_at: Vec3,
        up: Vec3,
        viewport_width: f32,
        viewport_height: f32,
        focal_length: f32,
    ) -> Self {
        let w = (origin - look_at).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = u * viewport_width;
        let vertical = v * viewport_height;
        let lower_left = origin - horizontal * 0.5 - vertical * 0.5 - w * focal_length;

        Self {
            origin,
            lower_left,
            horizontal,
            vertical,
        }
    }

    /// Ray through viewport position (s, t), s rightward, t upward.
    /// The returned direction is unit length.
    pub fn ray_at(&self, s: f32, t: f32) -> Ray {
        let target = self.lower_left + self.horizontal * s + self.vertical * t;
        Ray::new(self.origin, (target - self.origin).normalize())
    }
}
