use crate::vec3::Vec3;

#[derive(Clone, Copy)]
pub struct Material {
    pub color: Vec3,
    /// Weight in [0, 1] blending direct shading against the traced
    /// reflection. Not enforced.
    pub reflection: f32,
}
