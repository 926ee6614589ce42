mod point_light;

pub use point_light::PointLight;

use crate::math::Vec3;

/// Sample from a light source for visibility testing and shading
pub struct LightSample {
    /// Unit direction from the shaded point toward the light
    pub l: Vec3<f32>,
    /// Distance to the light
    pub dist: f32,
    /// Incident intensity at the shaded point
    pub li: f32,
}
