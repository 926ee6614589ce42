use super::LightSample;
use crate::{hit::Hit, math::Point3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Light_Sources/Point_Lights.html

/// An isotropic point light with scalar intensity
pub struct PointLight {
    p: Point3<f32>,
    intensity: f32,
}

impl PointLight {
    /// Creates a new `PointLight` at `p` with the given intensity.
    pub fn new(p: Point3<f32>, intensity: f32) -> Self {
        Self { p, intensity }
    }

    /// Returns a [`LightSample`] from the given [`Hit`] to this light.
    ///
    /// Falloff is inverse-square in the distance to the light.
    pub fn sample_li(&self, hit: &Hit) -> LightSample {
        let to_light = self.p - hit.p;
        let dist_sqr = to_light.len_sqr();
        let li = self.intensity / dist_sqr;
        let dist = dist_sqr.sqrt();
        let l = to_light / dist;

        LightSample { l, dist, li }
    }
}
