mod whitted;

pub use whitted::{Params as WhittedParams, Whitted};

use crate::{
    camera::{Camera, CameraSample},
    film::FilmTile,
    math::{Ray, Spectrum, Vec2},
    scene::Scene,
};

/// Radiance along a ray plus the work it took to evaluate
pub struct RadianceResult {
    pub li: Spectrum<f32>,
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
        }
    }
}

// Public interface for scene integrators.
pub trait Integrator: Send + Sync {
    /// Evaluates the incoming radiance along `ray`. Also returns the number of
    /// rays intersected with `scene`.
    fn li(&self, ray: Ray<f32>, scene: &Scene, depth: u32) -> RadianceResult;

    /// Renders the given tile, one primary ray through each pixel center.
    /// Returns the number of rays intersected with `scene`.
    fn render_tile(&self, scene: &Scene, camera: &Camera, tile: &mut FilmTile) -> usize {
        let width = tile.width as usize;

        let mut ray_count = 0;
        for y in tile.y_min..tile.y_max {
            for x in 0..tile.width {
                let p_film = Vec2::new(f32::from(x) + 0.5, f32::from(y) + 0.5);
                let ray = camera.ray(&CameraSample { p_film });

                let result = self.li(ray, scene, 0);

                let pixel_offset = (y - tile.y_min) as usize * width + x as usize;
                tile.pixels[pixel_offset] = result.li;
                ray_count += result.ray_scene_intersections;
            }
        }
        ray_count
    }
}
