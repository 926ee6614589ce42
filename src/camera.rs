use crate::{
    film::FilmSettings,
    math::{Point3, Ray, Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Camera_Models.html

/// Values needed to specify a camera ray
pub struct CameraSample {
    /// Raster position on the film, origin at the top left, +x right, +y down
    pub p_film: Vec2<f32>,
}

/// Field of view along one film axis, in degrees
#[derive(Copy, Clone)]
pub enum FoV {
    X(f32),
    Y(f32),
}

#[derive(Copy, Clone)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    pub fov: FoV,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::zeros(),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: FoV::X(90.0),
        }
    }
}

/// A simple pinhole camera
///
/// Holds the orthonormal look-at basis and the screen window half-extents, so
/// per-pixel ray construction is a couple of fused multiplies.
#[derive(Clone)]
pub struct Camera {
    position: Point3<f32>,
    right: Vec3<f32>,
    up: Vec3<f32>,
    forward: Vec3<f32>,
    screen_half: Vec2<f32>,
    res: Vec2<f32>,
}

impl Camera {
    /// Creates a new `Camera` looking from `position` toward `target`.
    pub fn new(params: CameraParameters, film_settings: FilmSettings) -> Self {
        let forward = (params.target - params.position).normalized();
        let right = forward.cross(params.up).normalized();
        let up = right.cross(forward);

        let film_x = f32::from(film_settings.res.x);
        let film_y = f32::from(film_settings.res.y);
        // The fov'd axis spans tan(fov/2) on each side of the center, the
        // other axis is scaled by the aspect ratio
        let screen_half = match params.fov {
            FoV::X(deg) => {
                let half_x = (deg.to_radians() / 2.0).tan();
                Vec2::new(half_x, half_x * film_y / film_x)
            }
            FoV::Y(deg) => {
                let half_y = (deg.to_radians() / 2.0).tan();
                Vec2::new(half_y * film_x / film_y, half_y)
            }
        };

        Self {
            position: params.position,
            right,
            up,
            forward,
            screen_half,
            res: Vec2::new(film_x, film_y),
        }
    }

    /// Creates a new [Ray] at the camera sample with this `Camera`.
    pub fn ray(&self, sample: &CameraSample) -> Ray<f32> {
        // Raster to [-1, 1] screen coordinates, y flipped so +y is up in world
        let ndc_x = sample.p_film.x / self.res.x * 2.0 - 1.0;
        let ndc_y = 1.0 - sample.p_film.y / self.res.y * 2.0;

        let d = self.right * (ndc_x * self.screen_half.x)
            + self.up * (ndc_y * self.screen_half.y)
            + self.forward;

        Ray::new(self.position, d.normalized(), f32::INFINITY)
    }
}
