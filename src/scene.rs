use crate::{
    camera::{CameraParameters, FoV},
    expect,
    film::FilmSettings,
    hit::Hit,
    lights::PointLight,
    materials::Material,
    math::{Point3, Ray, Spectrum, Vec3},
    shapes::{Plane, Shape, Sphere, Triangle},
};

/// A renderable collection of primitives and point lights
///
/// Populated during setup and read-only for the duration of a frame; the
/// shapes and lights are owned exclusively by the scene and dropped with it.
pub struct Scene {
    pub name: String,
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
    /// Radiance for rays that leave the scene
    pub background: Spectrum<f32>,
}

impl Scene {
    /// Creates a new empty `Scene` with a black background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
            lights: Vec::new(),
            background: Spectrum::zeros(),
        }
    }

    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Finds the nearest intersection of `ray` with the scene.
    ///
    /// Brute-force linear scan over every shape. Exact distance ties are won
    /// by the shape added first, which keeps results deterministic.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray) {
                if nearest.as_ref().map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }

    /// Constructs the built-in demonstration scene.
    ///
    /// A ring of Phong-shaded spheres over a grey mirror floor, with a black
    /// mirror triangle standing behind them and two point lights.
    pub fn demo() -> (Self, CameraParameters, FilmSettings) {
        let phong = |r, g, b| {
            expect!(
                Material::new(Spectrum::new(r, g, b), 0.1, 0.9, 0.9, 0.5, 128.0),
                "Invalid demo material"
            )
        };
        let red = phong(1.0, 0.0, 0.0);
        let blue = phong(0.0, 0.0, 1.0);
        let green = phong(0.0, 1.0, 0.0);
        let purple = phong(1.0, 0.0, 1.0);
        let cyan = phong(0.0, 1.0, 1.0);
        let yellow = phong(1.0, 1.0, 0.0);

        let black_mirror = expect!(
            Material::new(Spectrum::zeros(), 0.1, 0.9, 0.9, 0.9, 128.0),
            "Invalid demo material"
        );
        let grey_mirror = expect!(
            Material::new(Spectrum::new(0.1, 0.1, 0.1), 0.1, 0.9, 0.9, 0.9, 128.0),
            "Invalid demo material"
        );

        let mut scene = Self::new("demo");

        scene.add_shape(Sphere::new(Point3::new(0.0, -5.0, -50.0), 5.0, red));
        scene.add_shape(Sphere::new(Point3::new(-25.0, -5.0, -55.0), 5.0, green));
        scene.add_shape(Sphere::new(Point3::new(-18.0, -5.0, -80.0), 5.0, blue));
        scene.add_shape(Sphere::new(Point3::new(20.0, -5.0, -20.0), 5.0, purple));
        scene.add_shape(Sphere::new(Point3::new(-25.0, -5.0, -30.0), 5.0, cyan));
        scene.add_shape(Sphere::new(Point3::new(20.0, -5.0, -50.0), 5.0, yellow));

        scene.add_shape(Triangle::new(
            Point3::new(-35.0, 0.0, -100.0),
            Point3::new(0.0, 50.0, -80.0),
            Point3::new(35.0, 0.0, -100.0),
            black_mirror,
        ));

        scene.add_shape(Plane::new(Vec3::new(0.0, 1.0, 0.0), -10.0, grey_mirror));

        scene.add_light(PointLight::new(Point3::new(0.0, 50.0, -75.0), 5000.0));
        scene.add_light(PointLight::new(Point3::new(10.0, -9.0, -30.0), 10.0));

        let camera_params = CameraParameters {
            position: Point3::zeros(),
            target: Point3::new(0.0, 0.0, -50.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: FoV::X(90.0),
        };

        (scene, camera_params, FilmSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Scene;
    use crate::{
        materials::Material,
        math::{Point3, Ray, Spectrum, Vec3},
        shapes::Sphere,
    };

    fn material_colored(r: f32, g: f32, b: f32) -> Material {
        Material::new(Spectrum::new(r, g, b), 0.1, 0.9, 0.9, 0.0, 32.0).unwrap()
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::new("empty");
        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, -1.0), f32::INFINITY);
        assert!(scene.intersect(ray).is_none());
    }

    #[test]
    fn nearest_of_overlapping_spheres_wins() {
        let mut scene = Scene::new("overlap");
        scene.add_shape(Sphere::new(
            Point3::new(0.0, 0.0, -20.0),
            2.0,
            material_colored(0.0, 0.0, 1.0),
        ));
        scene.add_shape(Sphere::new(
            Point3::new(0.0, 0.0, -10.0),
            2.0,
            material_colored(1.0, 0.0, 0.0),
        ));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, -1.0), f32::INFINITY);
        let hit = scene.intersect(ray).unwrap();
        assert_abs_diff_eq!(hit.t, 8.0);
        // The nearer sphere's material, never the farther one's
        assert_eq!(hit.material.color, Spectrum::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn exact_tie_goes_to_first_added() {
        let mut scene = Scene::new("tie");
        scene.add_shape(Sphere::new(
            Point3::new(0.0, 0.0, -10.0),
            2.0,
            material_colored(1.0, 0.0, 0.0),
        ));
        scene.add_shape(Sphere::new(
            Point3::new(0.0, 0.0, -10.0),
            2.0,
            material_colored(0.0, 1.0, 0.0),
        ));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, -1.0), f32::INFINITY);
        let hit = scene.intersect(ray).unwrap();
        assert_eq!(hit.material.color, Spectrum::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn demo_scene_builds() {
        let (scene, _, _) = Scene::demo();
        assert_eq!(scene.shapes().len(), 8);
        assert_eq!(scene.lights().len(), 2);

        // The camera looks straight at the red sphere
        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, -5.0, -50.0).normalized(), f32::INFINITY);
        let hit = scene.intersect(ray).unwrap();
        assert_eq!(hit.material.color, Spectrum::new(1.0, 0.0, 0.0));
    }
}
