use serde::{Deserialize, Serialize};

use super::{Integrator, RadianceResult};
use crate::{
    lights::LightSample,
    math::{Ray, Spectrum, Vec3},
    scene::Scene,
};

/// Offset applied along the surface normal when spawning shadow and
/// reflection rays, against self-intersection acne.
const SPAWN_OFFSET: f32 = 1e-3;

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Params {
    pub max_depth: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Whitted-style integrator: Phong direct lighting with hard shadows and a
/// single mirror-reflection path, bounded by `max_depth`.
pub struct Whitted {
    max_depth: u32,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
        }
    }
}

impl Integrator for Whitted {
    fn li(&self, ray: Ray<f32>, scene: &Scene, depth: u32) -> RadianceResult {
        let mut ray_count = 1;
        let Some(hit) = scene.intersect(ray) else {
            return RadianceResult {
                li: scene.background,
                ray_scene_intersections: ray_count,
            };
        };

        let m = hit.material;
        let spawn_origin = hit.p + Vec3::from(hit.n) * SPAWN_OFFSET;

        let mut color = m.color * m.ambient;

        for light in scene.lights() {
            let LightSample { l, dist, li } = light.sample_li(&hit);

            // Binary visibility: any occluder before the light kills the
            // whole contribution
            let shadow_ray = Ray::new(spawn_origin, l, dist);
            ray_count += 1;
            if scene.intersect(shadow_ray).is_some() {
                continue;
            }

            let n_dot_l = hit.n.dot_v(l);
            if n_dot_l > 0.0 {
                color += m.color * (m.diffuse * n_dot_l * li);
            }

            let r_dot_v = (-l).reflected(hit.n).dot(hit.v);
            if r_dot_v > 0.0 {
                color += Spectrum::ones() * (m.specular * r_dot_v.powf(m.shininess) * li);
            }
        }

        // Truncating here keeps mutually reflective surfaces finite; the lost
        // bounce just contributes nothing
        if m.reflectivity > 0.0 && depth + 1 < self.max_depth {
            let reflection_ray = Ray::new(spawn_origin, ray.d.reflected(hit.n), f32::INFINITY);
            let reflected = self.li(reflection_ray, scene, depth + 1);

            ray_count += reflected.ray_scene_intersections;
            color = color.lerp(reflected.li, m.reflectivity);
        }

        RadianceResult {
            li: color.clamped(0.0, 1.0),
            ray_scene_intersections: ray_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::{Params, Whitted};
    use crate::{
        integrators::Integrator,
        lights::PointLight,
        materials::Material,
        math::{Point3, Ray, Spectrum, Vec3},
        scene::Scene,
        shapes::Plane,
        shapes::Sphere,
    };

    fn diffuse_only(color: Spectrum<f32>) -> Material {
        Material {
            color,
            ambient: 0.0,
            diffuse: 1.0,
            specular: 0.0,
            reflectivity: 0.0,
            shininess: 1.0,
        }
    }

    #[test]
    fn miss_returns_background() {
        let mut scene = Scene::new("background");
        scene.background = Spectrum::new(0.1, 0.2, 0.3);

        let integrator = Whitted::new(Params::default());
        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, -1.0), f32::INFINITY);
        let result = integrator.li(ray, &scene, 0);

        assert_eq!(result.li, scene.background);
        assert_eq!(result.ray_scene_intersections, 1);
    }

    // Unit sphere at the origin, diffuse only, lit from (0, 5, 0)
    fn top_lit_sphere() -> Scene {
        let mut scene = Scene::new("top lit");
        scene.add_shape(Sphere::new(
            Point3::zeros(),
            1.0,
            diffuse_only(Spectrum::ones()),
        ));
        scene.add_light(PointLight::new(Point3::new(0.0, 5.0, 0.0), 10.0));
        scene
    }

    #[test]
    fn diffuse_peaks_toward_light() {
        let scene = top_lit_sphere();
        let integrator = Whitted::new(Params::default());

        // Hits the top of the sphere at (0, 1, 0), normal straight at the light
        let ray = Ray::new(
            Point3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            f32::INFINITY,
        );
        let result = integrator.li(ray, &scene, 0);

        // n·l = 1, light at distance 4 with intensity 10
        assert_relative_eq!(result.li.r, 10.0 / 16.0, epsilon = 1e-3);
    }

    #[test]
    fn diffuse_vanishes_at_grazing_normal() {
        let scene = top_lit_sphere();
        let integrator = Whitted::new(Params::default());

        // Hits the side of the sphere at (1, 0, 0), normal orthogonal to the light
        let ray = Ray::new(
            Point3::new(3.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            f32::INFINITY,
        );
        let result = integrator.li(ray, &scene, 0);

        assert_abs_diff_eq!(result.li.r, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn occluder_casts_hard_shadow() {
        let floor = diffuse_only(Spectrum::ones());
        let ray = Ray::new(
            Point3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            f32::INFINITY,
        );
        let integrator = Whitted::new(Params::default());

        let mut open = Scene::new("open");
        open.add_shape(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0, floor));
        open.add_light(PointLight::new(Point3::new(0.0, 10.0, 0.0), 100.0));
        let lit = integrator.li(ray, &open, 0);
        assert!(lit.li.r > 0.0);

        let mut shadowed = Scene::new("shadowed");
        shadowed.add_shape(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0, floor));
        shadowed.add_shape(Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0, floor));
        shadowed.add_light(PointLight::new(Point3::new(0.0, 10.0, 0.0), 100.0));
        let dark = integrator.li(ray, &shadowed, 0);
        assert_eq!(dark.li.r, 0.0);
    }

    #[test]
    fn facing_mirrors_terminate() {
        let mirror = Material {
            color: Spectrum::zeros(),
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            reflectivity: 1.0,
            shininess: 1.0,
        };

        let mut scene = Scene::new("mirror box");
        scene.add_shape(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0, mirror));
        scene.add_shape(Plane::new(Vec3::new(0.0, -1.0, 0.0), -10.0, mirror));
        scene.add_light(PointLight::new(Point3::new(0.0, 5.0, 0.0), 100.0));

        let integrator = Whitted::new(Params { max_depth: 5 });
        let ray = Ray::new(
            Point3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            f32::INFINITY,
        );
        let result = integrator.li(ray, &scene, 0);

        // Bounded by the depth limit: one primary, one shadow and one bounce
        // per level, at most
        assert!(result.ray_scene_intersections <= 2 * 5);
        assert!(!result.li.has_nans());
        assert!(result.li.r >= 0.0 && result.li.r <= 1.0);
    }

    #[test]
    fn depth_limit_truncates_reflection() {
        let mirror_floor = Material {
            color: Spectrum::zeros(),
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            reflectivity: 1.0,
            shininess: 1.0,
        };
        let red_wall = diffuse_only(Spectrum::new(1.0, 0.0, 0.0));

        // A mirror floor showing a lit red wall
        let mut scene = Scene::new("truncated");
        scene.add_shape(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0, mirror_floor));
        scene.add_shape(Plane::new(Vec3::new(0.0, 0.0, 1.0), -20.0, red_wall));
        scene.add_light(PointLight::new(Point3::new(0.0, 5.0, 0.0), 100.0));

        let ray = Ray::new(
            Point3::new(0.0, 4.0, 0.0),
            Vec3::new(0.0, -1.0, -1.0).normalized(),
            f32::INFINITY,
        );

        let with_bounce = Whitted::new(Params { max_depth: 3 }).li(ray, &scene, 0);
        assert!(with_bounce.li.r > 0.0);

        // With no bounces left the mirror contributes nothing
        let truncated = Whitted::new(Params { max_depth: 1 }).li(ray, &scene, 0);
        assert_eq!(truncated.li.r, 0.0);
    }
}
