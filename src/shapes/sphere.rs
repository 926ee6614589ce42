use super::RAY_BIAS;
use crate::{
    hit::Hit,
    materials::Material,
    math::{Normal, Point3, Ray},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere primitive.
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3<f32>, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        let oc = ray.o - self.center;

        // Quadratic coefficients
        let a = ray.d.dot(ray.d);
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let rd = disc.sqrt();

        // Numerically stable root form
        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };

        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > ray.t_max || t1 <= RAY_BIAS {
            return None;
        }
        let mut t = t0;
        if t <= RAY_BIAS {
            t = t1;
            if t > ray.t_max {
                return None;
            }
        }

        let p = ray.point(t);
        let n = Normal::from((p - self.center).normalized());

        Some(Hit {
            t,
            p,
            v: -ray.d,
            n,
            material: self.material,
        })
    }
}
