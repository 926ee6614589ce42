use super::RAY_BIAS;
use crate::{
    hit::Hit,
    materials::Material,
    math::{Normal, Point3, Ray},
};

// Möller–Trumbore ray-triangle intersection
// https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm

/// A triangle primitive with a precomputed face normal
pub struct Triangle {
    p1: Point3<f32>,
    p2: Point3<f32>,
    p3: Point3<f32>,
    n: Normal<f32>,
    material: Material,
}

impl Triangle {
    /// Creates a new `Triangle`.
    ///
    /// The face normal is fixed at construction as `normalize((p3-p1) × (p2-p1))`
    /// and constant across the face (flat shading).
    pub fn new(p1: Point3<f32>, p2: Point3<f32>, p3: Point3<f32>, material: Material) -> Self {
        let u = p2 - p1;
        let v = p3 - p1;
        let n = Normal::from(v.cross(u).normalized());

        Self {
            p1,
            p2,
            p3,
            n,
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        let e1 = self.p2 - self.p1;
        let e2 = self.p3 - self.p1;

        let h = ray.d.cross(e2);
        let a = e1.dot(h);
        if a.abs() < RAY_BIAS {
            // Ray runs parallel to the triangle plane
            return None;
        }

        let f = 1.0 / a;
        let s = ray.o - self.p1;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = f * ray.d.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * e2.dot(q);
        if t <= RAY_BIAS || t > ray.t_max {
            return None;
        }

        Some(Hit {
            t,
            p: ray.point(t),
            v: -ray.d,
            n: self.n,
            material: self.material,
        })
    }
}
