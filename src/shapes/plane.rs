use super::RAY_BIAS;
use crate::{
    hit::Hit,
    materials::Material,
    math::{Normal, Ray, Vec3},
};

/// An infinite plane primitive
///
/// Points `p` on the plane satisfy `dot(n, p) = d`. The normal is constant
/// and faces the halfspace it points into; rays arriving from the other side
/// still hit but shade with the constructed normal.
pub struct Plane {
    n: Normal<f32>,
    d: f32,
    material: Material,
}

impl Plane {
    /// Creates a new `Plane` with unit normal along `n` at signed offset `d`.
    pub fn new(n: Vec3<f32>, d: f32, material: Material) -> Self {
        Self {
            n: Normal::from(n.normalized()),
            d,
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        // Solve dot(n, o + t·d_ray) = d for t
        let denom = ray.d.dot_n(self.n);
        if denom.abs() < RAY_BIAS {
            // Ray runs parallel to the plane
            return None;
        }

        let t = (self.d - Vec3::from(ray.o).dot_n(self.n)) / denom;
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
