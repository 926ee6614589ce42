use crate::{
    materials::Material,
    math::{Normal, Point3, Vec3},
};

/// Info of a surface hit
pub struct Hit {
    /// Hit distance along the ray
    pub t: f32,
    /// World position
    pub p: Point3<f32>,
    /// View direction, toward the ray origin
    pub v: Vec3<f32>,
    /// Surface normal
    pub n: Normal<f32>,
    /// Material of the hit surface
    pub material: Material,
}
