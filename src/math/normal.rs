use std::ops::Neg;

use super::{common::FloatValueType, vector::Vec3};
use crate::impl_approx_eq;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A three-dimensional surface normal
///
/// Kept distinct from [Vec3] so directions and surface orientations don't mix
/// up in shading code.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: FloatValueType,
{
    /// The x component of the normal
    pub x: T,
    /// The y component of the normal
    pub y: T,
    /// The z component of the normal
    pub z: T,
}

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Constructs a new normal.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        debug_assert!(!n.has_nans());
        n
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Neg for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl_approx_eq!(Normal [x y z]);
