use std::ops::{Add, AddAssign, Sub};

use super::{common::FloatValueType, vector::Vec3};
use crate::impl_approx_eq;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: FloatValueType,
{
    /// The x component of the point
    pub x: T,
    /// The y component of the point
    pub y: T,
    /// The z component of the point
    pub z: T,
}

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Constructs a new point.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    /// Constructs a new point at the origin.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl<T> Sub for Point3<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, v: Vec3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, v: Vec3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> AddAssign<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, v: Vec3<T>) {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
        self.z = self.z + v.z;
    }
}

impl_approx_eq!(Point3 [x y z]);

#[cfg(test)]
mod tests {
    use crate::math::{Point3, Vec3};

    #[test]
    fn difference_is_a_vector() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.0, 1.0, 1.0);
        assert_eq!(a - b, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn offset_by_vector() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(p + v, Point3::new(2.0, 3.0, 4.0));
        assert_eq!(p - v, Point3::new(0.0, 1.0, 2.0));

        let mut p = Point3::zeros();
        p += v;
        assert_eq!(p, Point3::new(1.0, 1.0, 1.0));
    }
}
