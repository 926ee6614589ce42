use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{
    common::{FloatValueType, ValueType},
    normal::Normal,
    point::Point3,
};
use crate::impl_approx_eq;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector
    pub x: T,
    /// The y component of the vector
    pub y: T,
}

/// A three-dimensional vector
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector
    pub x: T,
    /// The y component of the vector
    pub y: T,
    /// The z component of the vector
    pub z: T,
}

macro_rules! impl_vec {
    ( $( $vec_type:ident
         [ $( $component:ident )+ ]
         $shorthand:ident
       ),+
    ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Constructs a new vector.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: T),*) -> Self {
                    let v = Self { $($component),* };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new vector of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: T::zero(),)*
                    }
                }

                /// Constructs a new vector of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $($component: T::one(),)*
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    $(self.$component != self.$component)||*
                }

                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    T::zero() $(+ self.$component * other.$component)*
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    debug_assert!(!self.has_nans());

                    self.dot(*self)
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand<T>($($component: T),*) -> $vec_type<T>
            where
                T: ValueType,
            {
                // Use new() to catch NaNs
                $vec_type::new($($component),*)
            }

            impl<T> $vec_type<T>
            where
                T: FloatValueType,
            {
                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> T {
                    debug_assert!(!self.has_nans());

                    self.len_sqr().sqrt()
                }

                /// Returns the vector scaled to unit length.
                ///
                /// Returns the zero vector when the length is numerically zero
                /// so callers never see NaN components from degenerate input.
                #[inline]
                pub fn normalized(&self) -> Self {
                    debug_assert!(!self.has_nans());

                    let len_sqr = self.len_sqr();
                    if len_sqr < T::from_f64(1e-12).unwrap() {
                        return Self::zeros();
                    }
                    *self / len_sqr.sqrt()
                }
            }

            impl<T> Add for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component + other.$component,)*
                    }
                }
            }

            impl<T> Sub for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            impl<T> Mul<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self {
                        $($component: self.$component * s,)*
                    }
                }
            }

            impl<T> Div<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self {
                        $($component: self.$component / s,)*
                    }
                }
            }

            impl<T> AddAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: Self) {
                    $(self.$component = self.$component + other.$component;)*
                }
            }

            impl<T> SubAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: Self) {
                    $(self.$component = self.$component - other.$component;)*
                }
            }

            impl<T> MulAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn mul_assign(&mut self, s: T) {
                    $(self.$component = self.$component * s;)*
                }
            }

            impl<T> DivAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn div_assign(&mut self, s: T) {
                    $(self.$component = self.$component / s;)*
                }
            }

            impl<T> Neg for $vec_type<T>
            where
                T: FloatValueType,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    Self {
                        $($component: -self.$component,)*
                    }
                }
            }
        )*
    };
}
impl_vec!(
    Vec2 [x y] vec2,
    Vec3 [x y z] vec3
);

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Returns the cross product of the two vectors.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // See pbrt [2.2.1](http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct) for details
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let v1x = self.x.to_f64().unwrap_or(f64::NAN);
        let v1y = self.y.to_f64().unwrap_or(f64::NAN);
        let v1z = self.z.to_f64().unwrap_or(f64::NAN);
        let v2x = other.x.to_f64().unwrap_or(f64::NAN);
        let v2y = other.y.to_f64().unwrap_or(f64::NAN);
        let v2z = other.z.to_f64().unwrap_or(f64::NAN);
        Self {
            x: T::from((v1y * v2z) - (v1z * v2y)).unwrap(),
            y: T::from((v1z * v2x) - (v1x * v2z)).unwrap(),
            z: T::from((v1x * v2y) - (v1y * v2x)).unwrap(),
        }
    }

    /// Calculates the dot product of this `Vec3` and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    /// Reflects this vector about `n`: `v - 2·dot(v, n)·n`.
    ///
    /// Used both for Phong highlight lobes and mirror bounce directions.
    #[inline]
    pub fn reflected(&self, n: Normal<T>) -> Self {
        let two = T::from_f64(2.0).unwrap();
        *self - Vec3::from(n) * (self.dot_n(n) * two)
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl_approx_eq!(
    Vec2 [x y],
    Vec3 [x y z],
);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::math::{vec3, Normal, Vec2, Vec3};

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);

        assert_eq!(vec3(0.0, 1.0, 2.0), v);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec2::zeros(), Vec2::new(0, 0));
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
        assert_eq!(Vec2::ones(), Vec2::new(1, 1));
        assert_eq!(Vec3::ones(), Vec3::new(1, 1, 1));
    }

    #[test]
    fn dot() {
        assert_eq!(Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)), 10 + 18 + 28);
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).dot(Vec3::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn len() {
        assert_eq!(Vec3::new(2, 3, 4).len_sqr(), 2 * 2 + 3 * 3 + 4 * 4);
        assert_abs_diff_eq!(Vec3::new(2.0, 3.0, 4.0).len(), (29.0f32).sqrt());
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(Vec3::new(1.0, 1.0, 1.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(Vec2::new(3.0, 4.0).normalized().len(), 1.0);
        // Degenerate input maps to the zero vector instead of NaNs
        assert_eq!(Vec3::<f32>::zeros().normalized(), Vec3::zeros());
    }

    #[test]
    fn cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), -z);
        assert_eq!(y.cross(z), x);
    }

    #[test]
    fn reflected() {
        let n = Normal::new(0.0, 1.0, 0.0);
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_abs_diff_eq!(v.reflected(n), Vec3::new(1.0, 1.0, 0.0));
        // A vector along the normal bounces straight back
        assert_abs_diff_eq!(Vec3::new(0.0, -1.0, 0.0).reflected(n), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn ops() {
        assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 6, 7), Vec3::new(5, 8, 10));
        assert_eq!(Vec3::new(7, 7, 7) - Vec3::new(1, 2, 3), Vec3::new(6, 5, 4));
        assert_eq!(Vec3::new(2, 3, 4) * 5, Vec3::new(10, 15, 20));
        assert_eq!(Vec3::new(10, 15, 20) / 5, Vec3::new(2, 3, 4));
        assert_eq!(-Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, -2.0, -3.0));

        let mut v = Vec3::new(1, 2, 3);
        v += Vec3::new(4, 6, 7);
        assert_eq!(v, Vec3::new(5, 8, 10));
        v -= Vec3::new(5, 8, 10);
        assert_eq!(v, Vec3::zeros());

        let mut v = Vec3::new(2, 3, 4);
        v *= 5;
        assert_eq!(v, Vec3::new(10, 15, 20));
        v /= 5;
        assert_eq!(v, Vec3::new(2, 3, 4));
    }
}
