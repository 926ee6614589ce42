use std::ops::{Add, AddAssign, Div, Mul};

use super::common::FloatValueType;
use crate::impl_approx_eq;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum<T>
where
    T: FloatValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Constructs a new spectrum.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        let s = Self { r, g, b };
        debug_assert!(!s.has_nans());
        s
    }

    /// Constructs a new spectrum of 0s.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            r: T::zero(),
            g: T::zero(),
            b: T::zero(),
        }
    }

    /// Constructs a new spectrum of 1s.
    #[inline]
    pub fn ones() -> Self {
        Self {
            r: T::one(),
            g: T::one(),
            b: T::one(),
        }
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns `true` if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Returns this spectrum with each component clamped to `[min, max]`.
    #[inline]
    pub fn clamped(&self, min: T, max: T) -> Self {
        Self {
            r: self.r.max(min).min(max),
            g: self.g.max(min).min(max),
            b: self.b.max(min).min(max),
        }
    }

    /// Linearly interpolates toward `other`: `self·(1−t) + other·t`.
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self * (T::one() - t) + other * t
    }
}

impl<T> Add for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl<T> AddAssign for Spectrum<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, other: Self) {
        self.r = self.r + other.r;
        self.g = self.g + other.g;
        self.b = self.b + other.b;
    }
}

// Component-wise product, e.g. filtering radiance through a surface color
impl<T> Mul for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> Mul<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }
}

impl<T> Div<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self {
            r: self.r / s,
            g: self.g / s,
            b: self.b / s,
        }
    }
}

impl_approx_eq!(Spectrum [r g b]);
