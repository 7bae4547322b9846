//! Numeric scalar abstraction
//!
//! Every geometry type in this crate is generic over a [`Scalar`], which is
//! implemented for `i32`, `f32` and `f64`.

use num_traits::{NumCast, Signed, ToPrimitive};
use std::fmt::Debug;

/// Numeric component type for vectors, matrices, quaternions and polyhedra
pub trait Scalar: Copy + Debug + PartialOrd + Signed + NumCast + Send + Sync + 'static {
    /// Tolerance below which a determinant is treated as zero
    fn epsilon() -> Self;

    /// Convert from `f64`, truncating toward zero for integer types.
    ///
    /// Returns `None` when the value cannot be represented (e.g. NaN as `i32`).
    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Widen to `f64`
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// The constant 2
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Square of the value
    #[inline]
    fn sqr(self) -> Self {
        self * self
    }

    /// Addition that reports overflow as `None`; floats never overflow here
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    /// Subtraction that reports overflow as `None`
    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    /// Multiplication that reports overflow as `None`
    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl Scalar for i32 {
    #[inline]
    fn epsilon() -> Self {
        0
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }
}

impl Scalar for f32 {
    #[inline]
    fn epsilon() -> Self {
        1e-6
    }
}

impl Scalar for f64 {
    #[inline]
    fn epsilon() -> Self {
        1e-12
    }
}
