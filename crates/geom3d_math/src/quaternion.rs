//! Quaternion (w, x, y, z) rotation representation
//!
//! The quaternion is a plain data carrier: it is built from an axis and an
//! angle and handed to [`RotationMatrix3::from_quaternion`](crate::RotationMatrix3::from_quaternion).
//! Unit norm is a caller obligation and is not enforced.

use serde::{Deserialize, Serialize};

use crate::{Scalar, Vector3};

/// Quaternion with scalar part `w` and vector part `(x, y, z)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from its components
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Build the rotation quaternion for `angle` radians about `axis`:
    ///
    /// `q = (cos(θ/2), sin(θ/2)·axis.x, sin(θ/2)·axis.y, sin(θ/2)·axis.z)`
    ///
    /// The axis is used as given; a non-unit axis yields a non-unit quaternion.
    /// Each component is evaluated in `f64` and then converted to `T`, so
    /// integer scalars truncate toward zero. Returns `None` when a component
    /// cannot be represented in `T`.
    pub fn from_axis_angle(axis: Vector3<T>, angle: f64) -> Option<Self> {
        let half = angle / 2.0;
        let (sin_h, cos_h) = half.sin_cos();

        Some(Self::new(
            T::from_f64(cos_h)?,
            T::from_f64(sin_h * axis.x.as_f64())?,
            T::from_f64(sin_h * axis.y.as_f64())?,
            T::from_f64(sin_h * axis.z.as_f64())?,
        ))
    }

    /// Components in `(w, x, y, z)` order
    #[inline]
    pub fn components(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Squared norm `w² + x² + y² + z²`
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w.sqr() + self.x.sqr() + self.y.sqr() + self.z.sqr()
    }
}
