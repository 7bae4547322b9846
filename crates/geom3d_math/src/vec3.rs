//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::Scalar;

/// 3D Vector with x, y, z components
///
/// Used as the point, axis and displacement type throughout the crate.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: `#[repr(C)]` with three fields of the same type has no padding,
// and the all-zero pattern is valid whenever it is valid for `T`.
unsafe impl<T: Zeroable> Zeroable for Vector3<T> {}
// SAFETY: see above; every bit pattern of three `T: Pod` is a valid `Vector3<T>`.
unsafe impl<T: Pod> Pod for Vector3<T> {}

impl<T: Scalar> Vector3<T> {
    /// Create a new Vector3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Unit vector along X
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along Y
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along Z
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Overwrite all three components
    #[inline]
    pub fn set_value(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Componentwise addition, `None` on integer overflow
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::new(
            Scalar::checked_add(self.x, other.x)?,
            Scalar::checked_add(self.y, other.y)?,
            Scalar::checked_add(self.z, other.z)?,
        ))
    }

    /// Componentwise subtraction, `None` on integer overflow
    #[inline]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self::new(
            Scalar::checked_sub(self.x, other.x)?,
            Scalar::checked_sub(self.y, other.y)?,
            Scalar::checked_sub(self.z, other.z)?,
        ))
    }
}

impl<T: Scalar + Float> Vector3<T> {
    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length; the zero vector stays zero
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > T::zero() {
            self * (T::one() / len)
        } else {
            Self::zero()
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> std::ops::AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar> std::ops::Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> std::ops::SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Scalar> std::ops::Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
