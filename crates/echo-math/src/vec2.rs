// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;

use crate::scalar::{self, near, Scalar};
use crate::swizzle::swizzles2;
use crate::{Angle, MathError, MathResult, Vec3};

/// Two-component vector stored as `[x, y]`.
///
/// * Equality is approximate: components compare within [`Scalar::EPSILON`].
/// * Dividing by zero (operator or assignment form) leaves the vector
///   unchanged; [`Vec2::checked_div`] reports it instead.
/// * Normalizing a zero vector is a no-op; [`Vec2::try_normalized`] reports
///   it instead.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2<T> {
    data: [T; 2],
}

impl<T: Scalar> Vec2<T> {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(T::ONE, T::ONE);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::UNIT_X;
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO);
    /// `(0, 1)`.
    pub const UP: Self = Self::UNIT_Y;
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Unit vector pointing at `angle` from the positive X axis: `(cos, sin)`.
    pub fn from_angle(angle: Angle<T>) -> Self {
        let (s, c) = angle.as_radians().sin_cos();
        Self::new(c, s)
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Sets the X component.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 2] {
        self.data
    }

    /// Borrows the raw `[x, y]` storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    swizzles2! {
        xx => (x, x),
        xy => (x, y),
        yx => (y, x),
        yy => (y, y),
    }

    /// Extends to a [`Vec3`] with the given `z`.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), z)
    }

    /// Magnitude.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Dot product. Also callable as `Vec2::dot(&a, &b)`.
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> T {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        dx * dx + dy * dy
    }

    /// Scales the vector to unit length in place.
    ///
    /// A zero-length vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > T::ZERO {
            let inv = T::ONE / len;
            self.data[0] *= inv;
            self.data[1] *= inv;
        } else {
            trace!(?self, "normalize on zero-length Vec2 ignored");
        }
        self
    }

    /// Returns a unit-length copy; a zero-length vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Returns a unit-length copy or [`MathError::DegenerateVector`] when the
    /// vector has zero length.
    pub fn try_normalized(&self) -> MathResult<Self> {
        if self.length() > T::ZERO {
            Ok(self.normalized())
        } else {
            Err(MathError::DegenerateVector)
        }
    }

    /// Interpolates toward `end`, clamping `t` into `[0, 1]`.
    pub fn lerp(&self, end: &Self, t: T) -> Self {
        self.lerp_unclamped(end, scalar::clamp01(t))
    }

    /// Interpolates toward `end` without clamping `t`.
    pub fn lerp_unclamped(&self, end: &Self, t: T) -> Self {
        Self::new(
            scalar::lerp(self.x(), end.x(), t),
            scalar::lerp(self.y(), end.y(), t),
        )
    }

    /// Moves toward `target` by at most `max_distance`.
    ///
    /// Snaps onto `target` when it is within `max_distance` or already
    /// coincident. A negative `max_distance` moves away from `target`.
    pub fn move_towards(&self, target: &Self, max_distance: T) -> Self {
        let delta = *target - *self;
        let dist_sq = delta.length_squared();
        if dist_sq == T::ZERO
            || (max_distance >= T::ZERO && dist_sq <= max_distance * max_distance)
        {
            return *target;
        }
        let dist = dist_sq.sqrt();
        *self + delta * (max_distance / dist)
    }

    /// Divides by `scalar`, reporting [`MathError::ZeroDivisor`] instead of
    /// silently returning the operand.
    pub fn checked_div(self, scalar: T) -> MathResult<Self> {
        if scalar == T::ZERO {
            return Err(MathError::ZeroDivisor);
        }
        Ok(self / scalar)
    }

    /// Approximate equality with an explicit tolerance.
    pub fn abs_diff_eq(&self, other: &Self, tolerance: T) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }

    /// Converts to another precision.
    pub fn cast<U: Scalar>(&self) -> Vec2<U> {
        Vec2::new(
            U::from_f64(self.x().to_f64()),
            U::from_f64(self.y().to_f64()),
        )
    }
}

impl<T: Scalar> PartialEq for Vec2<T> {
    fn eq(&self, other: &Self) -> bool {
        near(self.x(), other.x()) && near(self.y(), other.y())
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from(value: [T; 2]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> From<Vec3<T>> for Vec2<T> {
    fn from(value: Vec3<T>) -> Self {
        value.truncate()
    }
}

impl<T: Scalar> Index<usize> for Vec2<T> {
    type Output = T;

    /// Out-of-range indices clamp to the last component.
    fn index(&self, index: usize) -> &T {
        &self.data[index.min(1)]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index.min(1)]
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Vec2 division by zero ignored");
            return self;
        }
        Self::new(self.x() / rhs, self.y() / rhs)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec2<$t>> for $t {
                type Output = Vec2<$t>;
                fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);
