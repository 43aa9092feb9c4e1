// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;

use crate::scalar::{self, near, Scalar};
use crate::swizzle::{swizzles2, swizzles3};
use crate::{Angle, MathError, MathResult, Vec2};

/// Three-component vector stored as `[x, y, z]`.
///
/// * Components may represent points or directions depending on the caller.
/// * Equality is approximate: components compare within [`Scalar::EPSILON`].
/// * Dividing by zero leaves the vector unchanged and normalizing a zero
///   vector is a no-op; [`Vec3::checked_div`] and [`Vec3::try_normalized`]
///   report those cases instead.
///
/// # Examples
/// ```
/// use echo_math::Vec3f;
/// let x = Vec3f::UNIT_X;
/// let y = Vec3f::UNIT_Y;
/// assert_eq!(x.cross(&y), Vec3f::UNIT_Z);
/// assert_eq!(Vec3f::dot(&x, &y), 0.0);
/// ```
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<T> {
    data: [T; 3],
}

impl<T: Scalar> Vec3<T> {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::UNIT_X;
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO, T::ZERO);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::UNIT_Y;
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE, T::ZERO);
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::UNIT_Z;
    /// `(0, 0, -1)`.
    pub const BACKWARD: Self = Self::new(T::ZERO, T::ZERO, T::NEG_ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Builds `(xy.x, xy.y, z)`.
    pub fn from_vec2(xy: Vec2<T>, z: T) -> Self {
        Self::new(xy.x(), xy.y(), z)
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

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
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

    /// Sets the Z component.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        self.data[2] = value;
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 3] {
        self.data
    }

    /// Borrows the raw `[x, y, z]` storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Drops `z`.
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }

    swizzles2! {
        xx => (x, x), xy => (x, y), xz => (x, z),
        yx => (y, x), yy => (y, y), yz => (y, z),
        zx => (z, x), zy => (z, y), zz => (z, z),
    }

    swizzles3! {
        xxx => (x, x, x), xxy => (x, x, y), xxz => (x, x, z),
        xyx => (x, y, x), xyy => (x, y, y), xyz => (x, y, z),
        xzx => (x, z, x), xzy => (x, z, y), xzz => (x, z, z),
        yxx => (y, x, x), yxy => (y, x, y), yxz => (y, x, z),
        yyx => (y, y, x), yyy => (y, y, y), yyz => (y, y, z),
        yzx => (y, z, x), yzy => (y, z, y), yzz => (y, z, z),
        zxx => (z, x, x), zxy => (z, x, y), zxz => (z, x, z),
        zyx => (z, y, x), zyy => (z, y, y), zyz => (z, y, z),
        zzx => (z, z, x), zzy => (z, z, y), zzz => (z, z, z),
    }

    /// Magnitude.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Dot product `x1*x2 + y1*y2 + z1*z2`. Also callable as
    /// `Vec3::dot(&a, &b)`.
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> T {
        (*other - *self).length_squared()
    }

    /// Unsigned angle between `self` and `other`, in `[0, π]`.
    ///
    /// The cosine is clamped into `[-1, 1]` so parallel inputs never hit the
    /// `acos` domain edge through round-off.
    pub fn angle_to(&self, other: &Self) -> Angle<T> {
        let cos = self.normalized().dot(&other.normalized());
        Angle::from_radians(scalar::clamp(cos, T::NEG_ONE, T::ONE).acos())
    }

    /// Scales the vector to unit length in place.
    ///
    /// A zero-length vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > T::ZERO {
            let inv = T::ONE / len;
            for c in &mut self.data {
                *c *= inv;
            }
        } else {
            trace!(?self, "normalize on zero-length Vec3 ignored");
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
            scalar::lerp(self.z(), end.z(), t),
        )
    }

    /// Moves toward `target` by at most `max_distance`.
    ///
    /// Returns `target` exactly when it is within `max_distance` or already
    /// coincident with `self`; the coincident check also keeps the direction
    /// division away from zero. A negative `max_distance` moves away.
    ///
    /// ```
    /// use echo_math::Vec3f;
    /// let a = Vec3f::ZERO;
    /// let b = Vec3f::new(10.0, 0.0, 0.0);
    /// assert_eq!(a.move_towards(&b, 4.0), Vec3f::new(4.0, 0.0, 0.0));
    /// assert_eq!(a.move_towards(&b, 25.0), b);
    /// ```
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
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }

    /// Converts to another precision.
    pub fn cast<U: Scalar>(&self) -> Vec3<U> {
        Vec3::new(
            U::from_f64(self.x().to_f64()),
            U::from_f64(self.y().to_f64()),
            U::from_f64(self.z().to_f64()),
        )
    }
}

impl<T: Scalar> PartialEq for Vec3<T> {
    fn eq(&self, other: &Self) -> bool {
        near(self.x(), other.x()) && near(self.y(), other.y()) && near(self.z(), other.z())
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from(value: [T; 3]) -> Self {
        Self { data: value }
    }
}

/// Zero-fills `z`.
impl<T: Scalar> From<Vec2<T>> for Vec3<T> {
    fn from(value: Vec2<T>) -> Self {
        Self::from_vec2(value, T::ZERO)
    }
}

impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;

    /// Out-of-range indices clamp to `z`.
    fn index(&self, index: usize) -> &T {
        &self.data[index.min(2)]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index.min(2)]
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Vec3 division by zero ignored");
            return self;
        }
        Self::new(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec3<$t>> for $t {
                type Output = Vec3<$t>;
                fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);
