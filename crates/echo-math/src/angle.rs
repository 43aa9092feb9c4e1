// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angles stored in radians.
//!
//! Arithmetic is plain radian arithmetic; nothing wraps implicitly. Call
//! [`Angle::normalize`] to reduce into `[0, 2π)`, and prefer
//! [`Angle::short_lerp`] when interpolating orientations that may straddle
//! the `0 / 2π` seam.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use crate::scalar::{self, near, Scalar};
use crate::{MathError, MathResult, Vec2};

/// Rotation quantity, stored in radians.
///
/// Equality is tolerance-based (`|Δ| < EPSILON`); ordering is exact outside
/// that tolerance band. [`Angle::cmp_exact`] orders raw radians with no
/// tolerance.
///
/// # Examples
/// ```
/// use echo_math::Anglef;
/// let a = Anglef::from_degrees(0.0);
/// let b = Anglef::from_degrees(350.0);
/// // Short path crosses the seam instead of sweeping 350 degrees.
/// let mid = Anglef::short_lerp(a, b, 1.0);
/// assert!((mid.as_degrees() + 10.0).abs() < 1e-3);
/// ```
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Angle<T> {
    radians: T,
}

impl<T: Scalar> Angle<T> {
    /// Zero angle.
    pub const ZERO: Self = Self { radians: T::ZERO };
    /// Half turn (π radians).
    pub const HALF_TURN: Self = Self { radians: T::PI };
    /// Full turn (2π radians).
    pub const FULL_TURN: Self = Self { radians: T::TAU };

    /// Angle of `rad` radians. No validation or wrapping.
    pub const fn from_radians(rad: T) -> Self {
        Self { radians: rad }
    }

    /// Angle of `deg` degrees. No validation or wrapping.
    pub fn from_degrees(deg: T) -> Self {
        Self::from_radians(deg * T::DEG_TO_RAD)
    }

    /// Value in degrees.
    pub fn as_degrees(&self) -> T {
        self.radians * T::RAD_TO_DEG
    }

    /// Value in radians.
    pub fn as_radians(&self) -> T {
        self.radians
    }

    /// Reduces the angle into `[0, 2π)` in place.
    ///
    /// Uses a truncated floating modulus, then adds a full turn when the
    /// remainder is negative.
    pub fn normalize(&mut self) -> &mut Self {
        let mut r = self.radians.fmod(T::TAU);
        if r < T::ZERO {
            r += T::TAU;
        }
        // `-tiny + TAU` can round up to exactly TAU.
        if r >= T::TAU {
            r = T::ZERO;
        }
        self.radians = r;
        self
    }

    /// Returns a copy reduced into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        let mut copy = self;
        copy.normalize();
        copy
    }

    /// Linear interpolation in radians with `t` clamped into `[0, 1]`.
    ///
    /// Does not take the short way around: `lerp(10°, 350°, 0.5)` is `180°`.
    pub fn lerp(start: Self, end: Self, t: T) -> Self {
        Self::from_radians(scalar::lerp(
            start.radians,
            end.radians,
            scalar::clamp01(t),
        ))
    }

    /// [`Angle::lerp`] with endpoints given in degrees.
    pub fn lerp_degrees(start_deg: T, end_deg: T, t: T) -> Self {
        Self::from_degrees(scalar::lerp(start_deg, end_deg, scalar::clamp01(t)))
    }

    /// Interpolates along the shortest arc from `start` to `end`.
    ///
    /// The delta `end - start` is reduced modulo 2π and folded into
    /// `(-π, π]`; the result is `start + delta * clamp01(t)` and is not
    /// re-normalized.
    pub fn short_lerp(start: Self, end: Self, t: T) -> Self {
        let delta = Self::shortest_delta(start.radians, end.radians);
        Self::from_radians(start.radians + delta * scalar::clamp01(t))
    }

    /// [`Angle::short_lerp`] with endpoints given in degrees.
    pub fn short_lerp_degrees(start_deg: T, end_deg: T, t: T) -> Self {
        Self::short_lerp(
            Self::from_degrees(start_deg),
            Self::from_degrees(end_deg),
            t,
        )
    }

    fn shortest_delta(start: T, end: T) -> T {
        let mut delta = (end - start).fmod(T::TAU);
        if delta > T::PI {
            delta -= T::TAU;
        }
        if delta <= -T::PI {
            delta += T::TAU;
        }
        delta
    }

    /// Unsigned angle between two 2D vectors, in `[0, π]`.
    ///
    /// Both inputs are normalized first and the cosine is clamped into
    /// `[-1, 1]` before `acos`.
    pub fn between(a: &Vec2<T>, b: &Vec2<T>) -> Self {
        let cos = a.normalized().dot(&b.normalized());
        Self::from_radians(scalar::clamp(cos, T::NEG_ONE, T::ONE).acos())
    }

    /// Clamps the angle between two bounds expressed in degrees.
    pub fn clamp(self, min_deg: T, max_deg: T) -> Self {
        Self::from_degrees(scalar::clamp(self.as_degrees(), min_deg, max_deg))
    }

    /// Magnitude of the angle.
    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Sine of the angle.
    pub fn sin(&self) -> T {
        self.radians.sin()
    }

    /// Cosine of the angle.
    pub fn cos(&self) -> T {
        self.radians.cos()
    }

    /// Tangent of the angle.
    pub fn tan(&self) -> T {
        self.radians.tan()
    }

    /// `(sin, cos)` of the angle.
    pub fn sin_cos(&self) -> (T, T) {
        self.radians.sin_cos()
    }

    /// Angle whose sine is `value`; NaN radians outside `[-1, 1]`.
    pub fn asin(value: T) -> Self {
        Self::from_radians(value.asin())
    }

    /// Angle whose cosine is `value`; NaN radians outside `[-1, 1]`.
    pub fn acos(value: T) -> Self {
        Self::from_radians(value.acos())
    }

    /// Angle whose tangent is `value`.
    pub fn atan(value: T) -> Self {
        Self::from_radians(value.atan())
    }

    /// Four-quadrant angle of the point `(x, y)`.
    pub fn atan2(y: T, x: T) -> Self {
        Self::from_radians(y.atan2(x))
    }

    /// Divides by `scalar`, reporting [`MathError::ZeroDivisor`] instead of
    /// silently returning the operand.
    pub fn checked_div(self, scalar: T) -> MathResult<Self> {
        if scalar == T::ZERO {
            return Err(MathError::ZeroDivisor);
        }
        Ok(self / scalar)
    }

    /// Orders by raw radians, ignoring the equality tolerance.
    ///
    /// `None` only when either side is NaN.
    pub fn cmp_exact(&self, other: &Self) -> Option<Ordering> {
        self.radians.partial_cmp(&other.radians)
    }

    /// Converts to another precision.
    pub fn cast<U: Scalar>(&self) -> Angle<U> {
        Angle::from_radians(U::from_f64(self.radians.to_f64()))
    }
}

impl<T: Scalar> PartialEq for Angle<T> {
    fn eq(&self, other: &Self) -> bool {
        near(self.radians, other.radians)
    }
}

impl<T: Scalar> PartialOrd for Angle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.radians.partial_cmp(&other.radians)
    }
}

impl<T: Scalar> Add for Angle<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl<T: Scalar> Sub for Angle<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl<T: Scalar> Mul<T> for Angle<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl<T: Scalar> Div<T> for Angle<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Angle division by zero ignored");
            return self;
        }
        Self::from_radians(self.radians / rhs)
    }
}

impl<T: Scalar> Neg for Angle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl<T: Scalar> AddAssign for Angle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl<T: Scalar> SubAssign for Angle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl<T: Scalar> MulAssign<T> for Angle<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.radians *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Angle<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// Unit suffixes for building angles from float literals.
///
/// ```
/// use echo_math::AngleUnits;
/// let quarter = 90.0_f32.deg();
/// assert!((quarter.as_radians() - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub trait AngleUnits: Scalar {
    /// Interprets `self` as degrees.
    fn deg(self) -> Angle<Self> {
        Angle::from_degrees(self)
    }

    /// Interprets `self` as radians.
    fn rad(self) -> Angle<Self> {
        Angle::from_radians(self)
    }
}

impl AngleUnits for f32 {}
impl AngleUnits for f64 {}
