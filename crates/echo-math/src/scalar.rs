// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Floating-point scalar abstraction and free scalar helpers.
//!
//! Every aggregate in this crate is generic over [`Scalar`], which is
//! implemented for `f32` and `f64`. The trait exposes the constants and
//! transcendentals the aggregates need so generic code never has to reach for
//! a concrete float type.
//!
//! Domain policy:
//! - `sqrt` of a negative value and `asin`/`acos` outside `[-1, 1]` return
//!   NaN. Nothing here special-cases them.
//! - All helpers are total; none of them panic.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Floating-point scalar used by every vector, matrix, angle, and quaternion.
///
/// Arithmetic is required through the standard operator traits so generic
/// code can use `+`, `-`, `*`, `/`, `%`, and unary `-` directly. `%` follows
/// C `fmod` semantics (the result carries the sign of the dividend).
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `-1`.
    const NEG_ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    /// Full turn in radians (2π).
    const TAU: Self;
    /// Euler's number.
    const E: Self;
    /// Multiply degrees by this to get radians.
    const DEG_TO_RAD: Self;
    /// Multiply radians by this to get degrees.
    const RAD_TO_DEG: Self;
    /// Tolerance used by the approximate equality of angles and vectors.
    const EPSILON: Self;
    /// Determinant magnitude at or below which a matrix is treated as singular.
    const SINGULAR_EPSILON: Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root; NaN for negative inputs.
    fn sqrt(self) -> Self;
    /// Sine of `self` (radians).
    fn sin(self) -> Self;
    /// Cosine of `self` (radians).
    fn cos(self) -> Self;
    /// Tangent of `self` (radians).
    fn tan(self) -> Self;
    /// Arcsine in radians; NaN outside `[-1, 1]`.
    fn asin(self) -> Self;
    /// Arccosine in radians; NaN outside `[-1, 1]`.
    fn acos(self) -> Self;
    /// Arctangent in radians.
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / x` (`self` is the `y` term).
    fn atan2(self, x: Self) -> Self;
    /// Raises `self` to a floating-point power.
    fn powf(self, exponent: Self) -> Self;
    /// Returns `true` for values that are neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `(sin, cos)` of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Truncated floating remainder (C `fmod`).
    fn fmod(self, modulus: Self) -> Self {
        self % modulus
    }

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($t:ident, eps = $eps:expr, singular = $sing:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;
            const E: Self = core::$t::consts::E;
            const DEG_TO_RAD: Self = core::$t::consts::PI / 180.0;
            const RAD_TO_DEG: Self = 180.0 / core::$t::consts::PI;
            const EPSILON: Self = $eps;
            const SINGULAR_EPSILON: Self = $sing;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                <$t>::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                <$t>::atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                <$t>::atan2(self, x)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                <$t>::powf(self, exponent)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                <$t>::sin_cos(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, eps = 1e-5, singular = 1e-6);
impl_scalar!(f64, eps = 1e-10, singular = 1e-12);

/// Returns the larger of `a` and `b` (`b` when they are unordered or equal).
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the smaller of `a` and `b` (`b` when they are unordered or equal).
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Maximum of one or more expressions, reduced pairwise left to right.
///
/// ```
/// assert_eq!(echo_math::max!(3.0, 9.0, -1.0, 4.0), 9.0);
/// assert_eq!(echo_math::max!(7), 7);
/// ```
#[macro_export]
macro_rules! max {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let acc = $first;
        $( let acc = $crate::scalar::max(acc, $rest); )*
        acc
    }};
}

/// Minimum of one or more expressions, reduced pairwise left to right.
///
/// ```
/// assert_eq!(echo_math::min!(3.0, 9.0, -1.0, 4.0), -1.0);
/// ```
#[macro_export]
macro_rules! min {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let acc = $first;
        $( let acc = $crate::scalar::min(acc, $rest); )*
        acc
    }};
}

/// Clamps `value` into `[min_inclusive, max_inclusive]`.
///
/// Evaluated as `max(min_inclusive, min(value, max_inclusive))`, so an
/// inverted range yields `min_inclusive` instead of panicking.
#[inline]
pub fn clamp<T: Scalar>(value: T, min_inclusive: T, max_inclusive: T) -> T {
    max(min_inclusive, min(value, max_inclusive))
}

/// Clamps `value` into `[0, 1]`.
#[inline]
pub fn clamp01<T: Scalar>(value: T) -> T {
    clamp(value, T::ZERO, T::ONE)
}

/// Linear interpolation `start + (end - start) * t`.
///
/// `t` is not clamped; callers that need the segment clamp it first.
#[inline]
pub fn lerp<T: Scalar>(start: T, end: T, t: T) -> T {
    start + (end - start) * t
}

/// Truncated floating remainder (C `fmod`).
#[inline]
pub fn fmod<T: Scalar>(value: T, modulus: T) -> T {
    value.fmod(modulus)
}

/// `value` raised to `exponent`.
#[inline]
pub fn pow<T: Scalar>(value: T, exponent: T) -> T {
    value.powf(exponent)
}

/// Absolute value.
#[inline]
pub fn abs<T: Scalar>(value: T) -> T {
    value.abs()
}

/// Square root; NaN for negative inputs.
#[inline]
pub fn sqrt<T: Scalar>(value: T) -> T {
    value.sqrt()
}

/// Sine (radians).
#[inline]
pub fn sin<T: Scalar>(value: T) -> T {
    value.sin()
}

/// Cosine (radians).
#[inline]
pub fn cos<T: Scalar>(value: T) -> T {
    value.cos()
}

/// Tangent (radians).
#[inline]
pub fn tan<T: Scalar>(value: T) -> T {
    value.tan()
}

/// Arcsine in radians; NaN outside `[-1, 1]`.
#[inline]
pub fn asin<T: Scalar>(value: T) -> T {
    value.asin()
}

/// Arccosine in radians; NaN outside `[-1, 1]`.
#[inline]
pub fn acos<T: Scalar>(value: T) -> T {
    value.acos()
}

/// Arctangent in radians.
#[inline]
pub fn atan<T: Scalar>(value: T) -> T {
    value.atan()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    y.atan2(x)
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<T: Scalar>(value: T) -> T {
    value * T::DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Scalar>(value: T) -> T {
    value * T::RAD_TO_DEG
}

/// Approximate equality used by the aggregate `PartialEq` impls.
#[inline]
pub(crate) fn near<T: Scalar>(a: T, b: T) -> bool {
    (a - b).abs() < T::EPSILON
}
