// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, Neg, Sub};

use tracing::trace;

use crate::scalar::{self, Scalar};
use crate::{Mat3, Mat4, MathError, MathResult, Vec3};

/// Quaternion stored as `(w, x, y, z)`, `w` being the scalar part.
///
/// * Angles taken by constructors are in degrees.
/// * Rotation semantics assume a unit quaternion; [`Quat::rotate_point`]
///   does not normalize, so a non-unit input scales the result.
/// * Euler convention: `(x = pitch, y = yaw, z = roll)` composed as
///   `q = q_y(yaw) * q_x(pitch) * q_z(roll)`, matching [`Mat4::from_euler`].
///
/// # Examples
/// ```
/// use echo_math::{Quatf, Vec3f};
/// let q = Quatf::from_axis_angle(Vec3f::UNIT_Z, 90.0);
/// assert_eq!(q.rotate_point(&Vec3f::UNIT_X), Vec3f::UNIT_Y);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Quat<T> {
    data: [T; 4],
}

impl<T: Scalar> Quat<T> {
    /// `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Creates a quaternion from components.
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { data: [w, x, y, z] }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    pub fn from_scalar_vector(w: T, xyz: Vec3<T>) -> Self {
        Self::new(w, xyz.x(), xyz.y(), xyz.z())
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Scalar part.
    #[inline]
    pub fn w(&self) -> T {
        self.data[0]
    }

    /// X of the vector part.
    #[inline]
    pub fn x(&self) -> T {
        self.data[1]
    }

    /// Y of the vector part.
    #[inline]
    pub fn y(&self) -> T {
        self.data[2]
    }

    /// Z of the vector part.
    #[inline]
    pub fn z(&self) -> T {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Returns the components as `[w, x, y, z]`.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Rotation of `angle_deg` degrees about `axis`.
    ///
    /// The axis is normalized internally. A zero-length axis yields the
    /// identity rotation.
    pub fn from_axis_angle(axis: Vec3<T>, angle_deg: T) -> Self {
        let Ok(axis) = axis.try_normalized() else {
            trace!("from_axis_angle with zero-length axis; returning identity");
            return Self::IDENTITY;
        };
        let half = angle_deg * T::DEG_TO_RAD * T::HALF;
        let (s, c) = half.sin_cos();
        Self::from_scalar_vector(c, axis * s)
    }

    /// Rotation from Euler angles in degrees, `(x = pitch, y = yaw, z = roll)`.
    pub fn from_euler(degrees: &Vec3<T>) -> Self {
        let yaw = Self::from_axis_angle(Vec3::UNIT_Y, degrees.y());
        let pitch = Self::from_axis_angle(Vec3::UNIT_X, degrees.x());
        let roll = Self::from_axis_angle(Vec3::UNIT_Z, degrees.z());
        yaw * pitch * roll
    }

    /// Euler angles in degrees, `(x = pitch, y = yaw, z = roll)`; inverse of
    /// [`Quat::from_euler`] for pitch in `[-90°, 90°]`.
    ///
    /// At gimbal lock (`|pitch| = 90°`) roll is reported as zero and the
    /// whole remaining rotation is attributed to yaw.
    pub fn to_euler(&self) -> Vec3<T> {
        let m = self.to_mat3();
        let sin_pitch = scalar::clamp(-m.get(1, 2), T::NEG_ONE, T::ONE);
        let pitch = sin_pitch.asin();
        let (yaw, roll) = if sin_pitch.abs() < T::ONE - T::EPSILON {
            (m.get(0, 2).atan2(m.get(2, 2)), m.get(1, 0).atan2(m.get(1, 1)))
        } else {
            ((-m.get(2, 0)).atan2(m.get(0, 0)), T::ZERO)
        };
        Vec3::new(pitch, yaw, roll) * T::RAD_TO_DEG
    }

    /// Rotation that turns `+Z` toward `target - eye`, keeping `+Y` as close
    /// to `up` as possible.
    ///
    /// Returns identity when `eye == target`. When `up` is parallel to the
    /// view direction another reference axis is substituted.
    pub fn look_at(eye: &Vec3<T>, target: &Vec3<T>, up: &Vec3<T>) -> Self {
        let Ok(forward) = (*target - *eye).try_normalized() else {
            trace!("look_at with coincident eye and target; returning identity");
            return Self::IDENTITY;
        };
        let right = up.cross(&forward).try_normalized().unwrap_or_else(|_| {
            let fallback = if forward.x().abs() < T::HALF {
                Vec3::UNIT_X
            } else {
                Vec3::UNIT_Z
            };
            forward.cross(&fallback).normalized()
        });
        let new_up = forward.cross(&right);
        Self::from_mat3(&Mat3::from_cols(right, new_up, forward))
    }

    /// Quaternion of a pure rotation matrix (Shepperd's method).
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let r = |row, col| m.get(row, col);
        let quarter = T::HALF * T::HALF;
        let trace = r(0, 0) + r(1, 1) + r(2, 2);
        let q = if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            Self::new(
                quarter * s,
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (T::ONE + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * T::TWO;
            Self::new(
                (r(2, 1) - r(1, 2)) / s,
                quarter * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (T::ONE + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * T::TWO;
            Self::new(
                (r(0, 2) - r(2, 0)) / s,
                (r(0, 1) + r(1, 0)) / s,
                quarter * s,
                (r(1, 2) + r(2, 1)) / s,
            )
        } else {
            let s = (T::ONE + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * T::TWO;
            Self::new(
                (r(1, 0) - r(0, 1)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                quarter * s,
            )
        };
        q.normalized()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Magnitude. Also callable as `Quat::length(&q)`.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + *a * *b)
    }

    /// Divides every component by the magnitude, in place.
    ///
    /// A zero-magnitude quaternion is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > T::ZERO {
            let inv = T::ONE / len;
            for c in &mut self.data {
                *c *= inv;
            }
        } else {
            trace!(?self, "normalize on zero quaternion ignored");
        }
        self
    }

    /// Unit copy; a zero quaternion is returned unchanged.
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Unit copy, or [`MathError::DegenerateQuaternion`] for a zero input.
    pub fn try_normalized(&self) -> MathResult<Self> {
        if self.length() > T::ZERO {
            Ok(self.normalized())
        } else {
            Err(MathError::DegenerateQuaternion)
        }
    }

    /// Negates the vector part in place.
    pub fn conjugate(&mut self) -> &mut Self {
        for c in &mut self.data[1..] {
            *c = -*c;
        }
        self
    }

    /// Copy with the vector part negated.
    pub fn conjugated(&self) -> Self {
        let mut copy = *self;
        copy.conjugate();
        copy
    }

    /// Multiplicative inverse `conjugate / |q|²`; a zero quaternion is
    /// returned unchanged.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == T::ZERO {
            return *self;
        }
        self.conjugated() * (T::ONE / len_sq)
    }

    /// Hamilton product (`self * other`).
    ///
    /// Non-commutative: applied to a point, the result rotates by `other`
    /// first, then by `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (aw, ax, ay, az) = (self.w(), self.x(), self.y(), self.z());
        let (bw, bx, by, bz) = (other.w(), other.x(), other.y(), other.z());
        Self::new(
            aw * bw - ax * bx - ay * by - az * bz,
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
        )
    }

    /// Rotates `point` as `self * (0, point) * conjugate(self)`.
    ///
    /// `self` is used as given; callers pass a unit quaternion.
    pub fn rotate_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let p = Self::from_scalar_vector(T::ZERO, *point);
        self.multiply(&p).multiply(&self.conjugated()).vector()
    }

    /// 3×3 rotation matrix (right-handed); the quaternion is normalized
    /// first.
    #[rustfmt::skip]
    pub fn to_mat3(&self) -> Mat3<T> {
        let q = self.normalized();
        let (w, x, y, z) = (q.w(), q.x(), q.y(), q.z());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let (one, two) = (T::ONE, T::TWO);
        Mat3::new(
            one - two * (yy + zz), two * (xy - wz), two * (xz + wy), //
            two * (xy + wz), one - two * (xx + zz), two * (yz - wx), //
            two * (xz - wy), two * (yz + wx), one - two * (xx + yy),
        )
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_mat3(&self.to_mat3())
    }

    /// Element-wise approximate equality.
    pub fn abs_diff_eq(&self, other: &Self, tolerance: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }

    /// Converts to another precision.
    pub fn cast<U: Scalar>(&self) -> Quat<U> {
        let [w, x, y, z] = self.data.map(|v| U::from_f64(v.to_f64()));
        Quat::new(w, x, y, z)
    }
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts `[w, x, y, z]` verbatim; normalization is not enforced.
impl<T> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate_point(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::from(self.data.map(|v| v * rhs))
    }
}

impl<T: Scalar> Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w() + rhs.w(),
            self.x() + rhs.x(),
            self.y() + rhs.y(),
            self.z() + rhs.z(),
        )
    }
}

impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self * T::NEG_ONE
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;
                fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);
