// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::{debug, trace};

use crate::mat2::{check_index, singular};
use crate::{Mat4, MathError, MathResult, Quat, Scalar, Vec3};

/// Column‑major 3×3 matrix.
///
/// ```text
/// ( m[0] m[3] m[6] )
/// ( m[1] m[4] m[7] )
/// ( m[2] m[5] m[8] )
/// ```
///
/// Rotation helpers take degrees and build right-handed rotations that agree
/// with [`Quat::from_axis_angle`].
///
/// # Examples
/// ```
/// use echo_math::{Mat3f, Vec3f};
/// let r = Mat3f::rotate_z(90.0);
/// let v = r * Vec3f::UNIT_X;
/// assert_eq!(v, Vec3f::UNIT_Y);
///
/// let inv = r.inverted().unwrap();
/// assert!((r * inv).abs_diff_eq(&Mat3f::identity(), 1e-6));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3<T> {
    data: [T; 9],
}

impl<T: Scalar> Mat3<T> {
    const DIM: usize = 3;

    /// All-zero matrix.
    pub const ZERO: Self = Self::from_cols_array([T::ZERO; 9]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(T::ONE);

    /// Creates a matrix from elements listed row by row. Storage is
    /// column-major.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self {
            data: [
                m00, m10, m20, // col 0
                m01, m11, m21, // col 1
                m02, m12, m22, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn from_cols_array(data: [T; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its three columns.
    #[rustfmt::skip]
    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_cols_array([
            c0.x(), c0.y(), c0.z(),
            c1.x(), c1.y(), c1.z(),
            c2.x(), c2.y(), c2.z(),
        ])
    }

    /// Returns the column-major storage.
    pub fn to_cols_array(self) -> [T; 9] {
        self.data
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns a matrix with `value` on the diagonal and zeros elsewhere.
    #[rustfmt::skip]
    pub const fn diagonal(value: T) -> Self {
        let z = T::ZERO;
        Self::new(
            value, z, z, //
            z, value, z, //
            z, z, value,
        )
    }

    /// Rotation about +X by `angle_deg` degrees.
    #[rustfmt::skip]
    pub fn rotate_x(angle_deg: T) -> Self {
        let (s, c) = (angle_deg * T::DEG_TO_RAD).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, //
            o, c, -s, //
            o, s, c,
        )
    }

    /// Rotation about +Y by `angle_deg` degrees.
    #[rustfmt::skip]
    pub fn rotate_y(angle_deg: T) -> Self {
        let (s, c) = (angle_deg * T::DEG_TO_RAD).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, o, s, //
            o, l, o, //
            -s, o, c,
        )
    }

    /// Rotation about +Z by `angle_deg` degrees.
    #[rustfmt::skip]
    pub fn rotate_z(angle_deg: T) -> Self {
        let (s, c) = (angle_deg * T::DEG_TO_RAD).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, -s, o, //
            s, c, o, //
            o, o, l,
        )
    }

    /// Rotation matrix of a quaternion (normalized first).
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat3()
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    #[rustfmt::skip]
    pub fn from_mat4(m: &Mat4<T>) -> Self {
        let a = m.to_cols_array();
        Self::from_cols_array([
            a[0], a[1], a[2], //
            a[4], a[5], a[6], //
            a[8], a[9], a[10],
        ])
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        self.data[col * Self::DIM + row]
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> MathResult<T> {
        check_index(row, col, Self::DIM)?;
        Ok(self.get(row, col))
    }

    /// Mutable element at `row`, `col`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> MathResult<&mut T> {
        check_index(row, col, Self::DIM)?;
        Ok(&mut self.data[col * Self::DIM + row])
    }

    /// Overwrites the element at `row`, `col`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> MathResult<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Column `index`, or [`MathError::OutOfRange`].
    pub fn col(&self, index: usize) -> MathResult<Vec3<T>> {
        check_index(0, index, Self::DIM)?;
        Ok(Vec3::new(
            self.get(0, index),
            self.get(1, index),
            self.get(2, index),
        ))
    }

    /// Row `index`, or [`MathError::OutOfRange`].
    pub fn row(&self, index: usize) -> MathResult<Vec3<T>> {
        check_index(index, 0, Self::DIM)?;
        Ok(Vec3::new(
            self.get(index, 0),
            self.get(index, 1),
            self.get(index, 2),
        ))
    }

    /// Determinant by expansion along the first row.
    pub fn determinant(&self) -> T {
        let m = |r, c| self.get(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Determinant of the 2×2 block left after removing `row` and `col`.
    pub(crate) fn minor(&self, row: usize, col: usize) -> T {
        let rows = others(row);
        let cols = others(col);
        self.get(rows[0], cols[0]) * self.get(rows[1], cols[1])
            - self.get(rows[0], cols[1]) * self.get(rows[1], cols[0])
    }

    /// Matrix of signed minors (cofactors).
    pub fn comatrix(&self) -> Self {
        let mut out = [T::ZERO; 9];
        for col in 0..3 {
            for row in 0..3 {
                let minor = self.minor(row, col);
                out[col * 3 + row] = if (row + col).is_multiple_of(2) {
                    minor
                } else {
                    -minor
                };
            }
        }
        Self::from_cols_array(out)
    }

    /// Transposed comatrix.
    pub fn adjugate(&self) -> Self {
        self.comatrix().transposed()
    }

    /// Inverse as `transpose(comatrix) / det`, without a singularity check.
    ///
    /// A singular input yields non-finite elements.
    pub fn inverted_unchecked(&self) -> Self {
        self.adjugate().scaled(T::ONE / self.determinant())
    }

    /// Inverse, or [`MathError::SingularMatrix`] when
    /// `|det| <= T::SINGULAR_EPSILON`.
    pub fn inverted(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det.abs() <= T::SINGULAR_EPSILON {
            debug!(determinant = %det, "Mat3 inversion rejected: singular");
            return Err(singular(det));
        }
        Ok(self.adjugate().scaled(T::ONE / det))
    }

    /// Inverts in place; `self` is left untouched on failure.
    pub fn invert(&mut self) -> MathResult<&mut Self> {
        *self = self.inverted()?;
        Ok(self)
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        out.transpose();
        out
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        for col in 0..3 {
            for row in (col + 1)..3 {
                self.data.swap(col * 3 + row, row * 3 + col);
            }
        }
        self
    }

    fn scaled(&self, s: T) -> Self {
        Self::from_cols_array(self.data.map(|v| v * s))
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for (o, r) in out.data.iter_mut().zip(rhs.data.iter()) {
            *o = f(*o, *r);
        }
        out
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [T::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = T::ZERO;
                for k in 0..3 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::from_cols_array(out)
    }

    /// Matrix-vector product.
    pub fn mul_vec3(&self, v: &Vec3<T>) -> Vec3<T> {
        let (x, y, z) = (v.x(), v.y(), v.z());
        Vec3::new(
            self.get(0, 0) * x + self.get(0, 1) * y + self.get(0, 2) * z,
            self.get(1, 0) * x + self.get(1, 1) * y + self.get(1, 2) * z,
            self.get(2, 0) * x + self.get(2, 1) * y + self.get(2, 2) * z,
        )
    }

    /// Divides by `scalar`, reporting [`MathError::ZeroDivisor`] instead of
    /// silently returning the operand.
    pub fn checked_div(self, scalar: T) -> MathResult<Self> {
        if scalar == T::ZERO {
            return Err(MathError::ZeroDivisor);
        }
        Ok(self / scalar)
    }

    /// Element-wise approximate equality.
    pub fn abs_diff_eq(&self, other: &Self, tolerance: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }

    /// Converts to another precision.
    pub fn cast<U: Scalar>(&self) -> Mat3<U> {
        Mat3::from_cols_array(self.data.map(|v| U::from_f64(v.to_f64())))
    }
}

/// The two indices in `0..3` other than `skip`, ascending.
fn others(skip: usize) -> [usize; 2] {
    match skip {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

impl<T> From<[T; 9]> for Mat3<T> {
    fn from(value: [T; 9]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Add for Mat3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Mat3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.mul_vec3(&rhs)
    }
}

impl<T: Scalar> Div<T> for Mat3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Mat3 division by zero ignored");
            return self;
        }
        Self::from_cols_array(self.data.map(|v| v / rhs))
    }
}

impl<T: Scalar> Neg for Mat3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scaled(T::NEG_ONE)
    }
}

impl<T: Scalar> AddAssign for Mat3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Mat3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Mat3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Mat3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Mat3<$t>> for $t {
                type Output = Mat3<$t>;
                fn mul(self, rhs: Mat3<$t>) -> Mat3<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[rustfmt::skip]
    fn comatrix_matches_hand_computed_cofactors() {
        let m = Mat3::new(
            1.0_f64, 2.0, 3.0, //
            0.0, 4.0, 5.0, //
            1.0, 0.0, 6.0,
        );
        let expected = Mat3::new(
            24.0, 5.0, -4.0, //
            -12.0, 3.0, 2.0, //
            -2.0, -5.0, 4.0,
        );
        assert_eq!(m.comatrix(), expected);
        assert_eq!(m.determinant(), 22.0);
    }
}
