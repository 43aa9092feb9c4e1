// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::{debug, trace};

use crate::mat2::{check_index, singular};
use crate::{Mat3, MathError, MathResult, Quat, Scalar, Vec3};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads; the struct is
///   16-byte aligned.
/// - Represents affine transforms; helper methods treat points
///   homogeneously (`w = 1`) and directions with `w = 0`.
/// - `Default` is the zero matrix; use [`Mat4::identity`] explicitly.
///
/// # Examples
/// ```
/// use echo_math::{Mat4f, Vec3f};
/// let t = Mat4f::translation(5.0, -3.0, 2.0);
/// let p = Vec3f::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat4<T> {
    data: [T; 16],
}

impl<T: Scalar> Mat4<T> {
    const DIM: usize = 4;

    /// All-zero matrix.
    pub const ZERO: Self = Self::from_cols_array([T::ZERO; 16]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(T::ONE);

    /// Creates a matrix from elements listed row by row. Storage is
    /// column-major.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            data: [
                m00, m10, m20, m30, // col 0
                m01, m11, m21, m31, // col 1
                m02, m12, m22, m32, // col 2
                m03, m13, m23, m33, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn from_cols_array(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Returns the column-major storage.
    pub fn to_cols_array(self) -> [T; 16] {
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
            value, z, z, z, //
            z, value, z, z, //
            z, z, value, z, //
            z, z, z, value,
        )
    }

    /// Translation matrix; the offset occupies the last column.
    #[rustfmt::skip]
    pub const fn translation(tx: T, ty: T, tz: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, tx, //
            o, l, o, ty, //
            o, o, l, tz, //
            o, o, o, l,
        )
    }

    /// Non-uniform scale matrix.
    #[rustfmt::skip]
    pub const fn scale(sx: T, sy: T, sz: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            sx, o, o, o, //
            o, sy, o, o, //
            o, o, sz, o, //
            o, o, o, l,
        )
    }

    /// Embeds a 3×3 linear part; translation is zero and `m33 = 1`.
    #[rustfmt::skip]
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let a = m.to_cols_array();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_cols_array([
            a[0], a[1], a[2], o, //
            a[3], a[4], a[5], o, //
            a[6], a[7], a[8], o, //
            o, o, o, l,
        ])
    }

    /// Rotation about +X by `angle_deg` degrees.
    pub fn rotate_x(angle_deg: T) -> Self {
        Self::from_mat3(&Mat3::rotate_x(angle_deg))
    }

    /// Rotation about +Y by `angle_deg` degrees.
    pub fn rotate_y(angle_deg: T) -> Self {
        Self::from_mat3(&Mat3::rotate_y(angle_deg))
    }

    /// Rotation about +Z by `angle_deg` degrees.
    pub fn rotate_z(angle_deg: T) -> Self {
        Self::from_mat3(&Mat3::rotate_z(angle_deg))
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// Forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat4()
    }

    /// Rotation from Euler angles in degrees, `(x = pitch, y = yaw, z = roll)`.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`, the same convention
    /// as [`Quat::from_euler`].
    pub fn from_euler(degrees: &Vec3<T>) -> Self {
        Self::rotate_y(degrees.y())
            .multiply(&Self::rotate_x(degrees.x()))
            .multiply(&Self::rotate_z(degrees.z()))
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
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

    /// 3×3 submatrix left after removing `row` and `col`.
    fn submatrix(&self, row: usize, col: usize) -> Mat3<T> {
        let rows = others(row);
        let cols = others(col);
        let mut out = [T::ZERO; 9];
        for (c, &src_c) in cols.iter().enumerate() {
            for (r, &src_r) in rows.iter().enumerate() {
                out[c * 3 + r] = self.get(src_r, src_c);
            }
        }
        Mat3::from_cols_array(out)
    }

    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.submatrix(row, col).determinant();
        if (row + col).is_multiple_of(2) {
            minor
        } else {
            -minor
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| acc + self.get(0, col) * self.cofactor(0, col))
    }

    /// Matrix of signed minors (cofactors).
    pub fn comatrix(&self) -> Self {
        let mut out = [T::ZERO; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = self.cofactor(row, col);
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
        let comatrix = self.comatrix();
        // Row 0 expansion reusing the cofactors already computed.
        let det = (0..4).fold(T::ZERO, |acc, col| acc + self.get(0, col) * comatrix.get(0, col));
        if det.abs() <= T::SINGULAR_EPSILON {
            debug!(determinant = %det, "Mat4 inversion rejected: singular");
            return Err(singular(det));
        }
        Ok(comatrix.transposed().scaled(T::ONE / det))
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
        for col in 0..4 {
            for row in (col + 1)..4 {
                self.data.swap(col * 4 + row, row * 4 + col);
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

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `self` is on the left, `rhs` on the right; applied to a vector the
    /// product transforms by `rhs` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [T::ZERO; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = T::ZERO;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::from_cols_array(out)
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let (x, y, z) = (point.x(), point.y(), point.z());
        let row = |r| self.get(r, 0) * x + self.get(r, 1) * y + self.get(r, 2) * z + self.get(r, 3);
        Vec3::new(row(0), row(1), row(2))
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        let (x, y, z) = (direction.x(), direction.y(), direction.z());
        let row = |r| self.get(r, 0) * x + self.get(r, 1) * y + self.get(r, 2) * z;
        Vec3::new(row(0), row(1), row(2))
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
    pub fn cast<U: Scalar>(&self) -> Mat4<U> {
        Mat4::from_cols_array(self.data.map(|v| U::from_f64(v.to_f64())))
    }
}

/// The three indices in `0..4` other than `skip`, ascending.
fn others(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl<T> From<[T; 16]> for Mat4<T> {
    fn from(value: [T; 16]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Add for Mat4<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Mat4<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<T: Scalar> Div<T> for Mat4<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Mat4 division by zero ignored");
            return self;
        }
        Self::from_cols_array(self.data.map(|v| v / rhs))
    }
}

impl<T: Scalar> Neg for Mat4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scaled(T::NEG_ONE)
    }
}

impl<T: Scalar> AddAssign for Mat4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Mat4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Mat4<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Mat4<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Mat4<$t>> for $t {
                type Output = Mat4<$t>;
                fn mul(self, rhs: Mat4<$t>) -> Mat4<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);
