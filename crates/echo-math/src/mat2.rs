// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::{debug, trace};

use crate::{MathError, MathResult, Scalar, Vec2};

/// Column‑major 2×2 matrix.
///
/// ```text
/// ( m[0] m[2] )
/// ( m[1] m[3] )
/// ```
///
/// `Default` is the zero matrix; use [`Mat2::identity`] explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2<T> {
    data: [T; 4],
}

impl<T: Scalar> Mat2<T> {
    const DIM: usize = 2;

    /// All-zero matrix.
    pub const ZERO: Self = Self::from_cols_array([T::ZERO; 4]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(T::ONE);

    /// Creates a matrix from elements listed row by row, as the matrix is
    /// written on paper. Storage is column-major.
    #[rustfmt::skip]
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            data: [
                m00, m10, // col 0
                m01, m11, // col 1
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn from_cols_array(data: [T; 4]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its two columns.
    pub fn from_cols(c0: Vec2<T>, c1: Vec2<T>) -> Self {
        Self::from_cols_array([c0.x(), c0.y(), c1.x(), c1.y()])
    }

    /// Returns the column-major storage.
    pub fn to_cols_array(self) -> [T; 4] {
        self.data
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns a matrix with `value` on the diagonal and zeros elsewhere.
    pub const fn diagonal(value: T) -> Self {
        Self::new(value, T::ZERO, T::ZERO, value)
    }

    /// 2D counter-clockwise rotation by `angle_deg` degrees.
    #[rustfmt::skip]
    pub fn rotate_z(angle_deg: T) -> Self {
        let (s, c) = (angle_deg * T::DEG_TO_RAD).sin_cos();
        Self::new(
            c, -s, //
            s, c,
        )
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

    /// Column `index`, or [`MathError::OutOfRange`].
    pub fn col(&self, index: usize) -> MathResult<Vec2<T>> {
        check_index(0, index, Self::DIM)?;
        Ok(Vec2::new(self.get(0, index), self.get(1, index)))
    }

    /// Row `index`, or [`MathError::OutOfRange`].
    pub fn row(&self, index: usize) -> MathResult<Vec2<T>> {
        check_index(index, 0, Self::DIM)?;
        Ok(Vec2::new(self.get(index, 0), self.get(index, 1)))
    }

    /// `ad - bc`.
    pub fn determinant(&self) -> T {
        self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)
    }

    /// Matrix of signed minors.
    #[rustfmt::skip]
    pub fn comatrix(&self) -> Self {
        Self::new(
            self.get(1, 1), -self.get(1, 0), //
            -self.get(0, 1), self.get(0, 0),
        )
    }

    /// Transposed comatrix.
    pub fn adjugate(&self) -> Self {
        self.comatrix().transposed()
    }

    /// Inverse as adjugate over determinant, without a singularity check.
    ///
    /// A singular input yields non-finite elements.
    pub fn inverted_unchecked(&self) -> Self {
        let inv_det = T::ONE / self.determinant();
        self.adjugate().scaled(inv_det)
    }

    /// Inverse, or [`MathError::SingularMatrix`] when
    /// `|det| <= T::SINGULAR_EPSILON`.
    pub fn inverted(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det.abs() <= T::SINGULAR_EPSILON {
            debug!(determinant = %det, "Mat2 inversion rejected: singular");
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
    #[rustfmt::skip]
    pub fn transposed(&self) -> Self {
        Self::new(
            self.get(0, 0), self.get(1, 0), //
            self.get(0, 1), self.get(1, 1),
        )
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        self.data.swap(1, 2);
        self
    }

    fn scaled(&self, s: T) -> Self {
        let mut out = *self;
        for v in &mut out.data {
            *v *= s;
        }
        out
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
        let mut out = [T::ZERO; 4];
        for row in 0..2 {
            for col in 0..2 {
                out[col * 2 + row] =
                    self.get(row, 0) * rhs.get(0, col) + self.get(row, 1) * rhs.get(1, col);
            }
        }
        Self::from_cols_array(out)
    }

    /// Matrix-vector product.
    pub fn mul_vec2(&self, v: &Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.get(0, 0) * v.x() + self.get(0, 1) * v.y(),
            self.get(1, 0) * v.x() + self.get(1, 1) * v.y(),
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
    pub fn cast<U: Scalar>(&self) -> Mat2<U> {
        Mat2::from_cols_array(self.data.map(|v| U::from_f64(v.to_f64())))
    }
}

pub(crate) fn check_index(row: usize, col: usize, dim: usize) -> MathResult<()> {
    if row < dim && col < dim {
        Ok(())
    } else {
        Err(MathError::OutOfRange { row, col, dim })
    }
}

pub(crate) fn singular<T: Scalar>(det: T) -> MathError {
    MathError::SingularMatrix {
        determinant: det.to_f64(),
        threshold: T::SINGULAR_EPSILON.to_f64(),
    }
}

impl<T> From<[T; 4]> for Mat2<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Add for Mat2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Mat2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Mul for Mat2<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Mat2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<T: Scalar> Mul<Vec2<T>> for Mat2<T> {
    type Output = Vec2<T>;
    fn mul(self, rhs: Vec2<T>) -> Vec2<T> {
        self.mul_vec2(&rhs)
    }
}

impl<T: Scalar> Div<T> for Mat2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        if rhs == T::ZERO {
            trace!("Mat2 division by zero ignored");
            return self;
        }
        Self::from_cols_array(self.data.map(|v| v / rhs))
    }
}

impl<T: Scalar> Neg for Mat2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scaled(T::NEG_ONE)
    }
}

impl<T: Scalar> AddAssign for Mat2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Mat2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Mat2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Mat2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Mat2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Mat2<$t>> for $t {
                type Output = Mat2<$t>;
                fn mul(self, rhs: Mat2<$t>) -> Mat2<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);
