// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! echo-math: generic linear algebra for games and graphics.
//!
//! Provides scalar helpers, [`Angle`], [`Vec2`]/[`Vec3`], column-major
//! [`Mat2`]/[`Mat3`]/[`Mat4`], and [`Quat`], all generic over [`Scalar`]
//! (`f32` or `f64`).
//!
//! Conventions shared by every type:
//! - Right-handed coordinates; `+Z` is forward, `+Y` is up.
//! - Matrices are stored column-major and multiply column vectors
//!   (`M * v`). Constructors taking loose elements read them row by row.
//! - Rotation factories and Euler angles take degrees; [`Angle`] and the
//!   scalar trig helpers work in radians.
//! - Plain operators never fail. Division by zero returns the operand
//!   unchanged and normalizing a zero vector is a no-op. The `checked_*`,
//!   `try_*`, and [`Mat4::inverted`]-style methods return [`MathResult`]
//!   instead.
//!
//! Every value type is `Copy` and free of interior mutability, so it is
//! `Send + Sync` whenever `T` is.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` for all
//! value types.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

pub mod scalar;

mod angle;
mod error;
mod mat2;
mod mat3;
mod mat4;
mod quat;
mod swizzle;
mod vec2;
mod vec3;

pub use angle::{Angle, AngleUnits};
pub use error::{MathError, MathResult};
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Single-precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Double-precision [`Vec2`].
pub type Vec2d = Vec2<f64>;
/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double-precision [`Vec3`].
pub type Vec3d = Vec3<f64>;
/// Single-precision [`Mat2`].
pub type Mat2f = Mat2<f32>;
/// Double-precision [`Mat2`].
pub type Mat2d = Mat2<f64>;
/// Single-precision [`Mat3`].
pub type Mat3f = Mat3<f32>;
/// Double-precision [`Mat3`].
pub type Mat3d = Mat3<f64>;
/// Single-precision [`Mat4`].
pub type Mat4f = Mat4<f32>;
/// Double-precision [`Mat4`].
pub type Mat4d = Mat4<f64>;
/// Single-precision [`Quat`].
pub type Quatf = Quat<f32>;
/// Double-precision [`Quat`].
pub type Quatd = Quat<f64>;
/// Single-precision [`Angle`].
pub type Anglef = Angle<f32>;
/// Double-precision [`Angle`].
pub type Angled = Angle<f64>;
