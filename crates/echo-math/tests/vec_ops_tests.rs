// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;

use echo_math::{Angled, MathError, Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f};

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3f::new(1.0, -2.0, 0.5);
    let b = Vec3f::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
    assert_eq!((a / 2.0).to_array(), [0.5, -1.0, 0.25]);

    let p = Vec2d::new(1.0, 2.0);
    assert_eq!((p + Vec2d::ONE).to_array(), [2.0, 3.0]);
    assert_eq!((3.0 * p).to_array(), [3.0, 6.0]);
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec3f::new(1.0, 2.0, 3.0);
    v += Vec3f::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3f::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    v /= 0.5;
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
}

#[test]
fn division_by_zero_is_a_no_op() {
    let v = Vec3d::new(1.0, -2.0, 3.0);
    assert_eq!((v / 0.0).to_array(), v.to_array());
    let mut w = Vec2f::new(4.0, 5.0);
    w /= 0.0;
    assert_eq!(w.to_array(), [4.0, 5.0]);
    assert_eq!(v.checked_div(0.0), Err(MathError::ZeroDivisor));
    assert_eq!(v.checked_div(2.0), Ok(Vec3d::new(0.5, -1.0, 1.5)));
}

#[test]
fn scalar_division_is_exact_per_component() {
    // 49 * (1/49) rounds below one; a true quotient does not.
    let v = Vec3d::new(49.0, 49.0, 49.0) / 49.0;
    assert_eq!(v.to_array(), [1.0, 1.0, 1.0]);
    let mut w = Vec2d::new(49.0, 98.0);
    w /= 49.0;
    assert_eq!(w.to_array(), [1.0, 2.0]);
}

#[test]
fn direction_constants() {
    assert_eq!(Vec3f::RIGHT.to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(Vec3f::LEFT.to_array(), [-1.0, 0.0, 0.0]);
    assert_eq!(Vec3f::UP.to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(Vec3f::DOWN.to_array(), [0.0, -1.0, 0.0]);
    assert_eq!(Vec3f::FORWARD.to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(Vec3f::BACKWARD.to_array(), [0.0, 0.0, -1.0]);
    assert_eq!(Vec2f::DOWN.to_array(), [0.0, -1.0]);
    assert_eq!(Vec3d::ZERO + Vec3d::ONE, Vec3d::splat(1.0));
}

#[test]
fn dot_cross_and_metrics() {
    let a = Vec3d::new(1.0, 2.0, 3.0);
    let b = Vec3d::new(4.0, -5.0, 6.0);
    assert_eq!(a.dot(&b), 12.0);
    assert_eq!(Vec3::dot(&a, &b), b.dot(&a));
    assert_eq!(a.cross(&b), Vec3d::new(27.0, 6.0, -13.0));
    assert_eq!(b.cross(&a), -a.cross(&b));
    assert_eq!(Vec3d::UNIT_Y.cross(&Vec3d::UNIT_Z), Vec3d::UNIT_X);

    let p = Vec3d::new(3.0, 4.0, 0.0);
    assert_eq!(p.length(), 5.0);
    assert_eq!(p.length_squared(), 25.0);
    assert_eq!(Vec3d::ZERO.distance(&p), 5.0);
    assert_eq!(p.distance_squared(&Vec3d::ZERO), 25.0);
    assert_eq!(Vec2d::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Vec2::dot(&Vec2d::new(1.0, 2.0), &Vec2d::new(3.0, 4.0)), 11.0);
}

#[test]
fn normalize_trio() {
    let mut v = Vec3d::new(0.0, 3.0, 4.0);
    v.normalize();
    assert_eq!(v, Vec3d::new(0.0, 0.6, 0.8));
    assert!((v.length() - 1.0).abs() < 1e-12);

    let mut zero = Vec3d::ZERO;
    zero.normalize();
    assert_eq!(zero.to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(Vec2d::ZERO.normalized().to_array(), [0.0, 0.0]);
    assert_eq!(Vec3d::ZERO.try_normalized(), Err(MathError::DegenerateVector));
    assert_eq!(Vec2f::new(0.0, -2.0).try_normalized(), Ok(Vec2f::new(0.0, -1.0)));
}

#[test]
fn lerp_and_move_towards() {
    let a = Vec3d::ZERO;
    let b = Vec3d::new(10.0, -10.0, 0.0);
    assert_eq!(a.lerp(&b, 0.25), Vec3d::new(2.5, -2.5, 0.0));
    assert_eq!(a.lerp(&b, 3.0), b);
    assert_eq!(a.lerp(&b, -1.0), a);
    assert_eq!(a.lerp_unclamped(&b, 2.0), Vec3d::new(20.0, -20.0, 0.0));

    let target = Vec3d::new(0.0, 0.0, 10.0);
    assert_eq!(a.move_towards(&target, 4.0), Vec3d::new(0.0, 0.0, 4.0));
    assert_eq!(a.move_towards(&target, 10.0), target);
    assert_eq!(a.move_towards(&target, 100.0), target);
    assert_eq!(target.move_towards(&target, 1.0), target);
    assert_eq!(a.move_towards(&target, -2.0), Vec3d::new(0.0, 0.0, -2.0));

    let p = Vec2d::new(1.0, 1.0);
    assert_eq!(p.move_towards(&Vec2d::new(1.0, 5.0), 1.5), Vec2d::new(1.0, 2.5));
}

#[test]
fn angles_between_and_from_angle() {
    let a = Vec3d::UNIT_X.angle_to(&Vec3d::new(0.0, 5.0, 0.0));
    assert!((a.as_radians() - FRAC_PI_2).abs() < 1e-12);
    let parallel = Vec3d::UNIT_Z.angle_to(&Vec3d::new(0.0, 0.0, 3.0));
    assert!(parallel.as_radians().abs() < 1e-12);

    let dir = Vec2d::from_angle(Angled::from_degrees(90.0));
    assert_eq!(dir, Vec2d::UNIT_Y);
    assert_eq!(Vec2d::from_angle(Angled::ZERO), Vec2d::UNIT_X);
}

#[test]
fn swizzles_and_conversions() {
    let v = Vec3f::new(1.0, 2.0, 3.0);
    assert_eq!(v.zyx().to_array(), [3.0, 2.0, 1.0]);
    assert_eq!(v.xxz().to_array(), [1.0, 1.0, 3.0]);
    assert_eq!(v.yz().to_array(), [2.0, 3.0]);
    assert_eq!(v.truncate().to_array(), [1.0, 2.0]);

    let p = Vec2f::new(5.0, 6.0);
    assert_eq!(p.yx().to_array(), [6.0, 5.0]);
    assert_eq!(p.extend(7.0).to_array(), [5.0, 6.0, 7.0]);
    assert_eq!(Vec3f::from(p).to_array(), [5.0, 6.0, 0.0]);
    assert_eq!(Vec2f::from(v).to_array(), [1.0, 2.0]);
    assert_eq!(Vec3f::from([9.0, 8.0, 7.0]).to_array(), [9.0, 8.0, 7.0]);
    assert_eq!(Vec3f::from_vec2(p, 1.0).to_array(), [5.0, 6.0, 1.0]);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn indexing_clamps_out_of_range() {
    let mut v = Vec3f::new(1.0, 2.0, 3.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[2], 3.0);
    assert_eq!(v[7], 3.0);
    v[9] = 10.0;
    assert_eq!(v.z(), 10.0);
    v.set_x(-1.0);
    v.set_y(-2.0);
    assert_eq!(v.to_array(), [-1.0, -2.0, 10.0]);

    let p = Vec2f::new(1.0, 2.0);
    assert_eq!(p[5], 2.0);
}

#[test]
fn equality_is_approximate() {
    let a = Vec3f::new(1.0, 1.0, 1.0);
    assert_eq!(a, Vec3f::new(1.0 + 1e-6, 1.0, 1.0 - 1e-6));
    assert_ne!(a, Vec3f::new(1.0 + 1e-3, 1.0, 1.0));
    assert!(a.abs_diff_eq(&Vec3f::new(1.01, 1.0, 1.0), 0.02));
    assert!(!a.abs_diff_eq(&Vec3f::new(1.05, 1.0, 1.0), 0.02));
}

#[test]
fn precision_cast() {
    let v = Vec3d::new(0.5, -1.25, 3.0);
    let f: Vec3f = v.cast();
    assert_eq!(f.to_array(), [0.5, -1.25, 3.0]);
    let back: Vec2d = Vec2f::new(0.25, 8.0).cast();
    assert_eq!(back.to_array(), [0.25, 8.0]);
}
