// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use echo_math::{Angled, Mat3d, Mat4d, Quatd, Vec2d, Vec3d};

// Seeds are pinned so a failure replays identically on every machine. Set
// PROPTEST_SEED or edit SEED_BYTES to explore other cases locally.
const SEED_BYTES: [u8; 32] = [
    0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0_f64..100.0
}

fn vec3() -> impl Strategy<Value = Vec3d> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3d::new(x, y, z))
}

fn unit_axis() -> impl Strategy<Value = Vec3d> {
    vec3().prop_filter("non-degenerate axis", |v| v.length() > 1e-3)
}

fn rotation() -> impl Strategy<Value = Quatd> {
    (unit_axis(), -360.0_f64..360.0).prop_map(|(axis, deg)| Quatd::from_axis_angle(axis, deg))
}

#[test]
fn normalized_vectors_have_unit_length() {
    runner()
        .run(&unit_axis(), |v| {
            prop_assert!((v.normalized().length() - 1.0).abs() < 1e-9);
            let flat = Vec2d::new(v.x(), v.y());
            if flat.length() > 1e-6 {
                prop_assert!((flat.normalized().length() - 1.0).abs() < 1e-9);
            }
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn cross_product_is_orthogonal_and_anticommutative() {
    runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            let c = a.cross(&b);
            let scale = a.length() * b.length() * (1.0 + c.length());
            prop_assert!(c.dot(&a).abs() <= 1e-9 * scale);
            prop_assert!(c.dot(&b).abs() <= 1e-9 * scale);
            prop_assert!((c + b.cross(&a)).abs_diff_eq(&Vec3d::ZERO, 1e-9));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn normalized_angles_land_in_one_turn() {
    let strategy = -1.0e4_f64..1.0e4;
    runner()
        .run(&strategy, |rad| {
            let r = Angled::from_radians(rad).normalized().as_radians();
            prop_assert!((0.0..core::f64::consts::TAU).contains(&r), "{rad} -> {r}");
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn short_lerp_never_travels_more_than_half_a_turn() {
    let strategy = (-720.0_f64..720.0, -720.0_f64..720.0);
    runner()
        .run(&strategy, |(a, b)| {
            let start = Angled::from_degrees(a);
            let end = Angled::short_lerp_degrees(a, b, 1.0);
            let travelled = (end - start).as_degrees().abs();
            prop_assert!(travelled <= 180.0 + 1e-9, "{a} -> {b}: {travelled}");
            // Landing point is the same direction as the requested end.
            let diff = Angled::from_degrees(b) - end;
            let wrapped = diff.normalized().as_degrees();
            prop_assert!(wrapped < 1e-6 || wrapped > 360.0 - 1e-6);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn matrix_times_inverse_is_identity() {
    let entries = prop::array::uniform9(-10.0_f64..10.0);
    runner()
        .run(&entries, |cols| {
            let m = Mat3d::from_cols_array(cols);
            prop_assume!(m.determinant().abs() > 1e-3);
            let inv = m.inverted().expect("non-singular");
            prop_assert!((m * inv).abs_diff_eq(&Mat3d::IDENTITY, 1e-6));
            prop_assert!((inv * m).abs_diff_eq(&Mat3d::IDENTITY, 1e-6));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn affine_inverse_undoes_transform() {
    let strategy = (rotation(), vec3(), vec3());
    runner()
        .run(&strategy, |(q, t, p)| {
            let m = Mat4d::translation(t.x(), t.y(), t.z()) * q.to_mat4();
            let inv = m.inverted().expect("rigid transforms are invertible");
            let back = inv.transform_point(&m.transform_point(&p));
            prop_assert!(back.abs_diff_eq(&p, 1e-8));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn transpose_is_an_involution() {
    let entries = prop::array::uniform16(-10.0_f64..10.0);
    runner()
        .run(&entries, |cols| {
            let m = Mat4d::from_cols_array(cols);
            prop_assert_eq!(m.transposed().transposed(), m);
            let mut t = m;
            t.transpose().transpose();
            prop_assert_eq!(t, m);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn rotation_preserves_length_and_matches_matrix() {
    runner()
        .run(&(rotation(), vec3()), |(q, p)| {
            let rotated = q.rotate_point(&p);
            prop_assert!((rotated.length() - p.length()).abs() < 1e-9);
            prop_assert!(q.to_mat4().transform_point(&p).abs_diff_eq(&rotated, 1e-9));
            let back = q.conjugated().rotate_point(&rotated);
            prop_assert!(back.abs_diff_eq(&p, 1e-9));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn quaternion_product_composes_rotations() {
    runner()
        .run(&(rotation(), rotation(), vec3()), |(a, b, p)| {
            let composed = (a * b).rotate_point(&p);
            let sequential = a.rotate_point(&b.rotate_point(&p));
            prop_assert!(composed.abs_diff_eq(&sequential, 1e-8));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn euler_round_trip_away_from_gimbal_lock() {
    let strategy = (-85.0_f64..85.0, -179.0_f64..179.0, -179.0_f64..179.0);
    runner()
        .run(&strategy, |(pitch, yaw, roll)| {
            let angles = Vec3d::new(pitch, yaw, roll);
            let recovered = Quatd::from_euler(&angles).to_euler();
            prop_assert!(recovered.abs_diff_eq(&angles, 1e-6), "{angles:?} -> {recovered:?}");
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn metric_identities_hold() {
    runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            prop_assert!((a.dot(&a) - a.length_squared()).abs() <= 1e-9);
            prop_assert_eq!(a.cross(&a), Vec3d::ZERO);
            prop_assert_eq!(a.move_towards(&a, 3.0), a);
            prop_assert_eq!(a.move_towards(&b, 0.0), a);
            prop_assert_eq!(a.move_towards(&b, a.distance(&b)), b);
            prop_assert_eq!(Mat3d::IDENTITY * a, a);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn short_lerp_from_an_angle_to_itself_stays_put() {
    let strategy = (-1.0e3_f64..1.0e3, -2.0_f64..2.0);
    runner()
        .run(&strategy, |(rad, t)| {
            let a = Angled::from_radians(rad);
            prop_assert_eq!(Angled::short_lerp(a, a, t), a);
            let round_trip = Angled::from_degrees(a.as_degrees()).as_radians();
            prop_assert!((round_trip - rad).abs() <= 1e-12 * (1.0 + rad.abs()));
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}

#[test]
fn quaternion_identity_and_conjugate_laws() {
    let components = prop::array::uniform4(-10.0_f64..10.0);
    runner()
        .run(&components, |c| {
            let q = Quatd::from(c);
            prop_assert_eq!(Quatd::IDENTITY * q, q);
            prop_assert_eq!(q * Quatd::IDENTITY, q);
            prop_assert_eq!(q.conjugated().conjugated(), q);
            Ok(())
        })
        .expect("proptest with pinned seed should complete");
}
