// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_math::{Angled, Mat2d, Mat3d, Mat4f, Quatd, Vec2f, Vec3d};

#[test]
fn vectors_encode_as_component_arrays() {
    let v = Vec3d::new(1.0, -2.5, 3.0);
    let json = serde_json::to_string(&v).expect("serialize");
    assert_eq!(json, r#"{"data":[1.0,-2.5,3.0]}"#);
    let back: Vec3d = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, v);

    let p = Vec2f::new(0.5, 4.0);
    let back: Vec2f = serde_json::from_str(&serde_json::to_string(&p).expect("serialize"))
        .expect("deserialize");
    assert_eq!(back, p);
}

#[test]
fn matrices_encode_column_major_storage() {
    let m = Mat2d::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&m).expect("serialize");
    assert_eq!(json, r#"{"data":[1.0,3.0,2.0,4.0]}"#);
    assert_eq!(serde_json::from_str::<Mat2d>(&json).expect("deserialize"), m);

    let m3 = Mat3d::rotate_y(30.0);
    let back: Mat3d = serde_json::from_str(&serde_json::to_string(&m3).expect("serialize"))
        .expect("deserialize");
    assert_eq!(back, m3);

    let m4 = Mat4f::translation(1.0, 2.0, 3.0);
    let back: Mat4f = serde_json::from_str(&serde_json::to_string(&m4).expect("serialize"))
        .expect("deserialize");
    assert_eq!(back, m4);
}

#[test]
fn quaternion_encodes_scalar_first() {
    let q = Quatd::new(0.5, 0.5, -0.5, 0.5);
    let json = serde_json::to_string(&q).expect("serialize");
    assert_eq!(json, r#"{"data":[0.5,0.5,-0.5,0.5]}"#);
    assert_eq!(serde_json::from_str::<Quatd>(&json).expect("deserialize"), q);
}

#[test]
fn angle_encodes_radians() {
    let a = Angled::from_radians(1.25);
    let json = serde_json::to_string(&a).expect("serialize");
    assert_eq!(json, r#"{"radians":1.25}"#);
    assert_eq!(serde_json::from_str::<Angled>(&json).expect("deserialize"), a);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(serde_json::from_str::<Vec3d>(r#"{"data":[1.0,2.0]}"#).is_err());
    assert!(serde_json::from_str::<Quatd>(r#"{"w":1.0}"#).is_err());
}
