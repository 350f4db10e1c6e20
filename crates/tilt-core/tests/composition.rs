//! Composite-rotation contracts and cross-oracle agreement.

use std::f64::consts::PI;

use nalgebra::{UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tilt_core::test_utils::{
    mat_diff, two_axis_euler, two_axis_formula, two_axis_stage_extrinsic,
    two_axis_stage_intrinsic, GonioPosition,
};
use tilt_core::{AngleUnit, Axis, RotationMode, TiltStage, UnitVec3, Vec3};

fn wide(direction: Vec3, mode: RotationMode) -> Axis {
    Axis::new(direction, -PI, PI, AngleUnit::Radians, mode)
}

#[test]
fn ninety_ninety_maps_basis_vectors() {
    let axes = [
        wide(Vec3::x(), RotationMode::Extrinsic),
        wide(Vec3::y(), RotationMode::Intrinsic),
    ];
    let mut stage = TiltStage::new(&axes).unwrap();
    stage.rotate_to(&[90.0, 90.0], AngleUnit::Degrees).unwrap();

    let cases = [
        (Vec3::x(), Vec3::z()),
        (Vec3::y(), Vec3::x()),
        (Vec3::z(), Vec3::y()),
    ];
    for (lab, sample) in cases {
        let got = stage.lab_to_sample(&lab);
        assert!(
            (got - sample).norm() < 1e-6,
            "lab {lab:?} mapped to {got:?}, expected {sample:?}"
        );
    }
}

#[test]
fn frame_conversions_are_inverses() {
    let axes = [
        wide(Vec3::x(), RotationMode::Extrinsic),
        wide(Vec3::new(0.3, 1.0, -0.2), RotationMode::Intrinsic),
    ];
    let mut stage = TiltStage::new(&axes).unwrap();
    stage.rotate_to(&[0.6, -0.9], AngleUnit::Radians).unwrap();

    let v = Vec3::new(0.1, -2.0, 0.7);
    let round = stage.lab_to_sample(&stage.sample_to_lab(&v));
    assert!((round - v).norm() < 1e-12);
}

#[test]
fn intrinsic_first_axis_composes_like_extrinsic() {
    let marked_intrinsic = [
        wide(Vec3::x(), RotationMode::Intrinsic),
        wide(Vec3::y(), RotationMode::Intrinsic),
    ];
    let marked_extrinsic = [
        wide(Vec3::x(), RotationMode::Extrinsic),
        wide(Vec3::y(), RotationMode::Intrinsic),
    ];
    let mut a = TiltStage::new(&marked_intrinsic).unwrap();
    let mut b = TiltStage::new(&marked_extrinsic).unwrap();

    a.rotate_to(&[0.4, -1.1], AngleUnit::Radians).unwrap();
    b.rotate_to(&[0.4, -1.1], AngleUnit::Radians).unwrap();

    assert_eq!(a.rotation_matrix(), b.rotation_matrix());
}

#[test]
fn rotate_round_trip_restores_rotation() {
    let axes = [
        wide(Vec3::x(), RotationMode::Extrinsic),
        wide(Vec3::y(), RotationMode::Intrinsic),
        wide(Vec3::z(), RotationMode::Extrinsic),
    ];
    let mut stage = TiltStage::new(&axes).unwrap();
    stage.rotate_to(&[0.2, -0.5, 1.0], AngleUnit::Radians).unwrap();
    let start = stage.rotation_matrix();

    let delta = [0.7, 0.3, -1.2];
    let inverse: Vec<f64> = delta.iter().map(|d| -d).collect();
    stage.rotate(&delta, AngleUnit::Radians).unwrap();
    stage.rotate(&inverse, AngleUnit::Radians).unwrap();

    assert!(mat_diff(&stage.rotation_matrix(), &start) < 1e-9);
}

#[test]
fn double_tilt_oracles_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pos = |rng: &mut StdRng| {
            GonioPosition::new(
                rng.random_range(-30.0..30.0),
                rng.random_range(-30.0..30.0),
                AngleUnit::Degrees,
            )
        };
        let new = pos(&mut rng);
        let old = pos(&mut rng);

        let reference = two_axis_formula(new, old);
        let oracles = [
            ("euler", two_axis_euler(new, old)),
            ("extrinsic chain", two_axis_stage_extrinsic(new, old)),
            ("intrinsic chain", two_axis_stage_intrinsic(new, old)),
        ];
        for (name, matrix) in oracles {
            assert!(
                mat_diff(&reference, &matrix) < 1e-6,
                "{name} disagrees with the trigonometric formula:\n{reference}\n{matrix}"
            );
        }
    }
}

#[test]
fn random_three_axis_chains_match_quaternion_fold() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut directions = Vec::new();
        let mut modes = Vec::new();
        let mut axes = Vec::new();
        for _ in 0..3 {
            let dir = loop {
                let candidate = Vector3::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                );
                if candidate.norm() > 0.1 {
                    break candidate;
                }
            };
            let mode = if rng.random_bool(0.5) {
                RotationMode::Intrinsic
            } else {
                RotationMode::Extrinsic
            };
            directions.push(dir);
            modes.push(mode);
            axes.push(wide(dir, mode));
        }
        let mut stage = TiltStage::new(&axes).unwrap();
        let angles: Vec<f64> = (0..3).map(|_| rng.random_range(-1.5..1.5)).collect();
        stage.set_angles(&angles).unwrap();

        // Independent fold through unit quaternions; the first axis seeds the
        // fold, so its mode is irrelevant on both sides.
        let mut q = UnitQuaternion::from_axis_angle(
            &UnitVec3::new_normalize(directions[0]),
            angles[0],
        );
        for i in 1..3 {
            let qi = UnitQuaternion::from_axis_angle(
                &UnitVec3::new_normalize(directions[i]),
                angles[i],
            );
            q = match modes[i] {
                RotationMode::Intrinsic => q * qi,
                RotationMode::Extrinsic => qi * q,
            };
        }

        let via_quaternions = q.to_rotation_matrix().into_inner();
        assert!(mat_diff(&stage.rotation_matrix(), &via_quaternions) < 1e-6);
    }
}

#[test]
fn initial_angle_offsets_cancel_in_the_composite() {
    // Two stages with the same physical starting pose but different recorded
    // initial angles must produce the same transform for the same travel.
    let zeroed = [wide(Vec3::x(), RotationMode::Extrinsic)];
    let offset = [Axis::with_initial_angle(
        Vec3::x(),
        -PI,
        PI,
        0.8,
        AngleUnit::Radians,
        RotationMode::Extrinsic,
    )];
    let mut a = TiltStage::new(&zeroed).unwrap();
    let mut b = TiltStage::new(&offset).unwrap();

    a.rotate(&[0.25], AngleUnit::Radians).unwrap();
    b.rotate(&[0.25], AngleUnit::Radians).unwrap();

    assert!(mat_diff(&a.rotation_matrix(), &b.rotation_matrix()) < 1e-12);
}
