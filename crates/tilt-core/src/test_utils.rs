//! Verification oracles for the double-tilt goniometer transform.
//!
//! This module is public so test suites across the workspace can compare
//! [`TiltStage`] against independently derived references; it is not intended
//! for production use. The oracles are enumerated explicitly by the tests
//! that consume them, there is no registration mechanism.
//!
//! All four oracles compute the same physical move of a double-tilt holder:
//! a primary tilt about the lab x axis and a secondary tilt about the y axis
//! as carried by the starting primary tilt.

use std::f64::consts::PI;

use crate::axis::{Axis, RotationMode};
use crate::math::{AngleUnit, Mat3, Real, Rot3, Vec3};
use crate::stage::TiltStage;

/// A double-tilt holder position (primary x tilt, secondary y tilt), radians.
#[derive(Debug, Clone, Copy)]
pub struct GonioPosition {
    pub x_tilt: Real,
    pub y_tilt: Real,
}

impl GonioPosition {
    pub fn new(x_tilt: Real, y_tilt: Real, unit: AngleUnit) -> Self {
        Self {
            x_tilt: unit.to_radians(x_tilt),
            y_tilt: unit.to_radians(y_tilt),
        }
    }
}

/// Decompose a move between two holder positions into the starting primary
/// tilt `alpha_0`, the primary travel `alpha` and the secondary tilt `beta`.
fn move_angles(new: GonioPosition, old: GonioPosition) -> (Real, Real, Real) {
    (old.x_tilt, new.x_tilt - old.x_tilt, new.y_tilt)
}

/// Explicit trigonometric double-tilt transform, written out entry by entry.
///
/// `T = T1·T2` with `T1` the primary tilt about lab x and `T2` the secondary
/// tilt about the carried y axis, i.e. `Rx(α₀)·Ry(β)·Rx(−α₀)` expanded.
pub fn two_axis_formula(new: GonioPosition, old: GonioPosition) -> Mat3 {
    let (alpha_0, alpha, beta) = move_angles(new, old);
    let (sa, ca) = alpha.sin_cos();
    let t1 = Mat3::new(
        1.0, 0.0, 0.0, //
        0.0, ca, -sa, //
        0.0, sa, ca,
    );

    let (s0, c0) = alpha_0.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let t2 = Mat3::new(
        cb,
        -sb * s0,
        sb * c0,
        sb * s0,
        c0 * c0 + s0 * s0 * cb,
        s0 * c0 * (1.0 - cb),
        -sb * c0,
        s0 * c0 * (1.0 - cb),
        s0 * s0 + c0 * c0 * cb,
    );

    t1 * t2
}

/// The same transform assembled from nalgebra's Euler-angle constructor:
/// `Rx(α + α₀) · Ry(β)·Rx(−α₀)`.
pub fn two_axis_euler(new: GonioPosition, old: GonioPosition) -> Mat3 {
    let (alpha_0, alpha, beta) = move_angles(new, old);
    let left = Rot3::from_euler_angles(alpha + alpha_0, 0.0, 0.0);
    let right = Rot3::from_euler_angles(-alpha_0, beta, 0.0);
    (left * right).into_inner()
}

fn carried_y(alpha_0: Real) -> Vec3 {
    Rot3::from_euler_angles(alpha_0, 0.0, 0.0) * Vec3::y()
}

fn wide_axis(direction: Vec3, mode: RotationMode) -> Axis {
    Axis::new(direction, -PI, PI, AngleUnit::Radians, mode)
}

/// The same transform as a two-axis extrinsic stage chain: secondary axis
/// first, primary x axis pre-multiplied on top.
pub fn two_axis_stage_extrinsic(new: GonioPosition, old: GonioPosition) -> Mat3 {
    let (alpha_0, alpha, beta) = move_angles(new, old);
    let axes = [
        wide_axis(carried_y(alpha_0), RotationMode::Extrinsic),
        wide_axis(Vec3::x(), RotationMode::Extrinsic),
    ];
    let mut stage = TiltStage::new(&axes).expect("two axes");
    stage
        .rotate_to(&[beta, alpha], AngleUnit::Radians)
        .expect("angles within ±π");
    stage.rotation_matrix()
}

/// The same transform as an intrinsic chain: primary x axis first, secondary
/// axis composed in the rotated frame.
pub fn two_axis_stage_intrinsic(new: GonioPosition, old: GonioPosition) -> Mat3 {
    let (alpha_0, alpha, beta) = move_angles(new, old);
    let axes = [
        wide_axis(Vec3::x(), RotationMode::Extrinsic),
        wide_axis(carried_y(alpha_0), RotationMode::Intrinsic),
    ];
    let mut stage = TiltStage::new(&axes).expect("two axes");
    stage
        .rotate_to(&[alpha, beta], AngleUnit::Radians)
        .expect("angles within ±π");
    stage.rotation_matrix()
}

/// Largest absolute entry difference between two matrices.
pub fn mat_diff(a: &Mat3, b: &Mat3) -> Real {
    (a - b).abs().max()
}
