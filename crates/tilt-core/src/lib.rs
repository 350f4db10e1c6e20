//! Core geometry for a multi-axis sample tilt stage (goniometer).
//!
//! This crate contains:
//! - linear algebra type aliases ([`Real`], [`Vec3`], [`Rot3`], ...) and the
//!   [`AngleUnit`] flag,
//! - the single-axis model ([`Axis`]) and the ordered axis chain ([`TiltStage`]),
//! - serializable stage parameters ([`StageParams`]),
//! - independently derived double-tilt oracles for verification ([`test_utils`]).
//!
//! Rotation convention: the composite rotation `R` maps sample-frame vectors to
//! lab-frame vectors (`sample_to_lab(v) = R·v`, `lab_to_sample(v) = R⁻¹·v`).
//! Axes compose in list order, intrinsic axes by post-multiplication and
//! extrinsic axes by pre-multiplication; the first axis of a chain always
//! composes extrinsically.

/// Single tilt axis.
pub mod axis;
/// Linear algebra type aliases and angle units.
pub mod math;
/// Serializable stage parameters.
pub mod params;
/// Axis chains and composite rotations.
pub mod stage;
/// Verification oracles shared across workspace test suites.
pub mod test_utils;

pub use axis::{Axis, RotationMode};
pub use math::{AngleUnit, Mat3, Real, Rot3, UnitVec3, Vec3};
pub use params::{AxisParams, StageParams};
pub use stage::{StageError, TiltStage};
