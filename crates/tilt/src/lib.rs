//! High-level entry crate for the `tiltstage-rs` goniometer toolbox.
//!
//! A [`TiltStage`] is an ordered chain of [`Axis`] values with per-axis angle
//! limits; it exposes relative and absolute rotation, reset, and conversion
//! between the sample and lab frames. [`find_tilt_angles`] searches the axis
//! box for the angles that best align a body-fixed direction with a target
//! over a field of body orientations.
//!
//! ```
//! use tilt::{AngleUnit, Axis, RotationMode, TiltStage, Vec3};
//!
//! # fn main() -> Result<(), tilt::StageError> {
//! let axes = [
//!     Axis::new(Vec3::x(), -30.0, 30.0, AngleUnit::Degrees, RotationMode::Extrinsic),
//!     Axis::new(Vec3::y(), -20.0, 20.0, AngleUnit::Degrees, RotationMode::Intrinsic),
//! ];
//! let mut stage = TiltStage::new(&axes)?;
//! stage.rotate_to(&[10.0, 5.0], AngleUnit::Degrees)?;
//!
//! let beam = stage.lab_to_sample(&Vec3::z());
//! assert!((beam.norm() - 1.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! The member crates are also re-exported whole as [`core`] and [`optim`].

pub use tilt_core as core;
pub use tilt_optim as optim;

pub use tilt_core::{
    AngleUnit, Axis, AxisParams, Mat3, Real, Rot3, RotationMode, StageError, StageParams,
    TiltStage, UnitVec3, Vec3,
};
pub use tilt_optim::{
    find_tilt_angles, AlignError, AlignOptions, AlignResult, MisalignmentField, NelderMeadOptions,
    NelderMeadResult, ObjectivePolicy, OrientationField,
};
