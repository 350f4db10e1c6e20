//! Derivative-free tilt-angle optimization for `tiltstage-rs`.
//!
//! The alignment objective is an opaque reduction over a field of body
//! orientations, so no Jacobians are available. This crate provides:
//! - a box-constrained Nelder-Mead minimizer ([`minimize`]),
//! - the [`MisalignmentField`] capability trait the solver evaluates through,
//!   with [`OrientationField`] as the stock implementation,
//! - the tilt-angle search itself ([`find_tilt_angles`]).

pub mod align;
pub mod field;
pub mod nelder_mead;

pub use align::{find_tilt_angles, AlignError, AlignOptions, AlignResult, ObjectivePolicy};
pub use field::{MisalignmentField, OrientationField};
pub use nelder_mead::{minimize, NelderMeadOptions, NelderMeadResult};
