use thiserror::Error;

use crate::axis::{Axis, RotationMode};
use crate::math::{AngleUnit, Mat3, Real, Rot3, Vec3};

/// Errors raised by [`TiltStage`] construction and angle mutation.
#[derive(Debug, Error, PartialEq)]
pub enum StageError {
    #[error("a tilt stage needs at least one axis")]
    NoAxes,
    #[error("expected {expected} angles, got {got}")]
    AngleCount { expected: usize, got: usize },
    #[error("angle for axis {axis} is not finite")]
    NonFiniteAngle { axis: usize },
    #[error("angle {angle} for axis {axis} is outside [{min}, {max}]")]
    AngleOutOfRange {
        axis: usize,
        angle: Real,
        min: Real,
        max: Real,
    },
    #[error("stage topology is fixed, axes cannot be added after construction")]
    FixedTopology,
}

/// An ordered stack of tilt axes.
///
/// The first axis always composes extrinsically regardless of the mode it was
/// created with; this is a fixed rule of the kinematic chain. Axes are
/// value-copied in at construction, so mutating a caller's [`Axis`] afterwards
/// never affects the stage.
///
/// The composite rotation is recomputed from the axis list on every read
/// (O(axes) per read), so it is always consistent with the latest mutation.
/// Angle vectors are validated as a whole before any axis is mutated.
///
/// There is no internal locking: a stage driven by a solver or observed by a
/// UI must be accessed from one context at a time.
#[derive(Debug, Clone)]
pub struct TiltStage {
    axes: Vec<Axis>,
    fixed: bool,
}

impl TiltStage {
    /// A stage with the given axis chain, in order.
    pub fn new(axes: &[Axis]) -> Result<Self, StageError> {
        Self::build(axes, false)
    }

    /// A stage whose axis chain cannot be changed after construction.
    pub fn fixed(axes: &[Axis]) -> Result<Self, StageError> {
        Self::build(axes, true)
    }

    fn build(axes: &[Axis], fixed: bool) -> Result<Self, StageError> {
        if axes.is_empty() {
            return Err(StageError::NoAxes);
        }
        let mut axes = axes.to_vec();
        axes[0].force_extrinsic();
        Ok(Self { axes, fixed })
    }

    /// Append an axis to the chain.
    pub fn add_axis(&mut self, axis: Axis) -> Result<(), StageError> {
        if self.fixed {
            return Err(StageError::FixedTopology);
        }
        self.axes.push(axis);
        Ok(())
    }

    /// The axes of the stage, in composition order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of axes in the chain.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Current angle of each axis, radians, in axis order.
    pub fn angles(&self) -> Vec<Real> {
        self.axes.iter().map(Axis::angle).collect()
    }

    /// Construction-time angle of each axis, radians, in axis order.
    pub fn initial_angles(&self) -> Vec<Real> {
        self.axes.iter().map(Axis::initial_angle).collect()
    }

    /// Validate a whole angle vector, then commit it.
    ///
    /// Checks count, finiteness and per-axis range before mutating anything;
    /// on failure no axis angle changes.
    pub fn set_angles(&mut self, angles: &[Real]) -> Result<(), StageError> {
        self.check_angles(angles)?;
        for (axis, &angle) in self.axes.iter_mut().zip(angles) {
            axis.set_angle(angle);
        }
        Ok(())
    }

    fn check_angles(&self, angles: &[Real]) -> Result<(), StageError> {
        if angles.len() != self.axes.len() {
            return Err(StageError::AngleCount {
                expected: self.axes.len(),
                got: angles.len(),
            });
        }
        for (i, (&angle, axis)) in angles.iter().zip(&self.axes).enumerate() {
            if !angle.is_finite() {
                return Err(StageError::NonFiniteAngle { axis: i });
            }
            if angle < axis.min() || angle > axis.max() {
                return Err(StageError::AngleOutOfRange {
                    axis: i,
                    angle,
                    min: axis.min(),
                    max: axis.max(),
                });
            }
        }
        Ok(())
    }

    /// Set every axis to the given absolute angle.
    pub fn rotate_to(&mut self, angles: &[Real], unit: AngleUnit) -> Result<(), StageError> {
        let angles: Vec<Real> = angles.iter().map(|&a| unit.to_radians(a)).collect();
        self.set_angles(&angles)
    }

    /// Rotate each axis by a delta from its current angle.
    ///
    /// The delta vector is checked for count and finiteness; range is checked
    /// on the resulting absolute angles, not on the deltas themselves.
    pub fn rotate(&mut self, deltas: &[Real], unit: AngleUnit) -> Result<(), StageError> {
        if deltas.len() != self.axes.len() {
            return Err(StageError::AngleCount {
                expected: self.axes.len(),
                got: deltas.len(),
            });
        }
        for (i, &delta) in deltas.iter().enumerate() {
            if !delta.is_finite() {
                return Err(StageError::NonFiniteAngle { axis: i });
            }
        }
        let angles: Vec<Real> = deltas
            .iter()
            .zip(&self.axes)
            .map(|(&delta, axis)| axis.angle() + unit.to_radians(delta))
            .collect();
        self.set_angles(&angles)
    }

    /// Return every axis to the angle it had when the stage was built.
    ///
    /// Assigns the recorded initial angles directly, so this cannot fail even
    /// for an axis constructed with an out-of-range initial angle.
    pub fn reset_rotation(&mut self) {
        for axis in &mut self.axes {
            let initial = axis.initial_angle();
            axis.set_angle(initial);
        }
    }

    /// Composite rotation of the whole chain.
    ///
    /// Starts from the first axis's rotation and folds the rest in list order:
    /// intrinsic axes post-multiply (rotated body frame), extrinsic axes
    /// pre-multiply (fixed lab frame).
    pub fn composite_rotation(&self) -> Rot3 {
        let mut r = self.axes[0].rotation();
        for axis in &self.axes[1..] {
            r = match axis.mode() {
                RotationMode::Intrinsic => r * axis.rotation(),
                RotationMode::Extrinsic => axis.rotation() * r,
            };
        }
        r
    }

    /// The composite rotation as an orthonormal 3×3 matrix.
    pub fn rotation_matrix(&self) -> Mat3 {
        self.composite_rotation().into_inner()
    }

    /// Map a sample-frame vector into the lab frame.
    pub fn sample_to_lab(&self, v: &Vec3) -> Vec3 {
        self.composite_rotation() * v
    }

    /// Map a lab-frame vector into the sample frame.
    pub fn lab_to_sample(&self, v: &Vec3) -> Vec3 {
        self.composite_rotation().inverse() * v
    }
}
