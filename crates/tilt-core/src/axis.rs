use serde::{Deserialize, Serialize};

use crate::math::{AngleUnit, Real, Rot3, UnitVec3, Vec3};

/// How an axis rotation composes into the stage chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Post-multiplied: the rotation is applied in the already-rotated (body)
    /// frame.
    Intrinsic,
    /// Pre-multiplied: the rotation is applied in the fixed lab frame.
    #[default]
    Extrinsic,
}

/// One mechanical rotation degree of freedom of a tilt stage.
///
/// The direction is expressed in the axis's own (pre-composition) reference
/// frame and normalized once at construction. Bounds and the starting angle
/// are converted to radians once; the supplied [`AngleUnit`] has no further
/// runtime significance.
///
/// The axis remembers the angle it was constructed with, and [`Axis::rotation`]
/// is measured relative to that starting angle. Two axes with different initial
/// angles but the same physical starting pose therefore produce identical
/// composite transforms.
///
/// An axis performs no range checks of its own; enforcing `min ≤ angle ≤ max`
/// is the owning [`TiltStage`](crate::TiltStage)'s job. `min ≤ initial_angle ≤ max`
/// is recommended but not enforced.
#[derive(Debug, Clone)]
pub struct Axis {
    direction: UnitVec3,
    min: Real,
    max: Real,
    angle: Real,
    initial_angle: Real,
    mode: RotationMode,
}

impl Axis {
    /// An axis starting at angle zero.
    pub fn new(direction: Vec3, min: Real, max: Real, unit: AngleUnit, mode: RotationMode) -> Self {
        Self::with_initial_angle(direction, min, max, 0.0, unit, mode)
    }

    /// An axis starting at the given angle, which becomes its reference angle.
    pub fn with_initial_angle(
        direction: Vec3,
        min: Real,
        max: Real,
        angle: Real,
        unit: AngleUnit,
        mode: RotationMode,
    ) -> Self {
        let angle = unit.to_radians(angle);
        Self {
            direction: UnitVec3::new_normalize(direction),
            min: unit.to_radians(min),
            max: unit.to_radians(max),
            angle,
            initial_angle: angle,
            mode,
        }
    }

    /// Unit direction of the axis.
    pub fn direction(&self) -> &UnitVec3 {
        &self.direction
    }

    /// Lower angle bound, radians.
    pub fn min(&self) -> Real {
        self.min
    }

    /// Upper angle bound, radians.
    pub fn max(&self) -> Real {
        self.max
    }

    /// Current angle, radians.
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// Angle recorded at construction time, radians.
    pub fn initial_angle(&self) -> Real {
        self.initial_angle
    }

    /// Composition mode of the axis.
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Rotation about the axis direction by the angle travelled since
    /// construction (`angle - initial_angle`).
    pub fn rotation(&self) -> Rot3 {
        Rot3::from_axis_angle(&self.direction, self.angle - self.initial_angle)
    }

    pub(crate) fn set_angle(&mut self, angle: Real) {
        self.angle = angle;
    }

    pub(crate) fn force_extrinsic(&mut self) {
        self.mode = RotationMode::Extrinsic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_are_converted_once_at_construction() {
        let axis = Axis::new(
            Vec3::x(),
            -10.0,
            10.0,
            AngleUnit::Degrees,
            RotationMode::Extrinsic,
        );
        assert!((axis.min() + 0.174_532_925_199_432_96).abs() < 1e-9);
        assert!((axis.max() - 0.174_532_925_199_432_96).abs() < 1e-9);
        assert_eq!(axis.angle(), 0.0);
    }

    #[test]
    fn rotation_is_relative_to_initial_angle() {
        let mut axis = Axis::with_initial_angle(
            Vec3::x(),
            -1.0,
            1.0,
            0.3,
            AngleUnit::Radians,
            RotationMode::Extrinsic,
        );
        assert_eq!(axis.rotation(), Rot3::identity());

        axis.set_angle(0.5);
        let expected = Rot3::from_axis_angle(&UnitVec3::new_normalize(Vec3::x()), 0.2);
        assert!((axis.rotation().angle() - expected.angle()).abs() < 1e-12);
    }

    #[test]
    fn direction_is_normalized() {
        let axis = Axis::new(
            Vec3::new(0.0, 3.0, 4.0),
            -1.0,
            1.0,
            AngleUnit::Radians,
            RotationMode::Intrinsic,
        );
        assert!((axis.direction().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clones_are_independent() {
        let original = Axis::new(
            Vec3::y(),
            -1.0,
            1.0,
            AngleUnit::Radians,
            RotationMode::Intrinsic,
        );
        let mut copy = original.clone();
        copy.set_angle(0.7);

        assert_eq!(original.angle(), 0.0);
        assert_eq!(copy.angle(), 0.7);
    }
}
