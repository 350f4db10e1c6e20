//! Misalignment evaluation over a field of body orientations.

use tilt_core::{Real, Rot3, UnitVec3, Vec3};

/// Per-point angular-deviation source for the alignment objective.
///
/// Implementations answer one question: for a candidate stage rotation, how
/// far (in radians) is each sample point's body direction from its target?
/// The solver depends only on this trait, not on any particular
/// orientation-data representation.
pub trait MisalignmentField {
    /// Angular deviation at every sample point, radians, for the given
    /// composite stage rotation.
    fn deviations(&self, stage_rotation: &Rot3) -> Vec<Real>;
}

/// A field of body orientations sharing one reference direction and target.
///
/// The deviation at point `i` is the angle between `gᵢ·R⁻¹·d` and the target,
/// where `gᵢ` is the body orientation at that point, `R` the stage rotation
/// and `d` the body-fixed optical (reference) direction.
#[derive(Debug, Clone)]
pub struct OrientationField {
    orientations: Vec<Rot3>,
    optical_axis: UnitVec3,
    target: UnitVec3,
}

impl OrientationField {
    /// A field over the given per-point orientations; `optical_axis` and
    /// `target` are normalized here.
    pub fn new(orientations: Vec<Rot3>, optical_axis: Vec3, target: Vec3) -> Self {
        Self {
            orientations,
            optical_axis: UnitVec3::new_normalize(optical_axis),
            target: UnitVec3::new_normalize(target),
        }
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.orientations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }
}

impl MisalignmentField for OrientationField {
    fn deviations(&self, stage_rotation: &Rot3) -> Vec<Real> {
        // The tilted reference direction is shared by every point.
        let tilted = stage_rotation.inverse() * self.optical_axis.into_inner();
        self.orientations
            .iter()
            .map(|g| {
                let dir = g * tilted;
                dir.dot(&self.target).clamp(-1.0, 1.0).acos()
            })
            .collect()
    }
}
