//! Serializable stage parameters.
//!
//! Parameter structs mirror the runtime types field for field but use plain
//! arrays and flags, so a stage setup can live in a config file or a test
//! fixture and be rebuilt with [`StageParams::build`].

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, RotationMode};
use crate::math::{AngleUnit, Real, Vec3};
use crate::stage::{StageError, TiltStage};

/// Serializable description of a single tilt axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisParams {
    /// Axis direction in the axis's own reference frame; normalized on build.
    pub direction: [Real; 3],
    /// Lower angle bound, in `unit`.
    pub min: Real,
    /// Upper angle bound, in `unit`.
    pub max: Real,
    /// Starting angle, in `unit`.
    #[serde(default)]
    pub angle: Real,
    /// Unit of `min`, `max` and `angle`.
    #[serde(default)]
    pub unit: AngleUnit,
    /// Composition mode.
    #[serde(default)]
    pub mode: RotationMode,
}

impl AxisParams {
    /// Build the runtime axis.
    pub fn build(&self) -> Axis {
        let [x, y, z] = self.direction;
        Axis::with_initial_angle(
            Vec3::new(x, y, z),
            self.min,
            self.max,
            self.angle,
            self.unit,
            self.mode,
        )
    }
}

/// Serializable description of a whole stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageParams {
    /// Axis descriptions, in composition order.
    pub axes: Vec<AxisParams>,
    /// Whether the built stage's topology is locked.
    #[serde(default)]
    pub fixed: bool,
}

impl StageParams {
    /// Build the runtime stage.
    pub fn build(&self) -> Result<TiltStage, StageError> {
        let axes: Vec<Axis> = self.axes.iter().map(AxisParams::build).collect();
        if self.fixed {
            TiltStage::fixed(&axes)
        } else {
            TiltStage::new(&axes)
        }
    }
}
