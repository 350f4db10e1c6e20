//! Tilt-angle search aligning a body direction with a target.

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tilt_core::{AngleUnit, Real, TiltStage};

use crate::field::MisalignmentField;
use crate::nelder_mead::{self, NelderMeadOptions};

/// Reduction of the per-point deviations to a scalar objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectivePolicy {
    /// Mean deviation over all points.
    #[default]
    Mean,
    /// Mean over the best-aligned two thirds of the points. Tolerant of
    /// outlier grains, at the price of ignoring part of the field.
    TrimmedMean,
}

impl ObjectivePolicy {
    fn reduce(self, mut deviations: Vec<Real>) -> Real {
        let n = deviations.len();
        match self {
            ObjectivePolicy::Mean => deviations.iter().sum::<Real>() / n as Real,
            ObjectivePolicy::TrimmedMean => {
                let keep = (2 * n / 3).max(1);
                deviations.sort_by(Real::total_cmp);
                deviations[..keep].iter().sum::<Real>() / keep as Real
            }
        }
    }
}

/// Options for [`find_tilt_angles`].
#[derive(Debug, Clone, Default)]
pub struct AlignOptions {
    /// Objective reduction policy.
    pub policy: ObjectivePolicy,
    /// Unit of the returned angle vector.
    pub unit: AngleUnit,
    /// Simplex search settings.
    pub nelder_mead: NelderMeadOptions,
}

/// Outcome of a tilt-angle search.
#[derive(Debug, Clone)]
pub struct AlignResult {
    /// Optimal angle vector, one entry per axis, in the requested unit.
    pub angles: Vec<Real>,
    /// Objective value at the optimum, radians.
    pub score: Real,
    /// Simplex iterations performed.
    pub iters: usize,
    /// Whether the search met its tolerances. When `false`, `angles` is the
    /// best point found before the iteration cap (best-effort result).
    pub converged: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum AlignError {
    #[error("the orientation field produced no deviations")]
    EmptyField,
}

/// Search the stage's axis-angle box for the angles that best align the
/// field's reference direction with its target.
///
/// The search runs on an internal clone of the stage, starting from the
/// stage's current angles; the caller's stage is never mutated and no trial
/// state is observable from outside. Bounds are each axis's `[min, max]`, and
/// the minimizer produces trial points inside them, so the stage never sees
/// an invalid angle vector.
///
/// Optimization always runs in radians; `opts.unit` only selects the unit of
/// the returned angle vector.
pub fn find_tilt_angles<F: MisalignmentField>(
    stage: &TiltStage,
    field: &F,
    opts: &AlignOptions,
) -> Result<AlignResult, AlignError> {
    if field.deviations(&stage.composite_rotation()).is_empty() {
        return Err(AlignError::EmptyField);
    }

    let bounds: Vec<(Real, Real)> = stage.axes().iter().map(|ax| (ax.min(), ax.max())).collect();
    let start = DVector::from_vec(stage.angles());

    let mut trial = stage.clone();
    let objective = |x: &DVector<Real>| -> Real {
        match trial.set_angles(x.as_slice()) {
            Ok(()) => opts.policy.reduce(field.deviations(&trial.composite_rotation())),
            // Trial points are clipped into the axis box, so a rejection can
            // only come from numerical noise exactly at a bound.
            Err(_) => Real::INFINITY,
        }
    };

    let res = nelder_mead::minimize(objective, start, &bounds, &opts.nelder_mead);
    debug!(
        "tilt search finished after {} iterations (converged: {}, score: {:.6} rad)",
        res.iters, res.converged, res.fval
    );

    Ok(AlignResult {
        angles: res.x.iter().map(|&a| opts.unit.from_radians(a)).collect(),
        score: res.fval,
        iters: res.iters,
        converged: res.converged,
    })
}
