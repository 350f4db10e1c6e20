//! Box-constrained Nelder-Mead simplex minimization.
//!
//! Implement the objective as a closure and call [`minimize`] with per-axis
//! bounds and some [`NelderMeadOptions`]. Every trial point is clipped into
//! the box before evaluation, so the objective is never called with an
//! out-of-range argument.

use nalgebra::DVector;
use tilt_core::Real;

/// Configuration for the simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadOptions {
    /// Maximum number of iterations; `None` means `200 * dimension`.
    pub max_iters: Option<usize>,
    /// Convergence tolerance on the simplex spread.
    pub xatol: Real,
    /// Convergence tolerance on the objective-value spread.
    pub fatol: Real,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            max_iters: None,
            xatol: 1e-6,
            fatol: 1e-8,
        }
    }
}

/// Output of a simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    /// Best point found.
    pub x: DVector<Real>,
    /// Objective value at `x`.
    pub fval: Real,
    /// Iterations performed.
    pub iters: usize,
    /// Whether the tolerances were met before the iteration cap.
    pub converged: bool,
}

fn clip(x: &mut DVector<Real>, bounds: &[(Real, Real)]) {
    for (v, &(lo, hi)) in x.iter_mut().zip(bounds) {
        *v = v.clamp(lo, hi);
    }
}

// Initial-simplex perturbations, relative for nonzero coordinates and a small
// absolute step at zero.
const NONZDELT: Real = 0.05;
const ZDELT: Real = 0.00025;

/// Minimize `f` over the box `bounds`, starting from `x0`.
///
/// Standard Nelder-Mead coefficients (reflection 1, expansion 2, contraction
/// 0.5, shrink 0.5). Reflected, expanded and contracted vertices are clipped
/// into the box; shrink steps stay inside it by convexity. The search stops
/// when both the simplex spread and the value spread fall below the
/// tolerances, or at the iteration cap, whichever comes first.
///
/// # Panics
/// Panics if `x0` is empty or its length differs from `bounds.len()`.
pub fn minimize<F>(
    mut f: F,
    x0: DVector<Real>,
    bounds: &[(Real, Real)],
    opts: &NelderMeadOptions,
) -> NelderMeadResult
where
    F: FnMut(&DVector<Real>) -> Real,
{
    let n = x0.len();
    assert!(n > 0, "cannot minimize over an empty parameter vector");
    assert_eq!(n, bounds.len(), "one bound pair per parameter");

    let (rho, chi, psi, sigma) = (1.0, 2.0, 0.5, 0.5);

    let mut start = x0;
    clip(&mut start, bounds);

    let mut simplex: Vec<DVector<Real>> = Vec::with_capacity(n + 1);
    simplex.push(start.clone());
    for k in 0..n {
        let mut vertex = start.clone();
        let step = if vertex[k] != 0.0 {
            NONZDELT * vertex[k]
        } else {
            ZDELT
        };
        vertex[k] += step;
        if vertex[k] > bounds[k].1 || vertex[k] < bounds[k].0 {
            // Mirror the perturbation away from the bound.
            vertex[k] = (start[k] - step).clamp(bounds[k].0, bounds[k].1);
        }
        simplex.push(vertex);
    }
    let mut fvals: Vec<Real> = simplex.iter().map(|x| f(x)).collect();

    let max_iters = opts.max_iters.unwrap_or(200 * n);
    let mut iters = 0;
    let mut converged = false;

    loop {
        // Order vertices best to worst.
        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| fvals[a].total_cmp(&fvals[b]));
        simplex = order.iter().map(|&i| simplex[i].clone()).collect();
        fvals = order.iter().map(|&i| fvals[i]).collect();

        let x_spread = simplex[1..]
            .iter()
            .map(|x| (x - &simplex[0]).amax())
            .fold(0.0, Real::max);
        let f_spread = fvals[1..]
            .iter()
            .map(|v| (v - fvals[0]).abs())
            .fold(0.0, Real::max);
        if x_spread <= opts.xatol && f_spread <= opts.fatol {
            converged = true;
            break;
        }
        if iters >= max_iters {
            break;
        }
        iters += 1;

        // Centroid of all vertices but the worst.
        let mut centroid = DVector::zeros(n);
        for x in &simplex[..n] {
            centroid += x;
        }
        centroid /= n as Real;

        let mut reflected = &centroid + (&centroid - &simplex[n]) * rho;
        clip(&mut reflected, bounds);
        let f_reflected = f(&reflected);

        if f_reflected < fvals[0] {
            let mut expanded = &centroid + (&centroid - &simplex[n]) * (rho * chi);
            clip(&mut expanded, bounds);
            let f_expanded = f(&expanded);
            if f_expanded < f_reflected {
                simplex[n] = expanded;
                fvals[n] = f_expanded;
            } else {
                simplex[n] = reflected;
                fvals[n] = f_reflected;
            }
        } else if f_reflected < fvals[n - 1] {
            simplex[n] = reflected;
            fvals[n] = f_reflected;
        } else {
            // Contract, outside the worst vertex if the reflection improved
            // on it, inside otherwise.
            let (coef, threshold) = if f_reflected < fvals[n] {
                (psi * rho, f_reflected)
            } else {
                (-psi, fvals[n])
            };
            let mut contracted = &centroid + (&centroid - &simplex[n]) * coef;
            clip(&mut contracted, bounds);
            let f_contracted = f(&contracted);
            if f_contracted <= threshold {
                simplex[n] = contracted;
                fvals[n] = f_contracted;
            } else {
                for i in 1..=n {
                    let shrunk = &simplex[0] + (&simplex[i] - &simplex[0]) * sigma;
                    simplex[i] = shrunk;
                    fvals[i] = f(&simplex[i]);
                }
            }
        }
    }

    let mut best = 0;
    for i in 1..=n {
        if fvals[i] < fvals[best] {
            best = i;
        }
    }
    NelderMeadResult {
        x: simplex[best].clone(),
        fval: fvals[best],
        iters,
        converged,
    }
}
