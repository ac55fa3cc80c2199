//! High-level entry point for minimizing a user-provided `Objective` over a
//! `FeasibleRegion`.
//!
//! The start point is mapped into unconstrained coordinates, a Nelder–Mead
//! simplex is laid out around it, and the run is delegated to
//! `run_nelder_mead`. [`NelderMeadMinimizer`] packages the same call behind
//! the [`Minimizer`] trait so model code can take the minimizer as an
//! injected capability.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{
        adapter::ArgMinAdapter,
        builders::{build_nelder_mead, initial_simplex},
        region::FeasibleRegion,
        run::run_nelder_mead,
        traits::{MinimizeOutcome, Minimizer, MinimizerOptions, Objective},
        types::Point,
        validation::validate_start_point,
    },
};
use argmin::core::CostFunction;
use tracing::debug;

/// Minimum drop in penalized cost for a restart to count as progress.
const RESTART_IMPROVEMENT_TOL: f64 = 1e-12;

/// Minimize `f` over `region` starting from `x0` with Nelder–Mead.
///
/// # Behavior
/// - Validates `x0` (non-empty, finite, matching `region.dim()`).
/// - Maps `x0` into unconstrained coordinates (bounds hold structurally).
/// - Builds the simplex, evaluates each of its vertices, and runs the
///   solver; linear inequalities are enforced through the adapter's exact
///   penalty.
/// - Restarts up to `opts.restarts` times from the best point with a fresh
///   simplex. Restart `k` uses the step `initial_step · (−1/2)^k`, so each
///   restart flips the simplex through its start point and halves its edge.
///   A simplex whose vertices tie around the minimum reports convergence
///   without moving; the flipped restart breaks that tie and lets the search
///   slide along penalty kinks. `iterations` sums over all runs.
///
/// # Errors
/// - [`OptError::BoundsDimMismatch`] when `region` and `x0` disagree on size.
/// - The objective's error (or `NonFiniteCost`) at the first starting
///   vertex that fails to evaluate.
/// - Propagates errors from the builder and the runner.
///
/// # Returns
/// A [`MinimizeOutcome`] with the best model-space point; running out of
/// iterations is reported through `converged = false`, not as an error.
pub fn minimize<F: Objective>(
    f: &F, x0: &Point, data: &F::Data, region: &FeasibleRegion, opts: &MinimizerOptions,
) -> OptResult<MinimizeOutcome> {
    validate_start_point(x0)?;
    if region.dim() != x0.len() {
        return Err(OptError::BoundsDimMismatch { expected: x0.len(), found: region.dim() });
    }

    let penalized = |out: &MinimizeOutcome| {
        out.value + opts.penalty_weight * region.total_violation(&out.x_hat)
    };
    let mut best: Option<MinimizeOutcome> = None;
    let mut start = x0.clone();
    let mut iterations = 0;
    for attempt in 0..=opts.restarts {
        let z0 = region.to_unconstrained(&start);
        let step = opts.initial_step * (-0.5f64).powi(attempt as i32);
        let simplex = initial_simplex(&z0, step);
        let problem = ArgMinAdapter::new(f, data, region, opts.penalty_weight);
        for vertex in &simplex {
            problem.cost(vertex).map_err(OptError::from)?;
        }
        let solver = build_nelder_mead(simplex, opts)?;
        let out = run_nelder_mead(&z0, opts, problem, solver)?;
        iterations += out.iterations;
        let improved = match &best {
            Some(prev) => penalized(&out) < penalized(prev) - RESTART_IMPROVEMENT_TOL,
            None => true,
        };
        if !improved {
            debug!(attempt, "restart did not improve; stopping");
            break;
        }
        start = out.x_hat.clone();
        best = Some(out);
    }
    let mut best = best.ok_or(OptError::MissingBestPoint)?;
    best.iterations = iterations;
    Ok(best)
}

/// Argmin Nelder–Mead behind the [`Minimizer`] capability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NelderMeadMinimizer {
    pub opts: MinimizerOptions,
}

impl NelderMeadMinimizer {
    pub fn new(opts: MinimizerOptions) -> Self {
        Self { opts }
    }
}

impl Minimizer for NelderMeadMinimizer {
    fn minimize<F: Objective>(
        &self, f: &F, x0: &Point, data: &F::Data, region: &FeasibleRegion,
    ) -> OptResult<MinimizeOutcome> {
        minimize(f, x0, data, region, &self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::minimizer::{
        region::{Bound, LinearInequality},
        traits::Tolerances,
        types::Cost,
    };
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - End-to-end Nelder–Mead runs on small smooth problems, free and bounded.
    // - Linear inequality handling through the exact penalty.
    // - Reporting of non-convergence when the iteration cap is hit.
    // - Dimension validation between start point and region.
    // - Objective failures on the starting simplex and flipped restarts.
    // -------------------------------------------------------------------------

    /// Quadratic bowl centred at `data`.
    struct Bowl;

    impl Objective for Bowl {
        type Data = Point;
        fn value(&self, x: &Point, centre: &Point) -> OptResult<Cost> {
            let d = x - centre;
            Ok(d.dot(&d))
        }
    }

    #[test]
    // Purpose
    // -------
    // An unconstrained bowl is minimized at its centre.
    //
    // Given
    // -----
    // - Centre `(1.5, -2.0)`, start `(0, 0)`, default options.
    //
    // Expect
    // ------
    // - `x_hat ≈ centre`, `converged == true`, `value ≈ 0`.
    fn minimize_finds_unconstrained_centre() {
        let centre = array![1.5, -2.0];
        let region = FeasibleRegion::unbounded(2);

        let out = minimize(&Bowl, &array![0.0, 0.0], &centre, &region, &MinimizerOptions::default())
            .expect("minimization should succeed");

        assert!(out.converged, "status: {}", out.status);
        assert_relative_eq!(out.x_hat[0], 1.5, epsilon = 1e-4);
        assert_relative_eq!(out.x_hat[1], -2.0, epsilon = 1e-4);
        assert!(out.value < 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // A centre outside the box is projected onto the nearest face.
    //
    // Given
    // -----
    // - Centre `(5, 0.5)` with box `[0, 2] × [0, 1]`.
    //
    // Expect
    // ------
    // - `x_hat ≈ (2, 0.5)` and the point lies inside the box.
    fn minimize_respects_interval_bounds() {
        let centre = array![5.0, 0.5];
        let region =
            FeasibleRegion::new(vec![Bound::interval(0.0, 2.0), Bound::interval(0.0, 1.0)], vec![])
                .expect("valid region");

        let out = minimize(&Bowl, &array![1.0, 0.2], &centre, &region, &MinimizerOptions::default())
            .expect("minimization should succeed");

        assert!(region.is_feasible(&out.x_hat, 0.0));
        assert_relative_eq!(out.x_hat[0], 2.0, epsilon = 1e-3);
        assert_relative_eq!(out.x_hat[1], 0.5, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // A linear inequality that cuts off the centre is honoured.
    //
    // Given
    // -----
    // - Centre `(3, 3)` and constraint `x + y ≤ 4`.
    //
    // Expect
    // ------
    // - `x_hat ≈ (2, 2)` with at most a negligible violation.
    fn minimize_honours_linear_inequality() {
        let centre = array![3.0, 3.0];
        let region = FeasibleRegion::new(
            vec![Bound::Free, Bound::Free],
            vec![LinearInequality::new(vec![1.0, 1.0], 4.0)],
        )
        .expect("valid region");

        let out = minimize(&Bowl, &array![0.0, 0.0], &centre, &region, &MinimizerOptions::default())
            .expect("minimization should succeed");

        assert!(region.total_violation(&out.x_hat) < 1e-6);
        assert_relative_eq!(out.x_hat[0], 2.0, epsilon = 1e-2);
        assert_relative_eq!(out.x_hat[1], 2.0, epsilon = 1e-2);
    }

    #[test]
    // Purpose
    // -------
    // Hitting the iteration cap is not an error; the best point is returned
    // and flagged as not converged.
    fn minimize_reports_non_convergence() {
        let centre = array![10.0, -10.0, 4.0];
        let region = FeasibleRegion::unbounded(3);
        let tols = Tolerances::new(Some(1e-14), Some(3)).expect("valid tolerances");
        let opts = MinimizerOptions::new(tols, 0.5, 1e4, 0, false).expect("valid options");

        let out = minimize(&Bowl, &array![0.0, 0.0, 0.0], &centre, &region, &opts)
            .expect("capped run still yields an outcome");

        assert!(!out.converged);
        assert!(out.iterations <= 3);
        assert!(out.value.is_finite());
    }

    #[test]
    fn minimize_rejects_dimension_mismatch() {
        let region = FeasibleRegion::unbounded(3);
        let err = minimize(
            &Bowl,
            &array![0.0, 0.0],
            &array![0.0, 0.0],
            &region,
            &MinimizerOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, OptError::BoundsDimMismatch { expected: 2, found: 3 });
    }

    #[test]
    // Purpose
    // -------
    // The trait object path behaves exactly like the free function.
    fn nelder_mead_minimizer_delegates_to_minimize() {
        let centre = array![0.25];
        let region = FeasibleRegion::unbounded(1);
        let minimizer = NelderMeadMinimizer::default();

        let out = minimizer
            .minimize(&Bowl, &array![2.0], &centre, &region)
            .expect("minimization should succeed");

        assert_relative_eq!(out.x_hat[0], 0.25, epsilon = 1e-4);
    }

    /// Fails everywhere except at the origin.
    struct FailsOffOrigin;

    impl Objective for FailsOffOrigin {
        type Data = ();
        fn value(&self, x: &Point, _: &()) -> OptResult<Cost> {
            if x.iter().all(|v| *v == 0.0) {
                Ok(0.0)
            } else {
                Err(OptError::ObjectiveFailed { text: "outside the domain".to_string() })
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // An objective that fails on the starting simplex yields its error
    // instead of aborting the solver.
    //
    // Given
    // -----
    // - An objective defined only at the origin, started at the origin, so
    //   the start vertex evaluates and the shifted vertex fails.
    //
    // Expect
    // ------
    // - `Err(ObjectiveFailed)` carrying the objective's message.
    fn minimize_returns_objective_error_on_starting_simplex() {
        let region = FeasibleRegion::unbounded(1);

        let err = minimize(&FailsOffOrigin, &array![0.0], &(), &region, &MinimizerOptions::default())
            .unwrap_err();

        assert_eq!(err, OptError::ObjectiveFailed { text: "outside the domain".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // A first run that stops on a tied simplex is rescued by the flipped
    // restart.
    //
    // Given
    // -----
    // - 1-D bowl centred at `0.25`, start `0.0`, default step `0.5`: the
    //   vertices `0.0` and `0.5` tie, so the first run stops immediately.
    //
    // Expect
    // ------
    // - `x_hat ≈ 0.25` and `value ≈ 0`.
    fn minimize_restart_escapes_tied_simplex() {
        let centre = array![0.25];
        let region = FeasibleRegion::unbounded(1);

        let out = minimize(&Bowl, &array![0.0], &centre, &region, &MinimizerOptions::default())
            .expect("minimization should succeed");

        assert_relative_eq!(out.x_hat[0], 0.25, epsilon = 1e-4);
        assert!(out.value < 1e-8);
    }
}
