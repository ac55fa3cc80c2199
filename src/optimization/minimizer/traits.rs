//! Public API surface for bounded derivative-free minimization.
//!
//! - [`Objective`]: trait users implement for the function to minimize.
//! - [`Minimizer`]: the injected minimization capability (objective + region
//!   → best point + convergence flag).
//! - [`MinimizerOptions`] and [`Tolerances`]: configuration for the solver.
//! - [`MinimizeOutcome`]: normalized result returned by every minimizer.
//!
//! Convention: objectives are always *minimized*. Callers that want to
//! maximize (e.g. utility) return the negated value.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{
        region::FeasibleRegion,
        types::{
            Cost, DEFAULT_INITIAL_STEP, DEFAULT_MAX_ITER, DEFAULT_PENALTY_WEIGHT,
            DEFAULT_RESTARTS, DEFAULT_SD_TOLERANCE, FnEvalMap, Point,
        },
        validation::{
            validate_best_point, validate_value, verify_initial_step, verify_penalty_weight,
            verify_sd_tolerance,
        },
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented objective interface.
///
/// - `type Data`: per-problem payload carried into `value`/`check`.
///
/// - `value(&Point, &Data) -> OptResult<Cost>`: evaluate the objective at a
///   model-space point. Return a descriptive `OptError` for invalid inputs;
///   an error at any vertex of the starting simplex aborts the run.
pub trait Objective {
    type Data;

    fn value(&self, x: &Point, data: &Self::Data) -> OptResult<Cost>;
}

/// Injected minimization capability.
///
/// Given an objective, a start point, its data, and a feasible region,
/// return the best point found plus convergence diagnostics. Failing to
/// converge is *not* an error: the best point is still reported with
/// `converged = false`.
pub trait Minimizer {
    fn minimize<F: Objective>(
        &self, f: &F, x0: &Point, data: &F::Data, region: &FeasibleRegion,
    ) -> OptResult<MinimizeOutcome>;
}

/// Stopping rules for the simplex search.
///
/// - `sd_tolerance`: stop once the standard deviation of the simplex costs
///   drops below this threshold.
/// - `max_iter`: hard cap on iterations.
///
/// At least one must be provided (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub sd_tolerance: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if both are `None`.
    /// - [`OptError::InvalidSdTolerance`] for non-finite or non-positive values.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(sd_tolerance: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if sd_tolerance.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_sd_tolerance(sd_tolerance)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { sd_tolerance, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { sd_tolerance: Some(DEFAULT_SD_TOLERANCE), max_iter: Some(DEFAULT_MAX_ITER) }
    }
}

/// Minimizer-level configuration.
///
/// Fields:
/// - `tols` — stopping rules.
/// - `initial_step` — edge length of the starting simplex in unconstrained
///   coordinates.
/// - `penalty_weight` — weight of the exact L1 penalty on violated linear
///   inequalities.
/// - `restarts` — number of extra runs started from the previous best point
///   with a fresh simplex whose step flips sign and halves on each restart;
///   a restart that does not improve the penalized cost ends the loop early.
/// - `verbose` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default: `sd_tolerance = 1e-10`, `max_iter = 5000`, `initial_step = 0.5`,
/// `penalty_weight = 1e4`, `restarts = 2`, `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizerOptions {
    pub tols: Tolerances,
    pub initial_step: f64,
    pub penalty_weight: f64,
    pub restarts: usize,
    pub verbose: bool,
}

impl MinimizerOptions {
    pub fn new(
        tols: Tolerances, initial_step: f64, penalty_weight: f64, restarts: usize, verbose: bool,
    ) -> OptResult<Self> {
        verify_initial_step(initial_step)?;
        verify_penalty_weight(penalty_weight)?;
        Ok(Self { tols, initial_step, penalty_weight, restarts, verbose })
    }
}

impl Default for MinimizerOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::default(),
            initial_step: DEFAULT_INITIAL_STEP,
            penalty_weight: DEFAULT_PENALTY_WEIGHT,
            restarts: DEFAULT_RESTARTS,
            verbose: false,
        }
    }
}

/// Canonical result returned by every [`Minimizer`].
///
/// - `x_hat`: best model-space point found.
/// - `value`: objective value at `x_hat` (without constraint penalty).
/// - `converged`: `true` only if the solver met its own convergence test;
///   hitting the iteration cap leaves this `false`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of solver iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeOutcome {
    pub x_hat: Point,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl MinimizeOutcome {
    /// Build a validated [`MinimizeOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - Propagates validation errors for `x_hat` or `value`.
    pub fn new(
        x_hat_opt: Option<Point>, value: f64, termination: &TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let x_hat = validate_best_point(x_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        Ok(Self { x_hat, value, converged, status, iterations: iterations as usize, fn_evals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation in `Tolerances::new` and `MinimizerOptions::new`.
    // - Mapping of argmin termination states into `MinimizeOutcome`.
    //
    // They intentionally DO NOT cover:
    // - Running the solver (see `api`).
    // -------------------------------------------------------------------------

    #[test]
    fn tolerances_require_at_least_one_rule() {
        assert_eq!(Tolerances::new(None, None), Err(OptError::NoTolerancesProvided));
        assert!(Tolerances::new(None, Some(10)).is_ok());
        assert!(Tolerances::new(Some(1e-6), None).is_ok());
    }

    #[test]
    fn tolerances_reject_zero_iterations() {
        assert!(matches!(
            Tolerances::new(Some(1e-6), Some(0)),
            Err(OptError::InvalidMaxIter { max_iter: 0, .. })
        ));
    }

    #[test]
    fn options_reject_bad_step_and_weight() {
        let tols = Tolerances::default();
        assert!(matches!(
            MinimizerOptions::new(tols, 0.0, 1.0, 0, false),
            Err(OptError::InvalidInitialStep { .. })
        ));
        assert!(matches!(
            MinimizerOptions::new(tols, 0.5, f64::NAN, 0, false),
            Err(OptError::InvalidPenaltyWeight { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Only a solver-declared convergence counts as converged; running out of
    // iterations still yields a usable outcome flagged as not converged.
    fn outcome_maps_termination_reasons() {
        let converged = MinimizeOutcome::new(
            Some(array![1.0]),
            0.5,
            &TerminationStatus::Terminated(TerminationReason::SolverConverged),
            12,
            FnEvalMap::new(),
        )
        .expect("valid outcome");
        assert!(converged.converged);
        assert_eq!(converged.iterations, 12);

        let capped = MinimizeOutcome::new(
            Some(array![1.0]),
            0.5,
            &TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            5000,
            FnEvalMap::new(),
        )
        .expect("valid outcome");
        assert!(!capped.converged);
        assert!(capped.status.contains("MaxIters"));
    }
}
