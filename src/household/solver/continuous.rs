//! Continuous allocation search through an injected minimizer.
//!
//! Purpose
//! -------
//! Maximize household utility over real-valued hours by minimizing its
//! negation with a derivative-free [`Minimizer`]. Per-hour bounds `[0, 24]`
//! are passed as interval bounds and each member's time budget as a linear
//! inequality, so the backend sees the full feasible region.
//!
//! Key behaviors
//! -------------
//! - Start from a fixed interior guess (`6` hours everywhere by default).
//! - After the solve, project the allocation onto the budget so solver
//!   tolerance can never leave a member above 24 hours.
//! - Recompute utility at the projected allocation, which is the value
//!   reported in [`Solution::utility`].
//! - Log a `warn!` when the backend stops without converging; the best point
//!   is still returned.
//!
//! Invariants & assumptions
//! ------------------------
//! - The Leontief kink needs no special handling here: the minimizer never
//!   uses derivatives and the aggregate is evaluated branch by branch.
use crate::{
    household::{
        allocation::{Allocation, HOURS_PER_DAY},
        errors::HouseholdResult,
        params::HouseholdParams,
        solver::{AllocationSolver, Solution},
        utility::utility,
    },
    optimization::{
        errors::OptResult,
        minimizer::{
            Bound, Cost, FeasibleRegion, LinearInequality, Minimizer, NelderMeadMinimizer,
            Objective, Point,
        },
    },
};
use tracing::{debug, warn};

/// Default interior starting guess for every hour choice.
pub const DEFAULT_START_HOURS: f64 = 6.0;

/// Negated household utility over `(LM, HM, LF, HF)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegUtility;

impl Objective for NegUtility {
    type Data = HouseholdParams;

    fn value(&self, x: &Point, params: &HouseholdParams) -> OptResult<Cost> {
        Ok(-utility(&Allocation::from_point(x), params))
    }
}

/// Utility maximization over continuous hours.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousSolver<M = NelderMeadMinimizer> {
    pub minimizer: M,
    pub start: Allocation,
}

impl<M: Minimizer> ContinuousSolver<M> {
    pub fn new(minimizer: M) -> Self {
        let h = DEFAULT_START_HOURS;
        Self { minimizer, start: Allocation { lm: h, hm: h, lf: h, hf: h } }
    }

    pub fn with_start(mut self, start: Allocation) -> Self {
        self.start = start;
        self
    }

    /// Hour bounds plus one time-budget inequality per member.
    pub fn feasible_region() -> OptResult<FeasibleRegion> {
        FeasibleRegion::new(
            vec![Bound::interval(0.0, HOURS_PER_DAY); 4],
            vec![
                LinearInequality::new(vec![1.0, 1.0, 0.0, 0.0], HOURS_PER_DAY),
                LinearInequality::new(vec![0.0, 0.0, 1.0, 1.0], HOURS_PER_DAY),
            ],
        )
    }
}

impl Default for ContinuousSolver<NelderMeadMinimizer> {
    fn default() -> Self {
        Self::new(NelderMeadMinimizer::default())
    }
}

impl<M: Minimizer> AllocationSolver for ContinuousSolver<M> {
    fn solve(&self, params: &HouseholdParams) -> HouseholdResult<Solution> {
        let region = Self::feasible_region()?;
        let out = self.minimizer.minimize(&NegUtility, &self.start.to_point(), params, &region)?;

        let allocation = Allocation::from_point(&out.x_hat).project_onto_budget();
        let utility = utility(&allocation, params);
        if !out.converged {
            warn!(
                status = %out.status,
                iterations = out.iterations,
                alpha = params.alpha,
                sigma = params.sigma,
                "continuous allocation solve did not converge; using best point"
            );
        }
        debug!(?allocation, utility, iterations = out.iterations, "continuous solve finished");
        Ok(Solution { allocation, utility, converged: out.converged, iterations: out.iterations })
    }
}
