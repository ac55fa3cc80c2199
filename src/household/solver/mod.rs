//! solver — interchangeable strategies for the household's optimal allocation.
//!
//! Purpose
//! -------
//! Find the allocation that maximizes [`utility`](crate::household::utility::utility)
//! subject to each member's time budget. Two strategies share one contract,
//! [`AllocationSolver`], so scenario sweeps and calibration can run on
//! either.
//!
//! Key behaviors
//! -------------
//! - [`discrete::DiscreteSolver`]: exhaustive search over a uniform hour
//!   grid; deterministic, resolution bounded by the grid spacing.
//! - [`continuous::ContinuousSolver`]: derivative-free minimization of
//!   negated utility through an injected [`Minimizer`](crate::optimization::minimizer::Minimizer).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned [`Solution`] satisfies the time budget (exactly for the
//!   grid, after projection for the continuous solver).
//! - `Solution::utility` is `utility(solution.allocation, params)`; there is
//!   no discrepancy between the selection criterion and the reported value.
//! - Failure to converge is reported through `converged = false`, never as
//!   an error.

pub mod continuous;
pub mod discrete;

use crate::household::{allocation::Allocation, errors::HouseholdResult, params::HouseholdParams};

pub use self::continuous::ContinuousSolver;
pub use self::discrete::{DiscreteSolver, HourGrid};

/// Optimal allocation plus diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub allocation: Allocation,
    pub utility: f64,
    pub converged: bool,
    /// Grid points visited (discrete) or solver iterations (continuous).
    pub iterations: usize,
}

/// Strategy that maximizes household utility for one parameter record.
pub trait AllocationSolver {
    fn solve(&self, params: &HouseholdParams) -> HouseholdResult<Solution>;
}

impl<S: AllocationSolver + ?Sized> AllocationSolver for &S {
    fn solve(&self, params: &HouseholdParams) -> HouseholdResult<Solution> {
        (**self).solve(params)
    }
}
