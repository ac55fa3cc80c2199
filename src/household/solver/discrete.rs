//! Discrete allocation search over a uniform hour grid.
//!
//! Every combination `(LM, HM, LF, HF)` on the grid is scored; combinations
//! that break a member's time budget score `-inf` and are never selected.
//! The scan order is `HM` outermost, then `LM`, `LF`, `HF` (the flattening
//! order of an `xy`-indexed mesh over `(LM, HM, LF, HF)`), and ties keep the
//! first maximum in that order.
use crate::household::{
    allocation::{Allocation, HOURS_PER_DAY},
    errors::{HouseholdError, HouseholdResult},
    params::HouseholdParams,
    solver::{AllocationSolver, Solution},
    utility::utility,
};
use tracing::debug;

/// Default number of grid points (step 0.5 on `[0, 24]`).
pub const DEFAULT_GRID_POINTS: usize = 49;

/// Uniform grid `0, h, 2h, …, max_hours` of candidate hours.
#[derive(Debug, Clone, PartialEq)]
pub struct HourGrid {
    points: Vec<f64>,
}

impl HourGrid {
    /// Construct a grid with `points` evenly spaced values on `[0, max_hours]`.
    ///
    /// # Errors
    /// - [`HouseholdError::InvalidGrid`] if `points < 2` or `max_hours` is not
    ///   finite and positive.
    pub fn new(points: usize, max_hours: f64) -> HouseholdResult<Self> {
        if points < 2 {
            return Err(HouseholdError::InvalidGrid {
                points,
                max_hours,
                reason: "At least two grid points are required.",
            });
        }
        if !max_hours.is_finite() || max_hours <= 0.0 {
            return Err(HouseholdError::InvalidGrid {
                points,
                max_hours,
                reason: "Upper end must be finite and strictly positive.",
            });
        }
        let step = max_hours / (points - 1) as f64;
        let mut values: Vec<f64> = (0..points).map(|i| i as f64 * step).collect();
        values[points - 1] = max_hours;
        Ok(Self { points: values })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for HourGrid {
    fn default() -> Self {
        let step = HOURS_PER_DAY / (DEFAULT_GRID_POINTS - 1) as f64;
        Self { points: (0..DEFAULT_GRID_POINTS).map(|i| i as f64 * step).collect() }
    }
}

/// Exhaustive grid search. Always reports `converged = true`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscreteSolver {
    pub grid: HourGrid,
}

impl DiscreteSolver {
    pub fn new(grid: HourGrid) -> Self {
        Self { grid }
    }
}

impl AllocationSolver for DiscreteSolver {
    fn solve(&self, params: &HouseholdParams) -> HouseholdResult<Solution> {
        let hours = self.grid.points();
        let mut best: Option<(Allocation, f64)> = None;
        let mut visited = 0usize;

        for &hm in hours {
            for &lm in hours {
                // Whole inner block is infeasible for M; every score would be -inf.
                if lm + hm > HOURS_PER_DAY {
                    visited += hours.len() * hours.len();
                    continue;
                }
                for &lf in hours {
                    for &hf in hours {
                        visited += 1;
                        if lf + hf > HOURS_PER_DAY {
                            continue;
                        }
                        let alloc = Allocation { lm, hm, lf, hf };
                        let u = utility(&alloc, params);
                        if best.map_or(true, |(_, best_u)| u > best_u) {
                            best = Some((alloc, u));
                        }
                    }
                }
            }
        }

        let (allocation, utility) = best.ok_or(HouseholdError::InvalidGrid {
            points: hours.len(),
            max_hours: hours.last().copied().unwrap_or(0.0),
            reason: "No feasible grid point.",
        })?;
        debug!(?allocation, utility, visited, "grid search finished");
        Ok(Solution { allocation, utility, converged: true, iterations: visited })
    }
}
