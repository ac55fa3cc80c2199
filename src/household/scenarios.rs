//! Wage scenarios — ordered sweeps over the relative wage `wF / wM`.
//!
//! Purpose
//! -------
//! Re-solve the household problem once per relative wage, keeping scenario
//! order so results can be regressed against the wage sequence.
//!
//! Key behaviors
//! -------------
//! - [`WageScenarios::new`] validates a non-empty list of positive, finite
//!   relative wages; the default is five evenly spaced points on
//!   `[0.8, 1.2]`.
//! - [`solve_wage_scenarios`] derives an isolated trial parameter copy per
//!   scenario (`wage_f = ratio · wage_m`) and writes each result into its own
//!   slot.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output has one entry per scenario, in input order.
use crate::household::{
    errors::{HouseholdError, HouseholdResult},
    params::HouseholdParams,
    solver::{AllocationSolver, Solution},
};

/// Default sweep of relative wages.
pub const DEFAULT_RELATIVE_WAGES: [f64; 5] = [0.8, 0.9, 1.0, 1.1, 1.2];

/// Ordered, validated relative wages `wF / wM`.
#[derive(Debug, Clone, PartialEq)]
pub struct WageScenarios {
    relative_wages: Vec<f64>,
}

impl WageScenarios {
    /// # Errors
    /// - [`HouseholdError::EmptyScenarios`] for an empty list.
    /// - [`HouseholdError::InvalidWageScenario`] for a non-positive or
    ///   non-finite entry.
    pub fn new(relative_wages: Vec<f64>) -> HouseholdResult<Self> {
        if relative_wages.is_empty() {
            return Err(HouseholdError::EmptyScenarios);
        }
        for (index, &value) in relative_wages.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(HouseholdError::InvalidWageScenario { index, value });
            }
        }
        Ok(Self { relative_wages })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.relative_wages
    }

    pub fn len(&self) -> usize {
        self.relative_wages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relative_wages.is_empty()
    }
}

impl Default for WageScenarios {
    fn default() -> Self {
        Self { relative_wages: DEFAULT_RELATIVE_WAGES.to_vec() }
    }
}

/// Solution of one wage scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioSolution {
    pub relative_wage: f64,
    pub solution: Solution,
}

impl ScenarioSolution {
    /// Relative home production `HF / HM` at the optimum.
    pub fn home_ratio(&self) -> f64 {
        self.solution.allocation.home_ratio()
    }
}

/// Solve the household problem for every relative wage in `scenarios`.
///
/// The male wage of `params` is held fixed and the female wage is set to
/// `relative_wage · wage_m`.
pub fn solve_wage_scenarios<S: AllocationSolver>(
    params: &HouseholdParams, scenarios: &WageScenarios, solver: &S,
) -> HouseholdResult<Vec<ScenarioSolution>> {
    scenarios
        .as_slice()
        .iter()
        .map(|&relative_wage| {
            let trial = params.with_wages(params.wage_m, relative_wage * params.wage_m)?;
            let solution = solver.solve(&trial)?;
            Ok(ScenarioSolution { relative_wage, solution })
        })
        .collect()
}
