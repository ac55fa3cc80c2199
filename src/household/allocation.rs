//! Allocation — daily hours of market work and home production per member.
//!
//! Purpose
//! -------
//! Represent the household's choice `(LM, HM, LF, HF)` and the per-member
//! time budget `L + H ≤ 24` that every solver must respect.
//!
//! Key behaviors
//! -------------
//! - [`Allocation::new`] validates non-negativity and the time budget.
//! - [`Allocation::project_onto_budget`] shrinks a member's hours
//!   proportionally when a solver overshoots the budget by its tolerance.
//! - Conversions to and from the minimizer's [`Point`] use the fixed order
//!   `(LM, HM, LF, HF)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validated allocations satisfy `lm, hm, lf, hf ≥ 0` and
//!   `lm + hm ≤ 24`, `lf + hf ≤ 24`.
use crate::{
    household::errors::{HouseholdError, HouseholdResult},
    optimization::minimizer::Point,
};
use ndarray::array;

/// Daily time budget of each household member.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Hours chosen by the household, in the order `(LM, HM, LF, HF)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub lm: f64,
    pub hm: f64,
    pub lf: f64,
    pub hf: f64,
}

impl Allocation {
    /// Construct a validated allocation.
    ///
    /// # Errors
    /// - [`HouseholdError::InvalidHours`] for negative or non-finite hours.
    /// - [`HouseholdError::TimeBudgetExceeded`] when a member works more than
    ///   [`HOURS_PER_DAY`] in total.
    pub fn new(lm: f64, hm: f64, lf: f64, hf: f64) -> HouseholdResult<Self> {
        let alloc = Self { lm, hm, lf, hf };
        for (index, &value) in alloc.as_array().iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(HouseholdError::InvalidHours { index, value });
            }
        }
        if alloc.total_m() > HOURS_PER_DAY {
            return Err(HouseholdError::TimeBudgetExceeded { member: "M", total: alloc.total_m() });
        }
        if alloc.total_f() > HOURS_PER_DAY {
            return Err(HouseholdError::TimeBudgetExceeded { member: "F", total: alloc.total_f() });
        }
        Ok(alloc)
    }

    /// Unchecked construction from a minimizer point `(LM, HM, LF, HF)`.
    ///
    /// Negative entries are clamped to zero; the time budget is not checked.
    pub(crate) fn from_point(x: &Point) -> Self {
        Self { lm: x[0].max(0.0), hm: x[1].max(0.0), lf: x[2].max(0.0), hf: x[3].max(0.0) }
    }

    pub fn to_point(&self) -> Point {
        array![self.lm, self.hm, self.lf, self.hf]
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.lm, self.hm, self.lf, self.hf]
    }

    /// Total hours of the male member.
    pub fn total_m(&self) -> f64 {
        self.lm + self.hm
    }

    /// Total hours of the female member.
    pub fn total_f(&self) -> f64 {
        self.lf + self.hf
    }

    /// Relative home production `HF / HM`.
    ///
    /// May be zero or infinite at corner allocations; regression callers
    /// validate it before taking logs.
    pub fn home_ratio(&self) -> f64 {
        self.hf / self.hm
    }

    /// Whether both members respect the time budget within `tol`.
    pub fn is_feasible(&self, tol: f64) -> bool {
        self.as_array().iter().all(|&h| h >= -tol)
            && self.total_m() <= HOURS_PER_DAY + tol
            && self.total_f() <= HOURS_PER_DAY + tol
    }

    /// Scale each member's hours down proportionally so the budget holds.
    pub fn project_onto_budget(&self) -> Self {
        let (lm, hm) = shrink(self.lm, self.hm);
        let (lf, hf) = shrink(self.lf, self.hf);
        Self { lm, hm, lf, hf }
    }
}

// ---- Helper Methods ----

fn shrink(market: f64, home: f64) -> (f64, f64) {
    let total = market + home;
    if total <= HOURS_PER_DAY {
        return (market, home);
    }
    let scale = HOURS_PER_DAY / total;
    let market = market * scale;
    (market, (home * scale).min(HOURS_PER_DAY - market))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_validates_hours_and_budget() {
        assert!(Allocation::new(8.0, 4.0, 6.0, 6.0).is_ok());
        assert_eq!(
            Allocation::new(8.0, -1.0, 6.0, 6.0),
            Err(HouseholdError::InvalidHours { index: 1, value: -1.0 })
        );
        assert_eq!(
            Allocation::new(8.0, 4.0, 20.0, 5.0),
            Err(HouseholdError::TimeBudgetExceeded { member: "F", total: 25.0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Projection keeps the market/home split of an overshooting member and
    // leaves a feasible member untouched.
    fn project_onto_budget_shrinks_proportionally() {
        let alloc = Allocation { lm: 18.0, hm: 12.0, lf: 5.0, hf: 5.0 };

        let projected = alloc.project_onto_budget();

        assert_relative_eq!(projected.lm, 14.4, epsilon = 1e-12);
        assert_relative_eq!(projected.hm, 9.6, epsilon = 1e-12);
        assert_eq!((projected.lf, projected.hf), (5.0, 5.0));
        assert!(projected.is_feasible(0.0));
    }

    #[test]
    fn point_round_trip_and_ratio() {
        let alloc = Allocation::new(4.0, 2.0, 3.0, 5.0).expect("valid allocation");
        assert_eq!(Allocation::from_point(&alloc.to_point()), alloc);
        assert_eq!(alloc.home_ratio(), 2.5);
    }
}
