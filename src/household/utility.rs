//! Utility — household welfare of an hours allocation.
//!
//! Purpose
//! -------
//! Evaluate the household's utility for a given allocation and parameter
//! record. The function is pure and is the single selection criterion used
//! by every allocation solver.
//!
//! Key behaviors
//! -------------
//! - Market consumption `C = wM·LM + wF·LF`.
//! - Home good `H` from the tagged [`HomeAggregate`](super::home_production::HomeAggregate).
//! - Composite `Q = C^ω · H^(1−ω)`, floored at [`UTILITY_FLOOR`] before the
//!   CRRA transform `Q^(1−ρ)/(1−ρ)` (log utility when `ρ = 1`).
//! - Disutility `ν·(TM^e/e + TF^e/e)` with `e = 1 + 1/ε` and member totals
//!   `TM = LM + HM`, `TF = LF + HF`.
//!
//! Invariants & assumptions
//! ------------------------
//! - For validated parameters and non-negative hours the result is finite.
//! - Holding the allocation fixed, utility is non-increasing in `ν`.
//!
//! Testing notes
//! -------------
//! - Closed-form values at simple allocations, the exact floor at zero
//!   consumption, finiteness across parameter corners, and monotonicity in
//!   `ν`.
use crate::household::{allocation::Allocation, params::HouseholdParams};

/// Floor applied to the composite good before the risk-aversion power.
pub const UTILITY_FLOOR: f64 = 1e-8;

/// `|ρ − 1|` below which the log limit of CRRA utility is used.
const LOG_UTILITY_TOL: f64 = 1e-12;

/// Household utility of `alloc` under `params`.
pub fn utility(alloc: &Allocation, params: &HouseholdParams) -> f64 {
    consumption_utility(alloc, params) - disutility(alloc, params)
}

/// Composite good `Q = C^ω · H^(1−ω)` before flooring.
pub fn composite_good(alloc: &Allocation, params: &HouseholdParams) -> f64 {
    let c = params.wage_m * alloc.lm + params.wage_f * alloc.lf;
    let h = params.home_aggregate().evaluate(alloc.hm, alloc.hf, params.alpha);
    c.max(0.0).powf(params.omega) * h.powf(1.0 - params.omega)
}

// ---- Helper Methods ----

fn consumption_utility(alloc: &Allocation, params: &HouseholdParams) -> f64 {
    let q = composite_good(alloc, params).max(UTILITY_FLOOR);
    if (params.rho - 1.0).abs() < LOG_UTILITY_TOL {
        q.ln()
    } else {
        q.powf(1.0 - params.rho) / (1.0 - params.rho)
    }
}

fn disutility(alloc: &Allocation, params: &HouseholdParams) -> f64 {
    let e = 1.0 + 1.0 / params.epsilon;
    params.nu * (alloc.total_m().powf(e) / e + alloc.total_f().powf(e) / e)
}
