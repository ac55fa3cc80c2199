//! Integration tests for the Cobb-Douglas production model.
//!
//! Purpose
//! -------
//! - Validate the production workflow: from a validated record, through
//!   analysis, to input optimization and applying the chosen inputs back
//!   onto the record.
//!
//! Coverage
//! --------
//! - `production::cobb_douglas`: reference identities via `analyze`.
//! - `production::optimizer`:
//!   - Output target → apply inputs → re-analysis hits the target, and a
//!     second call is a fixed point.
//!   - Cost target with factor prices.
//!   - Budget-constrained output maximization with a technology shift.
//!
//! Exclusions
//! ----------
//! - Parameter and constraint validation; covered by unit tests.
use approx::assert_relative_eq;
use rust_household::{
    optimization::minimizer::NelderMeadMinimizer,
    production::{
        FactorPrices, InputConstraints, InputTarget, ProductionParams, TechnologyShift, analyze,
        maximize_output, optimize_inputs, output,
    },
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
// Purpose
// -------
// Reference analysis at `A = 1, K = 10, L = 50, alpha = 0.3` with prices.
//
// Expect
// ------
// - `MPK·K + MPL·L = Y` (constant returns) and cost `w·L + r·K`.
fn analyze_reference_point_satisfies_euler_identity() {
    let prices = FactorPrices::new(1.5, 4.0).expect("valid prices");
    let params = ProductionParams::default().with_prices(prices);

    let res = analyze(&params);

    assert_relative_eq!(res.mpk * 10.0 + res.mpl * 50.0, res.output, max_relative = 1e-12);
    assert_eq!(res.cost, Some(1.5 * 50.0 + 4.0 * 10.0));
}

#[test]
// Purpose
// -------
// Optimizing toward an output target, applying the inputs, and asking
// again for the same output is stable.
//
// Given
// -----
// - Default record and constraints; target `Y(30, 40)`.
//
// Expect
// ------
// - Re-analysis of the updated record hits the target within `1e-6`
//   relative.
// - A second call with the achieved output returns the same inputs with
//   zero iterations.
fn output_target_round_trip_is_a_fixed_point() {
    init_tracing();
    let params = ProductionParams::default();
    let constraints = InputConstraints::default();
    let minimizer = NelderMeadMinimizer::default();
    let y_star = output(30.0, 40.0, &params);

    let sol = optimize_inputs(&params, InputTarget::Output(y_star), &constraints, &minimizer)
        .expect("optimization succeeds");
    let updated = params.with_inputs(sol.capital, sol.labor).expect("valid inputs");

    assert_relative_eq!(analyze(&updated).output, y_star, max_relative = 1e-6);

    let again = optimize_inputs(
        &updated,
        InputTarget::Output(analyze(&updated).output),
        &constraints,
        &minimizer,
    )
    .expect("fixed point");
    assert_eq!((again.capital, again.labor), (sol.capital, sol.labor));
    assert_eq!(again.iterations, 0);
}

#[test]
// Purpose
// -------
// A cost target is met by re-pricing inputs within bounds and budget.
//
// Given
// -----
// - Prices `w = 2`, `r = 3`; target cost 180 (start cost is 130).
fn cost_target_is_met_within_constraints() {
    init_tracing();
    let prices = FactorPrices::new(2.0, 3.0).expect("valid prices");
    let params = ProductionParams::default().with_prices(prices);
    let constraints = InputConstraints::default();

    let sol = optimize_inputs(
        &params,
        InputTarget::Cost(180.0),
        &constraints,
        &NelderMeadMinimizer::default(),
    )
    .expect("optimization succeeds");
    let updated = params.with_inputs(sol.capital, sol.labor).expect("valid inputs");

    let cost = analyze(&updated).cost.expect("prices are set");
    assert_relative_eq!(cost, 180.0, max_relative = 1e-6);
    assert!((5.0..=50.0).contains(&sol.capital));
    assert!((30.0..=70.0).contains(&sol.labor));
    assert!(sol.capital + sol.labor <= 100.0 + 1e-6);
}

#[test]
// Purpose
// -------
// Budget-constrained output maximum with a technology shift.
//
// Given
// -----
// - `A = 2`, `alpha = 0.35`, shift `9^0.5`, default constraints.
//
// Expect
// ------
// - The shift only scales output: `K ≈ 35`, `L ≈ 65`, and output within
//   0.1% of `6 · 35^0.35 · 65^0.65`.
fn maximize_output_with_shift_spends_budget_by_shares() {
    init_tracing();
    let params = ProductionParams::new(2.0, 10.0, 50.0, 0.35)
        .expect("valid params")
        .with_shift(TechnologyShift::new(9.0, 0.5).expect("valid shift"));

    let sol = maximize_output(&params, &InputConstraints::default(), &NelderMeadMinimizer::default())
        .expect("optimization succeeds");

    let analytic = 6.0 * 35f64.powf(0.35) * 65f64.powf(0.65);
    assert_relative_eq!(sol.capital, 35.0, epsilon = 0.5);
    assert_relative_eq!(sol.labor, 65.0, epsilon = 0.5);
    assert!(sol.output >= 0.999 * analytic);
    assert!(sol.output <= analytic * (1.0 + 1e-4));
}
