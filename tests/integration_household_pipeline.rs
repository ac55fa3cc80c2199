//! Integration tests for the household specialization pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end household workflow: from a validated parameter
//!   record, through discrete and continuous allocation solves and
//!   relative-wage sweeps, to the log-ratio regression and calibration of
//!   `(alpha, sigma)`.
//! - Exercise realistic parameter regimes (the reference defaults and
//!   interior CES structures) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `household::solver`:
//!   - Grid search at the default half-hour grid.
//!   - Continuous solve against the analytic symmetric optimum.
//!   - Time-budget invariant for both solvers across parameter regimes.
//! - `household::scenarios` + `regression`:
//!   - Recovery of the interior closed-form coefficients
//!     `β0 = σ·ln(α/(1−α))`, `β1 = −σ`.
//! - `household::calibration`:
//!   - Calibration back to coefficients generated by a known pair.
//!   - Calibration to the reference targets `(0.4, −0.1)`.
//!
//! Exclusions
//! ----------
//! - Validation of individual records, grids, and options; covered by unit
//!   tests next to each component.
//! - Python bindings.
use approx::assert_relative_eq;
use rust_household::{
    household::{
        AllocationSolver, CalibrationOptions, CalibrationTargets, ContinuousSolver,
        DiscreteSolver, HOURS_PER_DAY, HourGrid, HouseholdParams, WageScenarios, calibrate,
        evaluate_trial, solve_wage_scenarios, utility,
    },
    regression::log_ratio_fit,
};

/// Route `tracing` output through the test harness so `debug!`/`warn!`
/// events show up for failing tests (`RUST_LOG=debug`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Purpose
/// -------
/// Parameter regimes used by the budget-invariant checks.
///
/// Returns
/// -------
/// - The reference defaults, a wage gap in favor of `F`, a substitutable
///   CES (`sigma = 1.5`), and a complementary CES (`sigma = 0.5`) with a
///   larger disutility weight.
fn regimes() -> Vec<HouseholdParams> {
    let base = HouseholdParams::default();
    vec![
        base,
        base.with_wages(1.0, 1.2).expect("valid wages"),
        base.with_alpha_sigma(0.6, 1.5).expect("valid pair"),
        base.with_alpha_sigma(0.4, 0.5).and_then(|p| p.with_nu(0.01)).expect("valid record"),
    ]
}

#[test]
// Purpose
// -------
// Reference grid search at the defaults.
//
// Given
// -----
// - Default parameters, half-hour grid on `[0, 24]`.
//
// Expect
// ------
// - Every member spends 4.5 hours in each activity; utility matches a
//   direct evaluation of that allocation.
fn discrete_default_grid_picks_four_and_a_half_hours() {
    init_tracing();
    let params = HouseholdParams::default();

    let sol = DiscreteSolver::default().solve(&params).expect("grid search succeeds");

    assert_eq!(sol.allocation.as_array(), [4.5, 4.5, 4.5, 4.5]);
    assert_eq!(sol.utility, utility(&sol.allocation, &params));
    assert!(sol.converged);
}

#[test]
// Purpose
// -------
// Continuous solve at the defaults reaches the analytic symmetric optimum
// and does at least as well as the grid.
//
// Given
// -----
// - Defaults: `rho = 2`, `nu = 0.001`, `epsilon = 1`, equal wages, CD home
//   production. The interior optimum has every hour equal to
//   `(1 / (0.008·√2))^(1/3) ≈ 4.455`.
fn continuous_default_matches_analytic_optimum() {
    init_tracing();
    let params = HouseholdParams::default();
    let analytic = (1.0 / (0.008 * 2f64.sqrt())).powf(1.0 / 3.0);

    let cont = ContinuousSolver::default().solve(&params).expect("continuous solve");
    let grid = DiscreteSolver::default().solve(&params).expect("grid search");

    for h in cont.allocation.as_array() {
        assert_relative_eq!(h, analytic, epsilon = 0.05);
    }
    assert!(cont.utility >= grid.utility - 1e-9 * grid.utility.abs());
}

#[test]
// Purpose
// -------
// Neither solver returns an allocation that breaks the daily time budget.
//
// Given
// -----
// - Several parameter regimes; coarse 25-point grid for speed.
//
// Expect
// ------
// - `LM + HM ≤ 24` and `LF + HF ≤ 24` for every solution, all hours ≥ 0.
fn both_solvers_respect_time_budget() {
    init_tracing();
    let grid = DiscreteSolver::new(HourGrid::new(25, HOURS_PER_DAY).expect("valid grid"));
    let cont = ContinuousSolver::default();

    for params in regimes() {
        for sol in [grid.solve(&params), cont.solve(&params)] {
            let sol = sol.expect("solve succeeds");
            assert!(sol.allocation.is_feasible(1e-9), "infeasible: {:?}", sol.allocation);
            assert!(sol.utility.is_finite());
        }
    }
}

#[test]
// Purpose
// -------
// A continuous wage sweep at an interior CES structure reproduces the
// closed-form regression coefficients.
//
// Given
// -----
// - `alpha = 0.7`, `sigma = 0.6`, default relative wages.
//
// Expect
// ------
// - `β0 ≈ 0.6·ln(7/3)`, `β1 ≈ −0.6`; one solution per scenario in order.
fn wage_sweep_recovers_closed_form_coefficients() {
    init_tracing();
    let params = HouseholdParams::default().with_alpha_sigma(0.7, 0.6).expect("valid pair");
    let scenarios = WageScenarios::default();

    let solved = solve_wage_scenarios(&params, &scenarios, &ContinuousSolver::default())
        .expect("sweep succeeds");
    let ratios: Vec<f64> = solved.iter().map(|s| s.home_ratio()).collect();
    let fit = log_ratio_fit(scenarios.as_slice(), &ratios).expect("fit succeeds");

    assert_eq!(solved.len(), scenarios.len());
    for (s, &w) in solved.iter().zip(scenarios.as_slice()) {
        assert_eq!(s.relative_wage, w);
    }
    assert_relative_eq!(fit.intercept, 0.6 * (0.7f64 / 0.3).ln(), epsilon = 1e-2);
    assert_relative_eq!(fit.slope, -0.6, epsilon = 1e-2);
}

#[test]
// Purpose
// -------
// Calibration finds its way back to a known pair.
//
// Given
// -----
// - Targets generated by `alpha = 0.8`, `sigma = 0.5`:
//   `β0 = 0.5·ln 4`, `β1 = −0.5`.
// - Default calibration options (start `(0.99, 0.1)`), continuous solver.
//
// Expect
// ------
// - Score below `1e-3` and well below the score at the start point.
// - `(alpha, sigma)` within 0.02 of `(0.8, 0.5)`.
fn calibration_recovers_generating_pair() {
    init_tracing();
    let base = HouseholdParams::default();
    let targets = CalibrationTargets::new(0.5 * 4f64.ln(), -0.5).expect("valid targets");
    let scenarios = WageScenarios::default();
    let solver = ContinuousSolver::default();
    let options = CalibrationOptions::default();

    let start = evaluate_trial(
        &base,
        options.initial_alpha,
        options.initial_sigma,
        &targets,
        &scenarios,
        &solver,
    )
    .expect("start trial");
    let out = calibrate(&base, &targets, &scenarios, &solver, &options).expect("calibration");

    assert!(out.score < 1e-3, "score {}", out.score);
    assert!(out.score < start.score);
    assert_relative_eq!(out.alpha, 0.8, epsilon = 0.02);
    assert_relative_eq!(out.sigma, 0.5, epsilon = 0.02);
    assert!(out.trials > 0);
}

#[test]
// Purpose
// -------
// Calibration to the reference targets `(0.4, −0.1)`.
//
// Expect
// ------
// - Fitted coefficients within 0.02 of the targets and `sigma ≈ 0.1`
//   (since `β1 = −σ` in the interior).
fn calibration_matches_reference_targets() {
    init_tracing();
    let out = calibrate(
        &HouseholdParams::default(),
        &CalibrationTargets::default(),
        &WageScenarios::default(),
        &ContinuousSolver::default(),
        &CalibrationOptions::default(),
    )
    .expect("calibration");

    assert_relative_eq!(out.fit.intercept, 0.4, epsilon = 0.02);
    assert_relative_eq!(out.fit.slope, -0.1, epsilon = 0.02);
    assert_relative_eq!(out.sigma, 0.1, epsilon = 0.02);
    assert!(out.alpha > 0.9 && out.alpha < 1.0);
}
