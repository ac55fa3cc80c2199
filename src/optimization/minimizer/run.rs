//! Execution helper that runs Nelder–Mead on an adapted objective and
//! returns a crate-friendly [`MinimizeOutcome`].
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        adapter::ArgMinAdapter,
        traits::{MinimizeOutcome, MinimizerOptions, Objective},
        types::{NelderMeadSolver, Point},
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, State};
use tracing::debug;

/// Run Nelder–Mead for an adapted problem.
///
/// Wires up the problem, the solver, optional observers (behind the
/// `obs_slog` feature) and the iteration cap, executes the solver, maps the
/// best unconstrained point back into model space, and re-evaluates the raw
/// objective there so that `outcome.value` is exactly `f(x_hat)`.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs the cost at the start point.
///
/// # Errors
/// - Propagates any `argmin` runtime error, including objective errors.
/// - Propagates validation errors encountered when constructing
///   [`MinimizeOutcome`].
pub fn run_nelder_mead<'a, F>(
    z0: &Point, opts: &MinimizerOptions, problem: ArgMinAdapter<'a, F>, solver: NelderMeadSolver,
) -> OptResult<MinimizeOutcome>
where
    F: Objective,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(z0, &problem)?;
    }
    #[cfg(not(feature = "obs_slog"))]
    let _ = z0;

    let (f, data, region) = (problem.f, problem.data, problem.region);
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let x_hat = result.take_best_param().map(|z| region.to_model(&z));
    let value = match &x_hat {
        Some(x) => f.value(x, data)?,
        None => f64::NAN,
    };
    debug!(iterations, status = ?termination, value, "nelder-mead finished");
    MinimizeOutcome::new(x_hat, value, &termination, iterations, function_counts)
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(z0: &Point, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: Objective,
{
    let c0 = problem.cost(z0)?;
    eprintln!("init: cost(x0) = {c0:.6}");
    Ok(())
}
