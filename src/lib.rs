//! rust_household — household specialization and Cobb-Douglas production
//! models with argmin-backed optimization and optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the household and production models to Python via the
//! `_rust_household` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`household`, `production`, `regression`,
//!   `optimization`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_household` Python extension when `python-bindings` is enabled.
//! - Register the Python submodules (`household`, `production`) under
//!   `rust_household` so that dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, default handling, and error mapping.
//! - Python wrappers hold validated Rust records; every update (calibrated
//!   `(alpha, sigma)`, optimized `(K, L)`) goes through the validating
//!   builders of those records.
//!
//! Conventions
//! -----------
//! - Allocations cross the boundary as `(lm, hm, lf, hf)` properties; inputs
//!   as `(capital, labor)`.
//! - Core errors convert to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Rust code should depend on the inner modules directly and ignore the
//!   items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the integration tests under `tests/`.

pub mod household;
pub mod optimization;
pub mod production;
pub mod regression;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    household::{
        Allocation, AllocationSolver, CalibrationOptions, CalibrationOutcome, CalibrationTargets,
        ContinuousSolver, DiscreteSolver, HourGrid, HouseholdParams, Solution, calibrate,
        solver::discrete::DEFAULT_GRID_POINTS,
    },
    optimization::minimizer::NelderMeadMinimizer,
    production::{
        FactorPrices, InputConstraints, InputSolution, InputTarget, ProductionParams,
        TechnologyShift, analyze, maximize_output, optimize_inputs,
    },
    utils::extract_wage_scenarios,
};

/// HouseholdModel — Python-facing wrapper for the two-member household.
///
/// Purpose
/// -------
/// Expose utility evaluation, both allocation solvers, and calibration of
/// `(alpha, sigma)` to Python while keeping the Rust-side validation.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `HouseholdModel(rho=2.0, nu=0.001, epsilon=1.0, omega=0.5, alpha=0.5,
/// sigma=1.0, wage_m=1.0, wage_f=1.0)`.
///
/// Fields
/// ------
/// - `params`: [`HouseholdParams`]
///   Current validated parameter record; replaced by [`calibrate`] results.
///
/// Notes
/// -----
/// - Rust callers should use [`HouseholdParams`] and the solvers directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_household.household")]
pub struct HouseholdModel {
    pub params: HouseholdParams,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HouseholdModel {
    #[new]
    #[pyo3(
        signature = (
            rho = 2.0,
            nu = 0.001,
            epsilon = 1.0,
            omega = 0.5,
            alpha = 0.5,
            sigma = 1.0,
            wage_m = 1.0,
            wage_f = 1.0,
        ),
        text_signature = "(rho=2.0, nu=0.001, epsilon=1.0, omega=0.5, alpha=0.5, sigma=1.0, \
                          wage_m=1.0, wage_f=1.0)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rho: f64, nu: f64, epsilon: f64, omega: f64, alpha: f64, sigma: f64, wage_m: f64,
        wage_f: f64,
    ) -> PyResult<Self> {
        let params = HouseholdParams::new(rho, nu, epsilon, omega, alpha, sigma, wage_m, wage_f)?;
        Ok(HouseholdModel { params })
    }

    #[getter]
    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.params.sigma
    }

    #[pyo3(text_signature = "(self, lm, hm, lf, hf, /)")]
    pub fn utility(&self, lm: f64, hm: f64, lf: f64, hf: f64) -> PyResult<f64> {
        let alloc = Allocation::new(lm, hm, lf, hf)?;
        Ok(household::utility(&alloc, &self.params))
    }

    #[pyo3(
        signature = (points = DEFAULT_GRID_POINTS),
        text_signature = "(self, /, points=49)"
    )]
    pub fn solve_discrete(&self, points: usize) -> PyResult<HouseholdSolution> {
        let grid = HourGrid::new(points, household::HOURS_PER_DAY)?;
        let inner = DiscreteSolver::new(grid).solve(&self.params)?;
        Ok(HouseholdSolution { inner })
    }

    pub fn solve_continuous(&self) -> PyResult<HouseholdSolution> {
        let inner = ContinuousSolver::default().solve(&self.params)?;
        Ok(HouseholdSolution { inner })
    }

    /// Calibrate `(alpha, sigma)` and store the result on the model.
    #[pyo3(
        signature = (
            intercept = 0.4,
            slope = -0.1,
            relative_wages = None,
            method = "continuous",
            initial_alpha = 0.99,
            initial_sigma = 0.1,
        ),
        text_signature = "(self, /, intercept=0.4, slope=-0.1, relative_wages=None, \
                          method='continuous', initial_alpha=0.99, initial_sigma=0.1)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn calibrate<'py>(
        &mut self, py: Python<'py>, intercept: f64, slope: f64,
        relative_wages: Option<&Bound<'py, PyAny>>, method: &str, initial_alpha: f64,
        initial_sigma: f64,
    ) -> PyResult<HouseholdCalibration> {
        let targets = CalibrationTargets::new(intercept, slope)?;
        let scenarios = extract_wage_scenarios(py, relative_wages)?;
        let options = CalibrationOptions::new(
            initial_alpha,
            initial_sigma,
            CalibrationOptions::default().minimizer,
        )?;

        let inner = match method.to_lowercase().as_str() {
            "continuous" => {
                calibrate(&self.params, &targets, &scenarios, &ContinuousSolver::default(), &options)?
            }
            "discrete" => {
                calibrate(&self.params, &targets, &scenarios, &DiscreteSolver::default(), &options)?
            }
            other => {
                return Err(PyValueError::new_err(format!(
                    "invalid method {:?} (expected 'continuous' or 'discrete')",
                    other
                )));
            }
        };
        self.params = self.params.with_alpha_sigma(inner.alpha, inner.sigma)?;
        Ok(HouseholdCalibration { inner })
    }
}

/// HouseholdSolution — optimal allocation returned by the household solvers.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_household.household")]
pub struct HouseholdSolution {
    pub inner: Solution,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HouseholdSolution {
    #[getter]
    pub fn lm(&self) -> f64 {
        self.inner.allocation.lm
    }

    #[getter]
    pub fn hm(&self) -> f64 {
        self.inner.allocation.hm
    }

    #[getter]
    pub fn lf(&self) -> f64 {
        self.inner.allocation.lf
    }

    #[getter]
    pub fn hf(&self) -> f64 {
        self.inner.allocation.hf
    }

    #[getter]
    pub fn utility(&self) -> f64 {
        self.inner.utility
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }
}

/// HouseholdCalibration — calibrated pair, fitted coefficients, diagnostics.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_household.household")]
pub struct HouseholdCalibration {
    pub inner: CalibrationOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HouseholdCalibration {
    #[getter]
    pub fn alpha(&self) -> f64 {
        self.inner.alpha
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma
    }

    #[getter]
    pub fn intercept(&self) -> f64 {
        self.inner.fit.intercept
    }

    #[getter]
    pub fn slope(&self) -> f64 {
        self.inner.fit.slope
    }

    #[getter]
    pub fn score(&self) -> f64 {
        self.inner.score
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn trials(&self) -> usize {
        self.inner.trials
    }
}

/// CobbDouglasModel — Python-facing wrapper for the production model.
///
/// Purpose
/// -------
/// Expose output, marginal products, cost, and both input optimizers. The
/// optimizers store the chosen `(K, L)` on the model, mirroring how the
/// Rust API returns an [`InputSolution`] that callers apply with
/// [`ProductionParams::with_inputs`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `CobbDouglasModel(a=1.0, k=10.0, l=50.0, alpha=0.3, wage=None,
/// rental=None, shift_level=None, shift_share=None)`. Prices and the shift
/// must be given as complete pairs.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_household.production")]
pub struct CobbDouglasModel {
    pub params: ProductionParams,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CobbDouglasModel {
    #[new]
    #[pyo3(
        signature = (
            a = 1.0,
            k = 10.0,
            l = 50.0,
            alpha = 0.3,
            wage = None,
            rental = None,
            shift_level = None,
            shift_share = None,
        ),
        text_signature = "(a=1.0, k=10.0, l=50.0, alpha=0.3, wage=None, rental=None, \
                          shift_level=None, shift_share=None)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: f64, k: f64, l: f64, alpha: f64, wage: Option<f64>, rental: Option<f64>,
        shift_level: Option<f64>, shift_share: Option<f64>,
    ) -> PyResult<Self> {
        let mut params = ProductionParams::new(a, k, l, alpha)?;
        match (wage, rental) {
            (Some(w), Some(r)) => params = params.with_prices(FactorPrices::new(w, r)?),
            (None, None) => {}
            _ => return Err(PyValueError::new_err("wage and rental must be given together")),
        }
        match (shift_level, shift_share) {
            (Some(level), Some(share)) => {
                params = params.with_shift(TechnologyShift::new(level, share)?)
            }
            (None, None) => {}
            _ => {
                return Err(PyValueError::new_err(
                    "shift_level and shift_share must be given together",
                ));
            }
        }
        Ok(CobbDouglasModel { params })
    }

    #[getter]
    pub fn k(&self) -> f64 {
        self.params.k
    }

    #[getter]
    pub fn l(&self) -> f64 {
        self.params.l
    }

    pub fn output(&self) -> f64 {
        analyze(&self.params).output
    }

    pub fn mpk(&self) -> f64 {
        analyze(&self.params).mpk
    }

    pub fn mpl(&self) -> f64 {
        analyze(&self.params).mpl
    }

    /// `(output, mpk, mpl, cost)`; `cost` is `None` without prices.
    pub fn analyze(&self) -> (f64, f64, f64, Option<f64>) {
        let res = analyze(&self.params);
        (res.output, res.mpk, res.mpl, res.cost)
    }

    #[pyo3(
        signature = (
            target,
            kind = "output",
            capital_bounds = (5.0, 50.0),
            labor_bounds = (30.0, 70.0),
            budget = Some(100.0),
        ),
        text_signature = "(self, target, /, kind='output', capital_bounds=(5.0, 50.0), \
                          labor_bounds=(30.0, 70.0), budget=100.0)"
    )]
    pub fn optimize_inputs(
        &mut self, target: f64, kind: &str, capital_bounds: (f64, f64), labor_bounds: (f64, f64),
        budget: Option<f64>,
    ) -> PyResult<ProductionSolution> {
        let target = match kind.to_lowercase().as_str() {
            "output" => InputTarget::Output(target),
            "cost" => InputTarget::Cost(target),
            other => {
                return Err(PyValueError::new_err(format!(
                    "invalid target kind {:?} (expected 'output' or 'cost')",
                    other
                )));
            }
        };
        let constraints = InputConstraints::new(capital_bounds, labor_bounds, budget)?;
        let inner =
            optimize_inputs(&self.params, target, &constraints, &NelderMeadMinimizer::default())?;
        self.params = self.params.with_inputs(inner.capital, inner.labor)?;
        Ok(ProductionSolution { inner })
    }

    #[pyo3(
        signature = (
            capital_bounds = (5.0, 50.0),
            labor_bounds = (30.0, 70.0),
            budget = Some(100.0),
        ),
        text_signature = "(self, /, capital_bounds=(5.0, 50.0), labor_bounds=(30.0, 70.0), \
                          budget=100.0)"
    )]
    pub fn maximize_output(
        &mut self, capital_bounds: (f64, f64), labor_bounds: (f64, f64), budget: Option<f64>,
    ) -> PyResult<ProductionSolution> {
        let constraints = InputConstraints::new(capital_bounds, labor_bounds, budget)?;
        let inner = maximize_output(&self.params, &constraints, &NelderMeadMinimizer::default())?;
        self.params = self.params.with_inputs(inner.capital, inner.labor)?;
        Ok(ProductionSolution { inner })
    }
}

/// ProductionSolution — chosen inputs and optimizer diagnostics.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_household.production")]
pub struct ProductionSolution {
    pub inner: InputSolution,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ProductionSolution {
    #[getter]
    pub fn capital(&self) -> f64 {
        self.inner.capital
    }

    #[getter]
    pub fn labor(&self) -> f64 {
        self.inner.labor
    }

    #[getter]
    pub fn output(&self) -> f64 {
        self.inner.output
    }

    #[getter]
    pub fn objective(&self) -> f64 {
        self.inner.objective
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }
}

/// _rust_household — PyO3 module initializer for the Python extension.
///
/// Creates the `household` and `production` submodules, attaches them to
/// `_rust_household`, and registers them in `sys.modules` so they are
/// importable via dotted paths.
///
/// Errors
/// ------
/// - `PyErr` if creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_household<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let household_mod = PyModule::new(_py, "household")?;
    let production_mod = PyModule::new(_py, "production")?;
    household_models(_py, m, &household_mod)?;
    production_models(_py, m, &production_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_household.household", household_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_household.production", production_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn household_models<'py>(
    _py: Python, rust_household: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<HouseholdModel>()?;
    m.add_class::<HouseholdSolution>()?;
    m.add_class::<HouseholdCalibration>()?;
    rust_household.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn production_models<'py>(
    _py: Python, rust_household: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CobbDouglasModel>()?;
    m.add_class::<ProductionSolution>()?;
    rust_household.add_submodule(m)?;
    Ok(())
}
