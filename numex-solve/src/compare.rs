//! Side-by-side comparison runners.
//!
//! Each runner drives a chosen subset of one family's methods against the
//! same problem instance and returns the reports keyed by method name.
//! There is no algorithmic logic here: every entry is one fully
//! independent `solve` call, so the runs share no state and could just as
//! well execute in parallel.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};
use numex_core::{Function, OdeFunction};

use crate::linear::{self, LinearRecord, LinearReport};
use crate::ode::{self, OdeReport};
use crate::quadrature::{self, QuadReport};
use crate::roots::{self, RootReport};

/// Root-finding methods available to [`roots`](fn@roots).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMethod {
    Bisection,
    Newton,
    Secant,
    FixedPoint,
}

/// Runs the selected root-finding methods against `f` on `bracket`.
///
/// Bisection and secant consume the bracket endpoints directly; Newton and
/// fixed-point iteration seed from the bracket midpoint.
pub fn roots(
    f: &impl Function,
    methods: &[RootMethod],
    bracket: [f64; 2],
    config: &roots::Config,
) -> BTreeMap<&'static str, RootReport> {
    let [a, b] = bracket;
    let midpoint = 0.5 * (a + b);

    let mut results = BTreeMap::new();
    for method in methods {
        let report = match method {
            RootMethod::Bisection => roots::bisection::solve(f, a, b, config),
            RootMethod::Newton => roots::newton::solve(f, midpoint, config),
            RootMethod::Secant => roots::secant::solve(f, a, b, config),
            RootMethod::FixedPoint => roots::fixed_point::solve(f, midpoint, config),
        };
        results.insert(report.method, report);
    }
    results
}

/// Quadrature rules available to [`quadrature`](fn@quadrature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadMethod {
    Midpoint,
    Trapezoid,
    Simpson,
    MonteCarlo,
}

/// Runs the selected quadrature rules against `f` on `[a, b]`.
pub fn quadrature(
    f: &impl Function,
    methods: &[QuadMethod],
    a: f64,
    b: f64,
    config: &quadrature::Config,
) -> BTreeMap<&'static str, QuadReport> {
    let mut results = BTreeMap::new();
    for method in methods {
        let report = match method {
            QuadMethod::Midpoint => quadrature::midpoint::solve(f, a, b, config),
            QuadMethod::Trapezoid => quadrature::trapezoid::solve(f, a, b, config),
            QuadMethod::Simpson => quadrature::simpson::solve(f, a, b, config),
            QuadMethod::MonteCarlo => quadrature::monte_carlo::solve(f, a, b, config),
        };
        results.insert(report.method, report);
    }
    results
}

/// Integrators available to [`ode`](fn@ode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdeMethod {
    Euler,
    Rk4,
}

/// Runs the selected integrators against `y' = f(x, y)` from `(x0, y0)`
/// to `x_end`.
pub fn ode(
    f: &impl OdeFunction,
    methods: &[OdeMethod],
    x0: f64,
    y0: f64,
    x_end: f64,
    config: &ode::Config,
) -> BTreeMap<&'static str, OdeReport> {
    let mut results = BTreeMap::new();
    for method in methods {
        let report = match method {
            OdeMethod::Euler => ode::euler::solve(f, x0, y0, x_end, config),
            OdeMethod::Rk4 => ode::rk4::solve(f, x0, y0, x_end, config),
        };
        results.insert(report.method, report);
    }
    results
}

/// Linear solvers available to [`linear`](fn@linear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearMethod {
    Gauss,
    Jacobi,
    GaussSeidel,
}

/// Runs the selected linear solvers against `Ax = b`.
///
/// The direct and iterative methods record different trace shapes, so
/// their reports are unified through [`LinearRecord`]. The iterative
/// methods start from the zero vector; `config` does not affect Gauss
/// elimination.
pub fn linear(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    methods: &[LinearMethod],
    config: &linear::Config,
) -> BTreeMap<&'static str, LinearReport> {
    let mut results = BTreeMap::new();
    for method in methods {
        let report = match method {
            LinearMethod::Gauss => {
                linear::gauss::solve(a, b).map_trace(LinearRecord::Elimination)
            }
            LinearMethod::Jacobi => {
                linear::jacobi::solve(a, b, None, config).map_trace(LinearRecord::Sweep)
            }
            LinearMethod::GaussSeidel => {
                linear::gauss_seidel::solve(a, b, None, config).map_trace(LinearRecord::Sweep)
            }
        };
        results.insert(report.method, report);
    }
    results
}
