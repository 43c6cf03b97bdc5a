//! The comparison runner drives every family against one shared problem.

use approx::assert_relative_eq;
use integration_tests::{cubic, dominant_system, non_dominant_system, CUBIC_ROOT};
use numex_core::{NumericalFailure, Status};
use numex_solve::compare::{self, LinearMethod, OdeMethod, QuadMethod, RootMethod};
use numex_solve::{linear, ode, quadrature, roots};

#[test]
fn all_root_methods_agree_on_the_cubic() {
    let methods = [
        RootMethod::Bisection,
        RootMethod::Newton,
        RootMethod::Secant,
        RootMethod::FixedPoint,
    ];
    let results = compare::roots(&cubic, &methods, [1.0, 3.0], &roots::Config::default());

    assert_eq!(results.len(), 4);
    for (name, report) in &results {
        assert!(report.converged(), "{name} failed: {}", report.message);
        let root = report.solution.unwrap();
        assert_relative_eq!(root, CUBIC_ROOT, epsilon = 1e-3);
    }
}

#[test]
fn a_subset_runs_only_the_selected_methods() {
    let methods = [RootMethod::Bisection, RootMethod::Newton];
    let results = compare::roots(&cubic, &methods, [1.0, 3.0], &roots::Config::default());

    assert_eq!(results.len(), 2);
    assert!(results.contains_key("bisection"));
    assert!(results.contains_key("newton"));
    assert!(!results.contains_key("secant"));
}

#[test]
fn deterministic_quadrature_rules_agree() {
    let f = |x: f64| x * x - 4.0;
    let methods = [QuadMethod::Midpoint, QuadMethod::Trapezoid, QuadMethod::Simpson];
    let results = compare::quadrature(&f, &methods, 0.0, 3.0, &quadrature::Config::default());

    for (name, report) in &results {
        assert!(report.converged(), "{name} failed: {}", report.message);
        assert_relative_eq!(report.solution.unwrap(), -3.0, epsilon = 1e-4);
    }
}

#[test]
fn integrators_run_the_same_problem_independently() {
    let rhs = |_: f64, y: f64| y;
    let config = ode::Config {
        step: 0.01,
        max_steps: 1000,
    };
    let results = compare::ode(&rhs, &[OdeMethod::Euler, OdeMethod::Rk4], 0.0, 1.0, 1.0, &config);

    let euler = &results["euler"];
    let rk4 = &results["rk4"];
    assert!(euler.converged());
    assert!(rk4.converged());

    // Same grid, different accuracy.
    assert_eq!(
        euler.solution.as_ref().unwrap().len(),
        rk4.solution.as_ref().unwrap().len()
    );
}

#[test]
fn direct_solver_succeeds_where_iterative_methods_refuse() {
    let (a, b) = non_dominant_system();
    let methods = [LinearMethod::Gauss, LinearMethod::Jacobi, LinearMethod::GaussSeidel];
    let results = compare::linear(&a, &b, &methods, &linear::Config::default());

    let gauss = &results["gauss"];
    assert!(gauss.converged());
    let x = gauss.solution.as_ref().unwrap();
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);

    // The dominance precheck fails both iterative methods before any sweep.
    for name in ["jacobi", "gauss_seidel"] {
        let report = &results[name];
        assert!(matches!(
            report.status,
            Status::Failed(NumericalFailure::NotDiagonallyDominant { .. })
        ));
        assert_eq!(report.iterations, 0);
        assert!(report.trace.is_empty());
    }
}

#[test]
fn all_linear_methods_agree_on_a_dominant_system() {
    let (a, b) = dominant_system();
    let methods = [LinearMethod::Gauss, LinearMethod::Jacobi, LinearMethod::GaussSeidel];
    let results = compare::linear(&a, &b, &methods, &linear::Config::default());

    let reference = results["gauss"].solution.as_ref().unwrap().clone();
    for (name, report) in &results {
        assert!(report.converged(), "{name} failed: {}", report.message);
        let x = report.solution.as_ref().unwrap();
        for i in 0..3 {
            assert_relative_eq!(x[i], reference[i], epsilon = 1e-5);
        }
    }
}
