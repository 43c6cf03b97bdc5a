//! Numerical solvers with a uniform result contract.
//!
//! Four independent, stateless solver families plus a comparison runner:
//!
//! - [`roots`]: bisection, Newton, secant, and fixed-point iteration.
//! - [`quadrature`]: midpoint, trapezoid, Simpson, and Monte Carlo rules,
//!   each refining itself by doubling its resolution.
//! - [`ode`]: explicit Euler and classical fourth-order Runge-Kutta,
//!   fixed step.
//! - [`linear`]: Gauss elimination with partial pivoting, Jacobi, and
//!   Gauss-Seidel.
//! - [`compare`]: runs several methods of one family against the same
//!   problem and returns their reports side by side.
//!
//! Every `solve` function takes a caller-supplied evaluator (see
//! [`numex_core::Function`]) and returns a [`numex_core::Report`]. Failures
//! of any kind, malformed input included, come back inside the report;
//! nothing panics and nothing returns `Err`. All solves are pure and touch
//! no shared state, so independent calls are safe to run in parallel.
//!
//! # Example
//!
//! ```rust
//! use numex_solve::roots::{self, bisection};
//!
//! let f = |x: f64| x * x - 2.0;
//! let report = bisection::solve(&f, 0.0, 2.0, &roots::Config::default());
//!
//! assert!(report.converged());
//! let root = report.solution.unwrap();
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-6);
//! ```

pub mod compare;
pub mod linear;
pub mod ode;
pub mod quadrature;
pub mod roots;
