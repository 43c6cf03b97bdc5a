use std::fmt;

use thiserror::Error;

/// Malformed parameters, detected before any iteration runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InputError {
    #[error("interval is empty or reversed: a = {a}, b = {b}")]
    EmptyInterval { a: f64, b: f64 },

    #[error("seed value is not finite: {value}")]
    NonFiniteSeed { value: f64 },

    #[error("step must be positive and finite, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("function is undefined or non-finite at interval endpoint x = {x}")]
    UndefinedAtEndpoint { x: f64 },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is {n}x{n} but the right-hand side has {len} entries")]
    DimensionMismatch { n: usize, len: usize },

    #[error("system is empty")]
    EmptySystem,

    #[error("invalid config: {reason}")]
    Config { reason: &'static str },
}

/// The problem is structurally unsolvable by the chosen method.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumericalFailure {
    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("function is undefined or non-finite at x = {x}")]
    UndefinedSample { x: f64 },

    #[error("derivative is near zero at x = {x}")]
    DerivativeNearZero { x: f64 },

    #[error("secant is flat: f({x0}) and f({x1}) are numerically equal")]
    FlatSecant { x0: f64, x1: f64 },

    #[error("integral estimate became non-finite; the integrand may diverge on the interval")]
    DivergentIntegral,

    #[error("matrix is singular or nearly singular: pivot {pivot:e} in column {column}")]
    SingularPivot { pivot: f64, column: usize },

    #[error("matrix is not strictly diagonally dominant (first offending row: {row})")]
    NotDiagonallyDominant { row: usize },
}

/// An iterate ran away or became non-finite mid-computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DivergenceError {
    #[error("iterate grew without bound: {value:e} at iteration {iteration}")]
    Runaway { value: f64, iteration: usize },

    #[error("estimate became non-finite at iteration {iteration}")]
    NonFinite { iteration: usize },
}

/// The outcome of a `solve` call.
///
/// Only [`Status::Converged`] counts as success. [`Status::IterationLimit`]
/// and [`Status::Stalled`] are soft outcomes: the last iterate is still
/// reported as the solution. The remaining variants wrap the error taxonomy
/// and usually leave the solution empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The stopping criterion was met strictly within tolerance.
    Converged,
    /// The iteration or refinement cap was reached first.
    IterationLimit { limit: usize },
    /// Successive error values stopped decreasing (cycle/plateau guard).
    Stalled { at: usize },
    /// Rejected before iterating.
    Input(InputError),
    /// The method cannot solve this problem.
    Failed(NumericalFailure),
    /// The iteration ran away.
    Diverged(DivergenceError),
}

impl Status {
    /// Whether this status counts as convergence.
    #[must_use]
    pub fn converged(&self) -> bool {
        matches!(self, Status::Converged)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged => write!(f, "converged within tolerance"),
            Status::IterationLimit { limit } => {
                write!(f, "stopping criterion not met within the cap of {limit}")
            }
            Status::Stalled { at } => {
                write!(f, "stalled at iteration {at}: error stopped decreasing")
            }
            Status::Input(e) => write!(f, "{e}"),
            Status::Failed(e) => write!(f, "{e}"),
            Status::Diverged(e) => write!(f, "{e}"),
        }
    }
}
