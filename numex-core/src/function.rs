use thiserror::Error;

/// The input lies outside the function's support.
///
/// Raised by an evaluator for inputs where the underlying expression is
/// undefined, such as the logarithm of a negative number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("function is undefined at x = {x}")]
pub struct DomainError {
    /// The abscissa at which evaluation failed.
    pub x: f64,
}

impl DomainError {
    /// Creates a domain error for the given abscissa.
    #[must_use]
    pub fn at(x: f64) -> Self {
        Self { x }
    }
}

/// A single-variable numeric evaluator, `x -> f(x)`.
///
/// This is the handle a caller hands to the root-finding and quadrature
/// solvers. Plain closures implement it automatically; evaluators with a
/// restricted domain implement it directly (or use [`TryFunction`]) and
/// return [`DomainError`] where they are undefined.
///
/// Solvers never call [`eval`](Function::eval) themselves. They go through
/// [`sample`](Function::sample), which folds a `DomainError` and a
/// non-finite return into the same outcome, so the two failure channels are
/// indistinguishable downstream.
pub trait Function {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when `x` lies outside the function's
    /// support.
    fn eval(&self, x: f64) -> Result<f64, DomainError>;

    /// Evaluates at `x`, treating domain errors and non-finite values alike.
    fn sample(&self, x: f64) -> Option<f64> {
        match self.eval(x) {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self(x))
    }
}

/// Adapter that lifts a fallible closure into a [`Function`].
///
/// Closures returning a bare `f64` implement [`Function`] on their own;
/// this wrapper is for closures that want to report a [`DomainError`]
/// explicitly rather than returning `NAN`.
pub struct TryFunction<F>(pub F);

impl<F> Function for TryFunction<F>
where
    F: Fn(f64) -> Result<f64, DomainError>,
{
    fn eval(&self, x: f64) -> Result<f64, DomainError> {
        (self.0)(x)
    }
}

/// The right-hand side of a first-order ODE, `y' = f(x, y)`.
///
/// Same contract as [`Function`], extended to the two-variable form the
/// ODE integrators need.
pub trait OdeFunction {
    /// Evaluates the right-hand side at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when `(x, y)` lies outside the function's
    /// support.
    fn eval(&self, x: f64, y: f64) -> Result<f64, DomainError>;

    /// Evaluates at `(x, y)`, treating domain errors and non-finite values
    /// alike.
    fn sample(&self, x: f64, y: f64) -> Option<f64> {
        match self.eval(x, y) {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}

impl<F> OdeFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> Result<f64, DomainError> {
        Ok(self(x, y))
    }
}
