//! Secant method: Newton's step with the slope taken between two iterates.

use numex_core::{DivergenceError, Function, InputError, NumericalFailure, Status};

use super::{Config, RootDetail, RootRecord, RootReport, RUNAWAY};

const METHOD: &str = "secant";

/// Two samples closer in value than this make the secant slope unusable.
const FLAT_TOL: f64 = 1e-15;

/// Finds a root of `f` from the two seed points `x0` and `x1`.
///
/// Fails before stepping if the two function values are numerically equal,
/// which would collapse the secant slope into a division by zero. Shares
/// the divergence guard with Newton's method.
#[must_use]
pub fn solve(f: &impl Function, x0: f64, x1: f64, config: &Config) -> RootReport {
    if let Err(reason) = config.validate() {
        return reject(Status::Input(InputError::Config { reason }));
    }
    for seed in [x0, x1] {
        if !seed.is_finite() {
            return reject(Status::Input(InputError::NonFiniteSeed { value: seed }));
        }
    }

    let Some(mut f_prev) = f.sample(x0) else {
        return reject(Status::Failed(NumericalFailure::UndefinedSample { x: x0 }));
    };
    let Some(mut f_curr) = f.sample(x1) else {
        return reject(Status::Failed(NumericalFailure::UndefinedSample { x: x1 }));
    };

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut trace: Vec<RootRecord> = Vec::new();

    for iteration in 1..=config.max_iterations {
        if (f_curr - f_prev).abs() < FLAT_TOL {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::FlatSecant { x0: x_prev, x1: x_curr }),
                None,
                trace,
                Some(f_curr.abs()),
            );
        }

        let next = x_curr - (x_curr - x_prev) * f_curr / (f_curr - f_prev);

        if !next.is_finite() {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::NonFinite { iteration }),
                None,
                trace,
                Some(f_curr.abs()),
            );
        }
        if next.abs() > RUNAWAY {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::Runaway { value: next, iteration }),
                None,
                trace,
                Some(f_curr.abs()),
            );
        }

        let error = (next - x_curr).abs();
        trace.push(RootRecord {
            iteration,
            x: x_curr,
            fx: f_curr,
            error,
            detail: RootDetail::Secant { next },
        });

        if error < config.precision || f_curr.abs() < config.precision {
            let residual = f.sample(next).map(f64::abs);
            return RootReport::new(METHOD, Status::Converged, Some(next), trace, residual);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = next;
        f_curr = match f.sample(x_curr) {
            Some(value) => value,
            None => {
                return RootReport::new(
                    METHOD,
                    Status::Failed(NumericalFailure::UndefinedSample { x: x_curr }),
                    None,
                    trace,
                    None,
                );
            }
        };
    }

    RootReport::new(
        METHOD,
        Status::IterationLimit {
            limit: config.max_iterations,
        },
        Some(x_curr),
        trace,
        Some(f_curr.abs()),
    )
}

fn reject(status: Status) -> RootReport {
    RootReport::new(METHOD, status, None, Vec::new(), None)
}
