//! Fixed-point iteration on a relaxation map derived from `f`.

use numex_core::{DivergenceError, Function, InputError, NumericalFailure, Status};

use super::{central_difference, Config, DERIVATIVE_FLOOR, RootDetail, RootRecord, RootReport, RUNAWAY};

const METHOD: &str = "fixed_point";

/// Finds a root of `f` by iterating `phi(x) = x - f(x) / f'(x0)`.
///
/// The scaling derivative is frozen at the initial guess, so the map is a
/// relaxed Newton step with a constant slope. Fails up front if that
/// derivative is near zero; converges when the step drops below the
/// tolerance; shares the divergence guard with Newton's method.
#[must_use]
pub fn solve(f: &impl Function, x0: f64, config: &Config) -> RootReport {
    if let Err(reason) = config.validate() {
        return reject(Status::Input(InputError::Config { reason }));
    }
    if !x0.is_finite() {
        return reject(Status::Input(InputError::NonFiniteSeed { value: x0 }));
    }

    let Some(derivative) = central_difference(f, x0) else {
        return reject(Status::Failed(NumericalFailure::UndefinedSample { x: x0 }));
    };
    if derivative.abs() < DERIVATIVE_FLOOR {
        return reject(Status::Failed(NumericalFailure::DerivativeNearZero { x: x0 }));
    }
    let lambda = 1.0 / derivative;

    let mut x = x0;
    let mut trace: Vec<RootRecord> = Vec::new();

    for iteration in 1..=config.max_iterations {
        let Some(fx) = f.sample(x) else {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::UndefinedSample { x }),
                None,
                trace,
                None,
            );
        };

        let next = x - lambda * fx;

        if !next.is_finite() {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::NonFinite { iteration }),
                None,
                trace,
                Some(fx.abs()),
            );
        }
        if next.abs() > RUNAWAY {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::Runaway { value: next, iteration }),
                None,
                trace,
                Some(fx.abs()),
            );
        }

        let error = (next - x).abs();
        trace.push(RootRecord {
            iteration,
            x,
            fx,
            error,
            detail: RootDetail::Map { next },
        });

        if error < config.precision {
            let residual = f.sample(next).map(f64::abs);
            return RootReport::new(METHOD, Status::Converged, Some(next), trace, residual);
        }

        x = next;
    }

    let residual = f.sample(x).map(f64::abs);
    RootReport::new(
        METHOD,
        Status::IterationLimit {
            limit: config.max_iterations,
        },
        Some(x),
        trace,
        residual,
    )
}

fn reject(status: Status) -> RootReport {
    RootReport::new(METHOD, status, None, Vec::new(), None)
}
