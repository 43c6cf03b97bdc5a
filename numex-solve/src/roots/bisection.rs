//! Bisection: halve a sign-changing bracket until the root is pinned down.

use numex_core::{Function, InputError, NumericalFailure, Status};

use super::{Config, RootDetail, RootRecord, RootReport};

const METHOD: &str = "bisection";

/// Finds a root of `f` inside the bracket `[a, b]`.
///
/// A reversed bracket is normalized rather than rejected. If either
/// endpoint already satisfies `|f(x)| < precision`, that endpoint is
/// returned with zero iterations. Otherwise the bracket must show a sign
/// change, and each iteration keeps the half that still does.
///
/// Tie-break: when `f(left) * f(mid)` is exactly zero the midpoint replaces
/// the left bound, i.e. a zero product counts as "same sign". The rule is
/// arbitrary but deterministic.
#[must_use]
pub fn solve(f: &impl Function, a: f64, b: f64, config: &Config) -> RootReport {
    if let Err(reason) = config.validate() {
        return reject(Status::Input(InputError::Config { reason }));
    }
    if !a.is_finite() {
        return reject(Status::Input(InputError::NonFiniteSeed { value: a }));
    }
    if !b.is_finite() {
        return reject(Status::Input(InputError::NonFiniteSeed { value: b }));
    }

    let (mut left, mut right) = if a <= b { (a, b) } else { (b, a) };
    if left == right {
        return reject(Status::Input(InputError::EmptyInterval { a, b }));
    }

    let Some(f_left) = f.sample(left) else {
        return reject(Status::Input(InputError::UndefinedAtEndpoint { x: left }));
    };
    let Some(f_right) = f.sample(right) else {
        return reject(Status::Input(InputError::UndefinedAtEndpoint { x: right }));
    };

    // Either endpoint may already be a root; no iteration needed.
    if f_left.abs() < config.precision {
        return RootReport::new(METHOD, Status::Converged, Some(left), Vec::new(), Some(f_left.abs()));
    }
    if f_right.abs() < config.precision {
        return RootReport::new(
            METHOD,
            Status::Converged,
            Some(right),
            Vec::new(),
            Some(f_right.abs()),
        );
    }

    if f_left * f_right > 0.0 {
        return reject(Status::Failed(NumericalFailure::NoSignChange {
            a: left,
            b: right,
            fa: f_left,
            fb: f_right,
        }));
    }

    let mut f_active = f_left;
    let mut trace = Vec::new();

    for iteration in 1..=config.max_iterations {
        let mid = 0.5 * (left + right);
        let Some(f_mid) = f.sample(mid) else {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::UndefinedSample { x: mid }),
                None,
                trace,
                None,
            );
        };
        let error = 0.5 * (right - left);

        trace.push(RootRecord {
            iteration,
            x: mid,
            fx: f_mid,
            error,
            detail: RootDetail::Bracket { left, right },
        });

        if f_mid.abs() < config.precision || error < config.precision {
            return RootReport::new(METHOD, Status::Converged, Some(mid), trace, Some(f_mid.abs()));
        }

        if f_active * f_mid < 0.0 {
            right = mid;
        } else {
            left = mid;
            f_active = f_mid;
        }
    }

    let root = 0.5 * (left + right);
    let residual = f.sample(root).map(f64::abs);
    RootReport::new(
        METHOD,
        Status::IterationLimit {
            limit: config.max_iterations,
        },
        Some(root),
        trace,
        residual,
    )
}

fn reject(status: Status) -> RootReport {
    RootReport::new(METHOD, status, None, Vec::new(), None)
}
