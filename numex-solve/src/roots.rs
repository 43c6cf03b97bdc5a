//! Scalar root-finding: solve `f(x) = 0` for a single unknown.
//!
//! Four methods, one contract: each `solve` takes the function handle, its
//! seed data, and a [`Config`], and returns a [`RootReport`] whose solution
//! is the root estimate. Divergence guards are shared: an iterate whose
//! magnitude exceeds `1e10`, or that stops being finite, ends the solve
//! with a divergence status.

pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod secant;

mod config;
mod record;

pub use config::Config;
pub use record::{RootDetail, RootRecord};

use numex_core::{Function, Report};

/// Report returned by every root-finding method.
pub type RootReport = Report<f64, RootRecord>;

/// Any iterate beyond this magnitude is treated as divergence.
pub(crate) const RUNAWAY: f64 = 1e10;

/// A derivative smaller than this cannot be divided by safely.
pub(crate) const DERIVATIVE_FLOOR: f64 = 1e-10;

/// Central finite difference with a step scaled to the magnitude of `x`.
///
/// The step is `1e-7 * |x|`, floored at `1e-10`, with `|x|` replaced by one
/// at the origin so the step never collapses to zero.
pub(crate) fn central_difference(f: &impl Function, x: f64) -> Option<f64> {
    let scale = if x == 0.0 { 1.0 } else { x.abs() };
    let h = (1e-7 * scale).max(1e-10);
    let above = f.sample(x + h)?;
    let below = f.sample(x - h)?;
    Some((above - below) / (2.0 * h))
}
