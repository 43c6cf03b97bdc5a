//! Classical fourth-order Runge-Kutta integration.

use numex_core::OdeFunction;

use super::{integrate, Config, OdeReport};

const METHOD: &str = "rk4";

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` with the classical
/// four-stage Runge-Kutta scheme: slopes at `x`, `x + h/2` (twice), and
/// `x + h`, combined as `(h / 6)(k1 + 2k2 + 2k3 + k4)`.
#[must_use]
pub fn solve(f: &impl OdeFunction, x0: f64, y0: f64, x_end: f64, config: &Config) -> OdeReport {
    let h = config.step;
    integrate(METHOD, x0, y0, x_end, config, |x, y| {
        let k1 = f.sample(x, y)?;
        let k2 = f.sample(x + h / 2.0, y + h * k1 / 2.0)?;
        let k3 = f.sample(x + h / 2.0, y + h * k2 / 2.0)?;
        let k4 = f.sample(x + h, y + h * k3)?;
        Some(y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    })
}
