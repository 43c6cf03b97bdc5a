//! Composite trapezoid rule.

use numex_core::Function;

use super::{refine, Config, QuadReport, SEGMENT_CEILING};

const METHOD: &str = "trapezoid";

/// Integrates `f` over `[a, b]` with trapezoids, doubling the segment
/// count until successive estimates agree.
#[must_use]
pub fn solve(f: &impl Function, a: f64, b: f64, config: &Config) -> QuadReport {
    refine(METHOD, a, b, config, 1, SEGMENT_CEILING, true, |n| {
        estimate(f, a, b, n)
    })
}

fn estimate(f: &impl Function, a: f64, b: f64, n: usize) -> Option<f64> {
    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f.sample(a)? + f.sample(b)?);
    for i in 1..n {
        sum += f.sample(a + i as f64 * h)?;
    }
    Some(h * sum)
}
