//! Composite Simpson rule.

use numex_core::Function;

use super::{refine, Config, QuadReport, SEGMENT_CEILING};

const METHOD: &str = "simpson";

/// Integrates `f` over `[a, b]` with the composite Simpson rule
/// (weights 1, 4, 2, 4, ..., 4, 1), doubling the segment count until
/// successive estimates agree. The segment count is kept even.
#[must_use]
pub fn solve(f: &impl Function, a: f64, b: f64, config: &Config) -> QuadReport {
    refine(METHOD, a, b, config, 2, SEGMENT_CEILING, true, |n| {
        estimate(f, a, b, n)
    })
}

fn estimate(f: &impl Function, a: f64, b: f64, n: usize) -> Option<f64> {
    // Simpson needs an even segment count; the driver doubles from 2, but
    // guard anyway so the weights stay paired.
    let n = if n % 2 == 0 { n } else { n + 1 };

    let h = (b - a) / n as f64;
    let mut sum = f.sample(a)? + f.sample(b)?;
    for i in 1..n {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f.sample(a + i as f64 * h)?;
    }
    Some(h / 3.0 * sum)
}
