//! Monte Carlo quadrature: uniform sampling over the interval.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use numex_core::Function;

use super::{refine, Config, QuadReport, SAMPLE_CEILING};

const METHOD: &str = "monte_carlo";

/// Sample count for the first pass.
const INITIAL_SAMPLES: usize = 10_000;

/// Integrates `f` over `[a, b]` by averaging uniform random samples,
/// doubling the sample count until successive estimates agree.
///
/// The refinement sequence is stochastic, so the convergence test is the
/// same change-between-passes check the deterministic rules use, just with
/// noisier inputs; [`Config::monte_carlo`] provides suitably looser
/// defaults. Each call draws from its own freshly seeded generator, so
/// concurrent solves never share randomness.
#[must_use]
pub fn solve(f: &impl Function, a: f64, b: f64, config: &Config) -> QuadReport {
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    run(f, a, b, config, &mut rng)
}

/// Same as [`solve`], but with a fixed seed for reproducible runs.
#[must_use]
pub fn solve_seeded(f: &impl Function, a: f64, b: f64, config: &Config, seed: u64) -> QuadReport {
    let mut rng = SmallRng::seed_from_u64(seed);
    run(f, a, b, config, &mut rng)
}

fn run(f: &impl Function, a: f64, b: f64, config: &Config, rng: &mut SmallRng) -> QuadReport {
    refine(METHOD, a, b, config, INITIAL_SAMPLES, SAMPLE_CEILING, false, |n| {
        estimate(f, a, b, n, rng)
    })
}

fn estimate(f: &impl Function, a: f64, b: f64, n: usize, rng: &mut SmallRng) -> Option<f64> {
    let mut sum = 0.0;
    for _ in 0..n {
        let x = rng.random_range(a..b);
        sum += f.sample(x)?;
    }
    Some((b - a) * sum / n as f64)
}
