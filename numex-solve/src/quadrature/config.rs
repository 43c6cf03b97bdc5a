/// Configuration shared by all quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Convergence threshold on the change between successive estimates.
    pub precision: f64,
    /// Cap on the number of refinement (doubling) passes.
    pub max_refinements: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 1e-6,
            max_refinements: 20,
        }
    }
}

impl Config {
    /// Looser defaults suited to the stochastic rule, whose estimate
    /// sequence fluctuates by sampling noise.
    #[must_use]
    pub fn monte_carlo() -> Self {
        Self {
            precision: 1e-4,
            max_refinements: 15,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a reason string if the precision is not finite and positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err("precision must be finite and positive");
        }
        Ok(())
    }
}
