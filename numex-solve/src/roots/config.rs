/// Configuration shared by all root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stopping tolerance for both the step size and the residual.
    pub precision: f64,
    /// Iteration cap; reaching it is a soft outcome that keeps the last
    /// iterate.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 1e-6,
            max_iterations: 100,
        }
    }
}

impl Config {
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
