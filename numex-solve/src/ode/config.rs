/// Configuration shared by both ODE integrators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Fixed step size; must be positive.
    pub step: f64,
    /// Cap on the number of steps; reaching it before `x_end` is a soft
    /// outcome that keeps the partial trajectory.
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 0.1,
            max_steps: 1000,
        }
    }
}
