//! Solver configuration

/// Default bound on propagation passes
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Tunables for the propagation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of narrowing passes before giving up
    pub max_iterations: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
