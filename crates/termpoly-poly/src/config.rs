//! Arithmetic configuration.

/// Default magnitude at or below which a coefficient counts as zero.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default number of cross terms at which multiplication goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Tolerance and parallelism settings for polynomial arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolyConfig {
    /// Coefficients with magnitude `<= epsilon` are pruned.
    pub epsilon: f64,
    /// Minimum `|A| * |B|` for which multiplication uses rayon.
    pub parallel_threshold: usize,
}

impl Default for PolyConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PolyConfig {
    /// Returns a copy with the given zero tolerance.
    ///
    /// Negative or NaN values are clamped to 0.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = if epsilon.is_nan() { 0.0 } else { epsilon.max(0.0) };
        self
    }

    /// Returns a copy with the given parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns a copy that never multiplies in parallel.
    #[must_use]
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    /// Returns true if `c` is treated as zero.
    #[must_use]
    pub fn is_zero(&self, c: f64) -> bool {
        c.abs() <= self.epsilon
    }
}
