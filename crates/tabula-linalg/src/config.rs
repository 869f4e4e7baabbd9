//! Tuning knobs for the solver and the parallel kernels.

use crate::rounding::ROUNDING_DIGIT_CUTOFF;

/// Configuration for data-parallel cell computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum row count before work is spread over the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl ParallelConfig {
    /// A configuration that always runs sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns true if a matrix with `rows` rows should be processed in parallel.
    #[must_use]
    pub fn use_parallel(&self, rows: usize) -> bool {
        rows >= self.parallel_threshold
    }
}

/// Configuration for [`LinearSystem`](crate::solve::LinearSystem).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Decimal digits to round the solution to, or `None` to keep it raw.
    pub rounding: Option<u32>,
    /// Parallelism used by the inverse computations.
    pub parallel: ParallelConfig,
}

impl SolverConfig {
    /// Rounds solutions to [`ROUNDING_DIGIT_CUTOFF`] digits.
    #[must_use]
    pub fn rounded() -> Self {
        Self {
            rounding: Some(ROUNDING_DIGIT_CUTOFF),
            ..Self::default()
        }
    }
}
