//! Aggregation run parameters

use serde::{Deserialize, Serialize};

/// Number of orderings drawn when permutation sampling is enabled without an
/// explicit count
pub const DEFAULT_PERMUTATIONS: usize = 10;

/// Tunables for one aggregation run.
///
/// Oracle-side settings (endpoint, separator token, beam width) belong to
/// the oracle adapter, not here; these parameters only steer the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationParams {
    /// Whether to explore random input orderings per task
    pub use_permutations: bool,
    /// Number of distinct orderings to draw; `None` keeps the input order
    pub n_permutations: Option<usize>,
    /// Base seed for permutation sampling; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl SummarizationParams {
    /// Enable permutation sampling with the given count
    pub fn with_permutations(mut self, count: usize) -> Self {
        self.use_permutations = true;
        self.n_permutations = Some(count);
        self
    }

    /// Fix the sampling seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
