//! Configuration file structures (`crowdsum.toml`)
//!
//! Example configuration:
//!
//! ```toml
//! [oracle]
//! endpoint = "http://gpu-box:8080/generate"
//! separator = " | "
//! num_beams = 16
//!
//! [aggregation]
//! use_permutations = true
//! n_permutations = 10
//! seed = 42
//! ```

mod loader;

pub use loader::ConfigLoader;

use crate::oracle::http::HttpOracleConfig;
use crowdsum_application::{DEFAULT_PERMUTATIONS, SummarizationParams};
use serde::{Deserialize, Serialize};

/// Root configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `[oracle]` section: generation endpoint settings
    pub oracle: HttpOracleConfig,
    /// `[aggregation]` section: permutation controls
    pub aggregation: FileAggregationConfig,
}

/// Aggregation configuration from TOML (`[aggregation]` section)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAggregationConfig {
    /// Whether to explore random input orderings per task
    pub use_permutations: bool,
    /// Number of distinct orderings to draw per task
    pub n_permutations: Option<usize>,
    /// Base seed for reproducible sampling
    pub seed: Option<u64>,
}

impl FileAggregationConfig {
    /// Convert into use-case parameters.
    ///
    /// Enabling permutations without a count falls back to the default of
    /// ten orderings per task.
    pub fn to_params(&self) -> SummarizationParams {
        let n_permutations = if self.use_permutations {
            Some(self.n_permutations.unwrap_or(DEFAULT_PERMUTATIONS))
        } else {
            self.n_permutations
        };
        SummarizationParams {
            use_permutations: self.use_permutations,
            n_permutations,
            seed: self.seed,
        }
    }
}
