//! Application layer for crowdsum
//!
//! This crate contains the aggregation use case and port definitions.
//! It depends only on the domain layer; adapters for the ports live in the
//! infrastructure layer.

pub mod params;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use params::{DEFAULT_PERMUTATIONS, SummarizationParams};
pub use ports::{
    aggregator::{AggregatorError, TextAggregator},
    oracle::{OracleError, SummarizationOracle},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::summarize_tasks::{SYNTHETIC_TASK, SummarizeError, SummarizeTasksUseCase};
