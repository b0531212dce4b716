//! Infrastructure layer for crowdsum
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP summarization oracle, configuration file
//! loading, and JSONL answer record loading.

pub mod config;
pub mod oracle;
pub mod records;

// Re-export commonly used types
pub use config::{ConfigLoader, FileAggregationConfig, FileConfig};
pub use oracle::http::{HttpOracleConfig, HttpSummarizationOracle};
pub use records::jsonl::{RecordReadError, read_jsonl_records};
