//! Summarization oracle port
//!
//! Defines the interface to the external generative model that fuses an
//! ordered list of texts into one output text.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a summarization oracle invocation.
///
/// The core never retries a failed invocation; retry policy, if any, belongs
/// to the adapter behind the port.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed oracle response: {0}")]
    InvalidResponse(String),

    #[error("Oracle request timed out")]
    Timeout,
}

/// Oracle producing one synthesized text from an ordered list of input texts.
///
/// Implementations (adapters) live in the infrastructure layer. The output
/// is deterministic given identical ordered input and fixed oracle state; a
/// call may be expensive (model inference), and the adapter owns its own
/// concurrency limits and timeouts. Input order matters: that sensitivity
/// is exactly what permutation sampling probes.
#[async_trait]
pub trait SummarizationOracle: Send + Sync {
    /// Generate the aggregate text for one ordering of a task's answers
    async fn generate(&self, ordered_texts: &[String]) -> Result<String, OracleError>;
}
