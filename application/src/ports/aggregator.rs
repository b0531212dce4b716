//! Text aggregation port (delegate strategy contract)
//!
//! A text aggregation strategy is anything that turns many answer records
//! into one text per task. The summarize-tasks use case both consumes this
//! contract (as its optional delegate reducer) and implements it, so
//! strategies can be nested arbitrarily.

use async_trait::async_trait;
use crowdsum_domain::{AggregationResult, AnswerRecord};
use thiserror::Error;

/// Opaque failure from an aggregation strategy.
///
/// Delegate failure modes pass through the caller unchanged.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct AggregatorError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl AggregatorError {
    /// Wrap any error as an opaque aggregator failure
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

/// A text aggregation strategy: many records in, one text per task out
#[async_trait]
pub trait TextAggregator: Send + Sync {
    /// Aggregate records into one final text per task
    async fn aggregate(
        &self,
        records: Vec<AnswerRecord>,
    ) -> Result<AggregationResult, AggregatorError>;
}
