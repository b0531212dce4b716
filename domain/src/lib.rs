//! Domain layer for crowdsum
//!
//! This crate contains the core types and algorithms for crowd-sourced text
//! aggregation: answer records, task grouping, permutation sampling, and
//! plurality-vote reduction. It has no I/O and no async; the summarization
//! oracle itself is a port defined in the application layer.

pub mod answer;
pub mod core;
pub mod sampling;
pub mod vote;

// Re-export commonly used types
pub use answer::{
    group::{TaskGroup, group_by_task},
    record::{AnswerRecord, TaskId, WorkerId},
    result::AggregationResult,
};
pub use core::error::DomainError;
pub use sampling::{permutation::Permutation, sampler::PermutationSampler};
pub use vote::plurality::plurality_vote;
