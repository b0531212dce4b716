//! Answer records, task grouping, and the final result mapping

pub mod group;
pub mod record;
pub mod result;
