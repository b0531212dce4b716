//! Final aggregation result mapping

use super::record::TaskId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from task id to its single aggregated text.
///
/// The only output of an aggregation run. Keys are unique and keep the order
/// in which tasks first appeared in the input, so results stay stable and
/// diffable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationResult {
    entries: IndexMap<TaskId, String>,
}

impl AggregationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the aggregated text for a task
    pub fn insert(&mut self, task: TaskId, text: impl Into<String>) {
        self.entries.insert(task, text.into());
    }

    /// Look up the aggregated text for a task
    pub fn get(&self, task: &str) -> Option<&str> {
        self.entries.get(task).map(String::as_str)
    }

    /// Number of aggregated tasks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result holds no tasks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen task order
    pub fn iter(&self) -> impl Iterator<Item = (&TaskId, &str)> {
        self.entries.iter().map(|(task, text)| (task, text.as_str()))
    }

    /// Consume and return the underlying map
    pub fn into_inner(self) -> IndexMap<TaskId, String> {
        self.entries
    }
}
