//! Answer record value objects

use serde::{Deserialize, Serialize};

/// Identifier of a crowdsourcing task (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Create a new task id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for TaskId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::new(s)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId::new(s)
    }
}

/// Identifier of the worker who produced an answer (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// Create a new worker id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(s: &str) -> Self {
        WorkerId::new(s)
    }
}

impl From<String> for WorkerId {
    fn from(s: String) -> Self {
        WorkerId::new(s)
    }
}

/// One worker's free-text answer to one task.
///
/// Immutable input unit of an aggregation run; multiple records share a task
/// id and are grouped together before summarization.
///
/// # Example
///
/// ```
/// use crowdsum_domain::AnswerRecord;
///
/// let record = AnswerRecord::new("t1", "w3", "a cat sat on the mat");
/// assert_eq!(record.task.as_str(), "t1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Task this answer belongs to
    pub task: TaskId,
    /// Worker who wrote the answer
    pub worker: WorkerId,
    /// The free-text answer
    pub text: String,
}

impl AnswerRecord {
    /// Create a new answer record
    pub fn new(
        task: impl Into<TaskId>,
        worker: impl Into<WorkerId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            worker: worker.into(),
            text: text.into(),
        }
    }
}
