//! Grouping answer records by task

use super::record::{AnswerRecord, TaskId};
use indexmap::IndexMap;

/// The texts belonging to one task, in first-seen order.
///
/// The insertion order is significant: it is the identity ordering used when
/// permutation sampling is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    id: TaskId,
    texts: Vec<String>,
}

impl TaskGroup {
    /// Create an empty group for the given task
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            texts: Vec::new(),
        }
    }

    /// Append a text, keeping insertion order
    pub fn push(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
    }

    /// The task this group belongs to
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// The texts in first-seen order
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Number of texts in the group
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the group has no texts
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Group records by task id.
///
/// Both the order of the groups and the order of texts within each group
/// follow first appearance in the input. Every record contributes to exactly
/// one group.
pub fn group_by_task(records: &[AnswerRecord]) -> Vec<TaskGroup> {
    let mut groups: IndexMap<TaskId, TaskGroup> = IndexMap::new();
    for record in records {
        groups
            .entry(record.task.clone())
            .or_insert_with(|| TaskGroup::new(record.task.clone()))
            .push(record.text.clone());
    }
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(task: &str, text: &str) -> AnswerRecord {
        AnswerRecord::new(task, "w", text)
    }

    #[test]
    fn test_group_by_task_preserves_text_order() {
        let records = vec![record("t1", "red"), record("t1", "blue")];
        let groups = group_by_task(&records);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id().as_str(), "t1");
        assert_eq!(groups[0].texts(), ["red", "blue"]);
    }

    #[test]
    fn test_group_by_task_interleaved() {
        let records = vec![
            record("t1", "a"),
            record("t2", "x"),
            record("t1", "b"),
            record("t2", "y"),
        ];
        let groups = group_by_task(&records);

        assert_eq!(groups.len(), 2);
        // Groups come out in first-seen task order.
        assert_eq!(groups[0].id().as_str(), "t1");
        assert_eq!(groups[0].texts(), ["a", "b"]);
        assert_eq!(groups[1].id().as_str(), "t2");
        assert_eq!(groups[1].texts(), ["x", "y"]);
    }

    #[test]
    fn test_group_by_task_empty_input() {
        assert!(group_by_task(&[]).is_empty());
    }

    #[test]
    fn test_task_group_push() {
        let mut group = TaskGroup::new("t1");
        assert!(group.is_empty());

        group.push("one");
        group.push("two");
        assert_eq!(group.len(), 2);
        assert_eq!(group.texts(), ["one", "two"]);
    }
}
