//! Summarize-tasks use case
//!
//! The aggregation controller: groups answer records by task, drives
//! permutation sampling and oracle generation for each task, and reduces the
//! generated candidates into one final text per task.

use crate::params::SummarizationParams;
use crate::ports::aggregator::{AggregatorError, TextAggregator};
use crate::ports::oracle::{OracleError, SummarizationOracle};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use async_trait::async_trait;
use crowdsum_domain::{
    AggregationResult, AnswerRecord, DomainError, PermutationSampler, TaskGroup, TaskId,
    group_by_task, plurality_vote,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Synthetic task key under which candidates are grouped when they are
/// handed to a delegate strategy
pub const SYNTHETIC_TASK: &str = "";

/// Errors that can occur during an aggregation run
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Domain-level failure: empty task group or oversized sample request
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The oracle failed for one ordering; that task aborts without retry
    #[error("oracle invocation failed: {0}")]
    Oracle(#[from] OracleError),

    /// The delegate strategy failed; its error passes through unchanged
    #[error("delegate aggregation failed: {0}")]
    Delegate(#[from] AggregatorError),

    /// The delegate returned a mapping without the synthetic task key
    #[error("delegate returned no entry for the synthetic task key")]
    DelegateContract,

    /// The run was cancelled before all tasks completed
    #[error("aggregation cancelled")]
    Cancelled,

    /// A task worker panicked or was aborted mid-flight
    #[error("task worker failed: {0}")]
    Worker(String),
}

/// Aggregates crowd answers per task through a summarization oracle.
///
/// Tasks carry no ordering dependency and no shared mutable state, so each
/// task runs on its own worker; the only shared resource is the oracle,
/// which owns its own concurrency limits. Per task, the sampled orderings
/// are evaluated in order, with exactly one oracle invocation per ordering,
/// and the candidates are reduced to a single text.
///
/// The use case itself implements [`TextAggregator`], so one instance can
/// serve as the delegate reducer of another.
pub struct SummarizeTasksUseCase<O: SummarizationOracle + 'static> {
    oracle: Arc<O>,
    params: SummarizationParams,
    delegate: Option<Arc<dyn TextAggregator>>,
    cancel: CancellationToken,
}

impl<O: SummarizationOracle + 'static> SummarizeTasksUseCase<O> {
    /// Create a use case with the given oracle and parameters
    pub fn new(oracle: Arc<O>, params: SummarizationParams) -> Self {
        Self {
            oracle,
            params,
            delegate: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Reduce multi-candidate tasks through `delegate` instead of plurality
    /// vote
    pub fn with_delegate(mut self, delegate: Arc<dyn TextAggregator>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Observe `token` for cancellation.
    ///
    /// Cancellation stops at task boundaries: tasks not yet started are
    /// abandoned whole, and the run fails with [`SummarizeError::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        records: Vec<AnswerRecord>,
    ) -> Result<AggregationResult, SummarizeError> {
        self.execute_with_progress(records, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        records: Vec<AnswerRecord>,
        progress: &dyn ProgressNotifier,
    ) -> Result<AggregationResult, SummarizeError> {
        let groups = group_by_task(&records);
        let total = groups.len();

        info!("Aggregating {} tasks from {} records", total, records.len());
        progress.on_run_start(total);

        let sampler =
            PermutationSampler::new(self.params.use_permutations, self.params.n_permutations);

        let mut join_set = JoinSet::new();
        for (index, group) in groups.into_iter().enumerate() {
            let worker = TaskWorker {
                oracle: Arc::clone(&self.oracle),
                delegate: self.delegate.clone(),
                sampler,
                seed: task_seed(self.params.seed, index),
                cancel: self.cancel.clone(),
            };
            join_set.spawn(async move {
                let id = group.id().clone();
                let outcome = worker.aggregate_group(&group).await;
                (index, id, outcome)
            });
        }

        // Collect by task index so the result keeps first-seen task order
        // regardless of join order.
        let mut outputs: Vec<Option<(TaskId, String)>> = (0..total).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, id, Ok(text))) => {
                    debug!("Task '{}' aggregated", id);
                    progress.on_task_complete(&id, true);
                    outputs[index] = Some((id, text));
                }
                Ok((_, id, Err(error))) => {
                    warn!("Task '{}' failed: {}", id, error);
                    progress.on_task_complete(&id, false);
                    // Abandon the remaining tasks whole.
                    join_set.abort_all();
                    return Err(error);
                }
                Err(error) => {
                    join_set.abort_all();
                    return Err(SummarizeError::Worker(error.to_string()));
                }
            }
        }
        progress.on_run_complete();

        let mut result = AggregationResult::new();
        for (id, text) in outputs.into_iter().flatten() {
            result.insert(id, text);
        }
        Ok(result)
    }
}

#[async_trait]
impl<O: SummarizationOracle + 'static> TextAggregator for SummarizeTasksUseCase<O> {
    async fn aggregate(
        &self,
        records: Vec<AnswerRecord>,
    ) -> Result<AggregationResult, AggregatorError> {
        self.execute(records).await.map_err(AggregatorError::new)
    }
}

/// Derive a per-task seed that is stable across join order
fn task_seed(base: Option<u64>, index: usize) -> Option<u64> {
    base.map(|seed| seed.wrapping_add(index as u64))
}

/// Everything one task's aggregation needs, owned per worker
struct TaskWorker<O: SummarizationOracle + 'static> {
    oracle: Arc<O>,
    delegate: Option<Arc<dyn TextAggregator>>,
    sampler: PermutationSampler,
    seed: Option<u64>,
    cancel: CancellationToken,
}

impl<O: SummarizationOracle + 'static> TaskWorker<O> {
    /// Aggregate one task group into a single text
    async fn aggregate_group(&self, group: &TaskGroup) -> Result<String, SummarizeError> {
        if self.cancel.is_cancelled() {
            return Err(SummarizeError::Cancelled);
        }
        if group.is_empty() {
            return Err(DomainError::EmptyGroup {
                task: group.id().to_string(),
            }
            .into());
        }

        let orderings = self.sampler.sample_with_seed(group.len(), self.seed)?;
        debug!("Task '{}': evaluating {} ordering(s)", group.id(), orderings.len());

        // One oracle invocation per sampled ordering. Never memoized: two
        // orderings that concatenate identically are still two invocations.
        let mut candidates = Vec::with_capacity(orderings.len());
        for ordering in &orderings {
            let ordered = ordering.apply(group.texts());
            candidates.push(self.oracle.generate(&ordered).await?);
        }

        self.reduce(group.id(), candidates).await
    }

    /// Reduce candidates to one text: a single candidate passes through,
    /// otherwise the delegate strategy if configured, otherwise plurality
    /// vote.
    async fn reduce(
        &self,
        task: &TaskId,
        mut candidates: Vec<String>,
    ) -> Result<String, SummarizeError> {
        if candidates.len() == 1 {
            return Ok(candidates.remove(0));
        }
        if let Some(delegate) = &self.delegate {
            return self.reduce_with_delegate(delegate.as_ref(), candidates).await;
        }
        plurality_vote(&candidates)
            .map(str::to_owned)
            .ok_or_else(|| {
                DomainError::EmptyGroup {
                    task: task.to_string(),
                }
                .into()
            })
    }

    /// Hand the candidates to the delegate as synthetic single-task records
    /// and return the text it produced for the synthetic key.
    async fn reduce_with_delegate(
        &self,
        delegate: &dyn TextAggregator,
        candidates: Vec<String>,
    ) -> Result<String, SummarizeError> {
        let records = candidates
            .into_iter()
            .enumerate()
            .map(|(i, text)| AnswerRecord::new(SYNTHETIC_TASK, format!("ordering-{i}"), text))
            .collect();

        let reduced = delegate.aggregate(records).await?;
        reduced
            .get(SYNTHETIC_TASK)
            .map(str::to_owned)
            .ok_or(SummarizeError::DelegateContract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Oracle stub that joins its input with `|` and records every call
    struct JoinOracle {
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl JoinOracle {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SummarizationOracle for JoinOracle {
        async fn generate(&self, ordered_texts: &[String]) -> Result<String, OracleError> {
            self.calls.lock().unwrap().push(ordered_texts.to_vec());
            Ok(ordered_texts.join("|"))
        }
    }

    /// Oracle stub that replays a fixed sequence of outputs
    struct SequenceOracle {
        outputs: Mutex<VecDeque<String>>,
    }

    impl SequenceOracle {
        fn new(outputs: &[&str]) -> Self {
            Self {
                outputs: Mutex::new(outputs.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    #[async_trait]
    impl SummarizationOracle for SequenceOracle {
        async fn generate(&self, _ordered_texts: &[String]) -> Result<String, OracleError> {
            self.outputs
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| OracleError::RequestFailed("output sequence exhausted".into()))
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl SummarizationOracle for FailingOracle {
        async fn generate(&self, _ordered_texts: &[String]) -> Result<String, OracleError> {
            Err(OracleError::RequestFailed("boom".into()))
        }
    }

    /// Delegate stub that always answers with its first input text
    struct FirstTextDelegate;

    #[async_trait]
    impl TextAggregator for FirstTextDelegate {
        async fn aggregate(
            &self,
            records: Vec<AnswerRecord>,
        ) -> Result<AggregationResult, AggregatorError> {
            let mut result = AggregationResult::new();
            if let Some(first) = records.first() {
                result.insert(first.task.clone(), first.text.clone());
            }
            Ok(result)
        }
    }

    fn records(entries: &[(&str, &str)]) -> Vec<AnswerRecord> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (task, text))| AnswerRecord::new(*task, format!("w{i}"), *text))
            .collect()
    }

    #[tokio::test]
    async fn test_end_to_end_without_permutations() {
        let oracle = Arc::new(JoinOracle::new());
        let use_case =
            SummarizeTasksUseCase::new(Arc::clone(&oracle), SummarizationParams::default());

        let result = use_case
            .execute(records(&[("T1", "red"), ("T1", "blue"), ("T2", "green")]))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("T1"), Some("red|blue"));
        assert_eq!(result.get("T2"), Some("green"));

        // Exactly one invocation per task, each in original input order.
        let mut calls = oracle.calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                vec!["green".to_string()],
                vec!["red".to_string(), "blue".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn test_result_keeps_first_seen_task_order() {
        let oracle = Arc::new(JoinOracle::new());
        let use_case = SummarizeTasksUseCase::new(oracle, SummarizationParams::default());

        let result = use_case
            .execute(records(&[("Z", "z1"), ("A", "a1"), ("M", "m1")]))
            .await
            .unwrap();

        let order: Vec<&str> = result.iter().map(|(task, _)| task.as_str()).collect();
        assert_eq!(order, ["Z", "A", "M"]);
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_result() {
        let oracle = Arc::new(JoinOracle::new());
        let use_case = SummarizeTasksUseCase::new(oracle, SummarizationParams::default());

        let result = use_case.execute(Vec::new()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_permutations_invoke_oracle_once_per_ordering() {
        let oracle = Arc::new(JoinOracle::new());
        let params = SummarizationParams::default()
            .with_permutations(2)
            .with_seed(42);
        let use_case = SummarizeTasksUseCase::new(Arc::clone(&oracle), params);

        let result = use_case
            .execute(records(&[("T1", "red"), ("T1", "blue")]))
            .await
            .unwrap();

        let calls = oracle.calls();
        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0], calls[1]);
        // Two candidates tie, so the first-generated one wins.
        assert_eq!(result.get("T1"), Some(calls[0].join("|").as_str()));
    }

    #[tokio::test]
    async fn test_fixed_seed_is_idempotent() {
        let params = SummarizationParams::default()
            .with_permutations(3)
            .with_seed(7);
        let input = records(&[("T1", "a"), ("T1", "b"), ("T1", "c"), ("T2", "x")]);

        let first_oracle = Arc::new(JoinOracle::new());
        let first = SummarizeTasksUseCase::new(Arc::clone(&first_oracle), params.clone())
            .execute(input.clone())
            .await
            .unwrap();

        let second_oracle = Arc::new(JoinOracle::new());
        let second = SummarizeTasksUseCase::new(Arc::clone(&second_oracle), params)
            .execute(input)
            .await
            .unwrap();

        assert_eq!(first, second);

        let sort = |mut calls: Vec<Vec<String>>| {
            calls.sort();
            calls
        };
        assert_eq!(sort(first_oracle.calls()), sort(second_oracle.calls()));
    }

    #[tokio::test]
    async fn test_plurality_vote_over_candidates() {
        let oracle = Arc::new(SequenceOracle::new(&["a", "b", "a"]));
        let params = SummarizationParams::default()
            .with_permutations(3)
            .with_seed(1);
        let use_case = SummarizeTasksUseCase::new(oracle, params);

        let result = use_case
            .execute(records(&[("T1", "one"), ("T1", "two"), ("T1", "three")]))
            .await
            .unwrap();

        assert_eq!(result.get("T1"), Some("a"));
    }

    #[tokio::test]
    async fn test_delegate_reduces_candidates() {
        let oracle = Arc::new(SequenceOracle::new(&["x", "y", "z"]));
        let params = SummarizationParams::default()
            .with_permutations(3)
            .with_seed(1);
        let use_case =
            SummarizeTasksUseCase::new(oracle, params).with_delegate(Arc::new(FirstTextDelegate));

        let result = use_case
            .execute(records(&[("T1", "one"), ("T1", "two"), ("T1", "three")]))
            .await
            .unwrap();

        assert_eq!(result.get("T1"), Some("x"));
    }

    #[tokio::test]
    async fn test_use_case_nests_as_delegate() {
        // Inner strategy: plain summarization of the synthetic records.
        let inner =
            SummarizeTasksUseCase::new(Arc::new(JoinOracle::new()), SummarizationParams::default());
        let outer_oracle = Arc::new(SequenceOracle::new(&["x", "y", "z"]));
        let params = SummarizationParams::default()
            .with_permutations(3)
            .with_seed(1);
        let outer =
            SummarizeTasksUseCase::new(outer_oracle, params).with_delegate(Arc::new(inner));

        let result = outer
            .execute(records(&[("T1", "one"), ("T1", "two"), ("T1", "three")]))
            .await
            .unwrap();

        // The inner oracle fuses the three candidates in generation order.
        assert_eq!(result.get("T1"), Some("x|y|z"));
    }

    #[tokio::test]
    async fn test_oversized_permutation_count_fails() {
        let oracle = Arc::new(JoinOracle::new());
        let params = SummarizationParams::default().with_permutations(5);
        let use_case = SummarizeTasksUseCase::new(oracle, params);

        let error = use_case
            .execute(records(&[("T1", "red"), ("T1", "blue")]))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            SummarizeError::Domain(DomainError::SampleSize {
                requested: 5,
                available: 2,
            })
        ));
    }

    #[tokio::test]
    async fn test_single_text_with_permutations_never_fails() {
        let oracle = Arc::new(JoinOracle::new());
        let params = SummarizationParams::default().with_permutations(99);
        let use_case = SummarizeTasksUseCase::new(Arc::clone(&oracle), params);

        let result = use_case.execute(records(&[("T1", "only")])).await.unwrap();

        assert_eq!(result.get("T1"), Some("only"));
        assert_eq!(oracle.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_group_is_rejected() {
        let worker = TaskWorker {
            oracle: Arc::new(JoinOracle::new()),
            delegate: None,
            sampler: PermutationSampler::disabled(),
            seed: None,
            cancel: CancellationToken::new(),
        };

        let error = worker
            .aggregate_group(&TaskGroup::new("empty"))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            SummarizeError::Domain(DomainError::EmptyGroup { .. })
        ));
    }

    #[tokio::test]
    async fn test_oracle_failure_aborts_the_run() {
        let use_case =
            SummarizeTasksUseCase::new(Arc::new(FailingOracle), SummarizationParams::default());

        let error = use_case
            .execute(records(&[("T1", "red"), ("T2", "green")]))
            .await
            .unwrap_err();

        assert!(matches!(error, SummarizeError::Oracle(_)));
    }

    #[tokio::test]
    async fn test_cancelled_run_stops_at_task_boundary() {
        let token = CancellationToken::new();
        token.cancel();

        let use_case =
            SummarizeTasksUseCase::new(Arc::new(JoinOracle::new()), SummarizationParams::default())
                .with_cancellation(token);

        let error = use_case
            .execute(records(&[("T1", "red"), ("T2", "green")]))
            .await
            .unwrap_err();

        assert!(matches!(error, SummarizeError::Cancelled));
    }
}
