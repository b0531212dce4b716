//! Progress notification port
//!
//! Reports per-task progress during an aggregation run. Implementations
//! live in the presentation layer (CLI progress bar); `NoProgress` is the
//! silent default for library use.

use crowdsum_domain::TaskId;

/// Callback for progress updates during an aggregation run
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any task is processed
    fn on_run_start(&self, total_tasks: usize);

    /// Called when one task's aggregation completes
    fn on_task_complete(&self, task: &TaskId, success: bool);

    /// Called after the last task finishes
    fn on_run_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_tasks: usize) {}
    fn on_task_complete(&self, _task: &TaskId, _success: bool) {}
    fn on_run_complete(&self) {}
}
