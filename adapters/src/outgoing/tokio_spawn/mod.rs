use std::future::Future;
use std::pin::Pin;

use tokio::task::spawn_blocking;

use pictrim_application::{
    error::{AppError, AppResult},
    ports::outgoing::blocking_task::{BlockingTaskPort, PipelineTask},
    processing::commands::PipelineOutput,
};

/// Runs pipeline invocations on tokio's blocking pool so each request gets
/// its own schedulable unit of execution.
pub struct TokioBlockingTaskAdapter;

impl TokioBlockingTaskAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioBlockingTaskAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockingTaskPort for TokioBlockingTaskAdapter {
    fn run_pipeline(
        &self,
        task: PipelineTask,
    ) -> Pin<Box<dyn Future<Output = AppResult<PipelineOutput>> + Send + 'static>> {
        Box::pin(async move {
            spawn_blocking(task)
                .await
                .map_err(|e| AppError::TaskError {
                    message: format!("Blocking pipeline task failed: {e}"),
                })?
        })
    }
}
