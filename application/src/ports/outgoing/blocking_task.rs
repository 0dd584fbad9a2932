use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppResult;
use crate::processing::commands::PipelineOutput;

pub type PipelineTask = Box<dyn FnOnce() -> AppResult<PipelineOutput> + Send + 'static>;

/// Runs one CPU-bound pipeline invocation off the async scheduler so that
/// decode/resample/encode work never stalls unrelated requests.
pub trait BlockingTaskPort: Send + Sync {
    fn run_pipeline(
        &self,
        task: PipelineTask,
    ) -> Pin<Box<dyn Future<Output = AppResult<PipelineOutput>> + Send + 'static>>;
}

pub type DynBlockingTaskPort = Arc<dyn BlockingTaskPort>;
