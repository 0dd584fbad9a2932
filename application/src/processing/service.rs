use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::ports::incoming::process::ProcessImageUseCase;
use crate::ports::outgoing::{blocking_task::DynBlockingTaskPort, image_codec::DynImageCodecPort};

use super::commands::{PipelineOutput, ProcessingConfig};
use super::pipeline::Pipeline;

pub struct ImageServiceDeps {
    pub codec_port: DynImageCodecPort,
    pub blocking_task_port: DynBlockingTaskPort,
}

/// Stateless entry point for image processing. Each invocation hands the
/// synchronous pipeline to the blocking-task port, so concurrent requests
/// stay isolated and the async scheduler stays responsive.
pub struct ImageService {
    pipeline: Arc<Pipeline>,
    blocking_task_port: DynBlockingTaskPort,
}

impl ImageService {
    #[must_use]
    pub fn new(deps: ImageServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            pipeline: Arc::new(Pipeline::new(deps.codec_port)),
            blocking_task_port: deps.blocking_task_port,
        })
    }
}

#[async_trait::async_trait]
impl ProcessImageUseCase for ImageService {
    #[instrument(skip(self, source), fields(source_bytes = source.len()))]
    async fn process_image(
        &self,
        source: Vec<u8>,
        config: ProcessingConfig,
    ) -> AppResult<PipelineOutput> {
        let pipeline = Arc::clone(&self.pipeline);
        let output = self
            .blocking_task_port
            .run_pipeline(Box::new(move || pipeline.run(&source, &config)))
            .await?;

        debug!(
            format = %output.result.file_format,
            width = output.result.width,
            height = output.result.height,
            size_bytes = output.result.file_size_bytes,
            "Pipeline completed"
        );

        Ok(output)
    }
}
