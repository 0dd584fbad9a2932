use crate::{
    error::AppResult,
    processing::commands::{PipelineOutput, ProcessingConfig},
};

#[async_trait::async_trait]
pub trait ProcessImageUseCase: Send + Sync {
    async fn process_image(
        &self,
        source: Vec<u8>,
        config: ProcessingConfig,
    ) -> AppResult<PipelineOutput>;
}
