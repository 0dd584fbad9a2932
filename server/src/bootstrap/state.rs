use std::sync::Arc;

use pictrim_adapters::outgoing::{
    image_rs::pixel_codec_image::ImageRsCodecAdapter, tokio_spawn::TokioBlockingTaskAdapter,
};
use pictrim_adapters::shared::app_state::AppState as AdaptersAppState;
use pictrim_application::infrastructure_config::Config;
use pictrim_application::ports::incoming::process::ProcessImageUseCase;
use pictrim_application::ports::outgoing::{
    blocking_task::BlockingTaskPort, image_codec::ImageCodecPort,
};
use pictrim_application::processing::service::{ImageService, ImageServiceDeps};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub image_service: Arc<ImageService>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let codec_port: Arc<dyn ImageCodecPort> = Arc::new(ImageRsCodecAdapter::new());
        let blocking_task_port: Arc<dyn BlockingTaskPort> =
            Arc::new(TokioBlockingTaskAdapter::new());

        let image_service = ImageService::new(ImageServiceDeps {
            codec_port,
            blocking_task_port,
        });

        Self {
            config,
            image_service,
        }
    }

    #[must_use]
    pub fn to_adapters_state(self) -> AdaptersAppState {
        AdaptersAppState::new(
            self.config,
            self.image_service as Arc<dyn ProcessImageUseCase + Send + Sync>,
        )
    }
}
