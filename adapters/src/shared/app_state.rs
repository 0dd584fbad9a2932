use std::sync::Arc;

use pictrim_application::infrastructure_config::Config;
use pictrim_application::ports::incoming::process::ProcessImageUseCase;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub process_image_service: Arc<dyn ProcessImageUseCase + Send + Sync>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: Arc<Config>,
        process_image_service: Arc<dyn ProcessImageUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            process_image_service,
        }
    }
}
