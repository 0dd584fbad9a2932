use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

use crate::incoming::http_axum::{
    handlers::{health::health_check, info::service_info, trim::trim_image},
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check));

    let image_routes = Router::new()
        .route("/image/trim", post(trim_image))
        .layer(DefaultBodyLimit::max(state.config.upload.max_upload_bytes))
        .with_api_token_auth(state.clone());

    let router = public_routes.merge(image_routes).with_request_id();

    #[cfg(feature = "docs")]
    {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    #[cfg(not(feature = "docs"))]
    {
        router
    }
}
