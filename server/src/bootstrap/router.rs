use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    },
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::bootstrap::state::AppState;
use pictrim_adapters::incoming::http_axum::routes::build_application_router;

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

pub fn create_router(state: AppState) -> Router {
    let adapters_state = state.to_adapters_state();
    let cors = cors_layer(adapters_state.config.server.cors_origin.as_deref());

    build_application_router(&adapters_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(adapters_state)
}

fn cors_layer(configured_origin: Option<&str>) -> CorsLayer {
    let origin = configured_origin
        .and_then(|o| o.parse::<HeaderValue>().ok())
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_ORIGIN));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            ACCEPT,
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}
