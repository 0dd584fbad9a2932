use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use pictrim_application::error::AppError;

use crate::incoming::http_axum::error_mapper::HttpError;
use crate::shared::app_state::AppState;

/// Gate for the processing routes: the caller must present the configured
/// API token as `Authorization: Bearer <token>`. Runs before any upload
/// handling, so unauthenticated requests never reach the pipeline.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header) = header else {
        return Err(HttpError(AppError::AuthError {
            message: "Authorization header missing".to_string(),
        }));
    };

    let Some(token) = header.strip_prefix("Bearer ") else {
        return Err(HttpError(AppError::AuthError {
            message: "Invalid authorization format. Use: Bearer <token>".to_string(),
        }));
    };

    if token != state.config.auth.api_token() {
        return Err(HttpError(AppError::AuthError {
            message: "Invalid token".to_string(),
        }));
    }

    Ok(next.run(request).await)
}
