use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use pictrim_application::error::AppError;

/// Newtype bridging `AppError` onto the HTTP surface. Client faults keep
/// their message; server faults are collapsed to a generic line so internals
/// never leak into responses.
pub struct HttpError(pub AppError);

impl HttpError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::Domain(_) | AppError::DecodeError { .. } => StatusCode::BAD_REQUEST,
            AppError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AuthError { .. } => StatusCode::UNAUTHORIZED,
            AppError::ProcessingError { .. }
            | AppError::ConfigError { .. }
            | AppError::TaskError { .. }
            | AppError::IoError(_)
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match &self.0 {
            AppError::ProcessingError { .. } => "Image processing failed".to_string(),
            AppError::ConfigError { .. } => "Configuration error".to_string(),
            AppError::TaskError { .. } | AppError::IoError(_) | AppError::InternalServerError => {
                "Internal server error".to_string()
            }
            client_fault => client_fault.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Server error response generated: {}", self.0);
        } else {
            debug!("Client error response generated: {}", self.0);
        }

        let body = json!({
            "ok": false,
            "error": self.public_message(),
            "status": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
