use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

static REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Tags every request with an id (the caller's, or a fresh v4 UUID), echoes
/// it back on the response, and spans the processing routes with it.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = incoming_id(request.headers()).unwrap_or_else(mint_id);
    set_id(request.headers_mut(), &request_id);

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let traced = path.starts_with("/image/");

    let span = info_span!("request", id = %request_id, %method, %path);
    let mut response = next.run(request).instrument(span).await;

    set_id(response.headers_mut(), &request_id);
    if traced {
        info!(
            id = %request_id,
            status = %response.status(),
            %method,
            %path,
            "Image request completed"
        );
    }
    response
}

fn incoming_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(&REQUEST_ID)?;
    value.to_str().ok().map(ToString::to_string)
}

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

fn set_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert(&REQUEST_ID, value);
    }
}
