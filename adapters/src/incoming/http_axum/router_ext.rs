use axum::{Router, middleware};

use crate::incoming::http_axum::middleware::{
    bearer_auth::require_api_token, request_id::request_id_middleware,
};
use crate::shared::app_state::AppState;

pub trait RouterExt {
    fn with_request_id(self) -> Self;
    fn with_api_token_auth(self, state: AppState) -> Self;
}

impl RouterExt for Router<AppState> {
    fn with_request_id(self) -> Self {
        self.layer(middleware::from_fn(request_id_middleware))
    }

    fn with_api_token_auth(self, state: AppState) -> Self {
        self.layer(middleware::from_fn_with_state(state, require_api_token))
    }
}
