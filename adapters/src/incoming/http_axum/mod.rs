pub(crate) mod core;
pub(crate) mod error_mapper;
pub(crate) mod router_ext;

// dto and handlers stay public so the OpenAPI aggregate can reference them
pub mod dto;
#[cfg(feature = "docs")]
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;
