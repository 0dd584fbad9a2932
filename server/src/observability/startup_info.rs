use pictrim_application::infrastructure_config::Config;
use tracing::info;

/// One-time startup banner: where the docs live and which knobs are active.
pub fn announce(config: &Config) {
    let base_url = format!("http://{}", config.server_address());

    info!("Swagger UI: {}/docs", base_url);
    info!("OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    info!(
        environment = %config.environment.env,
        max_upload_bytes = config.upload.max_upload_bytes,
        "Bearer token required on /image routes"
    );
}
