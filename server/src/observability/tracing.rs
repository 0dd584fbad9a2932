use std::{error::Error, io::stdout};

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pictrim_application::infrastructure_config::{Config, LogFormat};

const SERVICE_NAME: &str = "pictrim-backend";

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// level; the output format follows `logging.format`.
pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    match config.logging.format {
        LogFormat::Json => init_bunyan(filter),
        LogFormat::Pretty => init_pretty(filter, config.logging.include_location),
    }

    Ok(())
}

fn init_bunyan(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(SERVICE_NAME.to_string(), stdout))
        .init();
}

fn init_pretty(filter: EnvFilter, include_location: bool) {
    let builder = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_thread_ids(true)
        .with_env_filter(filter);

    if include_location {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.init();
    }
}
