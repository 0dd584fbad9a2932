use std::fs;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use tracing::info;

use pictrim_application::error::{AppError, AppResult};
use pictrim_application::infrastructure_config::Config;

const TOML_FILE: &str = "config.toml";
const JSON_FILE: &str = "config.json";
const ENV_PREFIX: &str = "PICTRIM_";

pub fn load_config() -> AppResult<Config> {
    bootstrap_env_file()?;

    let config: Config = layered().extract().map_err(|e| AppError::ConfigError {
        message: format!("Failed to load configuration: {e}"),
    })?;

    config.validate()?;
    Ok(config)
}

/// Defaults, then `config.toml`, then `config.json`, then `PICTRIM_*`
/// environment variables with `__` separating nested keys. Later layers win.
fn layered() -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new(TOML_FILE).exists() {
        figment = figment.merge(Toml::file(TOML_FILE));
    }
    if Path::new(JSON_FILE).exists() {
        figment = figment.merge(Json::file(JSON_FILE));
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// First-run convenience: seed `.env` from the checked-in template so the
/// token has an obvious home. `.env` itself stays gitignored.
fn bootstrap_env_file() -> AppResult<()> {
    let example = Path::new(".env.example");
    if Path::new(".env").exists() || !example.exists() {
        return Ok(());
    }

    fs::copy(example, ".env").map_err(|e| AppError::ConfigError {
        message: format!("Could not seed .env from .env.example: {e}"),
    })?;

    info!("Seeded .env from .env.example; set PICTRIM_AUTH__API_TOKEN before exposing the service");
    Ok(())
}
