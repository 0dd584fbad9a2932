use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_token: SecretString,
}

// Serializes the token as an empty string: the secret never leaves the
// process, and the figment defaults round-trip stays an empty placeholder
// that validation will catch.
impl Serialize for AuthConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("AuthConfig", 1)?;
        state.serialize_field("api_token", "")?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for AuthConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AuthConfigHelper {
            api_token: String,
        }

        let helper = AuthConfigHelper::deserialize(deserializer)?;
        Ok(AuthConfig {
            api_token: SecretString::from(helper.api_token),
        })
    }
}

impl AuthConfig {
    #[must_use]
    pub fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
            },
            auth: AuthConfig {
                api_token: SecretString::from(String::new()),
            },
            upload: UploadConfig {
                // 25 MiB covers every realistic single-image upload.
                max_upload_bytes: 25 * 1024 * 1024,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.auth.api_token().trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "auth.api_token must be configured".to_string(),
            });
        }

        if self.upload.max_upload_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "upload.max_upload_bytes must be greater than 0".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging.level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
