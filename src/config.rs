use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub daily_limit: u32,
}

#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub http_client_timeout: Duration,
    pub ai: AiConfig,
    pub image_host: ImageHostConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment. JWT and Argon2 settings are read by their own adapters.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: try_load("HOST", "127.0.0.1")?,
            port: try_load("PORT", "8080")?,
            run_migrations: try_load("RUN_MIGRATIONS", "false")?,
            http_client_timeout: Duration::from_secs(try_load("HTTP_CLIENT_TIMEOUT_SECS", "10")?),
            ai: AiConfig {
                api_url: try_load(
                    "AI_API_URL",
                    "https://api.openai.com/v1/chat/completions",
                )?,
                api_key: required("AI_API_KEY")?,
                model: try_load("AI_MODEL", "gpt-4o-mini")?,
                daily_limit: try_load("AI_DAILY_LIMIT", "200")?,
            },
            image_host: ImageHostConfig {
                upload_url: try_load("IMAGE_HOST_URL", "https://api.imgbb.com/1/upload")?,
                api_key: required("IMAGE_HOST_API_KEY")?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_uses_default_when_unset() {
        let port: u16 = try_load("STASH_TEST_UNSET_PORT", "8088").unwrap();
        assert_eq!(port, 8088);
    }

    #[test]
    fn test_try_load_rejects_unparsable_default() {
        let result: Result<u16, _> = try_load("STASH_TEST_UNSET_BAD", "not-a-number");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "STASH_TEST_UNSET_BAD",
                ..
            })
        ));
    }

    #[test]
    fn test_required_reports_missing_key() {
        let result = required("STASH_TEST_DEFINITELY_MISSING");
        assert!(matches!(
            result,
            Err(ConfigError::Missing("STASH_TEST_DEFINITELY_MISSING"))
        ));
    }
}
