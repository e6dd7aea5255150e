use std::env;

use crate::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`. Expects the
    /// dotenv file to have been loaded already.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                message: format!("must be at least {MIN_SECRET_LEN} characters"),
            });
        }

        let access_token_expiry: i64 = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                message: e.to_string(),
            })?;

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                message: format!("must be between 1 and {MAX_ACCESS_EXPIRY} seconds"),
            });
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "stash".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
