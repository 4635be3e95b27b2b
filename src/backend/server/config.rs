/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables, with defaults suited to local development.
 *
 * # Configuration Sources
 *
 * | Variable        | Default                  |
 * |-----------------|--------------------------|
 * | `SERVER_PORT`   | `3000`                   |
 * | `DATABASE_URL`  | unset (in-memory store)  |
 * | `JWT_SECRET`    | dev fallback, not in prod|
 * | `CLIENT_ORIGIN` | `http://localhost:5174`  |
 * | `APP_ENV`       | development              |
 *
 * Empty values are treated as unset.
 */

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5174";
const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime configuration for the server
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Single allowed CORS origin
    pub client_origin: String,
    pub environment: Environment,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("jwt_secret", &"<redacted>")
            .field("client_origin", &self.client_origin)
            .field("environment", &self.environment)
            .finish()
    }
}

impl ServerConfig {
    /// Development configuration with the given secret and no database
    pub fn development(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: jwt_secret.into(),
            client_origin: DEFAULT_CLIENT_ORIGIN.to_string(),
            environment: Environment::Development,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from arbitrary key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();

        let environment = vars
            .get("APP_ENV")
            .map(|value| Environment::parse(value))
            .unwrap_or_default();

        let port = match vars.get("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: value.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = match vars.get("JWT_SECRET") {
            Some(secret) => secret.clone(),
            None if environment.is_production() => {
                return Err(ConfigError::MissingValue("JWT_SECRET"));
            }
            None => {
                tracing::warn!("JWT_SECRET not set. Using development secret.");
                DEV_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            port,
            database_url: vars.get("DATABASE_URL").cloned(),
            jwt_secret,
            client_origin: vars
                .get("CLIENT_ORIGIN")
                .cloned()
                .unwrap_or_else(|| DEFAULT_CLIENT_ORIGIN.to_string()),
            environment,
        })
    }

    /// Whether auth cookies carry the `Secure` attribute
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }
}
