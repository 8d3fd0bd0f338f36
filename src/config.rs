use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} is invalid: {1}")]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub db_max_connections: u32,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid(key, raw)),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0".to_string())?,
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            db_max_connections: Self::get_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
