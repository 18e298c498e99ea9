use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Where the in-memory order store is seeded from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON dataset file; the server starts with an empty
    /// store when unset.
    pub dataset_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            data: DataConfig {
                dataset_path: env::var("ORDERS_DATASET_PATH").ok(),
            },
        };

        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<()> {
        match self.app.env.as_str() {
            "development" | "staging" | "production" => {}
            other => {
                return Err(AppError::Configuration(format!(
                    "Unknown APP_ENV '{}': expected development, staging or production",
                    other
                )))
            }
        }

        if let Some(path) = &self.data.dataset_path {
            if !std::path::Path::new(path).exists() {
                return Err(AppError::Configuration(format!(
                    "ORDERS_DATASET_PATH '{}' does not exist",
                    path
                )));
            }
        }

        Ok(())
    }
}
