//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::path::PathBuf;
use validator::Validate;

use crate::error::AppError;

pub const DATASET_VAR: &str = "NEUROSPACE_DATASET";
pub const MAX_QUERY_LEN_VAR: &str = "NEUROSPACE_MAX_QUERY_LEN";
pub const LOG_FORMAT_VAR: &str = "NEUROSPACE_LOG_FORMAT";

const DEFAULT_DATASET: &str = "data/classroom_recommendations.csv";
const DEFAULT_MAX_QUERY_LEN: usize = 2000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "" | "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AppConfig {
    /// CSV dataset path. Missing files are tolerated.
    pub dataset_path: Option<PathBuf>,
    /// Longest accepted query, in characters.
    #[validate(range(min = 1))]
    pub max_query_length: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: Some(PathBuf::from(DEFAULT_DATASET)),
            max_query_length: DEFAULT_MAX_QUERY_LEN,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load `.env`, then read the process environment.
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables only.
    pub fn from_env() -> Result<Self, AppError> {
        let dataset_path = match env::var(DATASET_VAR) {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(PathBuf::from(path.trim())),
            Err(_) => Some(PathBuf::from(DEFAULT_DATASET)),
        };

        let max_query_length = match env::var(MAX_QUERY_LEN_VAR) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("{} must be a positive integer: {}", MAX_QUERY_LEN_VAR, e))
            })?,
            Err(_) => DEFAULT_MAX_QUERY_LEN,
        };

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) => LogFormat::default(),
        };

        let config = Self {
            dataset_path,
            max_query_length,
            log_format,
        };
        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }
}
