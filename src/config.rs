//! Centralized configuration management for listpad

use std::path::PathBuf;
use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// Log file name within `log_dir`
    pub log_file: String,
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let log_dir = std::env::var("LISTPAD_LOG_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let log_file =
            std::env::var("LISTPAD_LOG_FILE").unwrap_or_else(|_| "listpad.log".to_string());

        Ok(Config { log_dir, log_file })
    }

    /// Get log directory as string
    pub fn log_dir_str(&self) -> &str {
        self.log_dir.to_str().unwrap_or(".")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir).with_context(|| {
            format!("Cannot create log directory: {}", self.log_dir.display())
        })?;

        if self.log_file.is_empty() {
            return Err(anyhow::anyhow!("Log file name must not be empty"));
        }

        Ok(())
    }
}
