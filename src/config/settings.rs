//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub conversation: ConversationConfig,
    pub logging: LoggingConfig,
}

/// Quote backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub coverage_type: String,
}

/// Conversation pacing configuration
///
/// The delays pace the conversational UI; they carry no correctness
/// requirement and tests run with all of them at zero.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationConfig {
    /// Delay before revealing an assistant message (typing indicator window)
    pub typing_delay_ms: u64,
    /// Delay between recording a user response and advancing the cursor
    pub advance_delay_ms: u64,
    /// Delay after the submission result before re-enabling input
    pub settle_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    /// Number of rotated log files to retain
    pub max_files: u32,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("QUOTEFLOW"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::QuoteFlowError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_seconds: 10,
                coverage_type: "homeowners".to_string(),
            },
            conversation: ConversationConfig {
                typing_delay_ms: 800,
                advance_delay_ms: 800,
                settle_delay_ms: 1500,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/quoteflow".to_string(),
                max_files: 5,
            },
        }
    }
}
