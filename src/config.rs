//! Configuration management for errwatch
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all notification settings. It uses the `figment`
//! crate to load configuration from an `errwatch.toml` file and merge it
//! with environment variables.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// The main configuration struct for the notification stack.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the library's own log output.
    pub log_level: String,
    /// Error kinds that should never produce a notification.
    #[serde(default)]
    pub ignored_kinds: Vec<String>,
    /// Configuration for the SNS channel.
    pub sns: Option<SnsConfig>,
}

/// Configuration for the SNS channel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SnsConfig {
    /// The ARN of the topic notifications are published to.
    pub topic_arn: String,
    /// The prefix prepended to every notification subject.
    pub sns_prefix: String,
}

impl Config {
    /// Loads the notification configuration from the specified file.
    ///
    /// # Arguments
    /// * `config_path` - The path to the TOML configuration file.
    pub fn load(config_path: &str) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g.,
            // ERRWATCH_SNS__TOPIC_ARN=arn:aws:sns:...
            .merge(Env::prefixed("ERRWATCH_").split("__"))
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ignored_kinds: vec![],
            sns: None,
        }
    }
}
