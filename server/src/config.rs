//! Server Configuration
//!
//! Read from the environment after loading an optional `.env` file.
//! Variable names map to fields case-insensitively (`PORT` → `port`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::format::DEFAULT_RELEVANT_KEYS;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON playlist source; `None` serves an empty listing
    pub playlists_file: Option<PathBuf>,
    /// Built front-end (index.html, wasm bundle, css)
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Keys kept on each playlist sent to the client (`PLAYLIST_KEYS`)
    #[serde(rename = "playlist_keys")]
    pub relevant_keys: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            playlists_file: None,
            static_dir: PathBuf::from("public"),
            log_dir: PathBuf::from("logs"),
            relevant_keys: default_relevant_keys(),
        }
    }
}

fn default_relevant_keys() -> Vec<String> {
    DEFAULT_RELEVANT_KEYS.iter().map(|k| k.to_string()).collect()
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(::config::ConfigError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Environment source with the list and parsing rules the server expects
pub fn environment() -> ::config::Environment {
    ::config::Environment::default()
        .ignore_empty(true)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("playlist_keys")
}

impl ServerConfig {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is the normal case in deployment
        let _ = dotenvy::dotenv();
        Self::from_environment(environment())
    }

    /// Build from an environment source; unset or empty variables keep defaults
    pub fn from_environment(env: ::config::Environment) -> Result<Self, ConfigError> {
        let mut settings: ServerConfig = ::config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.relevant_keys = settings
            .relevant_keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if settings.relevant_keys.is_empty() {
            settings.relevant_keys = default_relevant_keys();
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
