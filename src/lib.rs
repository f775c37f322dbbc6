//! Holocron: a SWAPI character ingestion tool
//!
//! This crate implements a one-shot batch ingester that fetches character
//! records from a SWAPI-style REST API, resolves their linked sub-resources
//! (films, species, starships, vehicles, homeworld) into display strings,
//! and bulk-persists the enriched rows into SQLite.

pub mod api;
pub mod config;
pub mod ingest;
pub mod record;
pub mod storage;

use thiserror::Error;

/// Main error type for Holocron operations
#[derive(Debug, Error)]
pub enum HolocronError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Malformed JSON body from {url}: {source}")]
    MalformedResource {
        url: String,
        source: serde_json::Error,
    },

    #[error("Resource at {url} has no usable '{field}' field")]
    MissingField { url: String, field: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Holocron operations
pub type Result<T> = std::result::Result<T, HolocronError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::CharacterRecord;
