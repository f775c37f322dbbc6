//! Configuration module for Holocron
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The config file is optional: all sections default to the public
//! API endpoint and a local database file.
//!
//! # Example
//!
//! ```no_run
//! use holocron::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("holocron.toml")).unwrap();
//! println!("Ingesting from: {}", config.api.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, Config, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
