//! Storage module for persisting enriched characters
//!
//! This module handles all database operations for the ingester, including:
//! - SQLite database initialization and schema reset
//! - Transactional batch insertion of record groups
//! - Row counting and read-back for stats and verification

mod schema;
mod sqlite;
mod traits;

pub use schema::{initialize_schema, reset_schema, SCHEMA_SQL};
pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::HolocronError;
use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(HolocronError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, HolocronError> {
    SqliteStorage::new(path)
}
