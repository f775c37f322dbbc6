//! Storage traits and error types

use crate::record::CharacterRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// This trait defines all database operations needed by the ingester.
pub trait Storage {
    /// Drops and recreates the characters table
    ///
    /// Inserts never upsert, so a fresh run starts from an empty table.
    fn reset_schema(&mut self) -> StorageResult<()>;

    /// Inserts a group of enriched records in a single transaction
    ///
    /// Either every record in the group commits or none does. A duplicate
    /// id surfaces as [`StorageError::ConstraintViolation`].
    fn insert_characters(&mut self, records: &[CharacterRecord]) -> StorageResult<()>;

    /// Total number of persisted characters
    fn count_characters(&self) -> StorageResult<u64>;

    /// Reads back one character by id
    fn get_character(&self, id: i64) -> StorageResult<Option<CharacterRecord>>;

    /// All persisted ids in ascending order
    fn character_ids(&self) -> StorageResult<Vec<i64>>;
}
