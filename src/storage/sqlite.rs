//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::record::CharacterRecord;
use crate::storage::schema::{initialize_schema, reset_schema};
use crate::storage::traits::{Storage, StorageError, StorageResult};
use crate::HolocronError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(HolocronError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, HolocronError> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, HolocronError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn reset_schema(&mut self) -> StorageResult<()> {
        reset_schema(&self.conn)?;
        Ok(())
    }

    fn insert_characters(&mut self, records: &[CharacterRecord]) -> StorageResult<()> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO characters
                 (id, birth_year, eye_color, films, gender, hair_color, height,
                  homeworld, mass, name, skin_color, species, starships, vehicles)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;

            for record in records {
                stmt.execute(params![
                    record.id,
                    record.birth_year,
                    record.eye_color,
                    record.films,
                    record.gender,
                    record.hair_color,
                    record.height,
                    record.homeworld,
                    record.mass,
                    record.name,
                    record.skin_color,
                    record.species,
                    record.starships,
                    record.vehicles,
                ])
                .map_err(classify_insert_error)?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn count_characters(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM characters", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn get_character(&self, id: i64) -> StorageResult<Option<CharacterRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, birth_year, eye_color, films, gender, hair_color, height,
             homeworld, mass, name, skin_color, species, starships, vehicles
             FROM characters WHERE id = ?1",
        )?;

        let record = stmt
            .query_row(params![id], |row| {
                Ok(CharacterRecord {
                    id: row.get(0)?,
                    birth_year: row.get(1)?,
                    eye_color: row.get(2)?,
                    films: row.get(3)?,
                    gender: row.get(4)?,
                    hair_color: row.get(5)?,
                    height: row.get(6)?,
                    homeworld: row.get(7)?,
                    mass: row.get(8)?,
                    name: row.get(9)?,
                    skin_color: row.get(10)?,
                    species: row.get(11)?,
                    starships: row.get(12)?,
                    vehicles: row.get(13)?,
                })
            })
            .optional()?;

        Ok(record)
    }

    fn character_ids(&self) -> StorageResult<Vec<i64>> {
        let mut stmt = self.conn.prepare("SELECT id FROM characters ORDER BY id ASC")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }
}

/// Maps a failed insert to the storage error taxonomy
///
/// Duplicate ids (no upsert by design) surface as constraint violations
/// rather than generic SQLite errors.
fn classify_insert_error(err: rusqlite::Error) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, msg)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StorageError::ConstraintViolation(
                msg.clone().unwrap_or_else(|| e.to_string()),
            )
        }
        _ => StorageError::Sqlite(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: i64, name: &str) -> CharacterRecord {
        CharacterRecord {
            id,
            name: name.to_string(),
            birth_year: "19BBY".to_string(),
            eye_color: "blue".to_string(),
            gender: "male".to_string(),
            hair_color: "blond".to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            skin_color: "fair".to_string(),
            homeworld: "Tatooine".to_string(),
            films: "A New Hope, The Empire Strikes Back".to_string(),
            species: String::new(),
            starships: "X-wing".to_string(),
            vehicles: "Snowspeeder".to_string(),
        }
    }

    #[test]
    fn test_create_in_memory() {
        let storage = SqliteStorage::new_in_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_insert_and_read_back() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let record = sample_record(1, "Luke Skywalker");

        storage.insert_characters(&[record.clone()]).unwrap();

        let loaded = storage.get_character(1).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_get_missing_character() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        assert!(storage.get_character(99).unwrap().is_none());
    }

    #[test]
    fn test_batch_insert_counts() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();

        let group = vec![
            sample_record(1, "Luke Skywalker"),
            sample_record(2, "C-3PO"),
            sample_record(3, "R2-D2"),
        ];
        storage.insert_characters(&group).unwrap();

        assert_eq!(storage.count_characters().unwrap(), 3);
        assert_eq!(storage.character_ids().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_group_insert_is_ok() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        storage.insert_characters(&[]).unwrap();
        assert_eq!(storage.count_characters().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_id_is_constraint_violation() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();

        storage
            .insert_characters(&[sample_record(1, "Luke Skywalker")])
            .unwrap();

        let err = storage
            .insert_characters(&[sample_record(1, "Luke Skywalker")])
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[test]
    fn test_duplicate_inside_group_commits_nothing() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();

        let group = vec![
            sample_record(1, "Luke Skywalker"),
            sample_record(2, "C-3PO"),
            sample_record(1, "Luke Skywalker"),
        ];
        assert!(storage.insert_characters(&group).is_err());

        // The transaction rolled back; no partial group remains.
        assert_eq!(storage.count_characters().unwrap(), 0);
    }

    #[test]
    fn test_reset_schema_clears_table() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();

        storage
            .insert_characters(&[sample_record(1, "Luke Skywalker")])
            .unwrap();
        storage.reset_schema().unwrap();

        assert_eq!(storage.count_characters().unwrap(), 0);
    }
}
