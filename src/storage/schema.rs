//! Database schema definitions

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Enriched character records, one row per person id
CREATE TABLE IF NOT EXISTS characters (
    id INTEGER PRIMARY KEY,
    birth_year TEXT,
    eye_color TEXT,
    films TEXT,
    gender TEXT,
    hair_color TEXT,
    height TEXT,
    homeworld TEXT,
    mass TEXT,
    name TEXT,
    skin_color TEXT,
    species TEXT,
    starships TEXT,
    vehicles TEXT
);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Drops and recreates the schema
///
/// Each ingest run starts from an empty table; inserts never upsert, so a
/// leftover table from a previous run would fail on the first duplicate id.
pub fn reset_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("DROP TABLE IF EXISTS characters;")?;
    initialize_schema(conn)
}
