use std::path::Path;

use rusqlite::Connection;

use super::DatabaseError;

const SCHEMA: &str = include_str!("../../resources/schema.sql");

/// Open a SQLite connection to the given path and ensure the schema exists.
///
/// Missing parent directories are created, so the first run on a fresh
/// machine produces a usable knowledge base.
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    initialize(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    initialize(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;"
    )?;
    Ok(())
}

/// Create the three knowledge base tables if they are missing.
///
/// Every statement is `IF NOT EXISTS`, so this runs on each startup and
/// leaves an existing store untouched.
pub fn initialize(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(SCHEMA).map_err(|e| DatabaseError::SchemaFailed {
        reason: e.to_string(),
    })?;
    tracing::debug!("Knowledge base schema ready");
    Ok(())
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
