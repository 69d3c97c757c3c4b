use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Disease;

/// Inserts a disease and returns its generated id.
///
/// The name is stored as given; rejecting empty names is the caller's job.
pub fn add_disease(conn: &Connection, name: &str) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO enfermedades (nombre_enfermedad) VALUES (?1)",
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_diseases(conn: &Connection) -> Result<Vec<Disease>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id_enfermedad, nombre_enfermedad FROM enfermedades ORDER BY id_enfermedad",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Disease {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}
