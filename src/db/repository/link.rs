use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Link;

/// Links every symptom id to the disease. Returns the number of rows written.
///
/// Repeated pairs are stored again; there is no duplicate suppression.
pub fn add_links(
    conn: &Connection,
    disease_id: i64,
    symptom_ids: &[i64],
) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT INTO relacion (id_sintoma, id_enfermedad) VALUES (?1, ?2)",
    )?;

    let mut inserted = 0;
    for symptom_id in symptom_ids {
        inserted += stmt.execute(params![symptom_id, disease_id])?;
    }
    Ok(inserted)
}

pub fn list_links(conn: &Connection) -> Result<Vec<Link>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id_relacion, id_sintoma, id_enfermedad FROM relacion ORDER BY id_relacion",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Link {
            id: row.get(0)?,
            symptom_id: row.get(1)?,
            disease_id: row.get(2)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}
