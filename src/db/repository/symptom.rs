use std::collections::BTreeMap;

use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Symptom;

/// Full symptom table as id → name, ordered by id.
pub fn list_symptoms(conn: &Connection) -> Result<BTreeMap<i64, String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id_sintoma, nombre_sintoma FROM sintomas")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;

    let mut symptoms = BTreeMap::new();
    for row in rows {
        let (id, name) = row?;
        symptoms.insert(id, name);
    }
    Ok(symptoms)
}

/// Inserts a symptom and returns its generated id. Names are not deduplicated.
pub fn add_symptom(conn: &Connection, name: &str) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO sintomas (nombre_sintoma) VALUES (?1)",
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Symptoms linked to a disease, one entry per link, in link order.
pub fn symptoms_for_disease(
    conn: &Connection,
    disease_id: i64,
) -> Result<Vec<Symptom>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT s.id_sintoma, s.nombre_sintoma
         FROM relacion r
         JOIN sintomas s ON s.id_sintoma = r.id_sintoma
         WHERE r.id_enfermedad = ?1
         ORDER BY r.id_relacion",
    )?;

    let rows = stmt.query_map(params![disease_id], |row| {
        Ok(Symptom {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}
