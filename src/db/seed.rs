//! Baseline knowledge used to bootstrap an empty store.
//!
//! Rows carry explicit primary keys and are written with `INSERT OR IGNORE`,
//! so seeding an already-seeded store is a no-op.

use rusqlite::{params, Connection};

use super::DatabaseError;

pub const BASELINE_SYMPTOMS: &[(i64, &str)] = &[
    (1, "Fiebre"),
    (2, "Tos"),
    (3, "Dolor de cabeza"),
    (4, "Dificultad para respirar"),
    (5, "Pérdida del gusto/olfato"),
    (6, "Dolor de garganta"),
    (7, "Fatiga extrema"),
];

pub const BASELINE_DISEASES: &[(i64, &str)] = &[
    (1, "Gripe"),
    (2, "COVID-19"),
    (3, "Bronquitis"),
    (4, "Neumonía"),
];

/// (link id, symptom id, disease id)
pub const BASELINE_LINKS: &[(i64, i64, i64)] = &[
    (1, 1, 1),
    (2, 2, 1),
    (3, 3, 1),
    (4, 1, 2),
    (5, 2, 2),
    (6, 5, 2),
    (7, 2, 3),
    (8, 4, 3),
    (9, 4, 4),
    (10, 1, 4),
];

/// Insert the baseline symptoms, diseases and links if absent.
///
/// Returns the number of rows actually inserted (0 on an already-seeded store).
pub fn seed(conn: &Connection) -> Result<usize, DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;

    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO sintomas (id_sintoma, nombre_sintoma) VALUES (?1, ?2)",
        )?;
        for (id, name) in BASELINE_SYMPTOMS {
            inserted += stmt.execute(params![id, name])?;
        }

        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO enfermedades (id_enfermedad, nombre_enfermedad) VALUES (?1, ?2)",
        )?;
        for (id, name) in BASELINE_DISEASES {
            inserted += stmt.execute(params![id, name])?;
        }

        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO relacion (id_relacion, id_sintoma, id_enfermedad)
             VALUES (?1, ?2, ?3)",
        )?;
        for (id, symptom_id, disease_id) in BASELINE_LINKS {
            inserted += stmt.execute(params![id, symptom_id, disease_id])?;
        }
    }

    tx.commit()?;

    if inserted > 0 {
        tracing::info!(rows = inserted, "Seeded baseline knowledge");
    } else {
        tracing::debug!("Baseline knowledge already present");
    }
    Ok(inserted)
}
