//! Ranking engine: candidate diseases ordered by symptom-match count.
//!
//! A disease's match count is the number of its links whose symptom is in
//! the reported set. Diseases with no match are left out, ties are broken by
//! ascending disease id, and an empty report yields an empty ranking.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{params_from_iter, Connection};

use crate::db::DatabaseError;
use crate::models::DiseaseMatch;

/// Most ids bound into one statement. Stays under the smallest
/// `SQLITE_MAX_VARIABLE_NUMBER` any SQLite build ships with.
const MAX_BOUND_IDS: usize = 999;

/// Rank diseases against the reported symptom ids.
///
/// Repeated ids in `symptom_ids` count once. Unknown ids match nothing.
/// Large reports are counted in disjoint batches and merged, so the size of
/// the report never turns into a statement error.
pub fn rank(conn: &Connection, symptom_ids: &[i64]) -> Result<Vec<DiseaseMatch>, DatabaseError> {
    let reported: Vec<i64> = symptom_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if reported.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_disease: BTreeMap<i64, DiseaseMatch> = BTreeMap::new();
    for batch in reported.chunks(MAX_BOUND_IDS) {
        for partial in count_matches(conn, batch)? {
            let extra = partial.matches;
            by_disease
                .entry(partial.disease_id)
                .and_modify(|m| m.matches += extra)
                .or_insert(partial);
        }
    }

    // BTreeMap yields ascending disease ids; the stable sort keeps that order on ties
    let mut ranked: Vec<DiseaseMatch> = by_disease.into_values().collect();
    ranked.sort_by(|a, b| b.matches.cmp(&a.matches));

    tracing::debug!(
        reported = reported.len(),
        candidates = ranked.len(),
        "Ranked diseases"
    );
    Ok(ranked)
}

/// Per-disease link counts for one batch of distinct symptom ids.
fn count_matches(conn: &Connection, batch: &[i64]) -> Result<Vec<DiseaseMatch>, DatabaseError> {
    let sql = ranking_query(batch.len());
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(batch.iter()), |row| {
        Ok(DiseaseMatch {
            disease_id: row.get(0)?,
            disease_name: row.get(1)?,
            matches: row.get(2)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Grouped count query with one bound placeholder per id in the batch.
fn ranking_query(placeholder_count: usize) -> String {
    let placeholders = (1..=placeholder_count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT e.id_enfermedad, e.nombre_enfermedad, COUNT(*) AS coincidencias
         FROM enfermedades e
         JOIN relacion r ON e.id_enfermedad = r.id_enfermedad
         WHERE r.id_sintoma IN ({placeholders})
         GROUP BY e.id_enfermedad
         ORDER BY coincidencias DESC, e.id_enfermedad ASC"
    )
}
