//! Patient flow — symptom questionnaire source and disease ranking.

use std::collections::BTreeMap;

use crate::core_state::{CoreError, CoreState};
use crate::db;
use crate::models::DiseaseMatch;
use crate::ranking;

/// All known symptoms as id → name. Drives the question sequence and the
/// doctor's checklist.
pub fn list_symptoms(state: &CoreState) -> Result<BTreeMap<i64, String>, CoreError> {
    let conn = state.open_db()?;
    Ok(db::list_symptoms(&conn)?)
}

/// Ranks candidate diseases for the symptoms the patient answered "yes" to.
pub fn rank_symptoms(
    state: &CoreState,
    symptom_ids: &[i64],
) -> Result<Vec<DiseaseMatch>, CoreError> {
    if symptom_ids.is_empty() {
        return Ok(Vec::new());
    }
    let conn = state.open_db()?;
    let ranked = ranking::rank(&conn, symptom_ids)?;
    tracing::info!(
        reported = symptom_ids.len(),
        candidates = ranked.len(),
        "Patient questionnaire ranked"
    );
    Ok(ranked)
}
