//! Collaborator boundary between the knowledge base and the interaction flows.
//!
//! Each call takes the shared [`CoreState`], opens a connection for its own
//! duration, and reports storage failures as [`CoreError::Database`].

pub mod doctor;
pub mod patient;

use crate::core_state::{CoreError, CoreState};
use crate::db;
use crate::models::StoreCounts;

/// Prepares the knowledge base for use: schema plus baseline knowledge.
///
/// Safe to call on every launch.
pub fn startup(state: &CoreState) -> Result<StoreCounts, CoreError> {
    let conn = state.open_db()?;
    db::seed(&conn)?;
    let counts = db::count_rows(&conn)?;
    tracing::info!(
        path = %state.db_path().display(),
        symptoms = counts.symptoms,
        diseases = counts.diseases,
        links = counts.links,
        "Knowledge base ready"
    );
    Ok(counts)
}

pub fn store_counts(state: &CoreState) -> Result<StoreCounts, CoreError> {
    let conn = state.open_db()?;
    Ok(db::count_rows(&conn)?)
}
