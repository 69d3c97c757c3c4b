//! Doctor flow — add a disease linked to existing and/or new symptoms.

use crate::core_state::{CoreError, CoreState};
use crate::db;
use crate::models::{Disease, NewDisease, SavedDisease};

/// Saves a new disease with its symptom links in a single transaction.
///
/// The disease name is trimmed and must not be empty. A non-blank
/// `new_symptom` is inserted first and linked along with `symptom_ids`.
/// Nothing is written when validation fails or any insert errors.
pub fn add_disease_with_links(
    state: &CoreState,
    input: &NewDisease,
) -> Result<SavedDisease, CoreError> {
    let name = input.name.trim();
    if name.is_empty() {
        tracing::warn!("Rejected disease save without a name");
        return Err(CoreError::Validation(
            "Por favor, ingrese el nombre de la enfermedad.".into(),
        ));
    }
    let new_symptom = input
        .new_symptom
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut conn = state.open_db()?;
    let tx = conn.transaction()?;

    let mut linked_symptom_ids = input.symptom_ids.clone();
    let new_symptom_id = match new_symptom {
        Some(symptom_name) => {
            let id = db::add_symptom(&tx, symptom_name)?;
            linked_symptom_ids.push(id);
            Some(id)
        }
        None => None,
    };

    let disease_id = db::add_disease(&tx, name)?;
    db::add_links(&tx, disease_id, &linked_symptom_ids)?;
    tx.commit()?;

    tracing::info!(
        disease_id,
        links = linked_symptom_ids.len(),
        new_symptom = new_symptom_id.is_some(),
        "Saved new disease"
    );

    Ok(SavedDisease {
        disease_id,
        new_symptom_id,
        linked_symptom_ids,
    })
}

pub fn list_diseases(state: &CoreState) -> Result<Vec<Disease>, CoreError> {
    let conn = state.open_db()?;
    Ok(db::list_diseases(&conn)?)
}
