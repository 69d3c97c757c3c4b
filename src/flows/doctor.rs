use std::collections::{BTreeMap, BTreeSet};

use crate::models::NewDisease;

/// Doctor's "new disease" form.
///
/// Holds the typed disease name, the checked existing symptoms and an
/// optional new symptom name. Fields survive a rejected save so the doctor
/// only has to fix what was wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorForm {
    available: BTreeMap<i64, String>,
    name: String,
    checked: BTreeSet<i64>,
    new_symptom: String,
}

impl DoctorForm {
    pub fn new(available: BTreeMap<i64, String>) -> Self {
        Self {
            available,
            name: String::new(),
            checked: BTreeSet::new(),
            new_symptom: String::new(),
        }
    }

    pub fn available(&self) -> &BTreeMap<i64, String> {
        &self.available
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_new_symptom(&mut self, name: &str) {
        self.new_symptom = name.to_string();
    }

    /// Checked symptom ids in id order.
    pub fn checked(&self) -> Vec<i64> {
        self.checked.iter().copied().collect()
    }

    pub fn is_checked(&self, symptom_id: i64) -> bool {
        self.checked.contains(&symptom_id)
    }

    /// Flip the checkbox of an existing symptom. Returns the new state.
    pub fn toggle(&mut self, symptom_id: i64) -> Result<bool, String> {
        if !self.available.contains_key(&symptom_id) {
            return Err(format!("No existe un síntoma con id {symptom_id}."));
        }
        if self.checked.remove(&symptom_id) {
            Ok(false)
        } else {
            self.checked.insert(symptom_id);
            Ok(true)
        }
    }

    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    /// Replace the checked set from a comma/space separated id list.
    ///
    /// The whole list is rejected if any entry is not a known symptom id.
    pub fn check_from_list(&mut self, input: &str) -> Result<(), String> {
        let mut checked = BTreeSet::new();
        for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let id: i64 = token
                .parse()
                .map_err(|_| format!("'{token}' no es un id de síntoma válido."))?;
            if !self.available.contains_key(&id) {
                return Err(format!("No existe un síntoma con id {id}."));
            }
            checked.insert(id);
        }
        self.checked = checked;
        Ok(())
    }

    /// Save request for the collaborator boundary. Symptom ids in id order.
    pub fn to_input(&self) -> NewDisease {
        NewDisease {
            name: self.name.clone(),
            symptom_ids: self.checked(),
            new_symptom: Some(self.new_symptom.clone()).filter(|s| !s.trim().is_empty()),
        }
    }
}
