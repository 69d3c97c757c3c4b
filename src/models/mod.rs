mod disease;
mod link;
mod symptom;

pub use disease::*;
pub use link::*;
pub use symptom::*;

use serde::{Deserialize, Serialize};

/// One ranking row: a disease and how many reported symptoms it is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseMatch {
    pub disease_id: i64,
    pub disease_name: String,
    pub matches: i64,
}

/// Input of the doctor's save action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDisease {
    pub name: String,
    pub symptom_ids: Vec<i64>,
    pub new_symptom: Option<String>,
}

/// Outcome of a successful doctor save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedDisease {
    pub disease_id: i64,
    pub new_symptom_id: Option<i64>,
    pub linked_symptom_ids: Vec<i64>,
}

/// Row counts of the three knowledge base tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub symptoms: i64,
    pub diseases: i64,
    pub links: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disease_match_serializes_flat() {
        let entry = DiseaseMatch {
            disease_id: 1,
            disease_name: "Gripe".into(),
            matches: 2,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"disease_id": 1, "disease_name": "Gripe", "matches": 2})
        );
    }

    #[test]
    fn new_disease_accepts_missing_new_symptom() {
        let input: NewDisease =
            serde_json::from_str(r#"{"name":"Asma","symptom_ids":[2,4],"new_symptom":null}"#)
                .unwrap();
        assert_eq!(input.name, "Asma");
        assert_eq!(input.symptom_ids, vec![2, 4]);
        assert!(input.new_symptom.is_none());
    }
}
