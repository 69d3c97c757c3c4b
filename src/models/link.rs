use serde::Serialize;

/// Association recording that a symptom is relevant to a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub symptom_id: i64,
    pub disease_id: i64,
}
