use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: i64,
    pub name: String,
}
