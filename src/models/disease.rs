use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disease {
    pub id: i64,
    pub name: String,
}
