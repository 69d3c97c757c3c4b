//! Repository layer — table-scoped knowledge base operations.
//!
//! Every function borrows a connection and performs one statement or one
//! batch; callers decide the transaction boundary.

mod disease;
mod link;
mod symptom;

use rusqlite::Connection;

use super::DatabaseError;
use crate::models::StoreCounts;

pub use disease::*;
pub use link::*;
pub use symptom::*;

/// Row counts of symptoms, diseases and links.
pub fn count_rows(conn: &Connection) -> Result<StoreCounts, DatabaseError> {
    let counts = conn.query_row(
        "SELECT (SELECT COUNT(*) FROM sintomas),
                (SELECT COUNT(*) FROM enfermedades),
                (SELECT COUNT(*) FROM relacion)",
        [],
        |row| {
            Ok(StoreCounts {
                symptoms: row.get(0)?,
                diseases: row.get(1)?,
                links: row.get(2)?,
            })
        },
    )?;
    Ok(counts)
}
