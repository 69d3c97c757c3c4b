pub mod repository;
pub mod seed;
pub mod sqlite;

pub use repository::*;
pub use seed::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Schema setup failed: {reason}")]
    SchemaFailed { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
