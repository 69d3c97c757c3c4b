//! Application state shared by every interaction flow.
//!
//! `CoreState` owns the location of the knowledge base. Each operation opens
//! its own connection, runs one statement or transaction, and drops it, so
//! no connection outlives a single user action.

use std::path::{Path, PathBuf};

use crate::config;
use crate::db;

pub struct CoreState {
    /// Knowledge base file.
    db_path: PathBuf,
}

impl CoreState {
    /// State bound to the default knowledge base location.
    pub fn new() -> Self {
        Self::with_db_path(config::database_path())
    }

    /// State bound to an explicit knowledge base file.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the knowledge base, creating the schema if needed.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Database)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Rejected input. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for CoreError {
    fn from(e: rusqlite::Error) -> Self {
        CoreError::Database(db::DatabaseError::Sqlite(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_points_at_config_path() {
        let state = CoreState::new();
        assert_eq!(state.db_path(), config::database_path().as_path());
    }

    #[test]
    fn open_db_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.db");
        let state = CoreState::with_db_path(&path);

        let conn = state.open_db().unwrap();
        assert!(path.exists());
        assert_eq!(db::count_tables(&conn).unwrap(), 3);
    }

    #[test]
    fn open_db_reports_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file
        let state = CoreState::with_db_path(dir.path());
        assert!(matches!(state.open_db(), Err(CoreError::Database(_))));
    }

    #[test]
    fn validation_message_is_displayed_verbatim() {
        let err = CoreError::Validation("Nombre requerido".into());
        assert_eq!(err.to_string(), "Nombre requerido");
    }
}
