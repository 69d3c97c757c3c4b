use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Symptomatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the knowledge base inside the data directory
pub const DB_FILE_NAME: &str = "sistema_experto.db";

/// Get the application data directory
/// ~/Symptomatch/ on all platforms, or the working directory when no home is known
pub fn app_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

/// Get the knowledge base file path
pub fn database_path() -> PathBuf {
    app_data_dir().join(DB_FILE_NAME)
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptomatch_lib=info,symptomatch=info,warn"
}
