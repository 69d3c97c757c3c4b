pub mod commands;
pub mod config;
pub mod core_state;
pub mod db;
pub mod flows;
pub mod models;
pub mod ranking;
pub mod terminal;

use tracing_subscriber::EnvFilter;

use crate::core_state::{CoreError, CoreState};

/// Start the interactive session against the default knowledge base.
pub fn run() -> Result<(), CoreError> {
    // Logs go to stderr so they never interleave with the questionnaire
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let state = CoreState::new();
    commands::startup(&state)?;

    let stdout = console::Term::stdout();
    let colors = stdout.features().colors_supported();
    let stdin = std::io::stdin();
    terminal::Terminal::new(stdin.lock(), stdout, colors).run(&state)?;

    tracing::info!("Session ended");
    Ok(())
}
