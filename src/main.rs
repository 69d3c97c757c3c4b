use std::process::ExitCode;

fn main() -> ExitCode {
    match symptomatch_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
