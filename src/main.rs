use std::process::ExitCode;

use clap::Parser;
use contact_scopes_lib::bootstrap::tracing::init_tracing_subscriber;
use contact_scopes_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e:#}");
        return ExitCode::FAILURE;
    }

    match contact_scopes_lib::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
