mod cli;
mod commands;
mod output;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging on stderr so `--stdout` output stays clean
    let log_directive = args.log_level.as_deref().unwrap_or("themegen=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "themegen=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("themegen v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
