//! nanobanana - image generation CLI
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::process::ExitCode;

use nanobanana::cli;
use nanobanana::core::logging;
use nanobanana::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    match run(&raw).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, category = %e.category(), "Command failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(raw: &[String]) -> Result<(), Error> {
    let invocation = cli::parse_args(raw)?;

    // Initialize logging
    let level = logging::effective_level(
        invocation.cli.parsed_log_level()?,
        logging::parse_log_level_from_env(),
        invocation.cli.verbose,
    );
    let format = logging::parse_log_format_from_env().unwrap_or_default();
    logging::init(level, format, logging::parse_log_file_from_env());

    tracing::debug!(command = %invocation.command, "Dispatching");
    cli::run(invocation).await
}
