//! CLI argument parsing and command dispatch.

pub mod args;
pub mod generate;
pub mod help;
pub mod install_skill;
pub mod router;
pub mod setup;

pub use args::{Cli, Invocation, parse_args};
pub use generate::{GenerateContext, GenerateOutcome};

use crate::core::templates::get_command;
use crate::error::Result;

/// Version line printed by `version` and `-version`.
#[must_use]
pub fn version_line() -> String {
    format!("nanobanana {}", env!("CARGO_PKG_VERSION"))
}

/// Run a parsed invocation.
///
/// # Errors
///
/// Propagates the error of whichever command ran.
pub async fn run(invocation: Invocation) -> Result<()> {
    let Invocation { command, cli } = invocation;

    if cli.version || command == "version" {
        println!("{}", version_line());
        return Ok(());
    }

    if cli.help {
        // `nanobanana icon -h` shows the command page.
        let text = get_command(&command).map_or_else(help::overview, help::command_help);
        print!("{text}");
        return Ok(());
    }

    match command.as_str() {
        "help" => {
            let text = help::render(cli.prompt.first().map(String::as_str))?;
            print!("{text}");
            Ok(())
        }
        "setup" => setup::run(),
        "install-skill" => install_skill::run(cli.claude_dir.as_deref()),
        _ => {
            let ctx = GenerateContext::from_env();
            generate::run(&command, &cli, &ctx).await.map(|_| ())
        }
    }
}
