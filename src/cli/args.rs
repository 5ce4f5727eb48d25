//! CLI argument definitions using clap.
//!
//! Subcommands are peeled off by [`super::router`] first; clap only sees
//! flags and prompt words.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::router::{extract_subcommand, normalize_flags};
use crate::core::logging::LogLevel;
use crate::error::{Error, Result};

/// nanobanana - Generate images using Gemini or OpenRouter API
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "nanobanana")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Input image file (repeatable)
    #[arg(short = 'i', value_name = "FILE", action = ArgAction::Append)]
    pub input: Vec<PathBuf>,

    /// Output filename
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Aspect ratio
    #[arg(long, value_name = "RATIO")]
    pub aspect: Option<String>,

    /// Image size
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// OpenRouter model (enables OpenRouter API)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Show help
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show version
    #[arg(long)]
    pub version: bool,

    /// Verbose logging (sets log level to debug)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Agent directory for install-skill
    #[arg(long, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Prompt words
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

impl Cli {
    /// Parsed `-log-level`.
    ///
    /// # Errors
    ///
    /// Returns a usage error for an unknown level name.
    pub fn parsed_log_level(&self) -> Result<Option<LogLevel>> {
        self.log_level
            .as_deref()
            .map(|value| {
                LogLevel::from_arg(value)
                    .ok_or_else(|| Error::Usage(format!("invalid log level: {value}")))
            })
            .transpose()
    }
}

/// A routed and parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Subcommand name; empty for a free-form prompt.
    pub command: String,
    pub cli: Cli,
}

/// Route and parse raw arguments (program name excluded).
///
/// # Errors
///
/// Returns [`Error::Usage`] when clap rejects the flags.
pub fn parse_args(raw: &[String]) -> Result<Invocation> {
    let (command, rest) = extract_subcommand(raw);
    let normalized = normalize_flags(rest);

    let cli = Cli::try_parse_from(std::iter::once("nanobanana".to_string()).chain(normalized))
        .map_err(|e| Error::Usage(first_line(&e.to_string())))?;

    Ok(Invocation { command, cli })
}

/// clap renders multi-line errors with a usage block; keep the headline.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
