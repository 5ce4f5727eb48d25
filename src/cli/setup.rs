//! Interactive first-run setup.
//!
//! Asks for backend, key source, default aspect and size, then writes the
//! config file. The questions live here; the mapping from answers to a
//! [`FileConfig`] is the pure [`build_config`].

use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::core::models::{AspectRatio, Backend, ImageSize};
use crate::error::{Error, Result};
use crate::storage::AppPaths;
use crate::storage::config::FileConfig;
use crate::util::env::is_interactive;

/// How the API key will be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChoice {
    /// Stored in the config file; empty if the user skipped it.
    Paste(String),
    /// Shell command; empty if the user skipped it.
    Command(String),
    /// Environment variable, set by the user.
    Env,
}

/// Everything the wizard collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub backend: Backend,
    pub key: KeyChoice,
    pub aspect: AspectRatio,
    pub size: ImageSize,
}

/// Map answers to a config file. Built-in defaults are left out.
#[must_use]
pub fn build_config(answers: &SetupAnswers) -> FileConfig {
    let mut config = FileConfig {
        api: Some(answers.backend.config_name().to_string()),
        ..FileConfig::default()
    };

    match &answers.key {
        KeyChoice::Paste(key) if !key.trim().is_empty() => {
            config.api_key = Some(key.trim().to_string());
        }
        KeyChoice::Command(command) if !command.trim().is_empty() => {
            config.key_command = Some(command.trim().to_string());
        }
        _ => {}
    }

    if answers.aspect != AspectRatio::default() {
        config.aspect = Some(answers.aspect.to_string());
    }
    if answers.size != ImageSize::default() {
        config.size = Some(answers.size.to_string());
    }
    config
}

fn prompt_error(e: InquireError) -> Error {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            Error::Usage("setup cancelled".to_string())
        }
        other => Error::Other(anyhow::anyhow!("prompt failed: {other}")),
    }
}

fn ask() -> Result<SetupAnswers> {
    let backend = Select::new("Which API backend?", Backend::ALL.to_vec())
        .prompt()
        .map_err(prompt_error)?;
    let env_var = backend.key_env_var();

    let key_options = vec!["paste", "key_command", "env"];
    let key_kind = Select::new("How do you want to provide your API key?", key_options)
        .prompt()
        .map_err(prompt_error)?;

    let key = match key_kind {
        "paste" => {
            let key = Password::new(&format!("Paste your {env_var}:"))
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()
                .map_err(prompt_error)?;
            if key.trim().is_empty() {
                println!(
                    "\n  Warning: No API key provided. You can add it later by editing the config file."
                );
            }
            KeyChoice::Paste(key)
        }
        "key_command" => {
            let command = Text::new("Shell command that returns your API key:")
                .with_help_message("e.g. op read 'op://vault/item/field'")
                .prompt()
                .map_err(prompt_error)?;
            if command.trim().is_empty() {
                println!("\n  Warning: No key command provided. You can add it later.");
            }
            KeyChoice::Command(command)
        }
        _ => {
            println!("\n  Set the {env_var} environment variable before running nanobanana.");
            println!("  Example: export {env_var}='your-key-here'");
            KeyChoice::Env
        }
    };

    let aspect = Select::new("Default aspect ratio?", AspectRatio::ALL.to_vec())
        .prompt()
        .map_err(prompt_error)?;
    let size = Select::new("Default image size?", ImageSize::ALL.to_vec())
        .prompt()
        .map_err(prompt_error)?;

    Ok(SetupAnswers {
        backend,
        key,
        aspect,
        size,
    })
}

/// Run the wizard and write the config file.
///
/// # Errors
///
/// Fails without a terminal, when no config location exists, when a prompt
/// is cancelled, or when the file cannot be written.
pub fn run() -> Result<()> {
    if !is_interactive() {
        return Err(Error::Usage(
            "setup requires an interactive terminal".to_string(),
        ));
    }

    let paths = AppPaths::new().ok_or_else(|| {
        Error::Config("cannot determine config directory (set XDG_CONFIG_HOME)".to_string())
    })?;

    println!("nanobanana setup");
    println!("{}", "=".repeat(40));
    println!("This will create a configuration file so you can start generating images.\n");

    let answers = ask()?;
    let config = build_config(&answers);
    let path = config.save_to(&paths.config_file())?;
    tracing::info!(?path, "Setup wrote config file");

    println!("\nConfig written to: {}", path.display());
    println!("\n{}", serde_json::to_string_pretty(&config)?);

    println!("\nNext steps:");
    if answers.key == KeyChoice::Env {
        println!("  1. export {}='your-key-here'", answers.backend.key_env_var());
        println!("  2. nanobanana \"a cute cat\"");
    } else {
        println!("  nanobanana \"a cute cat\"");
    }
    Ok(())
}
