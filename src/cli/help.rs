//! Help text.

use std::fmt::Write as _;

use super::router::PSEUDO_COMMANDS;
use crate::core::models::{AspectRatio, ImageSize};
use crate::core::slide_templates::SLIDE_TEMPLATES;
use crate::core::templates::{COMMANDS, Command, SLIDE_COMMAND, get_command};
use crate::error::{Error, Result};
use crate::storage::config::OPENROUTER_DEFAULT_MODEL;

/// Full usage text.
#[must_use]
pub fn overview() -> String {
    let mut out = String::new();
    out.push_str(
        "nanobanana - Generate images using Gemini or OpenRouter API\n\
         \n\
         Usage:\n\
         \x20 nanobanana [command] [options] \"prompt\"\n\
         \n\
         Commands:\n",
    );

    let width = COMMANDS
        .iter()
        .map(|cmd| cmd.name.len())
        .chain(PSEUDO_COMMANDS.iter().map(|name| name.len()))
        .max()
        .unwrap_or(0);

    for cmd in COMMANDS {
        let _ = writeln!(out, "  {:<width$}  {}", cmd.name, cmd.description);
    }
    for name in PSEUDO_COMMANDS {
        let _ = writeln!(out, "  {name:<width$}  {}", pseudo_description(name));
    }

    let _ = write!(
        out,
        "\n\
         Options:\n\
         \x20 -i <file>        Input image file (can be repeated for multi-image composition)\n\
         \x20                  Supported formats: PNG, JPEG, WebP, GIF\n\
         \x20 -o <file>        Output filename (auto-generated if not specified)\n\
         \x20                  Extension auto-corrected to match API response format\n\
         \x20 -aspect <ratio>  Aspect ratio (default: 1:1)\n\
         \x20                  Valid: {aspects}\n\
         \x20 -size <size>     Image size (default: 1K)\n\
         \x20                  Valid: {sizes}\n\
         \x20 -model <model>   OpenRouter model (enables OpenRouter API)\n\
         \x20                  Default: {OPENROUTER_DEFAULT_MODEL}\n\
         \x20 -v, -verbose     Verbose logging\n\
         \x20 -log-level <lvl> Log level (trace, debug, info, warn, error)\n\
         \x20 -h               Show this help\n\
         \x20 -version         Show version\n\
         \n\
         Environment:\n\
         \x20 GEMINI_API_KEY             Gemini API key\n\
         \x20 OPENROUTER_API_KEY         OpenRouter API key\n\
         \x20 NANOBANANA_NO_UPDATE_CHECK Disable the update check\n\
         \n\
         Config File:\n\
         \x20 Location: $XDG_CONFIG_HOME/nanobanana/config.json (default: ~/.config/nanobanana/config.json)\n\
         \n\
         \x20 Fields:\n\
         \x20   api         - \"gemini\" or \"openrouter\" (default: gemini)\n\
         \x20   model       - OpenRouter model name (only used with openrouter)\n\
         \x20   aspect      - Default aspect ratio\n\
         \x20   size        - Default image size\n\
         \x20   api_key     - API key (environment variables take priority)\n\
         \x20   key_command - Shell command that prints the API key\n\
         \x20   auto_update - Install new releases automatically\n\
         \n\
         Priority (highest to lowest):\n\
         \x20 1. CLI flags\n\
         \x20 2. Config file\n\
         \x20 3. Environment variables (for API keys only)\n\
         \x20 4. Command defaults, then built-in defaults\n\
         \n\
         Examples:\n\
         \x20 nanobanana \"a cute cat\"\n\
         \x20 nanobanana -aspect 16:9 -size 2K \"cinematic landscape\"\n\
         \x20 nanobanana -i photo.jpg \"transform into watercolor style\"\n\
         \x20 nanobanana -i background.jpg -i subject.jpg \"place subject in the scene\"\n\
         \x20 nanobanana dashboard \"SaaS metrics with MRR and churn\"\n\
         \x20 nanobanana slide funnel \"signup to paid conversion for Q3\"\n\
         \n\
         Run \"nanobanana help <command>\" for details on a command.\n",
        aspects = AspectRatio::valid_values(),
        sizes = ImageSize::valid_values(),
    );
    out
}

fn pseudo_description(name: &str) -> &'static str {
    match name {
        "help" => "Show help for a command",
        "version" => "Show version",
        "setup" => "Interactive first-time configuration",
        "install-skill" => "Install the agent skill (-claude-dir <dir>, default ~/.claude)",
        _ => "",
    }
}

/// Help for one template command.
#[must_use]
pub fn command_help(cmd: &Command) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "nanobanana {name} - {description}\n\
         \n\
         Usage:\n\
         \x20 nanobanana {name} [options] \"prompt\"\n\
         \n\
         Defaults:\n\
         \x20 Aspect: {aspect}\n\
         \x20 Size:   {size}\n\
         \n\
         Example:\n\
         \x20 nanobanana {name} \"{example}\"\n",
        name = cmd.name,
        description = cmd.description,
        aspect = cmd.default_aspect,
        size = cmd.default_size,
        example = cmd.example,
    );

    if cmd.name == SLIDE_COMMAND {
        out.push('\n');
        out.push_str(&slide_listing());
    }

    let _ = write!(out, "\nTemplate:\n{}\n", cmd.template.trim_end());
    out
}

/// Slide subtemplates, one per line.
#[must_use]
pub fn slide_listing() -> String {
    let width = SLIDE_TEMPLATES
        .iter()
        .map(|tmpl| tmpl.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Slide templates (nanobanana slide <template> \"prompt\"):\n");
    for tmpl in SLIDE_TEMPLATES {
        let _ = writeln!(out, "  {:<width$}  {}", tmpl.name, tmpl.title);
    }
    out
}

/// Help text for `help [topic]`.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for an unrecognised topic.
pub fn render(topic: Option<&str>) -> Result<String> {
    match topic {
        None => Ok(overview()),
        Some(name) => {
            if let Some(cmd) = get_command(name) {
                Ok(command_help(cmd))
            } else if PSEUDO_COMMANDS.contains(&name) {
                Ok(format!("nanobanana {name} - {}\n", pseudo_description(name)))
            } else {
                Err(Error::UnknownCommand(name.to_string()))
            }
        }
    }
}
