//! The generation flow: template, resolve, call the backend, write the file.

use std::path::PathBuf;

use chrono::Local;

use super::args::Cli;
use super::help;
use crate::core::dispatch::{self, Endpoints};
use crate::core::models::{Backend, GenerationRequest};
use crate::core::output::{resolve_output_path, write_image};
use crate::core::templates::{ResolvedTemplate, get_command, resolve_template};
use crate::core::update_check;
use crate::error::{Error, Result};
use crate::storage::AppPaths;
use crate::storage::config::{Defaults, EnvLayer, FileConfig, FlagLayer, resolve};

/// Everything the flow reads from its surroundings.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    /// `None` when neither `XDG_CONFIG_HOME` nor a home directory exists.
    pub paths: Option<AppPaths>,
    pub env: EnvLayer,
    pub endpoints: Endpoints,
    pub check_updates: bool,
}

impl GenerateContext {
    /// Context for a real invocation.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            paths: AppPaths::new(),
            env: EnvLayer::from_env(),
            endpoints: Endpoints::default(),
            check_updates: !update_check::is_disabled(),
        }
    }
}

/// Where the image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub path: PathBuf,
    pub mime_type: String,
    pub adjusted: bool,
}

/// Generate one image for `command` (empty for a free-form prompt).
///
/// # Errors
///
/// Returns [`Error::NoPrompt`] (after printing usage to stderr) when no
/// prompt words remain, and propagates configuration, backend and write
/// errors.
pub async fn run(command: &str, cli: &Cli, ctx: &GenerateContext) -> Result<GenerateOutcome> {
    let cmd = if command.is_empty() {
        None
    } else {
        Some(get_command(command).ok_or_else(|| Error::UnknownCommand(command.to_string()))?)
    };

    let mut words = cli.prompt.clone();
    let template = cmd.map(|c| resolve_template(c, &mut words));

    if words.is_empty() {
        eprint!("{}", help::overview());
        return Err(Error::NoPrompt);
    }
    let user_prompt = words.join(" ");

    let file = match &ctx.paths {
        Some(paths) => FileConfig::load_from(&paths.config_file())?,
        None => FileConfig::default(),
    };

    let flags = FlagLayer {
        aspect: cli.aspect.clone(),
        size: cli.size.clone(),
        model: cli.model.clone(),
    };
    let defaults = cmd.map_or_else(Defaults::builtin, Defaults::for_command);

    let resolved = resolve(&flags, &file, &ctx.env, defaults)?;
    resolved.log_sources();
    let (aspect, size) = (resolved.aspect, resolved.size);

    let prompt = template.map_or_else(
        || user_prompt.clone(),
        |t: ResolvedTemplate| t.apply(&user_prompt, aspect, size),
    );

    let api = resolved.into_api_config().await?;

    println!("Generating image...");
    if let Some(t) = &template {
        println!("  Command: {}", t.label());
    }
    println!("  Prompt: {user_prompt}");
    if !cli.input.is_empty() {
        let inputs: Vec<String> = cli.input.iter().map(|p| p.display().to_string()).collect();
        println!("  Inputs: {}", inputs.join(", "));
    }
    println!("  Aspect: {aspect}");
    println!("  Size:   {size}");
    match api.backend {
        Backend::OpenRouter => println!("  API:    OpenRouter ({})", api.model_name()),
        Backend::Gemini => println!("  API:    Gemini"),
    }

    let request = GenerationRequest {
        prompt,
        input_images: cli.input.clone(),
        aspect,
        size,
    };
    let image = dispatch::generate_with_endpoints(&api, &request, &ctx.endpoints).await?;

    let output = resolve_output_path(&image.mime_type, cli.output.as_deref(), &Local::now());
    if output.adjusted {
        println!(
            "\nInfo: API returned {} format, adjusted output to: {}",
            image.mime_type,
            output.path.display()
        );
    }
    write_image(&output.path, &image.data)?;
    println!("\nImage saved to: {}", output.path.display());

    if ctx.check_updates {
        if let Some(paths) = &ctx.paths {
            let notice = update_check::check_for_update(
                &paths.update_cache_file(),
                env!("CARGO_PKG_VERSION"),
                file.auto_update.unwrap_or(false),
            )
            .await;
            if let Some(notice) = notice {
                eprintln!("\n{notice}");
            }
        }
    }

    Ok(GenerateOutcome {
        path: output.path,
        mime_type: image.mime_type,
        adjusted: output.adjusted,
    })
}
