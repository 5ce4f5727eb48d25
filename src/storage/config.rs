//! Configuration file loading and layered resolution.
//!
//! Loads configuration from `$XDG_CONFIG_HOME/nanobanana/config.json`
//! (default `~/.config/nanobanana/config.json`).
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Config file
//! 3. Environment variables (API keys only)
//! 4. Defaults (a command's own defaults, else the built-in ones)
//!
//! [`resolve`] is a pure function of those four layers. Running a
//! `key_command` is the only step with side effects and happens afterwards
//! in [`ResolvedConfig::into_api_config`].
//!
//! ## Environment Variables
//!
//! - `GEMINI_API_KEY`: Gemini API key
//! - `OPENROUTER_API_KEY`: OpenRouter API key; when it is the only key
//!   present, OpenRouter is selected

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::cli_runner::{KEY_COMMAND_TIMEOUT, fetch_key};
use crate::core::dispatch::ApiConfig;
use crate::core::models::{AspectRatio, Backend, ImageSize};
use crate::core::templates::Command;
use crate::error::{Error, Result};

// =============================================================================
// Constants
// =============================================================================

/// Model used on OpenRouter when neither flag nor config names one.
pub const OPENROUTER_DEFAULT_MODEL: &str = "google/gemini-3-pro-image-preview";

const GEMINI_KEY_HINT: &str = "or use OPENROUTER_API_KEY, or run \"nanobanana setup\"";
const OPENROUTER_KEY_HINT: &str = "required for OpenRouter API";

// =============================================================================
// Config File
// =============================================================================

/// Contents of `config.json`. Every field is optional and unknown fields are
/// ignored. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// `"gemini"` or `"openrouter"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    /// OpenRouter model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Default aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,
    /// Default image size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Shell command whose stdout is the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_command: Option<String>,
    /// API key stored in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Install newer releases automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<bool>,
}

impl FileConfig {
    /// Load configuration from a specific path.
    ///
    /// Returns an empty config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file: {e}")))?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Save configuration as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        tracing::debug!(?path, "Config file saved");
        Ok(path.to_path_buf())
    }

    fn api(&self) -> Option<&str> {
        non_empty(self.api.as_deref())
    }

    fn model(&self) -> Option<&str> {
        non_empty(self.model.as_deref())
    }

    fn aspect(&self) -> Option<&str> {
        non_empty(self.aspect.as_deref())
    }

    fn size(&self) -> Option<&str> {
        non_empty(self.size.as_deref())
    }

    fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }

    fn key_command(&self) -> Option<&str> {
        non_empty(self.key_command.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Input Layers
// =============================================================================

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagLayer {
    pub aspect: Option<String>,
    pub size: Option<String>,
    pub model: Option<String>,
}

/// API keys from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvLayer {
    pub gemini_key: Option<String>,
    pub openrouter_key: Option<String>,
}

impl EnvLayer {
    /// Read `GEMINI_API_KEY` and `OPENROUTER_API_KEY`. Empty values are absent.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |backend: Backend| {
            std::env::var(backend.key_env_var())
                .ok()
                .filter(|v| !v.trim().is_empty())
        };
        Self {
            gemini_key: read(Backend::Gemini),
            openrouter_key: read(Backend::OpenRouter),
        }
    }

    fn key_for(&self, backend: Backend) -> Option<&str> {
        let key = match backend {
            Backend::Gemini => self.gemini_key.as_deref(),
            Backend::OpenRouter => self.openrouter_key.as_deref(),
        };
        non_empty(key)
    }
}

/// Lowest-priority aspect and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub aspect: AspectRatio,
    pub size: ImageSize,
    pub source: ConfigSource,
}

impl Defaults {
    /// `1:1` at `1K`.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            aspect: AspectRatio::default(),
            size: ImageSize::default(),
            source: ConfigSource::Default,
        }
    }

    /// A command's own defaults.
    #[must_use]
    pub const fn for_command(command: &Command) -> Self {
        Self {
            aspect: command.default_aspect,
            size: command.default_size,
            source: ConfigSource::CommandDefault,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from config file.
    ConfigFile,
    /// Value from environment variable.
    Env,
    /// Output of `key_command`.
    KeyCommand,
    /// The subcommand's default.
    CommandDefault,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Env => write!(f, "environment variable"),
            Self::KeyCommand => write!(f, "key command"),
            Self::CommandDefault => write!(f, "command default"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub aspect: ConfigSource,
    pub size: ConfigSource,
    pub backend: ConfigSource,
    pub api_key: ConfigSource,
}

/// Where the API key will come from. The key command has not run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Env(String),
    ConfigFile(String),
    Command(String),
}

impl KeySource {
    const fn source(&self) -> ConfigSource {
        match self {
            Self::Env(_) => ConfigSource::Env,
            Self::ConfigFile(_) => ConfigSource::ConfigFile,
            Self::Command(_) => ConfigSource::KeyCommand,
        }
    }
}

/// Fully resolved configuration after merging all layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub aspect: AspectRatio,
    pub size: ImageSize,
    pub backend: Backend,
    /// OpenRouter model; `None` for Gemini.
    pub model: Option<String>,
    pub key: KeySource,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Merge flags, config file, environment and defaults.
///
/// Aspect and size are validated before the API key is looked at, so an
/// invalid value never triggers a `key_command`.
///
/// # Errors
///
/// Returns [`Error::InvalidAspect`], [`Error::InvalidSize`] or
/// [`Error::MissingApiKey`].
pub fn resolve(
    flags: &FlagLayer,
    file: &FileConfig,
    env: &EnvLayer,
    defaults: Defaults,
) -> Result<ResolvedConfig> {
    let mut sources = ConfigSources::default();

    let (aspect, aspect_source) = pick(
        flags.aspect.as_deref(),
        file.aspect(),
        defaults.aspect,
        defaults.source,
    )?;
    sources.aspect = aspect_source;

    let (size, size_source) = pick(
        flags.size.as_deref(),
        file.size(),
        defaults.size,
        defaults.source,
    )?;
    sources.size = size_source;

    let (backend, backend_source) = select_backend(flags, file, env);
    sources.backend = backend_source;

    let model = match backend {
        Backend::OpenRouter => Some(
            non_empty(flags.model.as_deref())
                .or_else(|| file.model())
                .unwrap_or(OPENROUTER_DEFAULT_MODEL)
                .to_string(),
        ),
        Backend::Gemini => None,
    };

    let key = resolve_key_source(backend, file, env)?;
    sources.api_key = key.source();

    Ok(ResolvedConfig {
        aspect,
        size,
        backend,
        model,
        key,
        sources,
    })
}

fn pick<T: std::str::FromStr<Err = Error>>(
    flag: Option<&str>,
    file: Option<&str>,
    default: T,
    default_source: ConfigSource,
) -> Result<(T, ConfigSource)> {
    if let Some(value) = non_empty(flag) {
        return Ok((value.parse()?, ConfigSource::Cli));
    }
    if let Some(value) = file {
        return Ok((value.parse()?, ConfigSource::ConfigFile));
    }
    Ok((default, default_source))
}

/// OpenRouter is chosen by a model flag, by the config file (`api` set to
/// `openrouter`, or any `model`), or when `OPENROUTER_API_KEY` is the only
/// key in the environment.
fn select_backend(flags: &FlagLayer, file: &FileConfig, env: &EnvLayer) -> (Backend, ConfigSource) {
    if non_empty(flags.model.as_deref()).is_some() {
        return (Backend::OpenRouter, ConfigSource::Cli);
    }

    if let Some(api) = file.api() {
        if api == Backend::OpenRouter.config_name() {
            return (Backend::OpenRouter, ConfigSource::ConfigFile);
        }
        if api != Backend::Gemini.config_name() {
            tracing::warn!(api, "Unknown api in config file, ignoring");
        }
    }
    if file.model().is_some() {
        return (Backend::OpenRouter, ConfigSource::ConfigFile);
    }

    if env.key_for(Backend::OpenRouter).is_some() && env.key_for(Backend::Gemini).is_none() {
        return (Backend::OpenRouter, ConfigSource::Env);
    }

    (Backend::Gemini, ConfigSource::Default)
}

fn resolve_key_source(backend: Backend, file: &FileConfig, env: &EnvLayer) -> Result<KeySource> {
    if let Some(key) = env.key_for(backend) {
        return Ok(KeySource::Env(key.to_string()));
    }
    if let Some(key) = file.api_key() {
        return Ok(KeySource::ConfigFile(key.to_string()));
    }
    if let Some(command) = file.key_command() {
        return Ok(KeySource::Command(command.to_string()));
    }

    Err(Error::MissingApiKey {
        var: backend.key_env_var(),
        hint: match backend {
            Backend::Gemini => GEMINI_KEY_HINT,
            Backend::OpenRouter => OPENROUTER_KEY_HINT,
        },
    })
}

impl ResolvedConfig {
    /// Emit the source of every value at debug level.
    pub fn log_sources(&self) {
        tracing::debug!(
            aspect = %self.aspect,
            aspect_source = %self.sources.aspect,
            size = %self.size,
            size_source = %self.sources.size,
            backend = %self.backend,
            backend_source = %self.sources.backend,
            api_key_source = %self.sources.api_key,
            "Resolved configuration"
        );
    }

    /// Produce the final [`ApiConfig`], running `key_command` if that is
    /// where the key comes from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyCommand`] if the command fails.
    pub async fn into_api_config(self) -> Result<ApiConfig> {
        let api_key = match self.key {
            KeySource::Env(key) | KeySource::ConfigFile(key) => key,
            KeySource::Command(command) => fetch_key(&command, KEY_COMMAND_TIMEOUT).await?,
        };

        Ok(ApiConfig {
            backend: self.backend,
            api_key,
            model: self.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn gemini_env() -> EnvLayer {
        EnvLayer {
            gemini_key: Some("gemini-key".to_string()),
            openrouter_key: None,
        }
    }

    fn both_env() -> EnvLayer {
        EnvLayer {
            gemini_key: Some("gemini-key".to_string()),
            openrouter_key: Some("or-key".to_string()),
        }
    }

    fn file_with(f: impl FnOnce(&mut FileConfig)) -> FileConfig {
        let mut file = FileConfig::default();
        f(&mut file);
        file
    }

    fn flags(aspect: Option<&str>, size: Option<&str>, model: Option<&str>) -> FlagLayer {
        FlagLayer {
            aspect: aspect.map(String::from),
            size: size.map(String::from),
            model: model.map(String::from),
        }
    }

    // -------------------------------------------------------------------------
    // File loading
    // -------------------------------------------------------------------------

    #[test]
    fn load_missing_file_returns_default() {
        let config = FileConfig::load_from(Path::new("/nonexistent/path/config.json")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn load_valid_json_ignores_unknown_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"api": "openrouter", "model": "x/y", "aspect": "16:9", "size": "2K",
                "auto_update": true, "theme": "dark"}}"#
        )
        .unwrap();

        let config = FileConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.as_deref(), Some("openrouter"));
        assert_eq!(config.model.as_deref(), Some("x/y"));
        assert_eq!(config.aspect.as_deref(), Some("16:9"));
        assert_eq!(config.size.as_deref(), Some("2K"));
        assert_eq!(config.auto_update, Some(true));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();

        let err = FileConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn roundtrip_save_load_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("nanobanana").join("config.json");

        let config = file_with(|c| {
            c.api = Some("gemini".to_string());
            c.api_key = Some("secret".to_string());
            c.size = Some("4K".to_string());
        });

        let written = config.save_to(&path).unwrap();
        assert_eq!(written, path);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"api\": \"gemini\""));
        assert!(!raw.contains("model"));

        assert_eq!(FileConfig::load_from(&path).unwrap(), config);
    }

    // -------------------------------------------------------------------------
    // Aspect and size priority
    // -------------------------------------------------------------------------

    #[test]
    fn flag_beats_file_and_default_for_every_aspect() {
        let file = file_with(|c| c.aspect = Some("3:4".to_string()));
        for ratio in AspectRatio::ALL {
            let resolved = resolve(
                &flags(Some(ratio.as_str()), None, None),
                &file,
                &gemini_env(),
                Defaults::builtin(),
            )
            .unwrap();
            assert_eq!(resolved.aspect, *ratio);
            assert_eq!(resolved.sources.aspect, ConfigSource::Cli);
        }
    }

    #[test]
    fn flag_beats_file_and_default_for_every_size() {
        let file = file_with(|c| c.size = Some("2K".to_string()));
        for size in ImageSize::ALL {
            let resolved = resolve(
                &flags(None, Some(size.as_str()), None),
                &file,
                &gemini_env(),
                Defaults::builtin(),
            )
            .unwrap();
            assert_eq!(resolved.size, *size);
            assert_eq!(resolved.sources.size, ConfigSource::Cli);
        }
    }

    #[test]
    fn file_beats_default() {
        let file = file_with(|c| {
            c.aspect = Some("16:9".to_string());
            c.size = Some("2K".to_string());
        });
        let resolved = resolve(&FlagLayer::default(), &file, &gemini_env(), Defaults::builtin())
            .unwrap();
        assert_eq!(resolved.aspect, AspectRatio::Widescreen16x9);
        assert_eq!(resolved.size, ImageSize::TwoK);
        assert_eq!(resolved.sources.aspect, ConfigSource::ConfigFile);
        assert_eq!(resolved.sources.size, ConfigSource::ConfigFile);
    }

    #[test]
    fn builtin_defaults_apply_last() {
        let resolved = resolve(
            &FlagLayer::default(),
            &FileConfig::default(),
            &gemini_env(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.aspect, AspectRatio::Square);
        assert_eq!(resolved.size, ImageSize::OneK);
        assert_eq!(resolved.sources.aspect, ConfigSource::Default);
        assert_eq!(resolved.backend, Backend::Gemini);
        assert!(resolved.model.is_none());
    }

    #[test]
    fn command_defaults_yield_to_file_and_flags() {
        let command = crate::core::templates::get_command("dashboard").unwrap();
        let defaults = Defaults::for_command(command);

        let resolved = resolve(
            &FlagLayer::default(),
            &FileConfig::default(),
            &gemini_env(),
            defaults,
        )
        .unwrap();
        assert_eq!(resolved.aspect, command.default_aspect);
        assert_eq!(resolved.size, command.default_size);
        assert_eq!(resolved.sources.aspect, ConfigSource::CommandDefault);

        let file = file_with(|c| c.aspect = Some("4:5".to_string()));
        let resolved = resolve(&FlagLayer::default(), &file, &gemini_env(), defaults).unwrap();
        assert_eq!(resolved.aspect, AspectRatio::Portrait4x5);

        let resolved = resolve(&flags(Some("2:3"), None, None), &file, &gemini_env(), defaults)
            .unwrap();
        assert_eq!(resolved.aspect, AspectRatio::Portrait2x3);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let file = file_with(|c| {
            c.aspect = Some(String::new());
            c.model = Some(String::new());
            c.api_key = Some(String::new());
        });
        let resolved = resolve(
            &flags(Some(""), None, None),
            &file,
            &gemini_env(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.aspect, AspectRatio::Square);
        assert_eq!(resolved.backend, Backend::Gemini);
        assert_eq!(resolved.key, KeySource::Env("gemini-key".to_string()));
    }

    #[test]
    fn invalid_values_are_rejected_with_names() {
        let err = resolve(
            &flags(Some("99:1"), None, None),
            &FileConfig::default(),
            &gemini_env(),
            Defaults::builtin(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid aspect ratio: 99:1 (valid: 1:1, 2:3"));

        let file = file_with(|c| c.size = Some("8K".to_string()));
        let err = resolve(&FlagLayer::default(), &file, &gemini_env(), Defaults::builtin())
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid size: 8K (valid: 1K, 2K, 4K)");
    }

    #[test]
    fn validation_runs_before_key_resolution() {
        let err = resolve(
            &flags(Some("bogus"), None, None),
            &FileConfig::default(),
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidAspect { .. }));
    }

    // -------------------------------------------------------------------------
    // Backend selection
    // -------------------------------------------------------------------------

    #[test]
    fn model_flag_implies_openrouter_even_if_file_says_gemini() {
        let file = file_with(|c| c.api = Some("gemini".to_string()));
        let resolved = resolve(
            &flags(None, None, Some("google/gemini-2.5-flash-image-preview")),
            &file,
            &both_env(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.backend, Backend::OpenRouter);
        assert_eq!(resolved.sources.backend, ConfigSource::Cli);
        assert_eq!(
            resolved.model.as_deref(),
            Some("google/gemini-2.5-flash-image-preview")
        );
        assert_eq!(resolved.key, KeySource::Env("or-key".to_string()));
    }

    #[test]
    fn file_api_openrouter_selects_default_model() {
        let file = file_with(|c| c.api = Some("openrouter".to_string()));
        let resolved = resolve(&FlagLayer::default(), &file, &both_env(), Defaults::builtin())
            .unwrap();
        assert_eq!(resolved.backend, Backend::OpenRouter);
        assert_eq!(resolved.model.as_deref(), Some(OPENROUTER_DEFAULT_MODEL));
    }

    #[test]
    fn file_model_selects_openrouter() {
        let file = file_with(|c| c.model = Some("vendor/model".to_string()));
        let resolved = resolve(&FlagLayer::default(), &file, &both_env(), Defaults::builtin())
            .unwrap();
        assert_eq!(resolved.backend, Backend::OpenRouter);
        assert_eq!(resolved.sources.backend, ConfigSource::ConfigFile);
        assert_eq!(resolved.model.as_deref(), Some("vendor/model"));
    }

    #[test]
    fn lone_openrouter_key_selects_openrouter() {
        let env = EnvLayer {
            gemini_key: None,
            openrouter_key: Some("or-key".to_string()),
        };
        let file = file_with(|c| c.api = Some("gemini".to_string()));
        let resolved = resolve(&FlagLayer::default(), &file, &env, Defaults::builtin()).unwrap();
        assert_eq!(resolved.backend, Backend::OpenRouter);
        assert_eq!(resolved.sources.backend, ConfigSource::Env);
    }

    #[test]
    fn both_keys_default_to_gemini() {
        let resolved = resolve(
            &FlagLayer::default(),
            &FileConfig::default(),
            &both_env(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.backend, Backend::Gemini);
        assert_eq!(resolved.key, KeySource::Env("gemini-key".to_string()));
    }

    // -------------------------------------------------------------------------
    // Key source priority
    // -------------------------------------------------------------------------

    #[test]
    fn env_key_beats_file_key_beats_command() {
        let file = file_with(|c| {
            c.api_key = Some("file-key".to_string());
            c.key_command = Some("echo cmd-key".to_string());
        });

        let resolved = resolve(&FlagLayer::default(), &file, &gemini_env(), Defaults::builtin())
            .unwrap();
        assert_eq!(resolved.key, KeySource::Env("gemini-key".to_string()));
        assert_eq!(resolved.sources.api_key, ConfigSource::Env);

        let resolved = resolve(
            &FlagLayer::default(),
            &file,
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.key, KeySource::ConfigFile("file-key".to_string()));

        let file = file_with(|c| c.key_command = Some("echo cmd-key".to_string()));
        let resolved = resolve(
            &FlagLayer::default(),
            &file,
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap();
        assert_eq!(resolved.key, KeySource::Command("echo cmd-key".to_string()));
        assert_eq!(resolved.sources.api_key, ConfigSource::KeyCommand);
    }

    #[test]
    fn missing_gemini_key_names_variable() {
        let err = resolve(
            &FlagLayer::default(),
            &FileConfig::default(),
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "GEMINI_API_KEY environment variable not set (or use OPENROUTER_API_KEY, or run \"nanobanana setup\")"
        );
    }

    #[test]
    fn missing_openrouter_key_names_variable() {
        let err = resolve(
            &flags(None, None, Some("m")),
            &FileConfig::default(),
            &gemini_env(),
            Defaults::builtin(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "OPENROUTER_API_KEY environment variable not set (required for OpenRouter API)"
        );
    }

    #[tokio::test]
    async fn into_api_config_uses_resolved_key() {
        let resolved = resolve(
            &FlagLayer::default(),
            &FileConfig::default(),
            &gemini_env(),
            Defaults::builtin(),
        )
        .unwrap();
        let api = resolved.into_api_config().await.unwrap();
        assert_eq!(api.backend, Backend::Gemini);
        assert_eq!(api.api_key, "gemini-key");
        assert!(api.model.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn into_api_config_runs_key_command() {
        let file = file_with(|c| c.key_command = Some("echo ' cmd-key '".to_string()));
        let resolved = resolve(
            &FlagLayer::default(),
            &file,
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap();
        let api = resolved.into_api_config().await.unwrap();
        assert_eq!(api.api_key, "cmd-key");

        let file = file_with(|c| c.key_command = Some("exit 1".to_string()));
        let resolved = resolve(
            &FlagLayer::default(),
            &file,
            &EnvLayer::default(),
            Defaults::builtin(),
        )
        .unwrap();
        let err = resolved.into_api_config().await.unwrap_err();
        assert!(matches!(err, Error::KeyCommand(_)));
        assert_eq!(err.exit_code(), crate::error::ExitCode::ConfigError);
    }
}
