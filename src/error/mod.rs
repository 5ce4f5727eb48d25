//! Error types for nanobanana.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into five categories:
//! - **Usage**: Missing prompt or unknown help topics
//! - **Configuration**: Config file parsing, invalid values, missing API keys
//! - **Network**: Connection failures and timeouts
//! - **Api**: Non-success responses or payloads without image data
//! - **Internal**: I/O and serialization failures
//!
//! Every variant renders as a single human-readable line. The binary prints
//! it as `Error: <message>` and exits with [`Error::exit_code`].

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid command-line usage.
    Usage,
    /// Configuration issues (parse errors, invalid values, missing keys).
    Configuration,
    /// Network issues (timeout, connection failure).
    Network,
    /// Upstream API issues (error status, malformed payload).
    Api,
    /// Internal errors (I/O, serialization).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Usage => "Usage error",
            Self::Configuration => "Configuration error",
            Self::Network => "Network error",
            Self::Api => "API error",
            Self::Internal => "Internal error",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Network, API or I/O failure
    GeneralError = 1,
    /// Invalid command-line usage
    UsageError = 2,
    /// Invalid or incomplete configuration
    ConfigError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Main error type for nanobanana operations.
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Usage errors
    // ==========================================================================
    /// No prompt words were given.
    #[error("no prompt provided")]
    NoPrompt,

    /// `help <topic>` named something that is not a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Flag parsing failed.
    #[error("{0}")]
    Usage(String),

    // ==========================================================================
    // Configuration errors
    // ==========================================================================
    /// Generic configuration error.
    #[error("{0}")]
    Config(String),

    /// Config file exists but is not valid JSON.
    #[error("failed to parse config file: {0}")]
    ConfigParse(String),

    /// Aspect ratio outside the supported set.
    #[error("invalid aspect ratio: {value} (valid: {valid})")]
    InvalidAspect { value: String, valid: String },

    /// Image size outside the supported set.
    #[error("invalid size: {value} (valid: {valid})")]
    InvalidSize { value: String, valid: String },

    /// No API key could be resolved for the selected backend.
    #[error("{var} environment variable not set ({hint})")]
    MissingApiKey { var: &'static str, hint: &'static str },

    /// The configured `key_command` did not produce a key.
    #[error("key_command failed: {0}")]
    KeyCommand(String),

    // ==========================================================================
    // Network errors
    // ==========================================================================
    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Network(String),

    // ==========================================================================
    // API errors
    // ==========================================================================
    /// Non-success HTTP status.
    #[error("HTTP error: {status} - {body}")]
    HttpStatus { status: String, body: String },

    /// The API returned an explicit error object.
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be parsed.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// Response parsed but carried no image.
    #[error("{0}")]
    MissingImage(String),

    /// Image payload was not valid base64.
    #[error("failed to decode image data: {0}")]
    DecodeImage(String),

    // ==========================================================================
    // I/O errors
    // ==========================================================================
    /// An input image could not be read.
    #[error("failed to read image {path}: {source}")]
    ReadImage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The generated image could not be written.
    #[error("failed to write output file: {0}")]
    WriteOutput(#[source] std::io::Error),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Map error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoPrompt | Self::UnknownCommand(_) | Self::Usage(_) => ExitCode::UsageError,

            Self::Config(_)
            | Self::ConfigParse(_)
            | Self::InvalidAspect { .. }
            | Self::InvalidSize { .. }
            | Self::MissingApiKey { .. }
            | Self::KeyCommand(_) => ExitCode::ConfigError,

            Self::Timeout(_) => ExitCode::Timeout,

            Self::Network(_)
            | Self::HttpStatus { .. }
            | Self::Api(_)
            | Self::ParseResponse(_)
            | Self::MissingImage(_)
            | Self::DecodeImage(_)
            | Self::ReadImage { .. }
            | Self::WriteOutput(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NoPrompt | Self::UnknownCommand(_) | Self::Usage(_) => ErrorCategory::Usage,

            Self::Config(_)
            | Self::ConfigParse(_)
            | Self::InvalidAspect { .. }
            | Self::InvalidSize { .. }
            | Self::MissingApiKey { .. }
            | Self::KeyCommand(_) => ErrorCategory::Configuration,

            Self::Timeout(_) | Self::Network(_) => ErrorCategory::Network,

            Self::HttpStatus { .. }
            | Self::Api(_)
            | Self::ParseResponse(_)
            | Self::MissingImage(_)
            | Self::DecodeImage(_) => ErrorCategory::Api,

            Self::ReadImage { .. }
            | Self::WriteOutput(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Map a reqwest failure, keeping timeouts distinguishable.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for nanobanana operations.
pub type Result<T> = std::result::Result<T, Error>;
