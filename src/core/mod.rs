//! Core data models, prompt templates and backend dispatch.

pub mod cli_runner;
pub mod dispatch;
pub mod http;
pub mod logging;
pub mod mime;
pub mod models;
pub mod output;
pub mod slide_templates;
pub mod templates;
pub mod update_check;

pub use dispatch::{ApiConfig, Endpoints, generate_with_endpoints};
pub use models::{AspectRatio, Backend, GeneratedImage, GenerationRequest, ImageSize};
pub use templates::{COMMANDS, Command, ResolvedTemplate, get_command, resolve_template};
