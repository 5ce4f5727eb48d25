//! Generation dispatch.
//!
//! Routes a request to the selected backend. One round trip, no retry.

use std::time::Instant;

use crate::core::models::{Backend, GeneratedImage, GenerationRequest};
use crate::error::Result;
use crate::providers::gemini::{self, GeminiClient};
use crate::providers::openrouter::{self, OpenRouterClient};
use crate::storage::config::OPENROUTER_DEFAULT_MODEL;

/// Resolved backend selection and credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub backend: Backend,
    pub api_key: String,
    /// OpenRouter model; ignored for Gemini.
    pub model: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("backend", &self.backend)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ApiConfig {
    /// Model name for display and requests.
    #[must_use]
    pub fn model_name(&self) -> &str {
        match self.backend {
            Backend::Gemini => gemini::GEMINI_MODEL,
            Backend::OpenRouter => self.model.as_deref().unwrap_or(OPENROUTER_DEFAULT_MODEL),
        }
    }
}

/// Base URLs for both backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gemini: String,
    pub openrouter: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: gemini::DEFAULT_BASE_URL.to_string(),
            openrouter: openrouter::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Generate an image against explicit endpoints.
///
/// # Errors
///
/// Propagates backend errors.
pub async fn generate_with_endpoints(
    config: &ApiConfig,
    request: &GenerationRequest,
    endpoints: &Endpoints,
) -> Result<GeneratedImage> {
    let start = Instant::now();

    let result = match config.backend {
        Backend::Gemini => {
            GeminiClient::with_base_url(config.api_key.as_str(), endpoints.gemini.as_str())?
                .generate(request)
                .await
        }
        Backend::OpenRouter => {
            OpenRouterClient::with_base_url(
                config.api_key.as_str(),
                config.model_name(),
                endpoints.openrouter.as_str(),
            )?
            .generate(request)
            .await
        }
    };

    match &result {
        Ok(image) => tracing::debug!(
            backend = %config.backend,
            mime = %image.mime_type,
            bytes = image.data.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Generation succeeded"
        ),
        Err(e) => tracing::debug!(
            backend = %config.backend,
            error = %e,
            elapsed_ms = start.elapsed().as_millis(),
            "Generation failed"
        ),
    }

    result
}
