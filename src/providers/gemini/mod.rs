//! Gemini REST backend.
//!
//! `POST /v1beta/models/<model>:generateContent` with the key in the
//! `x-goog-api-key` header. Input images travel as `inlineData` parts ahead of
//! the text prompt.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{decode_base64, load_image};
use crate::core::http::{GENERATION_TIMEOUT, build_client};
use crate::core::mime::DEFAULT_MIME;
use crate::core::models::{GeneratedImage, GenerationRequest};
use crate::error::{Error, Result};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Image model used for every Gemini request.
pub const GEMINI_MODEL: &str = "gemini-3-pro-image-preview";

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 2],
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
    image_size: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

// =============================================================================
// Client
// =============================================================================

/// Gemini image client.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Client for the endpoint at `base_url` (see [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_client(GENERATION_TIMEOUT)?,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{GEMINI_MODEL}:generateContent",
            self.base_url
        )
    }

    /// Generate one image.
    ///
    /// # Errors
    ///
    /// Returns error if an input image cannot be read, the request fails, or
    /// the response carries an error or no image.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let body = build_request(request)?;

        tracing::debug!(
            model = GEMINI_MODEL,
            inputs = request.input_images.len(),
            aspect = %request.aspect,
            size = %request.size,
            "Sending Gemini request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&e, GENERATION_TIMEOUT.as_secs()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(&e, GENERATION_TIMEOUT.as_secs()))?;

        tracing::debug!(%status, bytes = text.len(), "Gemini response received");
        parse_response(status, &text)
    }
}

fn build_request(request: &GenerationRequest) -> Result<GenerateRequest> {
    let mut parts = Vec::with_capacity(request.input_images.len() + 1);
    for path in &request.input_images {
        let image = load_image(path)?;
        parts.push(Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.to_string(),
                data: image.data,
            }),
        });
    }
    parts.push(Part {
        text: Some(request.prompt.clone()),
        inline_data: None,
    });

    Ok(GenerateRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_modalities: ["IMAGE", "TEXT"],
            image_config: ImageConfig {
                aspect_ratio: request.aspect.as_str(),
                image_size: request.size.as_str(),
            },
        },
    })
}

/// An explicit API error object wins over the HTTP status; a failing status
/// with an unparseable body is reported as an HTTP error.
fn parse_response(status: reqwest::StatusCode, text: &str) -> Result<GeneratedImage> {
    let parsed = serde_json::from_str::<GenerateResponse>(text);

    if let Ok(GenerateResponse {
        error: Some(error), ..
    }) = &parsed
    {
        return Err(Error::Api(format!(
            "{} (code: {})",
            error.message, error.code
        )));
    }

    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.to_string(),
            body: text.trim().to_string(),
        });
    }

    let response = parsed.map_err(|e| Error::ParseResponse(e.to_string()))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::MissingImage("no candidates in response".to_string()))?;

    let inline = candidate
        .content
        .parts
        .into_iter()
        .find_map(|part| part.inline_data.filter(|inline| !inline.data.is_empty()))
        .ok_or_else(|| Error::MissingImage("no image data in response".to_string()))?;

    let mime_type = if inline.mime_type.is_empty() {
        DEFAULT_MIME.to_string()
    } else {
        inline.mime_type
    };

    Ok(GeneratedImage {
        data: decode_base64(&inline.data)?,
        mime_type,
    })
}
