//! OpenRouter backend.
//!
//! Uses the chat completions endpoint with `modalities: ["image", "text"]`.
//! Input images are sent as `image_url` data URLs and the generated image
//! comes back as a data URL in `choices[0].message.images`.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{decode_base64, load_image};
use crate::core::http::{GENERATION_TIMEOUT, build_client};
use crate::core::mime::DEFAULT_MIME;
use crate::core::models::{GeneratedImage, GenerationRequest};
use crate::error::{Error, Result};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai";

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    images: Vec<ImagePart>,
}

#[derive(Debug, Deserialize)]
struct ImagePart {
    #[serde(default)]
    image_url: Option<ImageUrl>,
}

#[derive(Debug, Deserialize)]
struct ImageUrl {
    #[serde(default)]
    url: String,
}

// =============================================================================
// Client
// =============================================================================

/// OpenRouter image client.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenRouterClient {
    /// Client for the endpoint at `base_url` (see [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: build_client(GENERATION_TIMEOUT)?,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/chat/completions", self.base_url)
    }

    /// Generate one image.
    ///
    /// # Errors
    ///
    /// Returns error if an input image cannot be read, the request fails, or
    /// the response carries an error or no image.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let body = build_request(&self.model, request)?;

        tracing::debug!(
            model = %self.model,
            inputs = request.input_images.len(),
            aspect = %request.aspect,
            size = %request.size,
            "Sending OpenRouter request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&e, GENERATION_TIMEOUT.as_secs()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(&e, GENERATION_TIMEOUT.as_secs()))?;

        tracing::debug!(%status, bytes = text.len(), "OpenRouter response received");

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.to_string(),
                body: text.trim().to_string(),
            });
        }

        parse_response(&text)
    }
}

fn build_request(model: &str, request: &GenerationRequest) -> Result<Value> {
    let mut content = Vec::with_capacity(request.input_images.len() + 1);
    for path in &request.input_images {
        let image = load_image(path)?;
        content.push(json!({
            "type": "image_url",
            "image_url": { "url": image.data_url() }
        }));
    }
    content.push(json!({ "type": "text", "text": request.prompt }));

    Ok(json!({
        "model": model,
        "messages": [{ "role": "user", "content": content }],
        "modalities": ["image", "text"],
        "image_config": {
            "aspectRatio": request.aspect.as_str(),
            "imageSize": request.size.as_str()
        }
    }))
}

fn parse_response(text: &str) -> Result<GeneratedImage> {
    let response: ChatCompletionResponse =
        serde_json::from_str(text).map_err(|e| Error::ParseResponse(e.to_string()))?;

    if let Some(error) = response.error.filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(Error::Api(message));
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::MissingImage("no choices in response".to_string()))?;

    let url = choice
        .message
        .and_then(|message| message.images.into_iter().next())
        .ok_or_else(|| Error::MissingImage("no images in response".to_string()))?
        .image_url
        .map(|image_url| image_url.url)
        .unwrap_or_default();

    parse_data_url(&url)
}

/// Split `data:<mime>;base64,<payload>` into bytes and MIME type.
fn parse_data_url(url: &str) -> Result<GeneratedImage> {
    let Some(rest) = url.strip_prefix("data:") else {
        let preview: String = url.chars().take(50).collect();
        return Err(Error::MissingImage(format!(
            "unexpected image URL format: {preview}"
        )));
    };

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::MissingImage("invalid data URL format".to_string()))?;

    let mime_type = header
        .split(';')
        .next()
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_MIME);

    if payload.trim().is_empty() {
        return Err(Error::MissingImage("empty image data in response".to_string()));
    }

    Ok(GeneratedImage {
        data: decode_base64(payload)?,
        mime_type: mime_type.to_string(),
    })
}
