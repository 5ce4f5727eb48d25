//! Integration tests for the backend clients and the update check against
//! wiremock endpoints.
//!
//! Verifies:
//! - Request routing, auth headers and body shape
//! - Image extraction from success responses
//! - Error mapping (API error objects, HTTP status, missing images)
//! - crates.io lookup and its cache

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nanobanana::core::models::{AspectRatio, GenerationRequest, ImageSize};
use nanobanana::core::update_check;
use nanobanana::error::Error;
use nanobanana::providers::gemini::{GEMINI_MODEL, GeminiClient};
use nanobanana::providers::openrouter::OpenRouterClient;
use nanobanana::storage::cache;
use nanobanana::test_utils::{
    TINY_JPEG, TINY_PNG, TestDir, gemini_error_response, gemini_image_response,
    openrouter_image_response,
};

use common::log_capture::TestLogCapture;

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: prompt.to_string(),
        input_images: Vec::new(),
        aspect: AspectRatio::Widescreen16x9,
        size: ImageSize::TwoK,
    }
}

fn gemini_path() -> String {
    format!("/v1beta/models/{GEMINI_MODEL}:generateContent")
}

// =============================================================================
// Gemini
// =============================================================================

#[tokio::test]
async fn gemini_returns_decoded_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(header("x-goog-api-key", "gemini-test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseModalities": ["IMAGE", "TEXT"],
                "imageConfig": { "aspectRatio": "16:9", "imageSize": "2K" }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_image_response("image/png", TINY_PNG)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("gemini-test-key", server.uri()).unwrap();
    let image = client.generate(&request("a cute cat")).await.unwrap();

    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, TINY_PNG);
}

#[tokio::test]
async fn gemini_sends_input_images_before_prompt() {
    let dir = TestDir::new();
    let input = dir.create_file("photo.jpg", TINY_JPEG);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(body_partial_json(json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": "image/jpeg" } },
                    { "text": "make it watercolor" }
                ]
            }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_image_response("image/png", TINY_PNG)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("k", server.uri()).unwrap();
    let req = GenerationRequest {
        input_images: vec![input],
        ..request("make it watercolor")
    };
    client.generate(&req).await.unwrap();
}

#[tokio::test]
async fn gemini_error_object_wins_over_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(gemini_error_response(400, "API key not valid")),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("bad", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "API error: API key not valid (code: 400)");
}

#[tokio::test]
async fn gemini_plain_failure_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("k", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert!(status.starts_with("503"));
            assert_eq!(body, "upstream overloaded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn gemini_text_only_answer_has_no_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that." }] } }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("k", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();
    assert_eq!(err.to_string(), "no image data in response");
}

#[tokio::test]
async fn gemini_request_is_logged_without_key() {
    let capture = TestLogCapture::start();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_image_response("image/png", TINY_PNG)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("super-secret-key", server.uri()).unwrap();
    client.generate(&request("cat")).await.unwrap();

    capture.assert_logged("Sending Gemini request");
    capture.assert_field_logged("model", GEMINI_MODEL);
    capture.assert_never_logged("super-secret-key");
}

// =============================================================================
// OpenRouter
// =============================================================================

#[tokio::test]
async fn openrouter_returns_decoded_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer or-test-key"))
        .and(body_partial_json(json!({
            "model": "vendor/image-model",
            "modalities": ["image", "text"],
            "image_config": { "aspectRatio": "16:9", "imageSize": "2K" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(openrouter_image_response("image/jpeg", TINY_JPEG)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client =
        OpenRouterClient::with_base_url("or-test-key", "vendor/image-model", server.uri()).unwrap();
    let image = client.generate(&request("a cute cat")).await.unwrap();

    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.data, TINY_JPEG);
}

#[tokio::test]
async fn openrouter_status_error_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":{"message":"No auth"}}"#),
        )
        .mount(&server)
        .await;

    let client = OpenRouterClient::with_base_url("k", "m", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { .. }));
    assert!(err.to_string().starts_with("HTTP error: 401"));
    assert!(err.to_string().contains("No auth"));
}

#[tokio::test]
async fn openrouter_error_in_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": { "message": "model not found", "code": 404 } })),
        )
        .mount(&server)
        .await;

    let client = OpenRouterClient::with_base_url("k", "m", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();
    assert_eq!(err.to_string(), "API error: model not found");
}

#[tokio::test]
async fn openrouter_without_images_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "text only" } }]
        })))
        .mount(&server)
        .await;

    let client = OpenRouterClient::with_base_url("k", "m", server.uri()).unwrap();
    let err = client.generate(&request("cat")).await.unwrap_err();
    assert_eq!(err.to_string(), "no images in response");
}

// =============================================================================
// Update Check
// =============================================================================

#[tokio::test]
async fn latest_version_fetches_and_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/crates/nanobanana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crate": { "name": "nanobanana", "max_version": "9.1.0" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TestDir::new();
    let cache_path = dir.file_path("update_check.json");
    let now = 1_800_000_000;

    let latest = update_check::latest_version(&cache_path, &server.uri(), now).await;
    assert_eq!(latest.as_deref(), Some("9.1.0"));

    let cached = cache::read(&cache_path);
    assert_eq!(cached.last_check, now);
    assert_eq!(cached.latest_version.as_deref(), Some("9.1.0"));

    // Within the interval the cache answers; the mock expects one call only.
    let again = update_check::latest_version(&cache_path, &server.uri(), now + 60).await;
    assert_eq!(again.as_deref(), Some("9.1.0"));
}

#[tokio::test]
async fn failed_lookup_is_cached_as_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/crates/nanobanana"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TestDir::new();
    let cache_path = dir.file_path("update_check.json");

    let latest = update_check::latest_version(&cache_path, &server.uri(), 1_000).await;
    assert!(latest.is_none());

    let cached = cache::read(&cache_path);
    assert_eq!(cached.last_check, 1_000);
    assert!(cached.latest_version.is_none());
}

#[tokio::test]
async fn newer_release_produces_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/crates/nanobanana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crate": { "max_version": "99.0.0" }
        })))
        .mount(&server)
        .await;

    let latest = update_check::fetch_latest_version(&server.uri()).await.unwrap();
    let notice = update_check::notice_for("0.1.0", Some(&latest)).unwrap();
    assert!(notice.to_string().contains("0.1.0 -> 99.0.0"));
}
