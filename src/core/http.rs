//! HTTP client utilities.
//!
//! Provides the shared client builder for the image backends and the
//! update check.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{Error, Result};

/// Timeout for image generation requests.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the crates.io version lookup.
pub const UPDATE_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent())
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

/// `nanobanana/<version>`.
#[must_use]
pub fn user_agent() -> String {
    format!("nanobanana/{}", env!("CARGO_PKG_VERSION"))
}

/// Fetch JSON from a URL.
///
/// # Errors
///
/// Returns error on network failure, non-success status or JSON parse failure.
pub async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::from_reqwest(&e, timeout.as_secs()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    response
        .json()
        .await
        .map_err(|e| Error::ParseResponse(e.to_string()))
}
