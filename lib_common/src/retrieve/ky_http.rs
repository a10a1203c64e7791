//! # HTTP Retrieval Utilities
//!
//! This module provides an asynchronous API client wrapper around `reqwest`
//! with standardized JSON response handling. Requests are sent once; callers
//! decide what to do with a failed [`ApiResponse`].

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A standardized container for API responses.
///
/// This struct wraps the deserialized data along with the outcome of the
/// HTTP transaction.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The successfully deserialized response body, if any.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
}

/// A small asynchronous JSON `GET` client.
///
/// Paths passed to [`ApiClient::get`] are joined onto the base URL, so an
/// absolute URL replaces the base entirely.
pub struct ApiClient {
    /// The underlying reqwest client.
    inner: reqwest::Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL for the API (e.g., "https://www.alphavantage.co/").
    /// * `timeout` - Per-request timeout.
    ///
    /// # Errors
    /// Fails if `base_url` is not a valid absolute URL or the TLS backend cannot initialize.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL {:?} (must be absolute): {}", base_url, e))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: client,
            base_url: url,
        })
    }

    /// The base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a `GET` and decodes a JSON answer.
    ///
    /// Non-2xx statuses are not errors: they come back with `success == false`
    /// and the raw body in `error_body`.
    ///
    /// # Errors
    /// Returns an `anyhow::Error` if URL joining, network execution or body decoding fails.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<ApiResponse<T>> {
        let full_url = self.base_url.join(path)?;
        let response = self.inner.get(full_url).send().await?;
        let status = response.status();

        if status.is_success() {
            let data = response.json::<T>().await?;
            Ok(ApiResponse {
                data: Some(data),
                error_body: None,
                status: status.as_u16(),
                success: true,
            })
        } else {
            let error_text = response.text().await.ok();
            Ok(ApiResponse {
                data: None,
                error_body: error_text,
                status: status.as_u16(),
                success: false,
            })
        }
    }
}
