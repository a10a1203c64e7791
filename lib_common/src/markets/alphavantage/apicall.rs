//! # Alpha Vantage API Client
//!
//! Sends query URLs built by [`AlphaUtil`] through the generic
//! [`ApiClient`] and classifies the answer.
//!
//! Alpha Vantage reports most failures with `200 OK` and a one-member body:
//!
//! - `{"Error Message": "..."}` for bad functions or symbols;
//! - `{"Note": "..."}` when the call frequency limit is hit.
//!
//! Both are surfaced as [`AvError`] variants. Requests are sent once; the
//! caller decides whether to try again.

use crate::configs::config_av::{AvConfig, ConfigError};
use crate::loggers::loggerlocal::LoggerLocal;
use crate::markets::alphavantage::polish::PolishError;
use crate::markets::alphavantage::util::AlphaUtil;
use crate::retrieve::ky_http::ApiClient;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single Alpha Vantage call.
#[derive(Debug, Error)]
pub enum AvError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from Alpha Vantage: {body}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The payload carried an `Error Message` member.
    #[error("Alpha Vantage error: {0}")]
    Api(String),

    /// The payload carried a `Note` member (call frequency exceeded).
    #[error("Alpha Vantage throttled the request: {0}")]
    Throttled(String),

    /// The payload could not be normalized.
    #[error(transparent)]
    Polish(#[from] PolishError),

    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network, URL or decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Replaces the value of `apikey=` so URLs can be logged.
pub fn redact_key(url: &str) -> String {
    const MARKER: &str = "apikey=";
    let Some(start) = url.find(MARKER).map(|i| i + MARKER.len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map(|i| start + i).unwrap_or(url.len());
    format!("{}***{}", &url[..start], &url[end..])
}

/// # Alpha Vantage API Call Client
///
/// Couples the URL/normalizer utilities with an HTTP client and a shared
/// logger. Cheap to share behind an `Arc`; holds no mutable state.
pub struct ApiCallAv {
    /// HTTP client rooted at the query base.
    client: ApiClient,
    /// URL builder and normalizer.
    util: AlphaUtil,
    /// A shared logger for recording the outcomes of API calls.
    logger: Arc<LoggerLocal>,
}

impl ApiCallAv {
    /// Builds a client from explicit utilities.
    ///
    /// # Errors
    /// Fails when the base of `util` is not an absolute URL.
    pub fn new(util: AlphaUtil, timeout: Duration, logger: Arc<LoggerLocal>) -> Result<Self, AvError> {
        let client = ApiClient::new(util.base(), timeout)?;
        Ok(Self { client, util, logger })
    }

    /// Builds a client from a loaded [`AvConfig`].
    pub fn from_config(config: &AvConfig, logger: Arc<LoggerLocal>) -> Result<Self, AvError> {
        let util = AlphaUtil::new(config.query_base()).in_zone(config.zone()?);
        Self::new(util, Duration::from_secs(config.timeout_secs), logger)
    }

    /// The URL builder and normalizer this client uses.
    pub fn util(&self) -> &AlphaUtil {
        &self.util
    }

    /// # Fetch
    ///
    /// GETs `url` and returns the decoded body as sent by the server.
    ///
    /// # Errors
    /// [`AvError::Http`] on non-2xx, [`AvError::Api`] / [`AvError::Throttled`]
    /// on error payloads, [`AvError::Transport`] when the request or JSON
    /// decoding fails.
    pub async fn fetch(&self, url: &str) -> Result<Value, AvError> {
        let shown = redact_key(url);
        self.logger.debug("Requesting Alpha Vantage", Some(json!({"url": shown}))).await;

        let response = self.client.get::<Value>(url).await.map_err(|e| {
            AvError::Transport(e.context(format!("GET {}", shown)))
        })?;

        if !response.success {
            let body = response.error_body.unwrap_or_default();
            self.logger
                .error(
                    &format!("HTTP Request failed for {}: Status {}", shown, response.status),
                    Some(json!({"status": response.status, "url": shown})),
                )
                .await;
            return Err(AvError::Http { status: response.status, body });
        }

        let body = response.data.unwrap_or(Value::Null);

        if let Some(message) = body.get("Error Message").and_then(Value::as_str) {
            self.logger
                .warn("Alpha Vantage rejected the query", Some(json!({"url": shown, "message": message})))
                .await;
            return Err(AvError::Api(message.to_string()));
        }

        if let Some(note) = body.get("Note").and_then(Value::as_str) {
            self.logger
                .warn("Alpha Vantage call frequency exceeded", Some(json!({"url": shown, "note": note})))
                .await;
            return Err(AvError::Throttled(note.to_string()));
        }

        Ok(body)
    }

    /// [`ApiCallAv::fetch`] followed by normalization.
    pub async fn fetch_polished(&self, url: &str) -> Result<Value, AvError> {
        let raw = self.fetch(url).await?;
        match self.util.polish(&raw) {
            Ok(clean) => Ok(clean),
            Err(e) => {
                self.logger
                    .error(&format!("Normalization failed: {}", e), Some(json!({"url": redact_key(url)})))
                    .await;
                Err(e.into())
            }
        }
    }
}
