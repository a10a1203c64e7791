//! # Alpha Vantage Query Utilities
//!
//! [`AlphaUtil`] is configured once with the query base and then builds
//! request URLs and normalizes responses. It performs no I/O.

use crate::markets::alphavantage::polish::{PolishError, Polisher};
use chrono_tz::Tz;
use serde_json::Value;

/// The public Alpha Vantage query endpoint, without credentials.
pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query?";

/// URL builder and response normalizer sharing one configuration.
#[derive(Debug, Clone)]
pub struct AlphaUtil {
    base: String,
    polisher: Polisher,
}

impl AlphaUtil {
    /// Uses `base` verbatim as the URL prefix. It should end with `?` or `&`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            polisher: Polisher::default(),
        }
    }

    /// Base for the public endpoint with `apikey` already set.
    pub fn with_key(key: &str) -> Self {
        Self::new(format!("{}apikey={}&", DEFAULT_ENDPOINT, key))
    }

    /// Reads timestamp keys in `zone` instead of UTC.
    pub fn in_zone(mut self, zone: Tz) -> Self {
        self.polisher = Polisher::new(zone);
        self
    }

    /// The configured URL prefix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The normalizer used by [`AlphaUtil::polish`].
    pub fn polisher(&self) -> &Polisher {
        &self.polisher
    }

    /// Builds `base + "function=..&symbol=..&outputsize=..&datatype=..&interval=.."`.
    ///
    /// Only the parameters that are `Some` are emitted, always in that order.
    /// Values are not URL-encoded, so they must not contain reserved characters.
    /// With no parameters the result is exactly the base.
    pub fn url(
        &self,
        function: Option<&str>,
        symbol: Option<&str>,
        size: Option<&str>,
        datatype: Option<&str>,
        interval: Option<&str>,
    ) -> String {
        let params: Vec<String> = [
            ("function", function),
            ("symbol", symbol),
            ("outputsize", size),
            ("datatype", datatype),
            ("interval", interval),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, v)))
        .collect();

        format!("{}{}", self.base, params.join("&"))
    }

    /// Normalized copy of a decoded response. See [`Polisher::polish`].
    pub fn polish(&self, data: &Value) -> Result<Value, PolishError> {
        self.polisher.polish(data)
    }
}
