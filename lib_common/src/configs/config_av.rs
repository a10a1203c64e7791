//! # Alpha Vantage Runtime Configuration
//!
//! Settings for the Alpha Vantage client, read either from the environment
//! (after loading `.env`) or from a JSON5 file.
//!
//! | Variable                | Field          | Default |
//! |-------------------------|----------------|---------|
//! | `ALPHAVANTAGE_KEY`      | `api_key`      | required |
//! | `ALPHAVANTAGE_BASE`     | `base_url`     | `https://www.alphavantage.co/query?` |
//! | `ALPHAVANTAGE_TZ`       | `timezone`     | `UTC` |
//! | `ALPHAVANTAGE_LOG_DIR`  | `log_dir`      | unset (no file log) |
//! | `ALPHAVANTAGE_TIMEOUT`  | `timeout_secs` | `30` |

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fmt, fs};
use thiserror::Error;

const ENV_KEY: &str = "ALPHAVANTAGE_KEY";
const ENV_BASE: &str = "ALPHAVANTAGE_BASE";
const ENV_TZ: &str = "ALPHAVANTAGE_TZ";
const ENV_LOG_DIR: &str = "ALPHAVANTAGE_LOG_DIR";
const ENV_TIMEOUT: &str = "ALPHAVANTAGE_TIMEOUT";

/// Errors raised while assembling an [`AvConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Environment variable {0} is not present")]
    MissingEnvVar(String),

    /// An environment variable holds a value of the wrong shape.
    #[error("Environment variable {name} has an invalid value: {value:?}")]
    InvalidEnvVar {
        /// Variable name.
        name: String,
        /// Raw value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON5 for this schema.
    #[error("JSON5 parse error: {0}")]
    Json5(String),

    /// The configured zone is not an IANA time zone name.
    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),
}

fn default_base_url() -> String {
    "https://www.alphavantage.co/query?".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// # Alpha Vantage Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvConfig {
    /// API key sent as `apikey=`.
    pub api_key: String,
    /// Query endpoint, ending in `?` or `&`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// IANA zone that timestamp keys are read in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Directory for the local log file. `None` disables file logging.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AvConfig {
    /// Configuration for `api_key` with every other field defaulted.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timezone: default_timezone(),
            log_dir: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Loads `.env` (if present) and reads the `ALPHAVANTAGE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_KEY)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_KEY.to_string()))?;

        let mut config = Self::new(api_key.trim());
        if let Some(base) = lookup(ENV_BASE) {
            config.base_url = base;
        }
        if let Some(tz) = lookup(ENV_TZ) {
            config.timezone = tz;
        }
        config.log_dir = lookup(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: ENV_TIMEOUT.to_string(),
                value: raw.clone(),
            })?;
        }

        config.zone()?;
        Ok(config)
    }

    /// Reads a JSON5 configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AvConfig =
            serde_json5::from_str(&content).map_err(|e| ConfigError::Json5(e.to_string()))?;
        config.zone()?;
        Ok(config)
    }

    /// The parsed time zone.
    pub fn zone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// `base_url` with the API key appended, ready for query parameters.
    pub fn query_base(&self) -> String {
        format!("{}apikey={}&", self.base_url, self.api_key)
    }
}

impl fmt::Display for AvConfig {
    /// Never prints the key itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AvConfig
    Base url: {},
    Api key: {},
    Time zone: {},
    Log dir: {},
    Timeout: {}s
",
            self.base_url,
            if self.api_key.is_empty() { "<empty>" } else { "<set>" },
            self.timezone,
            self.log_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.timeout_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn key_is_required() {
        let err = AvConfig::from_lookup(vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "ALPHAVANTAGE_KEY"));
        assert!(AvConfig::from_lookup(vars(&[("ALPHAVANTAGE_KEY", "  ")])).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = AvConfig::from_lookup(vars(&[("ALPHAVANTAGE_KEY", "demo")])).unwrap();
        assert_eq!(config, AvConfig::new("demo"));
        assert_eq!(config.query_base(), "https://www.alphavantage.co/query?apikey=demo&");
        assert_eq!(config.zone().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn overrides_apply() {
        let config = AvConfig::from_lookup(vars(&[
            ("ALPHAVANTAGE_KEY", "k"),
            ("ALPHAVANTAGE_BASE", "http://127.0.0.1:9000/query?"),
            ("ALPHAVANTAGE_TZ", "US/Eastern"),
            ("ALPHAVANTAGE_LOG_DIR", "/tmp/av"),
            ("ALPHAVANTAGE_TIMEOUT", "5"),
        ]))
        .unwrap();
        assert_eq!(config.query_base(), "http://127.0.0.1:9000/query?apikey=k&");
        assert_eq!(config.zone().unwrap(), chrono_tz::US::Eastern);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/av")));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = AvConfig::from_lookup(vars(&[("ALPHAVANTAGE_KEY", "k"), ("ALPHAVANTAGE_TZ", "Mars/Olympus")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimezone(_)));

        let err = AvConfig::from_lookup(vars(&[("ALPHAVANTAGE_KEY", "k"), ("ALPHAVANTAGE_TIMEOUT", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { .. }));
    }

    #[test]
    fn reads_json5_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("av.json5");
        fs::write(
            &path,
            "{\n  // personal key\n  api_key: 'abc',\n  timezone: 'US/Eastern',\n}\n",
        )
        .unwrap();

        let config = AvConfig::from_file(&path).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "https://www.alphavantage.co/query?");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.zone().unwrap(), chrono_tz::US::Eastern);
    }

    #[test]
    fn display_hides_key() {
        let shown = AvConfig::new("secret").to_string();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("<set>"));
    }
}
