//! Client configuration.
//!
//! A [`Config`] is built once at the application boundary and handed to
//! [`MusixmatchClient::new`](crate::MusixmatchClient::new). Values are
//! layered: defaults, then the JSON file at
//! `~/.config/musixmatch/config.json`, then environment variables.
//!
//! ```json
//! { "apikey": "0123abcd...", "format": "json" }
//! ```
//!
//! | Variable                 | Field         |
//! |--------------------------|---------------|
//! | `MUSIXMATCH_APIKEY`      | `apikey`      |
//! | `MUSIXMATCH_FORMAT`      | `format`      |
//! | `MUSIXMATCH_WS_LOCATION` | `ws_location` |
//! | `MUSIXMATCH_API_VERSION` | `api_version` |

use crate::error::{MusixmatchError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_WS_LOCATION: &str = "https://api.musixmatch.com/ws";
pub const DEFAULT_API_VERSION: &str = "1.1";

/// Response message format, sent as the `format` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = MusixmatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(MusixmatchError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key sent as `apikey`. Requests without it are rejected by the
    /// server with status 401.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    /// Default response format.
    pub format: Format,
    /// Web-service root, without the version.
    pub ws_location: String,
    pub api_version: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apikey: None,
            format: Format::Json,
            ws_location: DEFAULT_WS_LOCATION.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load from the config file (defaults if absent), then apply the
    /// environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config)
    }

    /// Load the config file only. Returns defaults if it does not exist.
    pub fn load_file() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save to disk, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(&path, data)?;
        Ok(())
    }

    /// Delete the config file from disk.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Override fields from `MUSIXMATCH_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(apikey) = var("MUSIXMATCH_APIKEY").filter(|k| !k.is_empty()) {
            self.apikey = Some(apikey);
        }
        if let Some(format) = var("MUSIXMATCH_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(e) => warn!("ignoring MUSIXMATCH_FORMAT: {e}"),
            }
        }
        if let Some(location) = var("MUSIXMATCH_WS_LOCATION") {
            self.ws_location = location;
        }
        if let Some(version) = var("MUSIXMATCH_API_VERSION") {
            self.api_version = version;
        }
    }

    /// `<ws_location>/<api_version>`, the prefix of every request URL.
    pub fn ws_base(&self) -> String {
        format!(
            "{}/{}",
            self.ws_location.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether an API key is configured (does not validate it).
    pub fn has_apikey(&self) -> bool {
        self.apikey.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| MusixmatchError::Other("cannot determine config directory".into()))?;
        Ok(config.join("musixmatch").join("config.json"))
    }
}
