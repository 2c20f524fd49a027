//! Grader credentials: which provider, API key, and model to use.
//!
//! The config lives in a user-level TOML file and is loaded once per
//! process, then passed explicitly to whatever needs it. The path is
//! injectable so tests can point at a fixture instead of the real home
//! directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Keys every usable config must carry.
const REQUIRED_KEYS: [&str; 3] = ["provider", "api_key", "model"];

/// Chat API provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI chat completions.
    OpenAi,
    /// Anthropic messages.
    Anthropic,
}

impl Provider {
    /// All providers, in the order offered during `configure`.
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::Anthropic];

    /// Models known to work with this provider. The first is the default
    /// offered during `configure`.
    pub fn supported_models(self) -> &'static [&'static str] {
        match self {
            Provider::OpenAi => &["gpt-4o-mini", "gpt-3.5-turbo"],
            Provider::Anthropic => &["claude-3-5-sonnet-20240620"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}

/// Grader credentials and model choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Which provider to call.
    pub provider: Provider,
    /// API key for that provider.
    pub api_key: String,
    /// Model name to request.
    pub model: String,
}

impl Config {
    /// Default config path: `<user config dir>/cram/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(dir.join("cram").join("config.toml"))
    }

    /// Whether a config file exists at `path`.
    pub fn is_configured(path: &Path) -> bool {
        path.is_file()
    }

    /// Load and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotConfigured(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let config = Self::parse(&raw)?;
        debug!(path = %path.display(), provider = %config.provider, model = %config.model, "loaded config");
        Ok(config)
    }

    /// Parse and validate a config from TOML text.
    ///
    /// Missing keys are reported all at once, by name, so the user knows
    /// exactly what to re-run `configure` for.
    pub fn parse(raw: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(raw)?;
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !table.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingKeys(missing));
        }
        Ok(toml::from_str(raw)?)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
