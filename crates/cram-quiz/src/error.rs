//! Error types for cram-quiz.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cram-quiz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from configuration handling and model calls.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Could not reach the model provider at all.
    #[error("could not connect to the model provider; check your internet connection")]
    ConnectionRefused,

    /// Provider returned a non-success status.
    #[error("model API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the provider.
        message: String,
    },

    /// Provider reply carried no usable text.
    #[error("model returned an empty reply")]
    EmptyReply,

    /// Verdict reply was not the expected JSON shape.
    #[error("could not parse a verdict from the model reply: {0}")]
    MalformedVerdict(String),

    /// No config file exists at the expected path.
    #[error("not configured; run `cram configure` first (looked for {})", .0.display())]
    NotConfigured(PathBuf),

    /// Config file exists but is missing required keys.
    #[error("config is missing keys: {}; run `cram configure`", .0.join(", "))]
    MissingKeys(Vec<String>),

    /// Unknown provider name.
    #[error("unsupported provider: {0} (use \"openai\" or \"anthropic\")")]
    UnknownProvider(String),

    /// Config file is not valid TOML.
    #[error("invalid config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("could not serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user config directory could not be determined.
    #[error("could not determine the user config directory")]
    NoConfigDir,
}

/// Grader failures cross into the core as opaque grader errors; the review
/// session decides whether to offer a retry.
impl From<Error> for cram::Error {
    fn from(err: Error) -> Self {
        cram::Error::Grader(err.to_string())
    }
}
