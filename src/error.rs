use std::path::PathBuf;
use thiserror::Error;

/// No candidate encoding decoded the page without errors
#[derive(Debug, Clone, Error)]
#[error("failed to detect encoding, tried [{}]", .tried.join(", "))]
pub struct EncodingDetectionError {
    /// Names of the encodings attempted, in order
    pub tried: Vec<String>,
}

/// A URL that could not be decomposed
#[derive(Debug, Clone, Error)]
#[error("malformed URL {url:?}: {source}")]
pub struct MalformedUrlError {
    pub url: String,
    #[source]
    pub source: url::ParseError,
}

/// Errors raised while loading configuration and auxiliary inputs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid blocked extension pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("unknown encoding label {0:?}")]
    UnknownEncoding(String),
}

/// Errors surfaced by the top-level scraper
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to write URL log {path}: {source}")]
    UrlLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
