use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A fetched page as handed over by the fetch layer
#[derive(Debug, Clone)]
pub struct CrawlResponse {
    /// URL that was requested
    pub requested_url: String,

    /// URL the page was finally served from, after redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Undecoded response body
    pub raw_content: Vec<u8>,

    /// Fetch-layer error message, if any
    pub error: Option<String>,
}

impl CrawlResponse {
    /// Create a new response
    pub fn new(requested_url: &str, status: u16, raw_content: impl Into<Vec<u8>>) -> Self {
        Self {
            requested_url: requested_url.to_string(),
            final_url: requested_url.to_string(),
            status,
            raw_content: raw_content.into(),
            error: None,
        }
    }

    /// Set the final URL after redirects
    pub fn with_final_url(mut self, final_url: &str) -> Self {
        self.final_url = final_url.to_string();
        self
    }

    /// Attach a fetch-layer error message
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// JSON description of a response saved to disk, with the body in a separate file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseManifest {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,

    #[serde(default = "default_status")]
    pub status: u16,

    /// Body file, relative to the manifest's directory
    pub body: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_status() -> u16 {
    200
}

impl ResponseManifest {
    /// Resolve the body path against the directory holding the manifest
    pub fn body_path(&self, manifest_path: &Path) -> PathBuf {
        match manifest_path.parent() {
            Some(dir) if self.body.is_relative() => dir.join(&self.body),
            _ => self.body.clone(),
        }
    }

    /// Build the response once the body has been read
    pub fn into_response(self, raw_content: Vec<u8>) -> CrawlResponse {
        let final_url = self.final_url.unwrap_or_else(|| self.url.clone());
        CrawlResponse {
            requested_url: self.url,
            final_url,
            status: self.status,
            raw_content,
            error: self.error,
        }
    }
}
