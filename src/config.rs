use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File extensions that are never worth fetching
pub const DEFAULT_BLOCKED_EXTENSIONS: &[&str] = &[
    "css", "js", "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "mid", "mp2", "mp3",
    "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf", "ps", "eps",
    "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data", "dat", "exe", "bz2",
    "tar", "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll", "cnf", "tgz", "sha1", "thmx",
    "mso", "arff", "rtf", "jar", "csv", "rm", "smil", "wmv", "swf", "wma", "zip", "rar", "gz",
];

/// How allowed domain suffixes are matched against a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatch {
    /// The host contains the suffix anywhere (`a.ics.uci.edu.evil.com` passes)
    #[default]
    Substring,
    /// The host ends with the suffix
    Suffix,
}

/// Crawl scope: which schemes, domains and file types may be fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopePolicy {
    #[serde(default = "default_allowed_schemes")]
    pub allowed_schemes: Vec<String>,

    /// Suffixes such as `.ics.uci.edu`, matched according to `domain_match`
    #[serde(default = "default_allowed_domain_suffixes")]
    pub allowed_domain_suffixes: Vec<String>,

    /// Bare domains that must equal the host exactly
    #[serde(default = "default_allowed_exact_domains")]
    pub allowed_exact_domains: Vec<String>,

    /// Extensions (without the dot) rejected when the lower-cased path ends with them
    #[serde(default = "default_blocked_extensions")]
    pub blocked_extensions: Vec<String>,

    #[serde(default)]
    pub domain_match: DomainMatch,
}

impl Default for ScopePolicy {
    fn default() -> Self {
        Self {
            allowed_schemes: default_allowed_schemes(),
            allowed_domain_suffixes: default_allowed_domain_suffixes(),
            allowed_exact_domains: default_allowed_exact_domains(),
            blocked_extensions: default_blocked_extensions(),
            domain_match: DomainMatch::default(),
        }
    }
}

/// Trap detection thresholds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrapConfig {
    /// Pages with fewer whitespace-separated tokens than this count as dead.
    /// Zero means only a completely empty page is dead.
    #[serde(default)]
    pub min_page_tokens: usize,
}

/// Encoding detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// WHATWG labels tried after the BOM and any declared charset
    #[serde(default = "default_fallback_encodings")]
    pub fallback_encodings: Vec<String>,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            fallback_encodings: default_fallback_encodings(),
        }
    }
}

/// Top-level configuration for the scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    #[serde(default)]
    pub scope: ScopePolicy,

    #[serde(default)]
    pub traps: TrapConfig,

    #[serde(default)]
    pub encoding: EncodingConfig,

    /// Append-only record of every accepted URL
    #[serde(default = "default_url_log_path")]
    pub url_log_path: PathBuf,

    /// Newline-separated stop-word list used for text reduction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords_path: Option<PathBuf>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            scope: ScopePolicy::default(),
            traps: TrapConfig::default(),
            encoding: EncodingConfig::default(),
            url_log_path: default_url_log_path(),
            stopwords_path: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_allowed_schemes() -> Vec<String> {
    vec!["http".to_string(), "https".to_string()]
}

fn default_allowed_domain_suffixes() -> Vec<String> {
    [".ics.uci.edu", ".cs.uci.edu", ".informatics.uci.edu", ".stat.uci.edu"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_allowed_exact_domains() -> Vec<String> {
    ["ics.uci.edu", "cs.uci.edu", "informatics.uci.edu", "stat.uci.edu"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_blocked_extensions() -> Vec<String> {
    DEFAULT_BLOCKED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fallback_encodings() -> Vec<String> {
    vec!["utf-8".to_string(), "windows-1252".to_string()]
}

fn default_url_log_path() -> PathBuf {
    PathBuf::from("urls.txt")
}
