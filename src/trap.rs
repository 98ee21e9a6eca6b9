//! Crawl trap detection
//!
//! Two page-level veto signals:
//! - dead pages that return 200 but carry no text (e.g. a bare "Forbidden")
//! - URL paths that repeat a segment (e.g. /a/b/a/b), a sign of an infinite link loop

use crate::config::TrapConfig;
use crate::filter::UrlParts;
use std::collections::HashSet;

/// Applies the configured trap checks
#[derive(Debug, Clone, Default)]
pub struct TrapDetector {
    config: TrapConfig,
}

impl TrapDetector {
    pub fn new(config: TrapConfig) -> Self {
        Self { config }
    }

    /// True if the page text is empty, or shorter than `min_page_tokens` tokens
    pub fn has_no_page_data(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }

        self.config.min_page_tokens > 0
            && text.split_whitespace().count() < self.config.min_page_tokens
    }
}

/// True iff any `/`-separated path segment occurs more than once.
///
/// The path is taken as written, with no dot-segment resolution. Empty segments
/// count: the leading slash of every absolute path produces one, so a trailing
/// slash or a doubled slash also makes the URL a repeat. An empty path does not.
pub fn has_repeating_directory(url: &str) -> bool {
    let segments: Vec<&str> = UrlParts::split(url).path.split('/').collect();
    let unique: HashSet<&str> = segments.iter().copied().collect();

    unique.len() != segments.len()
}
