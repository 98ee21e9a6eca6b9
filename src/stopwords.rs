//! Stopword filtering
//!
//! Strips common words from extracted page text for downstream analytics.
//! Link filtering does not use it.

use crate::error::ConfigError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A filter for removing stopwords from text
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a newline-separated list, one token per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&contents))
    }

    /// Parse a stopword list from its file contents
    pub fn parse(contents: &str) -> Self {
        let stopwords = contents
            .trim()
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        Self { stopwords }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Drop stopwords from `text`, rejoining the remaining words with single spaces
    pub fn reduce(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
