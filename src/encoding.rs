use crate::config::EncodingConfig;
use crate::error::{ConfigError, EncodingDetectionError};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use regex::bytes::Regex;
use std::sync::LazyLock;

/// How far into the document to look for a declared charset
const SNIFF_LIMIT: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#)
        .expect("Meta charset pattern should be valid")
});

/// Converts raw page bytes into UTF-8 text
#[derive(Debug, Clone)]
pub struct EncodingNormalizer {
    fallbacks: Vec<&'static Encoding>,
}

impl Default for EncodingNormalizer {
    fn default() -> Self {
        Self {
            fallbacks: vec![UTF_8, encoding_rs::WINDOWS_1252],
        }
    }
}

impl EncodingNormalizer {
    /// Build a normalizer from WHATWG encoding labels
    pub fn from_config(config: &EncodingConfig) -> Result<Self, ConfigError> {
        let fallbacks = config
            .fallback_encodings
            .iter()
            .map(|label| {
                Encoding::for_label(label.trim().as_bytes())
                    .ok_or_else(|| ConfigError::UnknownEncoding(label.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fallbacks })
    }

    /// Decode `raw` with the first candidate that yields no malformed sequences.
    ///
    /// Candidates, in order: byte-order mark, `<meta>` charset, configured fallbacks.
    pub fn normalize(&self, raw: &[u8]) -> Result<String, EncodingDetectionError> {
        if raw.is_empty() {
            return Ok(String::new());
        }

        let mut tried: Vec<&'static Encoding> = Vec::new();

        if let Some((encoding, bom_len)) = Encoding::for_bom(raw) {
            tried.push(encoding);
            if let Some(text) = decode_strict(encoding, &raw[bom_len..]) {
                return Ok(text);
            }
        }

        let candidates = declared_charset(raw).into_iter().chain(self.fallbacks.iter().copied());
        for encoding in candidates {
            if tried.contains(&encoding) {
                continue;
            }
            tried.push(encoding);
            if let Some(text) = decode_strict(encoding, raw) {
                ::log::trace!("Decoded page as {}", encoding.name());
                return Ok(text);
            }
        }

        Err(EncodingDetectionError {
            tried: tried.iter().map(|e| e.name().to_string()).collect(),
        })
    }
}

/// Charset declared in a `<meta>` tag near the start of the document
pub fn declared_charset(raw: &[u8]) -> Option<&'static Encoding> {
    let head = &raw[..raw.len().min(SNIFF_LIMIT)];
    let label = META_CHARSET.captures(head)?.get(1)?.as_bytes();
    let encoding = Encoding::for_label(label)?;

    // A byte-oriented meta tag cannot really be UTF-16
    if encoding == UTF_16LE || encoding == UTF_16BE {
        Some(UTF_8)
    } else {
        Some(encoding)
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
