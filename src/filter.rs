use crate::config::{DomainMatch, ScopePolicy};
use crate::error::MalformedUrlError;
use regex::Regex;
use url::Url;

/// Decides whether a URL is inside the crawl scope
#[derive(Debug, Clone)]
pub struct UrlScopeFilter {
    policy: ScopePolicy,
    blocked_extensions: Option<Regex>,
}

impl Default for UrlScopeFilter {
    fn default() -> Self {
        Self::new(ScopePolicy::default()).expect("Default extension list should compile")
    }
}

impl UrlScopeFilter {
    /// Create a new scope filter from a policy
    pub fn new(policy: ScopePolicy) -> Result<Self, regex::Error> {
        let blocked_extensions = if policy.blocked_extensions.is_empty() {
            None
        } else {
            let alternation = policy
                .blocked_extensions
                .iter()
                .map(|ext| regex::escape(&ext.to_lowercase()))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\.({})$", alternation))?)
        };

        Ok(Self {
            policy,
            blocked_extensions,
        })
    }

    pub fn policy(&self) -> &ScopePolicy {
        &self.policy
    }

    /// Determine if a URL string should be crawled.
    ///
    /// References without a scheme (relative hrefs, empty strings) are simply out
    /// of scope. Any other parse failure is logged and returned as an error so the
    /// caller can drop that single URL.
    pub fn is_valid(&self, url: &str) -> Result<bool, MalformedUrlError> {
        match parse_url(url)? {
            Some(_) => Ok(self.is_valid_parts(&UrlParts::split(url))),
            None => Ok(false),
        }
    }

    /// Scope check on the URL as written. First failing rule wins.
    pub fn is_valid_parts(&self, parts: &UrlParts<'_>) -> bool {
        if !self.is_allowed_scheme(&parts.scheme) {
            ::log::debug!("Scheme rejected: {:?}", parts);
            return false;
        }

        if !self.is_allowed_domain(parts.netloc) {
            ::log::debug!("Domain rejected: {:?}", parts);
            return false;
        }

        if self.has_blocked_extension(parts.path) {
            ::log::debug!("Extension rejected: {:?}", parts);
            return false;
        }

        true
    }

    pub fn is_allowed_scheme(&self, scheme: &str) -> bool {
        self.policy.allowed_schemes.iter().any(|s| s == scheme)
    }

    /// Check a netloc against the suffix and exact-domain allow-lists.
    ///
    /// Case-sensitive; a port or userinfo is part of the netloc.
    pub fn is_allowed_domain(&self, netloc: &str) -> bool {
        let suffix_hit = self
            .policy
            .allowed_domain_suffixes
            .iter()
            .any(|suffix| match self.policy.domain_match {
                DomainMatch::Substring => netloc.contains(suffix.as_str()),
                DomainMatch::Suffix => netloc.ends_with(suffix.as_str()),
            });
        if suffix_hit {
            return true;
        }

        self.policy
            .allowed_exact_domains
            .iter()
            .any(|domain| domain == netloc)
    }

    /// True if the lower-cased path ends with a blocked file extension
    pub fn has_blocked_extension(&self, path: &str) -> bool {
        match &self.blocked_extensions {
            Some(regex) => regex.is_match(&path.to_lowercase()),
            None => false,
        }
    }
}

/// A URL split into its components exactly as written.
///
/// Nothing is normalized except the scheme, which is lower-cased: the netloc
/// keeps its case, port and userinfo, and the path keeps empty and dot segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: String,
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
}

impl<'a> UrlParts<'a> {
    pub fn split(url: &'a str) -> Self {
        let url = url.trim_matches(|c: char| c <= ' ');

        let (scheme, rest) = match url.split_once(':') {
            Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
            _ => (String::new(), url),
        };

        let (rest, _fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

        let (netloc, path) = match rest.strip_prefix("//") {
            Some(authority) => match authority.find('/') {
                Some(end) => authority.split_at(end),
                None => (authority, ""),
            },
            None => ("", rest),
        };

        Self {
            scheme,
            netloc,
            path,
            query,
        }
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Validate a URL string with the WHATWG parser.
///
/// Returns `Ok(None)` for relative references, which have no scheme or host.
pub fn parse_url(url: &str) -> Result<Option<Url>, MalformedUrlError> {
    match Url::parse(url) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(None),
        Err(source) => {
            ::log::warn!("Malformed URL {:?}: {}", url, source);
            Err(MalformedUrlError {
                url: url.to_string(),
                source,
            })
        }
    }
}
