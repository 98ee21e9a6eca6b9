use crate::encoding::EncodingNormalizer;
use crate::filter::{UrlParts, UrlScopeFilter, parse_url};
use crate::parsers::{ParsedDocument, html};
use crate::response::CrawlResponse;
use crate::trap::{TrapDetector, has_repeating_directory};

/// Turns one fetched page into the hrefs worth handing to the frontier
#[derive(Debug, Clone, Default)]
pub struct LinkExtractor {
    filter: UrlScopeFilter,
    traps: TrapDetector,
    normalizer: EncodingNormalizer,
}

impl LinkExtractor {
    pub fn new(filter: UrlScopeFilter, traps: TrapDetector, normalizer: EncodingNormalizer) -> Self {
        Self {
            filter,
            traps,
            normalizer,
        }
    }

    pub fn filter(&self) -> &UrlScopeFilter {
        &self.filter
    }

    pub fn traps(&self) -> &TrapDetector {
        &self.traps
    }

    /// Decode and parse a successful response.
    ///
    /// Returns `None` for non-200 responses and for bodies no candidate encoding
    /// can decode.
    pub fn parse_page(&self, response: &CrawlResponse) -> Option<ParsedDocument> {
        if !response.is_ok() {
            ::log::debug!(
                "Skipping {} with status {}{}",
                response.requested_url,
                response.status,
                response
                    .error
                    .as_deref()
                    .map(|e| format!(": {}", e))
                    .unwrap_or_default()
            );
            return None;
        }

        let text = match self.normalizer.normalize(&response.raw_content) {
            Ok(text) => text,
            Err(e) => {
                ::log::warn!("Unparseable page {}: {}", response.requested_url, e);
                return None;
            }
        };

        Some(html::parse(&text))
    }

    /// Whether links found on the page at `requested_url` may be kept at all.
    ///
    /// This looks at the page's own URL, not at the links on it: the page must
    /// be in scope and its path must not repeat a segment.
    pub fn page_level_admit(&self, requested_url: &str) -> bool {
        match parse_url(requested_url) {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => return false,
        }

        if !self.filter.is_valid_parts(&UrlParts::split(requested_url)) {
            return false;
        }

        if has_repeating_directory(requested_url) {
            ::log::debug!("Repeating directory trap: {}", requested_url);
            return false;
        }

        true
    }

    /// Extract the hrefs on a page, unresolved and with surrounding whitespace trimmed.
    ///
    /// Empty results for error statuses, undecodable bodies, dead pages and
    /// pages that fail `page_level_admit`. Links are not deduplicated.
    pub fn extract_links(&self, requested_url: &str, response: &CrawlResponse) -> Vec<String> {
        let Some(doc) = self.parse_page(response) else {
            return Vec::new();
        };

        if self.traps.has_no_page_data(&doc.visible_text) {
            ::log::debug!("No page data at {}", requested_url);
            return Vec::new();
        }

        if !self.page_level_admit(requested_url) {
            return Vec::new();
        }

        // An empty href attribute counts as absent; whitespace-only ones are kept
        let links: Vec<String> = doc
            .hrefs()
            .filter(|href| !href.is_empty())
            .map(|href| href.trim().to_string())
            .collect();

        ::log::info!("Found {} links in {}", links.len(), requested_url);
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrapConfig;

    const PAGE_URL: &str = "http://www.ics.uci.edu/about/index.html";

    fn page(body: &str) -> CrawlResponse {
        CrawlResponse::new(PAGE_URL, 200, body)
    }

    #[test]
    fn test_error_status_yields_nothing() {
        let extractor = LinkExtractor::default();
        let response = CrawlResponse::new(PAGE_URL, 404, r#"<p>Text</p><a href="/x">x</a>"#)
            .with_error("Not Found");
        assert!(extractor.extract_links(PAGE_URL, &response).is_empty());

        let response = CrawlResponse::new(PAGE_URL, 301, r#"<p>Text</p><a href="/x">x</a>"#);
        assert!(extractor.extract_links(PAGE_URL, &response).is_empty());
    }

    #[test]
    fn test_href_presence_semantics() {
        let extractor = LinkExtractor::default();
        let response = page(r#"<p>Body</p><a href="/page1">1</a><a href="  ">blank</a><a>none</a>"#);
        let links = extractor.extract_links(PAGE_URL, &response);
        assert_eq!(links, vec!["/page1".to_string(), String::new()]);
    }

    #[test]
    fn test_empty_href_attribute_is_skipped() {
        let extractor = LinkExtractor::default();
        let response = page(r#"<p>Body</p><a href="">empty</a><a href=" /padded ">x</a>"#);
        assert_eq!(extractor.extract_links(PAGE_URL, &response), vec!["/padded"]);
    }

    #[test]
    fn test_links_are_not_resolved_or_deduplicated() {
        let extractor = LinkExtractor::default();
        let response = page(
            r#"<p>Body</p><a href="../a">a</a><a href="../a">a again</a><a href="http://example.com/">out</a>"#,
        );
        let links = extractor.extract_links(PAGE_URL, &response);
        assert_eq!(links, vec!["../a", "../a", "http://example.com/"]);
    }

    #[test]
    fn test_dead_page_yields_nothing() {
        let extractor = LinkExtractor::default();
        let response = page(r#"<html><body><a href="/x"></a></body></html>"#);
        assert!(extractor.extract_links(PAGE_URL, &response).is_empty());
    }

    #[test]
    fn test_token_threshold_vetoes_short_pages() {
        let extractor = LinkExtractor::new(
            UrlScopeFilter::default(),
            TrapDetector::new(TrapConfig { min_page_tokens: 2 }),
            EncodingNormalizer::default(),
        );
        let response = page(r#"<a href="/x">Forbidden</a>"#);
        assert!(extractor.extract_links(PAGE_URL, &response).is_empty());
    }

    #[test]
    fn test_out_of_scope_page_yields_nothing() {
        let extractor = LinkExtractor::default();
        let body = r#"<p>Body</p><a href="http://www.ics.uci.edu/">home</a>"#;

        let url = "http://example.com/about/index.html";
        assert!(extractor.extract_links(url, &CrawlResponse::new(url, 200, body)).is_empty());

        let url = "http://www.ics.uci.edu/notes.pdf";
        assert!(extractor.extract_links(url, &CrawlResponse::new(url, 200, body)).is_empty());
    }

    #[test]
    fn test_repeating_page_url_yields_nothing() {
        let extractor = LinkExtractor::default();
        let url = "http://www.ics.uci.edu/a/b/a/b";
        let response = CrawlResponse::new(url, 200, r#"<p>Body</p><a href="/c">c</a>"#);
        assert!(extractor.extract_links(url, &response).is_empty());
    }

    #[test]
    fn test_page_level_admit() {
        let extractor = LinkExtractor::default();
        assert!(extractor.page_level_admit(PAGE_URL));
        assert!(extractor.page_level_admit("https://www.stat.uci.edu/people"));
        // The root path splits into two empty segments
        assert!(!extractor.page_level_admit("http://www.ics.uci.edu/"));
        assert!(!extractor.page_level_admit("http://www.ics.uci.edu/people/"));
        assert!(!extractor.page_level_admit("/relative/page"));
        assert!(!extractor.page_level_admit("http://www.ics.uci.edu:99999/x"));
        // Paths are split as written
        assert!(extractor.page_level_admit("https://www.ics.uci.edu"));
        assert!(!extractor.page_level_admit("https://www.ics.uci.edu/a/../a/b"));
        assert!(!extractor.page_level_admit("http://WWW.ICS.UCI.EDU/about"));
    }

    #[test]
    fn test_seed_without_trailing_slash_yields_links() {
        let extractor = LinkExtractor::default();
        let url = "https://www.ics.uci.edu";
        let response = CrawlResponse::new(
            url,
            200,
            r#"<p>Welcome</p><a href="https://www.ics.uci.edu/about">About</a>"#,
        );
        assert_eq!(
            extractor.extract_links(url, &response),
            vec!["https://www.ics.uci.edu/about"]
        );
    }

    #[test]
    fn test_undecodable_body_yields_nothing() {
        let config = crate::config::EncodingConfig {
            fallback_encodings: vec!["utf-8".to_string()],
        };
        let extractor = LinkExtractor::new(
            UrlScopeFilter::default(),
            TrapDetector::default(),
            EncodingNormalizer::from_config(&config).unwrap(),
        );
        let response = page("<p>caf\u{e9}</p><a href=\"/x\">x</a>");
        assert_eq!(extractor.extract_links(PAGE_URL, &response), vec!["/x"]);

        let mut response = page("");
        response.raw_content = b"<p>caf\xE9</p><a href=\"/x\">x</a>".to_vec();
        assert!(extractor.extract_links(PAGE_URL, &response).is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = LinkExtractor::default();
        let response = page(r#"<p>Body</p><a href="/one">1</a><a href="two">2</a>"#);
        let first = extractor.extract_links(PAGE_URL, &response);
        let second = extractor.extract_links(PAGE_URL, &response);
        assert_eq!(first, second);
        assert_eq!(first, vec!["/one", "two"]);
    }
}
