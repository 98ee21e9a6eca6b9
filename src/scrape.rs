use crate::config::ScraperConfig;
use crate::encoding::EncodingNormalizer;
use crate::error::{ConfigError, ScrapeError};
use crate::filter::UrlScopeFilter;
use crate::pipeline::LinkExtractor;
use crate::response::CrawlResponse;
use crate::trap::TrapDetector;
use crate::url_log::UrlLog;

/// Extracts, filters and records the links of fetched pages
#[derive(Debug, Clone)]
pub struct Scraper {
    extractor: LinkExtractor,
    url_log: UrlLog,
}

impl Scraper {
    /// Create a scraper with the default scope that logs to `url_log`
    pub fn new(url_log: UrlLog) -> Self {
        Self {
            extractor: LinkExtractor::default(),
            url_log,
        }
    }

    /// Build every component from configuration
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ConfigError> {
        let filter = UrlScopeFilter::new(config.scope.clone())?;
        let traps = TrapDetector::new(config.traps.clone());
        let normalizer = EncodingNormalizer::from_config(&config.encoding)?;

        Ok(Self {
            extractor: LinkExtractor::new(filter, traps, normalizer),
            url_log: UrlLog::new(&config.url_log_path),
        })
    }

    /// Replace the link extractor
    pub fn with_extractor(mut self, extractor: LinkExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn extractor(&self) -> &LinkExtractor {
        &self.extractor
    }

    pub fn url_log(&self) -> &UrlLog {
        &self.url_log
    }

    /// Scope check on a single extracted link. Malformed links are dropped.
    pub fn link_level_admit(&self, link: &str) -> bool {
        match self.extractor.filter().is_valid(link) {
            Ok(valid) => valid,
            Err(e) => {
                ::log::warn!("Dropping link: {}", e);
                false
            }
        }
    }

    /// Extract the links of a page, keep the in-scope ones and append them to the URL log.
    ///
    /// Not safe to call concurrently against the same log file without external locking.
    pub fn scrape(&self, url: &str, response: &CrawlResponse) -> Result<Vec<String>, ScrapeError> {
        let valid_links: Vec<String> = self
            .extractor
            .extract_links(url, response)
            .into_iter()
            .filter(|link| self.link_level_admit(link))
            .collect();

        self.url_log.append(&valid_links)?;

        ::log::debug!(
            "Recorded {} valid links from {} in {}",
            valid_links.len(),
            url,
            self.url_log.path().display()
        );
        Ok(valid_links)
    }
}
