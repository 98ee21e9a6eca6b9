// Re-export modules
pub mod config;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod pipeline;
pub mod response;
pub mod scrape;
pub mod stopwords;
pub mod trap;
pub mod url_log;

// Re-export commonly used types for convenience
pub use config::{DomainMatch, ScopePolicy, ScraperConfig};
pub use error::{ConfigError, EncodingDetectionError, MalformedUrlError, ScrapeError};
pub use filter::UrlScopeFilter;
pub use parsers::ParsedDocument;
pub use pipeline::LinkExtractor;
pub use response::{CrawlResponse, ResponseManifest};
pub use scrape::Scraper;
pub use stopwords::StopwordFilter;
pub use trap::{TrapDetector, has_repeating_directory};
pub use url_log::UrlLog;
