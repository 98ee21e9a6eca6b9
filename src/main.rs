use clap::Parser;
use link_scope::filter::{UrlParts, parse_url};
use link_scope::{ResponseManifest, Scraper, ScraperConfig, StopwordFilter, has_repeating_directory};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

mod args;
use args::Args;

type TaskError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    if let Some(path) = args.url_log {
        config.url_log_path = path;
    }
    if let Some(path) = args.stopwords {
        config.stopwords_path = Some(path);
    }

    let scraper = Scraper::from_config(&config)?;

    for url in &args.check {
        check_url(&scraper, url);
    }

    let stopwords = match &config.stopwords_path {
        Some(path) if args.show_text => StopwordFilter::from_file(path)?,
        _ => StopwordFilter::default(),
    };

    ::log::info!(
        "Processing {} responses, logging accepted URLs to {}",
        args.responses.len(),
        config.url_log_path.display()
    );

    // UrlLog does no locking of its own, so every scrape goes through this mutex
    let scraper = Arc::new(Mutex::new(scraper));
    let stopwords = Arc::new(stopwords);
    let show_text = args.show_text;

    let mut tasks = JoinSet::new();
    for manifest_path in args.responses {
        let scraper = Arc::clone(&scraper);
        let stopwords = Arc::clone(&stopwords);
        tasks.spawn(process_manifest(manifest_path, scraper, stopwords, show_text));
    }

    let mut recorded = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(count)) => recorded += count,
            Ok(Err(e)) => ::log::error!("Failed to process response: {}", e),
            Err(e) => ::log::error!("Response task failed: {}", e),
        }
    }

    ::log::info!("Recorded {} links", recorded);
    Ok(())
}

/// Load one saved response, print its accepted links and record them
async fn process_manifest(
    manifest_path: PathBuf,
    scraper: Arc<Mutex<Scraper>>,
    stopwords: Arc<StopwordFilter>,
    show_text: bool,
) -> Result<usize, TaskError> {
    let manifest: ResponseManifest =
        serde_json::from_str(&tokio::fs::read_to_string(&manifest_path).await?)?;
    let body = tokio::fs::read(manifest.body_path(&manifest_path)).await?;
    let url = manifest.url.clone();
    let response = manifest.into_response(body);

    let scraper = scraper.lock().await;

    if show_text {
        if let Some(doc) = scraper.extractor().parse_page(&response) {
            println!("text of {}: {}", url, stopwords.reduce(&doc.visible_text));
        }
    }

    let links = scraper.scrape(&url, &response)?;
    for link in &links {
        println!("{}", link);
    }

    Ok(links.len())
}

/// Print the decomposition and scope verdicts for a single URL
fn check_url(scraper: &Scraper, url: &str) {
    println!("{}", url);
    match parse_url(url) {
        Ok(Some(_)) => {
            let extractor = scraper.extractor();
            let parts = UrlParts::split(url);
            println!(
                "  scheme={} netloc={} path={} query={}",
                parts.scheme, parts.netloc, parts.path, parts.query
            );
            println!("  valid: {}", extractor.filter().is_valid_parts(&parts));
            println!("  repeating directory: {}", has_repeating_directory(url));
            println!("  page admitted: {}", extractor.page_level_admit(url));
        }
        Ok(None) => println!("  relative reference, out of scope"),
        Err(e) => println!("  {}", e),
    }
}
