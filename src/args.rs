use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "link-scope")]
#[command(about = "Extracts and scope-filters the links of fetched pages")]
#[command(version)]
pub struct Args {
    /// Response manifests (JSON with url, status, body path)
    pub responses: Vec<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the file accepted URLs are appended to
    #[arg(long)]
    pub url_log: Option<PathBuf>,

    /// Override the stop-word list used with --show-text
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Report how a URL decomposes and whether it is in scope (repeatable)
    #[arg(long = "check", value_name = "URL")]
    pub check: Vec<String>,

    /// Print each page's visible text (stop words removed when a list is configured)
    #[arg(long)]
    pub show_text: bool,
}
