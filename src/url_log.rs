use crate::error::ScrapeError;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only record of every accepted URL, one per line.
///
/// The file is opened and closed inside each `append` call. There is no locking:
/// callers sharing one log between workers must serialize `append` themselves.
#[derive(Debug, Clone)]
pub struct UrlLog {
    path: PathBuf,
}

impl UrlLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `links`, creating the file if needed
    pub fn append<S: AsRef<str>>(&self, links: &[S]) -> Result<(), ScrapeError> {
        self.write_lines(links).map_err(|source| ScrapeError::UrlLog {
            path: self.path.clone(),
            source,
        })
    }

    fn write_lines<S: AsRef<str>>(&self, links: &[S]) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        for link in links {
            writeln!(writer, "{}", link.as_ref())?;
        }

        writer.flush()
    }
}
