use std::fmt;
use std::io;
use std::path::PathBuf;

use chore_core::UrlError;
use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything a task can fail with before it is flattened to a bool.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("source folder does not exist: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),
    #[error(transparent)]
    InvalidUrl(#[from] UrlError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Connection, timeout, size and HTTP status failures.
    pub fn is_network(&self) -> bool {
        matches!(self, TaskError::Fetch(err) if err.kind != FailureKind::InvalidUrl)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSummary {
    pub destination: PathBuf,
    pub matched: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub output: PathBuf,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub url: String,
    pub final_url: String,
    pub title: String,
    pub title_found: bool,
    pub scraped_at: String,
    pub output: PathBuf,
}

impl ScrapeReport {
    /// The three-line artifact body.
    pub fn render(&self) -> String {
        format!(
            "URL: {url}\nTitle: {title}\nScraped at: {scraped_at}\n",
            url = self.url,
            title = self.title,
            scraped_at = self.scraped_at,
        )
    }
}
