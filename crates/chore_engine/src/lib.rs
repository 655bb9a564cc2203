//! Chores engine: filesystem and network IO behind each task.
mod automation;
mod emails;
mod fetch;
mod mover;
mod persist;
mod scrape;
mod types;

pub use automation::Automation;
pub use emails::extract_emails_to_file;
pub use fetch::{decode_body, FetchSettings, Fetcher, ReqwestFetcher, BROWSER_USER_AGENT};
pub use mover::{move_images, CollisionPolicy, MoveSettings};
pub use persist::{ensure_output_dir, write_artifact, PersistError};
pub use scrape::{local_clock, Clock, TitleScraper, TIMESTAMP_FORMAT};
pub use types::{
    ExtractSummary, FailureKind, FetchError, FetchMetadata, FetchOutput, MoveSummary,
    ScrapeReport, TaskError,
};
