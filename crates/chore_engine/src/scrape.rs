use std::path::Path;
use std::sync::Arc;

use chore_core::{extract_title, validate_target_url, NO_TITLE};
use chore_logging::{chore_debug, chore_info, chore_warn, TaskLogger};

use crate::{decode_body, write_artifact, Fetcher, ScrapeReport, TaskError};

/// Human-readable local time written on the report's last line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the "Scraped at" value.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
}

pub struct TitleScraper {
    fetcher: Arc<dyn Fetcher>,
    clock: Clock,
}

impl TitleScraper {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            clock: local_clock(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validate `url`, GET it once, and write the title report to `output`.
    ///
    /// An invalid URL fails before the fetcher is touched.
    pub async fn scrape(
        &self,
        url: &str,
        output: &Path,
        log: &TaskLogger,
    ) -> Result<ScrapeReport, TaskError> {
        let target = validate_target_url(url)?;
        chore_info!(log, "Scraping title from: {target}");

        let fetched = self.fetcher.fetch(&target).await?;
        if fetched.metadata.final_url != fetched.metadata.original_url {
            chore_debug!(
                log,
                "Redirected {} -> {}",
                fetched.metadata.original_url,
                fetched.metadata.final_url
            );
        }

        let html = decode_body(&fetched.bytes, fetched.metadata.content_type.as_deref());
        let (title, title_found) = match extract_title(&html) {
            Some(title) => (title.to_string(), true),
            None => {
                chore_warn!(log, "No title tag found on the webpage");
                (NO_TITLE.to_string(), false)
            }
        };

        let mut report = ScrapeReport {
            url: target.to_string(),
            final_url: fetched.metadata.final_url,
            title,
            title_found,
            scraped_at: (self.clock)(),
            output: output.to_path_buf(),
        };
        report.output = write_artifact(output, &report.render())?;

        chore_info!(log, "Title scraped successfully: {}", report.title);
        chore_info!(log, "Saved to: {}", report.output.display());
        Ok(report)
    }
}
