use std::path::Path;
use std::sync::Arc;

use chore_logging::{chore_error, TaskLogger};

use crate::{
    extract_emails_to_file, move_images, FetchError, FetchSettings, MoveSettings,
    ReqwestFetcher, TitleScraper,
};

/// Task boundary: runs one task, logs any failure, reports success as a bool.
pub struct Automation {
    log: TaskLogger,
    move_settings: MoveSettings,
    scraper: TitleScraper,
}

impl Automation {
    pub fn new(log: TaskLogger, move_settings: MoveSettings, scraper: TitleScraper) -> Self {
        Self {
            log,
            move_settings,
            scraper,
        }
    }

    /// Builds the shared HTTP client once for every later scrape.
    pub fn with_http(
        log: TaskLogger,
        move_settings: MoveSettings,
        fetch_settings: FetchSettings,
    ) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(fetch_settings)?;
        let scraper = TitleScraper::new(Arc::new(fetcher));
        Ok(Self::new(log, move_settings, scraper))
    }

    pub fn move_images(&self, source: &Path, destination: &Path) -> bool {
        match move_images(source, destination, &self.move_settings, &self.log) {
            Ok(_) => true,
            Err(err) => {
                chore_error!(self.log, "Error moving image files: {err}");
                false
            }
        }
    }

    pub fn extract_emails(&self, input: &Path, output: &Path) -> bool {
        match extract_emails_to_file(input, output, &self.log) {
            Ok(_) => true,
            Err(err) => {
                chore_error!(self.log, "Error extracting emails: {err}");
                false
            }
        }
    }

    pub async fn scrape_title(&self, url: &str, output: &Path) -> bool {
        match self.scraper.scrape(url, output, &self.log).await {
            Ok(_) => true,
            Err(err) if err.is_network() => {
                chore_error!(self.log, "Network error while scraping {url}: {err}");
                false
            }
            Err(err) => {
                chore_error!(self.log, "Error scraping title from {url}: {err}");
                false
            }
        }
    }
}
