use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chore_core::{ImageFilter, DEFAULT_IMAGE_EXTENSIONS};
use chore_engine::{write_artifact, CollisionPolicy, FetchSettings, MoveSettings, BROWSER_USER_AGENT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_file: PathBuf,
    pub images: ImagesConfig,
    pub emails: EmailsConfig,
    pub scrape: ScrapeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub extensions: Vec<String>,
    pub on_collision: CollisionSetting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionSetting {
    #[default]
    Skip,
    Overwrite,
    Rename,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("automation.log"),
            images: ImagesConfig::default(),
            emails: EmailsConfig::default(),
            scrape: ScrapeConfig::default(),
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("sample_images"),
            destination: PathBuf::from("output/moved_images"),
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            on_collision: CollisionSetting::Skip,
        }
    }
}

impl Default for EmailsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sample_emails.txt"),
            output: PathBuf::from("output/extracted_emails.txt"),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            url: "https://httpbin.org/html".to_string(),
            output: PathBuf::from("output/scraped_title.txt"),
            timeout_secs: fetch.request_timeout.as_secs(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            max_bytes: fetch.max_bytes,
        }
    }
}

impl AppConfig {
    pub fn move_settings(&self) -> MoveSettings {
        MoveSettings {
            filter: ImageFilter::new(&self.images.extensions),
            collision: map_collision(self.images.on_collision),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        let timeout = Duration::from_secs(self.scrape.timeout_secs.max(1));
        FetchSettings {
            connect_timeout: timeout,
            request_timeout: timeout,
            user_agent: self.scrape.user_agent.clone(),
            max_bytes: self.scrape.max_bytes,
        }
    }
}

fn map_collision(setting: CollisionSetting) -> CollisionPolicy {
    match setting {
        CollisionSetting::Skip => CollisionPolicy::Skip,
        CollisionSetting::Overwrite => CollisionPolicy::Overwrite,
        CollisionSetting::Rename => CollisionPolicy::Rename,
    }
}

/// Reads `path`. A missing file yields the defaults; anything else unreadable is an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    ron::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn save_config(path: &Path, config: &AppConfig) -> anyhow::Result<PathBuf> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(config, pretty).context("failed to serialize config")?;
    write_artifact(path, &content)
        .with_context(|| format!("failed to write config {}", path.display()))
}
