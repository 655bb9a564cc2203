use std::path::{Path, PathBuf};

/// Extensions moved when nothing else is configured.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// A candidate found while scanning the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// The matched extension, lowercased and without the dot.
    pub extension: String,
}

impl FileEntry {
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }
}

/// Case-insensitive file name suffix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFilter {
    suffixes: Vec<String>,
}

impl ImageFilter {
    /// `extensions` may be given with or without a leading dot; blanks are dropped.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{ext}"))
            .collect();
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns the matching extension (no dot) if `name` ends with one of the suffixes.
    pub fn match_name(&self, name: &str) -> Option<String> {
        let lowered = name.to_ascii_lowercase();
        self.suffixes
            .iter()
            .find(|suffix| lowered.ends_with(suffix.as_str()))
            .map(|suffix| suffix[1..].to_string())
    }

    /// Builds a [`FileEntry`] for `path` if its file name matches.
    pub fn classify(&self, path: &Path) -> Option<FileEntry> {
        let name = path.file_name()?.to_string_lossy();
        self.match_name(&name).map(|extension| FileEntry {
            path: path.to_path_buf(),
            extension,
        })
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_EXTENSIONS)
    }
}
