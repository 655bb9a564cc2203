use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {} missing or not writable: {message}", .path.display())]
    OutputDir { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl PersistError {
    fn output_dir(path: &Path, message: impl ToString) -> Self {
        Self::OutputDir {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::output_dir(dir, e))?;
        if !meta.is_dir() {
            return Err(PersistError::output_dir(dir, "path is not a directory"));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::output_dir(dir, e))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::output_dir(dir, e))?;
    Ok(())
}

/// Replace `target` with `content` via a temp file in the same directory.
///
/// The parent directory is created if missing. Readers never observe a
/// half-written artifact.
pub fn write_artifact(target: &Path, content: &str) -> Result<PathBuf, PersistError> {
    if target.file_name().is_none() {
        return Err(PersistError::output_dir(target, "target has no file name"));
    }
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_output_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target.to_path_buf())
}
