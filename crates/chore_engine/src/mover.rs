use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chore_core::{FileEntry, ImageFilter};
use chore_logging::{chore_error, chore_info, chore_warn, TaskLogger};

use crate::{ensure_output_dir, MoveSummary, TaskError};

/// What to do when the destination already holds a file with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Leave both files alone and log a warning.
    #[default]
    Skip,
    /// Replace the destination file.
    Overwrite,
    /// Move to the first free `stem (n).ext` name.
    Rename,
}

#[derive(Debug, Clone, Default)]
pub struct MoveSettings {
    pub filter: ImageFilter,
    pub collision: CollisionPolicy,
}

/// Move every matching file directly inside `source` into `destination`.
///
/// A missing source is an error. No matches, and failures of single files,
/// are not: they are logged and reflected in the returned summary.
pub fn move_images(
    source: &Path,
    destination: &Path,
    settings: &MoveSettings,
    log: &TaskLogger,
) -> Result<MoveSummary, TaskError> {
    if !source.is_dir() {
        return Err(TaskError::MissingSource(source.to_path_buf()));
    }

    ensure_output_dir(destination)?;
    chore_info!(log, "Destination folder ready: {}", destination.display());

    let entries = scan_source(source, &settings.filter, log)?;
    let mut summary = MoveSummary {
        destination: destination.to_path_buf(),
        matched: entries.len(),
        ..MoveSummary::default()
    };

    if entries.is_empty() {
        chore_warn!(
            log,
            "No files ending in {} found in {}",
            settings.filter.suffixes().join(", "),
            source.display()
        );
        return Ok(summary);
    }

    for entry in &entries {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let display_name = name.to_string_lossy();

        let Some(target) = resolve_target(destination, name.to_os_string(), settings.collision)
        else {
            chore_warn!(
                log,
                "Skipped {display_name}: already exists in {}",
                destination.display()
            );
            summary.skipped += 1;
            continue;
        };

        match relocate(&entry.path, &target) {
            Ok(()) => {
                chore_info!(log, "Moved: {display_name} -> {}", target.display());
                summary.moved += 1;
            }
            Err(err) => {
                chore_error!(log, "Failed to move {display_name}: {err}");
                summary.failed += 1;
            }
        }
    }

    chore_info!(
        log,
        "Moved {} of {} matching files ({} skipped, {} failed)",
        summary.moved,
        summary.matched,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

fn scan_source(
    source: &Path,
    filter: &ImageFilter,
    log: &TaskLogger,
) -> Result<Vec<FileEntry>, TaskError> {
    let listing = fs::read_dir(source).map_err(|err| TaskError::io(source, err))?;

    let mut entries = Vec::new();
    for item in listing {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                chore_warn!(log, "Unreadable entry in {}: {err}", source.display());
                continue;
            }
        };
        let path = item.path();
        if !path.is_file() {
            continue;
        }
        if let Some(entry) = filter.classify(&path) {
            entries.push(entry);
        }
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn resolve_target(destination: &Path, name: OsString, policy: CollisionPolicy) -> Option<PathBuf> {
    let target = destination.join(&name);
    if !target.exists() {
        return Some(target);
    }
    match policy {
        CollisionPolicy::Skip => None,
        CollisionPolicy::Overwrite => Some(target),
        CollisionPolicy::Rename => Some(free_name(destination, Path::new(&name))),
    }
}

fn free_name(destination: &Path, name: &Path) -> PathBuf {
    let stem = name.file_stem().unwrap_or(name.as_os_str());
    let mut n = 1usize;
    loop {
        let mut candidate = stem.to_os_string();
        candidate.push(format!(" ({n})"));
        if let Some(ext) = name.extension() {
            candidate.push(".");
            candidate.push(ext);
        }
        let path = destination.join(candidate);
        if !path.exists() {
            return path;
        }
        n += 1;
    }
}

/// Rename, falling back to copy + remove only when source and destination
/// are on different filesystems.
fn relocate(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if crosses_devices(&err) => copy_then_remove(from, to),
        Err(err) => Err(err),
    }
}

fn crosses_devices(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices
}

/// On any failure the copy at `to` is removed again, so the file only ever
/// ends up in one place.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let result = fs::copy(from, to).and_then(|_| fs::remove_file(from));
    if result.is_err() && from.exists() {
        let _ = fs::remove_file(to);
    }
    result
}
