//! Link-or-copy primitive
//!
//! Materializes a destination from a source file either as a relative symlink
//! or as a copy. Symlink failures fall back to copying, so callers only see an
//! error when the destination could not be produced at all.

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::io::{ensure_parent, temp_sibling};
use crate::path::relative_path;
use crate::{Error, Result, SyncMode};

/// Sync `source` to `destination` using `mode`.
///
/// - Fails with [`Error::SourceUnreadable`] if the source cannot be opened.
/// - Fails with [`Error::DestinationExists`] if something is already at
///   `destination` and `force` is false.
/// - Fails with [`Error::DestinationConflict`] if `destination` is a directory.
/// - Fails with [`Error::SourceIsDestination`] if `destination` names the
///   source file itself. Nothing is written.
///
/// The new entry is staged under a temporary sibling name and renamed into
/// place, so a failure never leaves a partial destination behind and the
/// previous destination survives until the final rename.
pub fn sync_file(source: &Path, destination: &Path, mode: SyncMode, force: bool) -> Result<()> {
    if !source.is_file() || File::open(source).is_err() {
        return Err(Error::SourceUnreadable {
            path: source.to_path_buf(),
        });
    }

    if let Ok(meta) = fs::symlink_metadata(destination) {
        if meta.is_dir() {
            return Err(Error::DestinationConflict {
                path: destination.to_path_buf(),
            });
        }
        if is_source_entry(source, destination) {
            return Err(Error::SourceIsDestination {
                path: destination.to_path_buf(),
            });
        }
        if !force {
            return Err(Error::DestinationExists {
                path: destination.to_path_buf(),
            });
        }
    }

    ensure_parent(destination)?;

    let staged = temp_sibling(destination);
    let result = stage(source, destination, &staged, mode)
        .and_then(|()| fs::rename(&staged, destination).map_err(|e| Error::io(destination, e)));

    if result.is_err() {
        remove_entry(&staged);
    }

    if result.is_ok() {
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            %mode,
            "Synced rule file"
        );
    }
    result
}

fn stage(source: &Path, destination: &Path, staged: &Path, mode: SyncMode) -> Result<()> {
    match mode {
        SyncMode::Copy => copy_with_times(source, staged),
        SyncMode::Symlink => match link_target(source, destination)
            .and_then(|target| create_symlink(&target, staged))
        {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(
                    destination = %destination.display(),
                    error = %e,
                    "Symlink failed, falling back to copy"
                );
                remove_entry(staged);
                copy_with_times(source, staged)
            }
        },
    }
}

/// True if the directory entry at `destination` is the file `source` resolves to.
///
/// The final component of `destination` is not followed, so a link that
/// already points at the source does not count.
fn is_source_entry(source: &Path, destination: &Path) -> bool {
    let Ok(source_abs) = dunce::canonicalize(source) else {
        return false;
    };
    let Some(name) = destination.file_name() else {
        return false;
    };
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dunce::canonicalize(parent)
        .map(|parent_abs| parent_abs.join(name) == source_abs)
        .unwrap_or(false)
}

/// Relative path from the destination's directory to the source.
fn link_target(source: &Path, destination: &Path) -> Result<PathBuf> {
    let source_abs = dunce::canonicalize(source).map_err(|e| Error::io(source, e))?;
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent_abs = dunce::canonicalize(parent).map_err(|e| Error::io(parent, e))?;
    Ok(relative_path(&parent_abs, &source_abs))
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::io(link, e))
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::windows::fs::symlink_file(target, link).map_err(|e| Error::io(link, e))
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, link: &Path) -> Result<()> {
    Err(Error::io(
        link,
        std::io::Error::new(std::io::ErrorKind::Unsupported, "symlinks not supported"),
    ))
}

/// Copy contents and carry over access/modification times where possible.
fn copy_with_times(source: &Path, staged: &Path) -> Result<()> {
    fs::copy(source, staged).map_err(|e| Error::io(staged, e))?;

    let times = fs::metadata(source).ok().and_then(|meta| {
        let modified = meta.modified().ok()?;
        let accessed = meta.accessed().unwrap_or(modified);
        Some(FileTimes::new().set_modified(modified).set_accessed(accessed))
    });
    if let Some(times) = times {
        let applied = File::options()
            .write(true)
            .open(staged)
            .and_then(|file| file.set_times(times));
        if let Err(e) = applied {
            debug!(path = %staged.display(), error = %e, "Could not preserve timestamps");
        }
    }
    Ok(())
}

fn remove_entry(path: &Path) {
    if fs::symlink_metadata(path).is_ok() {
        let _ = fs::remove_file(path);
    }
}

/// Remove a directory occupying a path where a file is expected.
///
/// Returns `true` when something was removed.
pub fn clear_conflict(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
            debug!(path = %path.display(), "Removed directory blocking output file");
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Probe whether this process can create symlinks in the temp directory.
pub fn symlinks_supported() -> bool {
    let probe_dir = std::env::temp_dir();
    let source = temp_sibling(&probe_dir.join("rulesync-probe-source"));
    let link = temp_sibling(&probe_dir.join("rulesync-probe-link"));

    let supported = fs::write(&source, b"probe").is_ok()
        && create_symlink(&source, &link).is_ok()
        && fs::symlink_metadata(&link)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);

    remove_entry(&link);
    remove_entry(&source);
    supported
}
