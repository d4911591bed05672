//! Destinations for exported files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use directories::UserDirs;
use log::debug;
use thiserror::Error;

use super::Download;
use crate::config::DEFAULT_EXPORT_FILE_NAME;

/// Errors that can occur while handing a download to its destination.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// No download directory could be determined for the current user.
    #[error("no download directory available")]
    NoDownloadDir,

    /// Writing the file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that receives finished downloads.
pub trait DownloadSink {
    fn deliver(&mut self, download: &Download) -> Result<(), DownloadError>;
}

/// Keeps downloads in memory.
///
/// Clones share the same storage, so a host can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    downloads: Arc<Mutex<Vec<Download>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn downloads(&self) -> Vec<Download> {
        self.storage().clone()
    }

    /// The most recent download.
    pub fn last(&self) -> Option<Download> {
        self.storage().last().cloned()
    }

    // A push never leaves the list half-written, so a poisoned lock still
    // guards a consistent list.
    fn storage(&self) -> MutexGuard<'_, Vec<Download>> {
        self.downloads.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, download: &Download) -> Result<(), DownloadError> {
        self.storage().push(download.clone());
        Ok(())
    }
}

/// Writes downloads as files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The current user's download directory.
    ///
    /// - Linux: `$XDG_DOWNLOAD_DIR` or `~/Downloads`
    /// - macOS: `~/Downloads`
    /// - Windows: `{FOLDERID_Downloads}`
    pub fn user_downloads() -> Result<Self, DownloadError> {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .map(Self::new)
            .ok_or(DownloadError::NoDownloadDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where a download named `file_name` ends up.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(sanitize_file_name(file_name))
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, download: &Download) -> Result<(), DownloadError> {
        let path = self.path_for(&download.file_name);
        fs::create_dir_all(&self.dir).map_err(|source| DownloadError::Write {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, &download.contents).map_err(|source| DownloadError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Reduce a requested file name to a single safe path component.
///
/// Letters (any script), digits, `-`, `_` and `.` are kept; everything else
/// becomes `_`. Names that end up empty or dot-only fall back to
/// `export.csv`.
pub fn sanitize_file_name(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = mapped.trim_matches('_');
    if trimmed.chars().all(|ch| ch == '.' || ch == '_') {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
