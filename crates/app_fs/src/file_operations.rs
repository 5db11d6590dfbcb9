//! File operations module
//! Provides the existence check and rename primitive used by rename batches

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File operation errors
#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, FileOpError>;

/// File operations trait
pub trait FileOperations: Send + Sync {
    /// Whether any entry (file, directory, or dangling symlink) occupies `path`
    fn entry_exists(&self, path: &Path) -> bool;

    /// Rename a file, never replacing an existing entry
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Default implementation of file operations
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFileOperations;

impl DefaultFileOperations {
    pub fn new() -> Self {
        Self
    }
}

impl FileOperations for DefaultFileOperations {
    fn entry_exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if self.entry_exists(to) {
            return Err(FileOpError::AlreadyExists(to.to_path_buf()));
        }

        std::fs::rename(from, to)?;
        tracing::debug!("Renamed: {} -> {}", from.display(), to.display());

        Ok(())
    }
}
