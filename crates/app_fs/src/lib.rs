//! ImageRenamer File System Layer
//!
//! Provides the thin I/O wrappers the rename engine sits on:
//! - Image listing for a single folder
//! - Folder browsing with a synthetic parent entry
//! - Root/volume enumeration per host OS
//! - No-clobber rename primitive

mod browser;
mod file_operations;
mod images;
mod roots;

pub use browser::{browse, BrowseListing, FolderEntry, COMPUTER_LABEL};
pub use file_operations::{DefaultFileOperations, FileOpError, FileOperations};
pub use images::{is_image_name, list_images, split_extension, FileList, IMAGE_EXTENSIONS};
pub use roots::{RootDescriptor, RootProvider, SystemRoots};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Cannot read folder {path}: {source}")]
    AccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn access<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        FsError::AccessError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
