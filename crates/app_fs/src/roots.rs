//! Root/volume enumeration, swapped per host OS

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A top-level entry point of the file system (drive or mount root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootDescriptor {
    pub name: String,
    pub path: PathBuf,
}

impl RootDescriptor {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }
}

/// Capability to enumerate root volumes
pub trait RootProvider: Send + Sync {
    fn list_roots(&self) -> Vec<RootDescriptor>;

    /// Check if path is a root/drive
    fn is_root(&self, path: &Path) -> bool;
}

/// Host implementation: drive letters on Windows, `/` elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRoots;

#[cfg(windows)]
impl RootProvider for SystemRoots {
    fn list_roots(&self) -> Vec<RootDescriptor> {
        let mut drives = Vec::new();

        for letter in b'A'..=b'Z' {
            let drive = format!("{}:\\", letter as char);
            if Path::new(&drive).is_dir() {
                drives.push(RootDescriptor::new(drive));
            }
        }

        drives
    }

    fn is_root(&self, path: &Path) -> bool {
        // Windows: C:\ is root
        let s = path.to_string_lossy();
        (s.len() <= 3 && s.ends_with('\\')) || path.parent().is_none()
    }
}

#[cfg(not(windows))]
impl RootProvider for SystemRoots {
    fn list_roots(&self) -> Vec<RootDescriptor> {
        vec![RootDescriptor::new("/")]
    }

    fn is_root(&self, path: &Path) -> bool {
        path.parent().is_none()
    }
}
