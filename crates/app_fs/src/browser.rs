//! Folder browser - sub-directory listing for the folder picker

use crate::{FsError, Result, RootProvider};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Label shown for the top level (the list of root volumes)
pub const COMPUTER_LABEL: &str = "Computer";

const UP_TO_COMPUTER: &str = ".. (Computer)";
const UP_TO_PARENT: &str = ".. (Parent folder)";

/// A navigable folder entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: String,
}

/// Result of browsing one level of the file system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseListing {
    pub current_path: String,
    pub folders: Vec<FolderEntry>,
}

/// List the immediate sub-directories of `path`.
///
/// An empty path yields the root volumes. A path that cannot be listed
/// (missing, a file, unreadable) is an `AccessError`. Every other listing starts with a synthetic entry leading one level up;
/// from a volume root that entry leads back to the root volumes (path `""`).
pub fn browse(path: &str, roots: &dyn RootProvider, show_hidden: bool) -> Result<BrowseListing> {
    let current = Path::new(path);

    if path.is_empty() {
        return Ok(root_listing(roots));
    }

    let mut folders = Vec::new();

    for entry in fs::read_dir(current).map_err(|e| FsError::access(current, e))? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", path, e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let entry_path = entry.path();
        if entry_path.is_dir() {
            folders.push(FolderEntry {
                name,
                path: entry_path.display().to_string(),
            });
        }
    }

    folders.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    folders.insert(0, up_entry(current, roots));

    Ok(BrowseListing {
        current_path: path.to_string(),
        folders,
    })
}

fn root_listing(roots: &dyn RootProvider) -> BrowseListing {
    let folders = roots
        .list_roots()
        .into_iter()
        .map(|root| FolderEntry {
            name: root.name,
            path: root.path.display().to_string(),
        })
        .collect();

    BrowseListing {
        current_path: COMPUTER_LABEL.to_string(),
        folders,
    }
}

fn up_entry(current: &Path, roots: &dyn RootProvider) -> FolderEntry {
    match current.parent() {
        Some(parent) if !roots.is_root(current) => FolderEntry {
            name: UP_TO_PARENT.to_string(),
            path: parent.display().to_string(),
        },
        _ => FolderEntry {
            name: UP_TO_COMPUTER.to_string(),
            path: String::new(),
        },
    }
}
