//! Image listing - the files a rename batch operates on

use crate::{FsError, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Extensions (lowercase, without dot) that qualify a file as an image
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff"];

/// Image file names of one folder, in rename order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    names: Vec<String>,
}

impl FileList {
    /// Build a list from arbitrary names, applying the canonical ordering
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_by(|a, b| compare_names(a, b));
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Case-insensitive by full name; raw order breaks ties so the result
/// never depends on directory iteration order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Split off the extension including its dot, e.g. `"A.JPG"` -> `".JPG"`.
///
/// Follows `Path::extension` rules: a leading dot does not start an
/// extension, so `".jpg"` has none and yields `""`.
pub fn split_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) if idx + 1 == name.len() => "",
        Some(idx) => &name[idx..],
    }
}

/// Check whether a file name carries one of the image extensions
pub fn is_image_name(name: &str) -> bool {
    let ext = split_extension(name);
    if ext.is_empty() {
        return false;
    }
    let ext = ext[1..].to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// List the image files directly inside `folder`, sorted for renaming.
///
/// Sub-directories are never entered and never listed, even when their
/// name looks like an image.
pub fn list_images<P: AsRef<Path>>(folder: P) -> Result<FileList> {
    let folder = folder.as_ref();

    if folder.as_os_str().is_empty() {
        return Err(FsError::InvalidFolder("no folder selected".to_string()));
    }

    if !folder.is_dir() {
        return Err(FsError::InvalidFolder(format!(
            "Not a directory: {}",
            folder.display()
        )));
    }

    let mut names = Vec::new();

    for entry in fs::read_dir(folder).map_err(|e| FsError::access(folder, e))? {
        let entry = entry.map_err(|e| FsError::access(folder, e))?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", raw);
                continue;
            }
        };

        if !is_image_name(&name) {
            continue;
        }

        // Follows symlinks: a link to an image file counts as an image
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => names.push(name),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Skipping unreadable entry {}: {}", name, e);
            }
        }
    }

    let list = FileList::from_names(names);
    tracing::debug!("Found {} images in {}", list.len(), folder.display());

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn folder_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("A.JPG"), ".JPG");
        assert_eq!(split_extension("archive.tar.gz"), ".gz");
        assert_eq!(split_extension("noext"), "");
        assert_eq!(split_extension(".jpg"), "");
        assert_eq!(split_extension("trailing."), "");
    }

    #[test]
    fn test_is_image_name() {
        assert!(is_image_name("photo.jpg"));
        assert!(is_image_name("PHOTO.TIFF"));
        assert!(is_image_name("scan.WebP"));
        assert!(!is_image_name("notes.txt"));
        assert!(!is_image_name("photo.tif"));
        assert!(!is_image_name(".png"));
    }

    #[test]
    fn test_list_sorted_case_insensitive() {
        let dir = folder_with(&["b.png", "A.JPG", "c.gif", "readme.txt"]);

        let list = list_images(dir.path()).unwrap();
        assert_eq!(list.names(), &["A.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn test_list_is_reproducible() {
        let dir = folder_with(&["z.bmp", "m.jpeg", "Q.webp", "a.tiff"]);

        let first = list_images(dir.path()).unwrap();
        let second = list_images(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.names(), &["a.tiff", "m.jpeg", "Q.webp", "z.bmp"]);
    }

    #[test]
    fn test_list_skips_directories() {
        let dir = folder_with(&["one.jpg"]);
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();
        fs::write(dir.path().join("folder.jpg").join("inner.jpg"), b"x").unwrap();

        let list = list_images(dir.path()).unwrap();
        assert_eq!(list.names(), &["one.jpg"]);
    }

    #[test]
    fn test_list_invalid_folder() {
        assert!(matches!(list_images(""), Err(FsError::InvalidFolder(_))));

        let dir = folder_with(&["file.png"]);
        let file = dir.path().join("file.png");
        assert!(matches!(list_images(&file), Err(FsError::InvalidFolder(_))));
        assert!(matches!(
            list_images(dir.path().join("missing")),
            Err(FsError::InvalidFolder(_))
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = folder_with(&["good.jpg"]);
        fs::write(dir.path().join(OsStr::from_bytes(b"\xff.jpg")), b"x").unwrap();

        let list = list_images(dir.path()).unwrap();
        assert_eq!(list.names(), &["good.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_unreadable_folder() {
        use std::os::unix::fs::PermissionsExt;

        let dir = folder_with(&["a.png"]);
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the mode bits
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = list_images(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(FsError::AccessError { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_names_tie_break() {
        let list = FileList::from_names(["a.jpg", "A.jpg", "B.png"]);
        assert_eq!(list.names(), &["A.jpg", "a.jpg", "B.png"]);
    }
}
