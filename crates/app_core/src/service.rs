//! Request/response handlers behind the web page
//!
//! Framework-agnostic: requests are plain deserializable values and every
//! response serializes to `{"status": "success" | "error", ...}`.

use crate::config::{AppConfig, NamingDefaults};
use crate::error::RenameError;
use crate::executor::RenameExecutor;
use crate::naming::validate;
use crate::planner::{plan, Preview};
use app_fs::{browse, list_images, FolderEntry, RootProvider, SystemRoots};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseRequest {
    #[serde(default)]
    pub path: Option<String>,
}

/// Loosely-typed form fields shared by preview and rename
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenameForm {
    pub folder_path: Option<String>,
    pub prefix: Option<String>,
    pub start_num: Option<String>,
    pub num_digits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BrowseResponse {
    Success {
        current_path: String,
        folders: Vec<FolderEntry>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PreviewResponse {
    Success { preview: Vec<String>, message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RenameResponse {
    Success { message: String },
    Error { message: String },
}

/// Stateless handler set; holds only immutable configuration
pub struct RenameService {
    defaults: NamingDefaults,
    show_hidden: bool,
    roots: Box<dyn RootProvider>,
}

impl RenameService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_roots(config, Box::new(SystemRoots))
    }

    pub fn with_roots(config: &AppConfig, roots: Box<dyn RootProvider>) -> Self {
        Self {
            defaults: config.defaults.clone(),
            show_hidden: config.browse.show_hidden,
            roots,
        }
    }

    pub fn browse(&self, request: &BrowseRequest) -> BrowseResponse {
        let path = request.path.as_deref().unwrap_or_default();

        match browse(path, self.roots.as_ref(), self.show_hidden) {
            Ok(listing) => BrowseResponse::Success {
                current_path: listing.current_path,
                folders: listing.folders,
            },
            Err(e) => {
                tracing::warn!("Browse failed: {}", e);
                let reason = match &e {
                    app_fs::FsError::AccessError { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                BrowseResponse::Error {
                    message: format!("Cannot access folder: {}", reason),
                }
            }
        }
    }

    pub fn preview(&self, form: &RenameForm) -> PreviewResponse {
        match self.build_preview(form) {
            Ok(preview) => PreviewResponse::Success {
                preview: preview.to_lines(),
                message: preview.message(),
            },
            Err(e) => {
                log_rejection("preview", &e);
                PreviewResponse::Error {
                    message: e.user_message(),
                }
            }
        }
    }

    pub fn rename(&self, form: &RenameForm) -> RenameResponse {
        match self.run_batch(form) {
            Ok(message) => RenameResponse::Success { message },
            Err(e) => {
                log_rejection("rename", &e);
                RenameResponse::Error {
                    message: e.user_message(),
                }
            }
        }
    }

    fn build_preview(&self, form: &RenameForm) -> Result<Preview, RenameError> {
        let fields = self.fields(form);
        let params = validate(fields.prefix, fields.start_num, fields.num_digits)?;
        let files = list_images(Path::new(fields.folder))?;
        Ok(plan(&files, &params)?.preview())
    }

    fn run_batch(&self, form: &RenameForm) -> Result<String, RenameError> {
        let fields = self.fields(form);
        let params = validate(fields.prefix, fields.start_num, fields.num_digits)?;
        let report = RenameExecutor::new().execute(Path::new(fields.folder), &params)?;
        Ok(report.summary())
    }

    fn fields<'a>(&'a self, form: &'a RenameForm) -> FormFields<'a> {
        FormFields {
            folder: form.folder_path.as_deref().unwrap_or_default(),
            prefix: form.prefix.as_deref().unwrap_or(&self.defaults.prefix),
            start_num: form.start_num.as_deref().unwrap_or(&self.defaults.start_num),
            num_digits: form.num_digits.as_deref().unwrap_or(&self.defaults.num_digits),
        }
    }
}

fn log_rejection(operation: &str, error: &RenameError) {
    if error.is_validation() {
        tracing::info!("{} rejected: {}", operation, error);
    } else {
        tracing::warn!("{} failed: {}", operation, error);
    }
}

struct FormFields<'a> {
    folder: &'a str,
    prefix: &'a str,
    start_num: &'a str,
    num_digits: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn service() -> RenameService {
        RenameService::new(&AppConfig::default())
    }

    fn form(folder: &Path, prefix: &str, start: &str, digits: &str) -> RenameForm {
        RenameForm {
            folder_path: Some(folder.display().to_string()),
            prefix: Some(prefix.to_string()),
            start_num: Some(start.to_string()),
            num_digits: Some(digits.to_string()),
        }
    }

    fn folder_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn test_preview_example() {
        let dir = folder_with(&["b.png", "A.JPG", "c.gif"]);

        let response = service().preview(&form(dir.path(), "img", "1", "2"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "success",
                "preview": ["A.JPG -> img_01.JPG", "b.png -> img_02.png", "c.gif -> img_03.gif"],
                "message": "Previewing 3 of 3 files",
            })
        );

        // Preview never touches the files
        assert!(dir.path().join("A.JPG").exists());
    }

    #[test]
    fn test_preview_uses_defaults_for_missing_fields() {
        let dir = folder_with(&["one.png"]);
        let request = RenameForm {
            folder_path: Some(dir.path().display().to_string()),
            ..Default::default()
        };

        let response = service().preview(&request);
        assert_eq!(
            response,
            PreviewResponse::Success {
                preview: vec!["one.png -> image_01.png".to_string()],
                message: "Previewing 1 of 1 files".to_string(),
            }
        );
    }

    #[test]
    fn test_preview_errors() {
        let dir = folder_with(&["notes.txt"]);

        let response = service().preview(&form(dir.path(), "   ", "1", "2"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "error", "message": "Prefix must not be empty"})
        );

        let response = service().preview(&form(dir.path(), "img", "1", "2"));
        assert_eq!(
            response,
            PreviewResponse::Error {
                message: "No image files found in the selected folder".to_string()
            }
        );

        let response = service().preview(&RenameForm::default());
        assert_eq!(
            response,
            PreviewResponse::Error {
                message: "Please select a valid folder".to_string()
            }
        );
    }

    #[test]
    fn test_rename_reports_summary() {
        let dir = folder_with(&["b.png", "A.JPG", "c.gif"]);

        let response = service().rename(&form(dir.path(), "img", "1", "2"));
        assert_eq!(
            response,
            RenameResponse::Success {
                message: "Rename complete!\nRenamed: 3\nSkipped: 0\nFailed: 0".to_string()
            }
        );

        let response = service().rename(&form(dir.path(), "img", "1", "2"));
        match response {
            RenameResponse::Success { message } => {
                assert!(message.contains("Renamed: 0\nSkipped: 3"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_rename_validation_error() {
        let dir = folder_with(&["a.png"]);

        let response = service().rename(&form(dir.path(), "img", "1", "7"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "error", "message": "Digit count must be between 1 and 6"})
        );
        assert!(dir.path().join("a.png").exists());
    }

    #[test]
    fn test_browse_roots() {
        let response = service().browse(&BrowseRequest::default());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["current_path"], app_fs::COMPUTER_LABEL);
        assert!(value["folders"].as_array().is_some());
    }

    #[test]
    fn test_browse_missing_folder_is_error() {
        let dir = TempDir::new().unwrap();
        let request = BrowseRequest {
            path: Some(dir.path().join("missing").display().to_string()),
        };

        let value = serde_json::to_value(service().browse(&request)).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["message"]
            .as_str()
            .unwrap()
            .starts_with("Cannot access folder: "));
        assert!(value.get("folders").is_none());
    }

    #[test]
    fn test_browse_file_is_error() {
        let dir = folder_with(&["photo.jpg"]);
        let request = BrowseRequest {
            path: Some(dir.path().join("photo.jpg").display().to_string()),
        };

        let response = service().browse(&request);
        assert!(matches!(response, BrowseResponse::Error { .. }));
    }
}
