//! Engine error types

use crate::naming::ValidationError;
use crate::planner::PlanError;
use app_fs::FsError;
use thiserror::Error;

/// Anything that stops a preview or batch before the first rename
#[derive(Error, Debug)]
pub enum RenameError {
    // ===== Input errors (user must correct the form) =====
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ===== Folder errors (reported, not retried) =====
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl RenameError {
    /// Did the input fail validation (no disk access happened)?
    pub fn is_validation(&self) -> bool {
        matches!(self, RenameError::Validation(_))
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            RenameError::Fs(FsError::InvalidFolder(_)) => {
                "Please select a valid folder".to_string()
            }
            RenameError::Fs(FsError::AccessError { source, .. }) => {
                format!("Cannot read folder: {}", source)
            }
            _ => self.to_string(),
        }
    }
}
