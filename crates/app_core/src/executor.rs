//! Rename execution - applies a mapping to disk and records every outcome

use crate::error::RenameError;
use crate::naming::{validate, NamingParameters};
use crate::planner::{plan, RenameMapping, RenamePair};
use app_fs::{list_images, DefaultFileOperations, FileOpError, FileOperations};
use serde::Serialize;
use std::path::Path;

/// Detail lines included in a report before the rest are elided
pub const DETAIL_LIMIT: usize = 5;

/// What happened to one file of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenameOutcome {
    Renamed,
    /// Target name was taken; the file was left alone
    SkippedExists,
    /// OS refused the rename; carries the OS reason text
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    pub pair: RenamePair,
    pub outcome: RenameOutcome,
}

impl RenameRecord {
    /// Human-readable line for skips and failures
    pub fn detail(&self) -> Option<String> {
        match &self.outcome {
            RenameOutcome::Renamed => None,
            RenameOutcome::SkippedExists => Some(format!(
                "Skipped: {} (target {} already exists)",
                self.pair.old_name, self.pair.new_name
            )),
            RenameOutcome::Failed(reason) => {
                Some(format!("Error: {} - {}", self.pair.old_name, reason))
            }
        }
    }
}

/// Result of one batch, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    pub records: Vec<RenameRecord>,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ExecutionReport {
    fn record(&mut self, pair: &RenamePair, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::SkippedExists => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
        self.records.push(RenameRecord {
            pair: pair.clone(),
            outcome,
        });
    }

    /// All skip/failure lines
    pub fn details(&self) -> Vec<String> {
        self.records.iter().filter_map(RenameRecord::detail).collect()
    }

    /// Multi-line report with at most [`DETAIL_LIMIT`] detail lines
    pub fn summary(&self) -> String {
        let mut output = format!(
            "Rename complete!\nRenamed: {}\nSkipped: {}\nFailed: {}",
            self.renamed, self.skipped, self.failed
        );

        let details = self.details();
        if !details.is_empty() {
            output.push_str("\n\nDetails:\n");
            let shown = details.len().min(DETAIL_LIMIT);
            output.push_str(&details[..shown].join("\n"));
            if details.len() > DETAIL_LIMIT {
                output.push_str(&format!("\n... and {} more", details.len() - DETAIL_LIMIT));
            }
        }

        output
    }
}

/// Applies rename plans through a [`FileOperations`] backend
#[derive(Debug, Default)]
pub struct RenameExecutor<F = DefaultFileOperations> {
    ops: F,
}

impl RenameExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileOperations> RenameExecutor<F> {
    pub fn with_operations(ops: F) -> Self {
        Self { ops }
    }

    /// List, plan and apply for already-validated parameters
    pub fn execute(
        &self,
        folder: &Path,
        params: &NamingParameters,
    ) -> Result<ExecutionReport, RenameError> {
        let files = list_images(folder)?;
        let mapping = plan(&files, params)?;

        tracing::info!(
            "Renaming {} files in {} (prefix: {}, start: {}, digits: {})",
            mapping.len(),
            folder.display(),
            params.prefix(),
            params.start_number(),
            params.digit_width()
        );

        let report = self.apply(folder, &mapping);

        tracing::info!(
            "Batch finished: {} renamed, {} skipped, {} failed",
            report.renamed,
            report.skipped,
            report.failed
        );

        Ok(report)
    }

    /// Apply `mapping` in order. Existence of each target is checked on
    /// live disk state right before its rename, so earlier renames of the
    /// same batch are visible to later ones. A failure never stops the batch.
    pub fn apply(&self, folder: &Path, mapping: &RenameMapping) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for pair in mapping.pairs() {
            let from = folder.join(&pair.old_name);
            let to = folder.join(&pair.new_name);

            let outcome = if self.ops.entry_exists(&to) {
                tracing::debug!("Target exists, skipping: {}", pair);
                RenameOutcome::SkippedExists
            } else {
                match self.ops.rename(&from, &to) {
                    Ok(()) => RenameOutcome::Renamed,
                    // Target appeared after the check above
                    Err(FileOpError::AlreadyExists(_)) => RenameOutcome::SkippedExists,
                    Err(e) => {
                        tracing::warn!("Rename failed: {} ({})", pair, e);
                        RenameOutcome::Failed(e.to_string())
                    }
                }
            };

            report.record(pair, outcome);
        }

        report
    }
}

/// Validate raw input, then run a batch on `folder`.
///
/// Validation happens before the folder is touched.
pub fn execute(
    folder: &Path,
    prefix_raw: &str,
    start_num_raw: &str,
    digits_raw: &str,
) -> Result<ExecutionReport, RenameError> {
    let params = validate(prefix_raw, start_num_raw, digits_raw)?;
    RenameExecutor::new().execute(folder, &params)
}
