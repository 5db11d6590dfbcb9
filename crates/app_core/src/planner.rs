//! Rename planning - the pure mapping from listed names to target names

use crate::naming::NamingParameters;
use app_fs::{split_extension, FileList};
use serde::Serialize;
use thiserror::Error;

/// Number of mappings a preview shows before summarizing the rest
pub const PREVIEW_LIMIT: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("No image files found in the selected folder")]
    EmptyFolder,
}

/// One planned rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

impl std::fmt::Display for RenamePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.old_name, self.new_name)
    }
}

/// Full ordered plan for a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameMapping {
    pairs: Vec<RenamePair>,
}

impl RenameMapping {
    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Bounded view for display; the mapping itself is left intact
    pub fn preview(&self) -> Preview {
        let shown = self.pairs.len().min(PREVIEW_LIMIT);
        Preview {
            lines: self.pairs[..shown].iter().map(ToString::to_string).collect(),
            shown,
            total: self.pairs.len(),
        }
    }
}

/// Display-only excerpt of a mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub lines: Vec<String>,
    pub shown: usize,
    pub total: usize,
}

impl Preview {
    pub fn remaining(&self) -> usize {
        self.total - self.shown
    }

    /// Preview lines with a trailing remainder line when mappings were cut
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.lines.clone();
        if self.remaining() > 0 {
            lines.push(format!("... and {} more files", self.remaining()));
        }
        lines
    }

    pub fn message(&self) -> String {
        format!("Previewing {} of {} files", self.shown, self.total)
    }
}

/// Map every listed file to its sequential target name. No I/O.
pub fn plan(files: &FileList, params: &NamingParameters) -> Result<RenameMapping, PlanError> {
    if files.is_empty() {
        return Err(PlanError::EmptyFolder);
    }

    let pairs = files
        .iter()
        .enumerate()
        .map(|(index, old_name)| RenamePair {
            old_name: old_name.to_string(),
            new_name: params.name_at(index, split_extension(old_name)),
        })
        .collect();

    Ok(RenameMapping { pairs })
}
