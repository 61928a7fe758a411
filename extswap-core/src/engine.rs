use crate::rules::{Direction, RuleTable};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("no rename rule defined for the {0} direction")]
    MissingRule(Direction),

    #[error("failed to build rename rules")]
    Rules(#[from] regex::Error),

    /// A move failed mid-batch. The first `completed` renames were applied
    /// and are not rolled back.
    #[error(
        "failed to rename {} to {} ({} file(s) already renamed)",
        .from.display(),
        .to.display(),
        .completed
    )]
    Move {
        from: PathBuf,
        to: PathBuf,
        completed: usize,
        #[source]
        source: io::Error,
    },
}

/// A single applied rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Old path -> new path, in the order the renames happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenameReport {
    entries: Vec<RenameEntry>,
}

impl RenameReport {
    pub fn push(&mut self, from: PathBuf, to: PathBuf) {
        self.entries.push(RenameEntry { from, to });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn get(&self, from: &Path) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.from == from)
            .map(|e| e.to.as_path())
    }

    /// The new paths, in rename order.
    pub fn renamed_paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.to.clone()).collect()
    }
}

impl RuleTable {
    /// Rename every file in `files` that the rule for `direction` matches.
    ///
    /// Files are processed in order. Non-matching files are skipped. The
    /// first failed move aborts the batch, leaving earlier renames applied.
    pub fn rename_files(
        &self,
        files: &[PathBuf],
        direction: Direction,
    ) -> Result<RenameReport, RenameError> {
        let rule = self
            .rule(direction)
            .ok_or(RenameError::MissingRule(direction))?;

        let mut report = RenameReport::default();
        for file in files {
            let Some(name) = file.file_name() else {
                debug!("No file name in {}, skipping", file.display());
                continue;
            };
            let Some(name) = name.to_str() else {
                warn!(
                    "Not renaming {}: file name is not valid UTF-8",
                    file.display()
                );
                continue;
            };
            let Some(new_name) = rule.apply(name) else {
                debug!("No {} rule for {}, skipping", direction, file.display());
                continue;
            };

            let target = file.with_file_name(new_name);
            fs::rename(file, &target).map_err(|source| RenameError::Move {
                from: file.clone(),
                to: target.clone(),
                completed: report.len(),
                source,
            })?;

            info!("Renamed {} -> {}", file.display(), target.display());
            report.push(file.clone(), target);
        }

        Ok(report)
    }
}

/// Rename with the built-in rule table.
pub fn rename_files(files: &[PathBuf], direction: Direction) -> Result<RenameReport, RenameError> {
    RuleTable::builtin()?.rename_files(files, direction)
}
