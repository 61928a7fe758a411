use crate::engine::RenameReport;
use crate::extension::{ExtensionToken, SelectionSet};
use crate::output::EditResult;
use crate::rules::{Direction, RuleTable};
use crate::selector::select_files;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// The answers that drive one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub dir: PathBuf,
    pub extensions: Vec<ExtensionToken>,
    /// Scan for reversed extensions and rename `.sj` back to `.js`
    pub reverse: bool,
    /// Only list the selected files
    pub dry_run: bool,
}

impl Default for EditRequest {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extensions: Vec::new(),
            reverse: false,
            dry_run: false,
        }
    }
}

/// Edit operation - returns structured data
///
/// Selects the files under `request.dir`, hands them to `confirm`, and only
/// renames when it returns `true`. Nothing on disk changes before that. A
/// rename failure aborts the batch and is returned as an error; files
/// renamed before it keep their new names.
pub fn edit_operation<F>(request: &EditRequest, confirm: F) -> Result<EditResult>
where
    F: FnOnce(&[PathBuf]) -> Result<bool>,
{
    let rules = RuleTable::builtin().context("Failed to build rename rules")?;
    let selection = SelectionSet::new(request.extensions.iter().cloned(), request.reverse);
    let direction = Direction::from_reverse(request.reverse);

    debug!(
        "Scanning {} for {:?} ({} direction)",
        request.dir.display(),
        selection,
        direction
    );
    let files = select_files(&request.dir, &selection)
        .with_context(|| format!("Failed to build file filter for {:?}", selection))?;
    info!("Selected {} file(s) under {}", files.len(), request.dir.display());

    let mut result = EditResult {
        dir: request.dir.clone(),
        extensions: selection,
        direction,
        dry_run: request.dry_run,
        proceeded: false,
        files,
        report: RenameReport::default(),
    };

    if request.dry_run {
        return Ok(result);
    }

    if !confirm(&result.files)? {
        info!("File list declined, nothing renamed");
        return Ok(result);
    }

    result.proceeded = true;
    result.report = rules
        .rename_files(&result.files, direction)
        .with_context(|| format!("Failed while renaming files under {}", request.dir.display()))?;

    Ok(result)
}
