use crate::engine::RenameReport;
use crate::extension::SelectionSet;
use crate::rules::Direction;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of one edit run
#[derive(Debug, Clone, Serialize)]
pub struct EditResult {
    pub dir: PathBuf,
    /// Extensions actually scanned for (already reversed in reverse mode)
    pub extensions: SelectionSet,
    pub direction: Direction,
    pub dry_run: bool,
    /// False when the user declined the file list
    pub proceeded: bool,
    pub files: Vec<PathBuf>,
    pub report: RenameReport,
}

impl EditResult {
    /// Selected files the rename rules left alone
    pub fn untouched(&self) -> usize {
        self.files.len().saturating_sub(self.report.len())
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for EditResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "edit",
            "dir": self.dir,
            "extensions": self.extensions,
            "direction": self.direction,
            "dry_run": self.dry_run,
            "proceeded": self.proceeded,
            "summary": {
                "selected": self.files.len(),
                "renamed": self.report.len(),
            },
            "files": self.files,
            "renames": self.report,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(
                output,
                "Dry run: {} file(s) selected, nothing renamed",
                self.files.len()
            )
            .unwrap();
            return output;
        }

        if !self.proceeded {
            output.push_str("Aborting!\n");
            return output;
        }

        writeln!(
            output,
            "Renamed {} of {} selected file(s)",
            self.report.len(),
            self.files.len()
        )
        .unwrap();

        let untouched = self.untouched();
        if untouched > 0 {
            let (from, _) = self.direction.suffixes();
            writeln!(
                output,
                "{} file(s) left unchanged: only .{} files are renamed in the {} direction",
                untouched, from, self.direction
            )
            .unwrap();
        }

        output
    }
}
