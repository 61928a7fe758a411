use super::display_path;
use crate::engine::RenameReport;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render the old -> new mapping as a two-column table
pub fn render_report_table(report: &RenameReport, use_color: bool) -> String {
    if report.is_empty() {
        return "No files were renamed\n".to_string();
    }

    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("File").fg(Color::Cyan),
            Cell::new("Renamed to").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["File", "Renamed to"]);
    }

    for entry in report.entries() {
        let from_str = display_path(&entry.from);
        let to_str = display_path(&entry.to);

        if use_color {
            table.add_row(vec![
                Cell::new(&from_str).fg(Color::Blue),
                Cell::new(format!("→ {}", to_str)).fg(Color::Blue),
            ]);
        } else {
            table.add_row(vec![from_str, format!("→ {}", to_str)]);
        }
    }

    let mut output = table.to_string();
    output.push('\n');
    output
}
