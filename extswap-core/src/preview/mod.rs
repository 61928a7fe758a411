mod banner;
mod files;
mod table;

pub use banner::{render_banner, render_done};
pub use files::render_file_list;
pub use table::render_report_table;

use std::io::{self, IsTerminal};
use std::path::Path;

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Make a path relative to the current directory for cleaner display
fn display_path(path: &Path) -> String {
    match std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
    {
        Some(relative_path) => relative_path.display().to_string(),
        None => path.display().to_string(),
    }
}
