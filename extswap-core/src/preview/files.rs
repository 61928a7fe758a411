use super::display_path;
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::path::PathBuf;

/// Render the gathered files, one per line, in selection order
pub fn render_file_list(files: &[PathBuf], use_color: bool) -> String {
    let mut output = String::new();

    if files.is_empty() {
        writeln!(output, "No matching files found").unwrap();
        return output;
    }

    for file in files {
        let file_str = display_path(file);
        if use_color {
            writeln!(output, "{}", AnsiColor::Green.paint(&file_str)).unwrap();
        } else {
            writeln!(output, "{}", file_str).unwrap();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_list_keeps_order() {
        let files = vec![PathBuf::from("b.js"), PathBuf::from("a/c.css")];
        assert_eq!(render_file_list(&files, false), "b.js\na/c.css\n");
    }

    #[test]
    fn test_file_list_empty() {
        assert_eq!(render_file_list(&[], false), "No matching files found\n");
    }

    #[test]
    fn test_file_list_colored() {
        let output = render_file_list(&[PathBuf::from("a.js")], true);
        assert!(output.contains("\u{1b}[32m"));
        assert!(output.contains("a.js"));
    }
}
