use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;

const TITLE: &str = "Recursive File Extension Editor";

/// Render the startup banner
pub fn render_banner(use_color: bool) -> String {
    let rule = "═".repeat(TITLE.chars().count() + 4);
    let mut output = String::new();

    writeln!(output, "╔{}╗", rule).unwrap();
    writeln!(output, "║  {}  ║", TITLE).unwrap();
    writeln!(output, "╚{}╝", rule).unwrap();

    if use_color {
        AnsiColor::Green.bold().paint(output).to_string()
    } else {
        output
    }
}

/// Render the closing line printed after every completed run
pub fn render_done(use_color: bool) -> String {
    let text = "\nAll done! :)";
    if use_color {
        AnsiColor::Green.paint(text).to_string()
    } else {
        text.to_string()
    }
}
