use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,
    #[error("failed to read user input")]
    Io(#[from] io::Error),
}

/// Line-based questions over any reader/writer pair.
///
/// Production uses stdin and stderr so stdout only carries results.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        self.writer.flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(input.trim().to_string())
    }

    /// Free text answer; blank keeps `default`.
    pub fn input(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        write!(self.writer, "? {} ({}) ", message, default)?;
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Pick any number of `choices` by number or name, separated by commas or
    /// spaces. Blank selects nothing. Unknown entries ask again.
    pub fn checkbox(&mut self, message: &str, choices: &[&str]) -> Result<Vec<String>, PromptError> {
        writeln!(self.writer, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice)?;
        }

        loop {
            write!(self.writer, "Select (e.g. 1,3 or js,css; blank for none): ")?;
            let answer = self.read_answer()?;

            match parse_checkbox_answer(&answer, choices) {
                Ok(selected) => return Ok(selected),
                Err(bad) => writeln!(self.writer, "Unknown choice '{}'.", bad)?,
            }
        }
    }

    /// Yes/no question; blank keeps `default`.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.writer, "? {} ({}) ", message, hint)?;
            let answer = self.read_answer()?.to_lowercase();

            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }
}

/// Resolve the entries of a checkbox answer against `choices`, keeping the
/// choice order and dropping repeats. Returns the first unknown entry on error.
fn parse_checkbox_answer(answer: &str, choices: &[&str]) -> Result<Vec<String>, String> {
    let mut picked = vec![false; choices.len()];

    for part in answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        let index = match part.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => n - 1,
            _ => choices
                .iter()
                .position(|c| c.eq_ignore_ascii_case(part.trim_start_matches('.')))
                .ok_or_else(|| part.to_string())?,
        };
        picked[index] = true;
    }

    Ok(choices
        .iter()
        .zip(picked)
        .filter(|(_, p)| *p)
        .map(|(c, _)| (*c).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [&str; 4] = ["js", "html", "css", "exe"];

    fn prompter(input: &[u8]) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input, Vec::new())
    }

    #[test]
    fn test_input_default() {
        let mut p = prompter(b"\n");
        assert_eq!(p.input("Dir?", ".").unwrap(), ".");

        let mut p = prompter(b"  src  \n");
        assert_eq!(p.input("Dir?", ".").unwrap(), "src");
    }

    #[test]
    fn test_input_closed() {
        let mut p = prompter(b"");
        assert!(matches!(p.input("Dir?", "."), Err(PromptError::Closed)));
    }

    #[test]
    fn test_checkbox_by_number_and_name() {
        let mut p = prompter(b"3, js\n");
        assert_eq!(
            p.checkbox("Exts?", &CHOICES).unwrap(),
            vec!["js".to_string(), "css".to_string()]
        );

        let mut p = prompter(b"HTML .exe 2\n");
        assert_eq!(
            p.checkbox("Exts?", &CHOICES).unwrap(),
            vec!["html".to_string(), "exe".to_string()]
        );
    }

    #[test]
    fn test_checkbox_blank_selects_nothing() {
        let mut p = prompter(b"\n");
        assert!(p.checkbox("Exts?", &CHOICES).unwrap().is_empty());
    }

    #[test]
    fn test_checkbox_retries_on_unknown_choice() {
        let mut p = prompter(b"rs\n1\n");
        assert_eq!(p.checkbox("Exts?", &CHOICES).unwrap(), vec!["js".to_string()]);

        let output = String::from_utf8(p.writer).unwrap();
        assert!(output.contains("Unknown choice 'rs'"));
        assert!(output.contains("  4) exe"));
    }

    #[test]
    fn test_checkbox_out_of_range_number() {
        assert_eq!(parse_checkbox_answer("5", &CHOICES), Err("5".to_string()));
        assert_eq!(parse_checkbox_answer("0", &CHOICES), Err("0".to_string()));
    }

    #[test]
    fn test_confirm_answers() {
        for (input, expected) in [
            (&b"y\n"[..], true),
            (&b"YES\n"[..], true),
            (&b"n\n"[..], false),
            (&b"no\n"[..], false),
        ] {
            let mut p = prompter(input);
            assert_eq!(p.confirm("Proceed?", false).unwrap(), expected);
        }
    }

    #[test]
    fn test_confirm_default_and_retry() {
        let mut p = prompter(b"\n");
        assert!(!p.confirm("Proceed?", false).unwrap());

        let mut p = prompter(b"\n");
        assert!(p.confirm("Proceed?", true).unwrap());

        let mut p = prompter(b"maybe\ny\n");
        assert!(p.confirm("Proceed?", false).unwrap());
        assert!(String::from_utf8(p.writer)
            .unwrap()
            .contains("Please answer y or n."));
    }

    #[test]
    fn test_confirm_closed() {
        let mut p = prompter(b"");
        assert!(matches!(
            p.confirm("Proceed?", false),
            Err(PromptError::Closed)
        ));
    }
}
