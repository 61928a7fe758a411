use clap::builder::FalseyValueParser;
use clap::Parser;
use extswap_core::ExtensionToken;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Recursively swap file extensions between .js and .sj
///
/// Without --ext, the directory, extensions and reverse mode are asked
/// interactively. The gathered file list is always confirmed before
/// anything is renamed unless --yes is given.
#[derive(Parser, Debug)]
#[command(name = "extswap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively (default: ".")
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Extensions to select, comma-separated (e.g. "js,css"). Skips the questions
    #[arg(short = 'e', long = "ext", value_delimiter = ',', value_name = "EXT")]
    pub extensions: Vec<ExtensionToken>,

    /// Scan for reversed extensions and rename .sj back to .js
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Assume yes when asked to confirm the file list
    #[arg(
        short = 'y',
        long = "yes",
        env = "EXTSWAP_YES",
        value_parser = FalseyValueParser::new()
    )]
    pub yes: bool,

    /// List the files that would be considered without renaming anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// True when the run is fully described by flags and no question is asked
    pub fn answers_given(&self) -> bool {
        !self.extensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extensions() {
        let cli = Cli::try_parse_from(["extswap", "--ext", "js,.css", "-r", "-y"]).unwrap();
        let exts: Vec<&str> = cli.extensions.iter().map(ExtensionToken::as_str).collect();
        assert_eq!(exts, vec!["js", "css"]);
        assert!(cli.reverse);
        assert!(cli.yes);
        assert!(cli.answers_given());
    }

    #[test]
    fn test_parse_rejects_invalid_extension() {
        let err = Cli::try_parse_from(["extswap", "--ext", "j*s"]).unwrap_err();
        assert!(err.to_string().contains("invalid extension"));
    }

    #[test]
    fn test_bare_boolean_flags() {
        let cli = Cli::try_parse_from(["extswap", "--no-color", "--yes"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.yes);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["extswap"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(!cli.answers_given());
        assert!(!cli.dry_run);
        assert_eq!(cli.output, OutputFormat::Summary);
    }
}
