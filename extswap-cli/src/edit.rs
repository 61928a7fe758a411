use anyhow::{Context, Result};
use extswap_core::{
    edit_operation, render_banner, render_done, render_file_list, render_report_table, Config,
    EditRequest, ExtensionToken, OutputFormatter, DEFAULT_CHOICES,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::prompt::Prompter;

const DIR_QUESTION: &str = "Which directory do you want to have recursively edited? (relative path)";
const EXTENSIONS_QUESTION: &str = "Which extensions do you want to have edited?";
const REVERSE_QUESTION: &str = "Reverse?";
const CONFIRM_QUESTION: &str = "Are these the files you want to edit?";

pub fn handle_edit(cli: &Cli, config: &Config, use_color: bool) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let stdout = io::stdout();
    let stderr = io::stderr();

    // Keep stdout clean for JSON output
    let mut display: Box<dyn Write> = match cli.output {
        OutputFormat::Summary => Box::new(stdout.lock()),
        OutputFormat::Json => Box::new(stderr.lock()),
    };

    if cli.output == OutputFormat::Summary {
        write!(display, "{}", render_banner(use_color))?;
    }

    let request = build_request(cli, config, &mut prompter)?;
    debug!("Edit request: {:?}", request);

    let result = edit_operation(&request, |files| {
        write!(display, "{}", render_file_list(files, use_color))?;
        display.flush()?;
        if cli.yes {
            return Ok(true);
        }
        Ok(prompter.confirm(CONFIRM_QUESTION, false)?)
    })?;

    if result.dry_run {
        write!(display, "{}", render_file_list(&result.files, use_color))?;
    }

    match cli.output {
        OutputFormat::Json => {
            drop(display);
            println!("{}", result.format(cli.output.into()));
        },
        OutputFormat::Summary => {
            if result.proceeded {
                write!(display, "{}", render_report_table(&result.report, use_color))?;
            }
            write!(display, "{}", result.format(cli.output.into()))?;
            writeln!(display, "{}", render_done(use_color))?;
        },
    }

    Ok(())
}

/// Turn flags, config defaults and (when no --ext was given) the interactive
/// answers into a request
fn build_request<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<EditRequest> {
    let default_dir = cli
        .dir
        .clone()
        .unwrap_or_else(|| config.defaults.dir.clone());
    let default_reverse = cli.reverse || config.defaults.reverse;

    if cli.answers_given() {
        return Ok(EditRequest {
            dir: default_dir,
            extensions: cli.extensions.clone(),
            reverse: default_reverse,
            dry_run: cli.dry_run,
        });
    }

    let dir = prompter
        .input(DIR_QUESTION, &default_dir.to_string_lossy())
        .context("Failed to read the directory answer")?;
    let extensions = prompter
        .checkbox(EXTENSIONS_QUESTION, &DEFAULT_CHOICES)
        .context("Failed to read the extensions answer")?
        .iter()
        .map(|choice| choice.parse::<ExtensionToken>())
        .collect::<Result<Vec<_>, _>>()?;
    let reverse = prompter
        .confirm(REVERSE_QUESTION, default_reverse)
        .context("Failed to read the reverse answer")?;

    Ok(EditRequest {
        dir: PathBuf::from(dir),
        extensions,
        reverse,
        dry_run: cli.dry_run,
    })
}
