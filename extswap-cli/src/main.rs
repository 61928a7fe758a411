use anyhow::{Context, Result};
use clap::Parser;
use extswap_core::{should_use_color, Config};
use std::io::{self, IsTerminal};
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod edit;
mod prompt;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, !cli.no_color && io::stderr().is_terminal());

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Unfortunately something went wrong during execution :(\n{e:#}");
            process::exit(1);
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))?;
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config: {e:#}");
        Config::default()
    });
    let use_color = !cli.no_color && should_use_color(config.defaults.use_color);

    edit::handle_edit(cli, &config, use_color)
}

fn init_logging(verbose: bool, ansi: bool) {
    let default_filter = if verbose {
        "extswap=debug,extswap_core=debug"
    } else {
        "extswap=warn,extswap_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
