//! `repo-scorer` — license compatibility scoring and URL classification.
//!
//! # `license`
//! 1. Load scan config ([`config::load_config`]).
//! 2. Walk the tree for `SPDX-License-Identifier` tags and read the README
//!    License section ([`license::scanner::find_license_metadata`]).
//! 3. Score the findings ([`license::scorer`]) and render ([`report`]).
//!
//! # `urls`
//! Classify every comma-separated URL in a file ([`urls::parser::parse_url_file`]).
//! A missing file prints one `File not found` line and is otherwise treated
//! as empty.

mod cli;
mod config;
mod error;
mod license;
mod models;
mod report;
mod urls;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, OutputFormat};
use config::load_config;
use error::UrlFileError;
use license::scanner::find_license_metadata;
use license::scorer::{assess, calculate_license_score};
use urls::parser::parse_url_file;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::License {
            path,
            config,
            format,
        } => run_license(&path, config.as_deref(), format),
        Command::Urls { file, format } => run_urls(&file, format),
    }
}

fn run_license(path: &Path, config_override: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(path, config_override)?;
    let finding = find_license_metadata(path, &config.scan)?;
    let compatibility = assess(&finding.spdx_licenses, &finding.readme_license);

    match format {
        OutputFormat::Plain => {
            let score = calculate_license_score(&finding.spdx_licenses, &finding.readme_license);
            report::terminal::render_license_plain(&finding, score);
        }
        OutputFormat::Table => {
            report::terminal::render_license_table(&finding, compatibility, path);
        }
        OutputFormat::Json => {
            println!("{}", report::json::license_report(&finding, compatibility)?);
        }
    }

    Ok(())
}

fn run_urls(file: &Path, format: OutputFormat) -> Result<()> {
    let lines = match parse_url_file(file) {
        Ok(lines) => lines,
        Err(e @ UrlFileError::NotFound(_)) => {
            println!("{}", e);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Plain => report::terminal::render_urls_plain(&lines),
        OutputFormat::Table => report::terminal::render_urls_table(&lines),
        OutputFormat::Json => println!("{}", report::json::url_report(&lines)?),
    }

    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
