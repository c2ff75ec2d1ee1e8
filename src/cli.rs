use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "repo-scorer",
    about = "Score license compatibility of a source tree and classify model/dataset/code URLs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan SPDX tags and the README license section, then print a compatibility score
    License {
        /// Project path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config file [default: ./.repo-scorer/config.toml, fallback ~/.config/repo-scorer/config.toml]
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "plain", value_name = "FORMAT")]
        format: OutputFormat,
    },
    /// Classify comma-separated URLs, one mapping per input line
    Urls {
        /// File with comma-separated URLs
        #[arg(default_value = "urls.txt")]
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "plain", value_name = "FORMAT")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}
