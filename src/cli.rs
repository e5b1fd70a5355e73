// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use citationcff::github::DEFAULT_RAW_BASE_URL;
use citationcff::ExportFormat;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "citationcff",
    version,
    about = "Convert a GitHub repository's CITATION.cff into BibTeX, RIS or EndNote",
    long_about = "citationcff downloads CITATION.cff from a GitHub repository and prints it \
                  as a BibTeX, RIS or EndNote (ENW) citation, ready for your reference manager."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host serving raw repository files
    #[arg(
        long,
        env = "CITATIONCFF_RAW_BASE_URL",
        default_value = DEFAULT_RAW_BASE_URL,
        global = true
    )]
    pub raw_base_url: String,
}

// Each variant is a subcommand; its fields become that subcommand's arguments
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch CITATION.cff from a GitHub repository and convert it
    ///
    /// Example: citationcff export https://github.com/user/repo --format ris
    Export {
        /// GitHub repository URL, optionally with a branch
        /// (e.g., https://github.com/user/repo/devel)
        repo_url: String,

        /// Citation format to produce
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Bibtex)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a CITATION.cff file that is already on disk
    ///
    /// Example: citationcff convert ./CITATION.cff --format enw
    Convert {
        /// Path to the CITATION.cff file
        path: PathBuf,

        /// Citation format to produce
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Bibtex)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Repository URL to record alongside the file
        #[arg(long)]
        url: Option<String>,
    },

    /// Fetch CITATION.cff and show what was found
    ///
    /// Example: citationcff show https://github.com/user/repo --json
    Show {
        /// GitHub repository URL
        repo_url: String,

        /// Output the decoded citation as JSON
        #[arg(long)]
        json: bool,
    },
}
