//! Command-line argument definitions for the Counterdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the table source, record
//! selection, output path, configuration file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the counter drawing tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Table source: a CSV file path or an HTTP(S) URL. Falls back to
    /// `[source].address` from the configuration file when omitted.
    #[arg(help = "Table source (CSV path or URL)")]
    pub source: Option<String>,

    /// Location to draw. Defaults to the first location in the table.
    #[arg(short, long)]
    pub location: Option<String>,

    /// List the available locations and exit
    #[arg(long)]
    pub list_locations: bool,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
