//! CLI logic for the counter drawing tool.
//!
//! This module wires the table source, cache, selection, and rendering
//! together for one command-line invocation.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use counterdraw::{CounterDrawError, DrawingBuilder};
use counterdraw_table::{TableCache, source_for};

use config::ConfigError;

/// Run the Counterdraw CLI application
///
/// Loads configuration, fetches the source table through the cache,
/// then either lists the available locations or renders the selected
/// record's drawing to the output file.
///
/// # Errors
///
/// Returns `CounterDrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Table fetch or parse errors
/// - Selection and record validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CounterDrawError> {
    info!(
        output_path = args.output;
        "Processing counter drawing"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Resolve the table address: command line first, then config
    let address = match (&args.source, app_config.source().address()) {
        (Some(source), _) => source.clone(),
        (None, Some(configured)) => configured.to_string(),
        (None, None) => return Err(ConfigError::MissingSource.into()),
    };

    // Fetch the table through the cache
    let source = source_for(&address);
    let mut cache = TableCache::new();
    let table = cache.load(source.as_ref())?;

    if args.list_locations {
        for location in table.locations() {
            println!("{location}");
        }
        return Ok(());
    }

    // Select and render using the DrawingBuilder API
    let builder = DrawingBuilder::new(app_config);
    let record = builder.select_record(&table, args.location.as_deref())?;
    let svg = builder.render_svg(&record)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
