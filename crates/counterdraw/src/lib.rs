//! Counterdraw - schematic top-down drawings of fabricated counter pieces.
//!
//! Selection, layout, and SVG rendering for counter piece records loaded
//! from a spreadsheet export. Each drawing shows the piece outline with
//! dimension callouts on all four sides, plus location and fabrication
//! metadata.

pub mod config;

mod error;
mod export;
mod layout;

pub use counterdraw_core::{color, draw, geometry, units};

pub use error::CounterDrawError;
pub use layout::Drawing;

use log::{debug, info, trace};

use counterdraw_table::{CounterRecord, SheetTable};

use config::AppConfig;
use export::svg::SvgRenderer;

/// Builder for selecting and rendering counter drawings.
///
/// One builder holds the application configuration and processes any
/// number of selections; each render is an independent, full
/// recomputation.
///
/// # Examples
///
/// ```rust,no_run
/// use counterdraw::{DrawingBuilder, config::AppConfig};
/// use counterdraw_table::{SheetTable, TableCache, source_for};
///
/// let mut cache = TableCache::new();
/// let source = source_for("counters.csv");
/// let table = cache.load(source.as_ref()).expect("Failed to load table");
///
/// let builder = DrawingBuilder::new(AppConfig::default());
///
/// // Select a record by location
/// let record = builder.select_record(&table, Some("Kitchen-1"))
///     .expect("Failed to select record");
///
/// // Render it to SVG
/// let svg = builder.render_svg(&record)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DrawingBuilder::default();
/// ```
#[derive(Default)]
pub struct DrawingBuilder {
    config: AppConfig,
}

impl DrawingBuilder {
    /// Create a new drawing builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Select one record from the table by location.
    ///
    /// When `location` is `None`, the first listed location is used, the
    /// same record a selection widget would show by default. When a
    /// location appears more than once, the first matching row wins.
    ///
    /// # Errors
    ///
    /// Returns `CounterDrawError::Selection` when the table has no rows or
    /// the location is unknown, and `CounterDrawError::Record` when the
    /// matched row fails validation.
    pub fn select_record(
        &self,
        table: &SheetTable,
        location: Option<&str>,
    ) -> Result<CounterRecord, CounterDrawError> {
        let locations = table.locations();

        let location = match location {
            Some(chosen) => chosen,
            None => {
                let first = locations.first().copied().ok_or_else(|| {
                    CounterDrawError::Selection("table has no locations to select".to_string())
                })?;
                info!(location = first; "No location given, defaulting to first");
                first
            }
        };

        let row = table.row_for_location(location).ok_or_else(|| {
            CounterDrawError::Selection(format!(
                "location `{location}` not found ({} locations available)",
                locations.len()
            ))
        })?;

        let record = CounterRecord::from_row(&row)?;

        debug!(location = record.location(); "Record selected");
        trace!(record:?; "Selected record");

        Ok(record)
    }

    /// Render a record's drawing to an SVG string.
    ///
    /// This runs the full layout and rendering pipeline: plan-space
    /// layout of the outline, dimension annotations and info blocks,
    /// then projection into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `CounterDrawError::Export` when a configured style is
    /// invalid.
    pub fn render_svg(&self, record: &CounterRecord) -> Result<String, CounterDrawError> {
        info!(location = record.location(); "Laying out drawing");
        let drawing = Drawing::from_record(record);
        debug!(
            width_in = drawing.width_in(),
            depth_in = drawing.depth_in();
            "Layout calculated"
        );

        let renderer = SvgRenderer::new(&self.config)?;
        let svg = renderer.render(&drawing);

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
