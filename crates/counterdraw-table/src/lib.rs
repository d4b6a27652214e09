//! Table loading and record elaboration for counter drawings.
//!
//! This crate turns a spreadsheet's CSV export into the validated
//! [`CounterRecord`] the drawing layout consumes. It covers:
//!
//! - **Parsing**: CSV text into a header-indexed [`SheetTable`]
//! - **Selection**: unique location listing and first-match row lookup
//! - **Elaboration**: typed [`CounterRecord`] construction with dimension
//!   validation and optional-field defaulting
//! - **Acquisition**: [`TableSource`] implementations for local files and
//!   HTTP URLs, memoized through an explicit [`TableCache`]

pub mod cache;
pub mod error;
pub mod record;
pub mod source;
pub mod table;

pub use cache::TableCache;
pub use error::{RecordError, TableError};
pub use record::{CounterRecord, NOT_AVAILABLE};
pub use source::{FileSource, HttpSource, TableSource, source_for};
pub use table::{Row, SheetTable};
