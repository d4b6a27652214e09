//! Error types for Counterdraw operations.
//!
//! This module provides the main error type [`CounterDrawError`] which
//! wraps the error conditions that can occur while loading, selecting,
//! and rendering a counter drawing.

use std::io;

use thiserror::Error;

use counterdraw_table::{RecordError, TableError};

/// The main error type for Counterdraw operations.
#[derive(Debug, Error)]
pub enum CounterDrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("selection error: {0}")]
    Selection(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CounterDrawError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
