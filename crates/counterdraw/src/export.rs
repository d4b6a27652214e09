//! Export of laid-out drawings to an output format.

use std::io;

use thiserror::Error;

pub mod svg;

/// Errors raised while exporting a drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}
