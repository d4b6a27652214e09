//! Visual definitions for drawing elements.
//!
//! This module provides the drawable pieces a counter drawing is assembled
//! from, together with the styling and z-ordering machinery:
//!
//! - [`PieceOutline`] - the unfilled rectangle of the piece itself
//! - [`DimensionAnnotation`] - a double-headed arrow with a measurement label
//! - [`InfoBlock`] - a multi-line text block with an opaque background
//! - [`StrokeDefinition`] / [`TextStyle`] - shared styling definitions
//! - [`RenderLayer`] / [`LayeredOutput`] - z-ordered SVG collection

pub mod annotation;
pub mod block;
pub mod layer;
pub mod outline;
pub mod stroke;
pub mod text;

pub use annotation::{DimensionAnnotation, LabelSide, Orientation};
pub use block::InfoBlock;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use outline::PieceOutline;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::TextStyle;
