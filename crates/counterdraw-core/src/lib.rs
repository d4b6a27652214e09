//! Counterdraw Core Types and Definitions
//!
//! This crate provides the foundational types for rendering counter piece
//! drawings. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Plan-space geometric types and the SVG projection
//!   ([`geometry`] module)
//! - **Units**: Millimeter/inch conversion and display formatting
//!   ([`units`] module)
//! - **Draw**: Visual definitions for drawing elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod units;
