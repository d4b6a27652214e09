//! The drawing layout engine.
//!
//! Turns one validated [`CounterRecord`] into the plan-space drawing
//! description: the piece outline, four dimension annotations, the two
//! info blocks, and the view bounds that keep everything visible.
//!
//! Layout is a pure, stateless transformation; it is re-run in full for
//! every selection. All coordinates are in inches with the piece's
//! lower-left corner at the origin.
//!
//! The annotation offsets are fixed absolute distances regardless of
//! piece size. For very small or very large pieces the labels can sit
//! tight against or far from the outline; the view bounds still contain
//! every anchor, so nothing is clipped.

use counterdraw_core::{
    draw::{DimensionAnnotation, InfoBlock, LabelSide, PieceOutline},
    geometry::{Bounds, Point, Size},
    units::format_inches,
};
use counterdraw_table::CounterRecord;

/// Distance from the outline edge to a dimension arrow, in inches.
const ARROW_OFFSET: f32 = 0.5;

/// Distance from the outline edge to a dimension label anchor, in inches.
const LABEL_OFFSET: f32 = 0.7;

/// Vertical position of the top info block as a fraction of the depth.
const TOP_INFO_FACTOR: f32 = 0.95;

/// Vertical anchor of the bottom legend block, in inches.
const LEGEND_Y: f32 = -3.5;

/// Horizontal view margin beyond the outline, in inches.
const HORIZONTAL_MARGIN: f32 = 2.0;

/// View margin above the outline, in inches.
const TOP_MARGIN: f32 = 2.0;

/// View margin below the outline, in inches. Larger than the others so
/// the legend block under the bottom dimension stays visible.
const BOTTOM_MARGIN: f32 = 4.0;

/// The complete plan-space description of one counter drawing.
///
/// # Examples
///
/// ```
/// # use counterdraw_table::CounterRecord;
/// # use counterdraw::Drawing;
/// let record = CounterRecord::new("Kitchen-1", "AHU-3", "1", 1000.0, 500.0).unwrap();
/// let drawing = Drawing::from_record(&record);
///
/// assert_eq!(drawing.dimensions().len(), 4);
/// assert_eq!(drawing.dimensions()[0].label(), "39.37 in");
/// ```
#[derive(Debug, Clone)]
pub struct Drawing {
    width_in: f32,
    depth_in: f32,
    outline: PieceOutline,
    dimensions: Vec<DimensionAnnotation>,
    top_info: InfoBlock,
    legend: InfoBlock,
    view_bounds: Bounds,
}

impl Drawing {
    /// Lays out the drawing for one record.
    ///
    /// The record's constructor has already validated the dimensions, so
    /// layout cannot fail.
    pub fn from_record(record: &CounterRecord) -> Self {
        let width_in = record.width_in();
        let depth_in = record.depth_in();

        let outline = PieceOutline::new(Size::new(width_in, depth_in));

        let width_label = format_inches(width_in);
        let depth_label = format_inches(depth_in);

        let bottom = DimensionAnnotation::horizontal(
            Point::new(0.0, -ARROW_OFFSET),
            Point::new(width_in, -ARROW_OFFSET),
            width_label.clone(),
            Point::new(width_in / 2.0, -LABEL_OFFSET),
            LabelSide::Below,
        );
        let top = DimensionAnnotation::horizontal(
            Point::new(0.0, depth_in + ARROW_OFFSET),
            Point::new(width_in, depth_in + ARROW_OFFSET),
            width_label,
            Point::new(width_in / 2.0, depth_in + LABEL_OFFSET),
            LabelSide::Above,
        );
        let left = DimensionAnnotation::vertical(
            Point::new(-ARROW_OFFSET, 0.0),
            Point::new(-ARROW_OFFSET, depth_in),
            depth_label.clone(),
            Point::new(-LABEL_OFFSET, depth_in / 2.0),
        );
        let right = DimensionAnnotation::vertical(
            Point::new(width_in + ARROW_OFFSET, 0.0),
            Point::new(width_in + ARROW_OFFSET, depth_in),
            depth_label,
            Point::new(width_in + LABEL_OFFSET, depth_in / 2.0),
        );

        let top_info = InfoBlock::new(
            Point::new(width_in / 2.0, depth_in * TOP_INFO_FACTOR),
            vec![
                format!("Location: {}", record.location()),
                format!("AHU: {}", record.ahu()),
            ],
        );

        let legend = InfoBlock::new(
            Point::new(width_in / 2.0, LEGEND_Y),
            vec![
                format!("Priority: {}", record.priority()),
                format!("Backsplash: {}", record.backsplash()),
                format!("Cap LH: {}", record.cap_lh()),
                format!("Cap RH: {}", record.cap_rh()),
                format!("Rolled width: {}", record.rolled_width()),
                format!("Finish: {}", record.finish()),
                format!("Comments: {}", record.comments()),
            ],
        );

        let view_bounds = Bounds::new(
            -HORIZONTAL_MARGIN,
            -BOTTOM_MARGIN,
            width_in + HORIZONTAL_MARGIN,
            depth_in + TOP_MARGIN,
        );

        Self {
            width_in,
            depth_in,
            outline,
            dimensions: vec![bottom, top, left, right],
            top_info,
            legend,
            view_bounds,
        }
    }

    /// Returns the piece width in inches.
    pub fn width_in(&self) -> f32 {
        self.width_in
    }

    /// Returns the piece depth in inches.
    pub fn depth_in(&self) -> f32 {
        self.depth_in
    }

    /// Returns the piece outline.
    pub fn outline(&self) -> &PieceOutline {
        &self.outline
    }

    /// Returns the dimension annotations in bottom, top, left, right order.
    pub fn dimensions(&self) -> &[DimensionAnnotation] {
        &self.dimensions
    }

    /// Returns the top info block (location and AHU zone).
    pub fn top_info(&self) -> &InfoBlock {
        &self.top_info
    }

    /// Returns the bottom legend block.
    pub fn legend(&self) -> &InfoBlock {
        &self.legend
    }

    /// Returns the plan-space range the rendering surface must display.
    pub fn view_bounds(&self) -> Bounds {
        self.view_bounds
    }

    /// Returns the union of every element's plan-space extent.
    pub fn element_bounds(&self) -> Bounds {
        let mut bounds = self.outline.bounds();
        for dimension in &self.dimensions {
            bounds = bounds.merge(&dimension.bounds());
        }
        bounds = bounds.merge(&self.top_info.bounds());
        bounds.merge(&self.legend.bounds())
    }
}
