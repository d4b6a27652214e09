//! The piece outline rectangle.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Projection, Size},
};

/// The unfilled rectangle representing the counter piece, viewed from
/// above.
///
/// The outline is always anchored at the plan-space origin: its corners
/// are `(0, 0)` and `(width, depth)` in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceOutline {
    size: Size,
}

impl PieceOutline {
    /// Creates an outline with the given plan-space size in inches.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Returns the plan-space size of the outline.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the plan-space extent of the outline: origin to
    /// `(width, depth)`.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(
            Point::new(0.0, 0.0),
            Point::new(self.size.width(), self.size.height()),
        )
    }

    /// Renders the outline as an unfilled rectangle with the given stroke.
    pub fn render_to_layers(&self, proj: Projection, stroke: &StrokeDefinition) -> LayeredOutput {
        // The rectangle's SVG anchor is its top-left corner, which in plan
        // space is the upper-left corner (0, depth).
        let top_left = proj.to_svg(Point::new(0.0, self.size.height()));

        let rect = svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", proj.length(self.size.width()))
            .set("height", proj.length(self.size.height()))
            .set("fill", "none");
        let rect = apply_stroke!(rect, stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Outline, Box::new(rect));
        output
    }
}
