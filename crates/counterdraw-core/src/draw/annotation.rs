//! Dimension annotations: double-headed arrows with measurement labels.
//!
//! A dimension annotation depicts one measured length outside an edge of
//! the piece outline. It consists of a double-headed arrow spanning the
//! measured extent and a centered text label carrying the formatted value.
//! Arrowheads are SVG markers defined once per stroke color (see
//! [`create_marker_definitions`]).

use svg::node::{
    Text as SvgText,
    element::{self as svg_element, Definitions, Marker, Path},
};

use crate::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, TextStyle},
    geometry::{Bounds, Point, Projection},
};

/// The direction a dimension annotation runs in plan space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Measures a horizontal extent; the label reads left to right.
    Horizontal,
    /// Measures a vertical extent; the label is rotated a quarter turn.
    Vertical,
}

/// Which side of a horizontal arrow the label text extends toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    /// Text extends downward from the anchor (used below the piece).
    Below,
    /// Text extends upward from the anchor (used above the piece).
    Above,
}

/// A double-headed arrow plus a centered measurement label.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionAnnotation {
    start: Point,
    end: Point,
    label: String,
    label_anchor: Point,
    orientation: Orientation,
    label_side: LabelSide,
}

impl DimensionAnnotation {
    /// Creates a horizontal annotation with the label on the given side of
    /// the arrow.
    pub fn horizontal(
        start: Point,
        end: Point,
        label: impl Into<String>,
        label_anchor: Point,
        label_side: LabelSide,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            label_anchor,
            orientation: Orientation::Horizontal,
            label_side,
        }
    }

    /// Creates a vertical annotation; the label is rotated a quarter turn
    /// and centered on its anchor.
    pub fn vertical(start: Point, end: Point, label: impl Into<String>, label_anchor: Point) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            label_anchor,
            orientation: Orientation::Vertical,
            // Unused for rotated labels, which are centered on the anchor.
            label_side: LabelSide::Below,
        }
    }

    /// Returns the plan-space start point of the arrow.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the plan-space end point of the arrow.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the plan-space anchor point of the label.
    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    /// Returns the orientation of this annotation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the plan-space extent of the arrow endpoints and the label
    /// anchor.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.start, self.end)
            .merge(&Bounds::from_corners(self.label_anchor, self.label_anchor))
    }

    /// Renders the arrow and its label.
    ///
    /// The arrow references the per-color markers produced by
    /// [`create_marker_definitions`]; the exporter is responsible for
    /// adding those definitions to the document.
    pub fn render_to_layers(
        &self,
        proj: Projection,
        stroke: &StrokeDefinition,
        text: &TextStyle,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let start = proj.to_svg(self.start);
        let end = proj.to_svg(self.end);
        let color_id = stroke.color().to_id_safe_string();

        let path = Path::new()
            .set(
                "d",
                format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y()),
            )
            .set("fill", "none")
            .set("marker-start", format!("url(#arrow-tail-{color_id})"))
            .set("marker-end", format!("url(#arrow-head-{color_id})"));
        let path = apply_stroke!(path, stroke);
        output.add_to_layer(RenderLayer::Dimension, Box::new(path));

        let anchor = proj.to_svg(self.label_anchor);
        let mut label = svg_element::Text::new("")
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("font-family", text.font_family())
            .set("font-size", text.font_size());

        match self.orientation {
            Orientation::Horizontal => {
                // "hanging" puts the top of the text at the anchor, so the
                // label grows away from the arrow on the requested side.
                if self.label_side == LabelSide::Below {
                    label = label.set("dominant-baseline", "hanging");
                }
            }
            Orientation::Vertical => {
                label = label.set("dominant-baseline", "central").set(
                    "transform",
                    format!("rotate(-90, {}, {})", anchor.x(), anchor.y()),
                );
            }
        }

        if let Some(color) = text.color() {
            label = label
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        label = label.add(SvgText::new(&self.label));
        output.add_to_layer(RenderLayer::Text, Box::new(label));

        output
    }
}

/// Creates the SVG marker definitions for double-headed arrows, one
/// head/tail pair per stroke color in use.
pub fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        // Forward-pointing head at the end of the path
        let head = Marker::new()
            .set("id", format!("arrow-head-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        // Backward-pointing tail at the start of the path
        let tail = Marker::new()
            .set("id", format!("arrow-tail-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 1)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 10 0 L 0 5 L 10 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(head).add(tail);
    }

    defs
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn test_projection() -> Projection {
        Projection::new(Bounds::new(-2.0, -4.0, 12.0, 7.0), 10.0)
    }

    fn render_to_string(annotation: &DimensionAnnotation) -> String {
        let stroke = StrokeDefinition::default();
        let text = TextStyle::default();
        annotation
            .render_to_layers(test_projection(), &stroke, &text)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_bounds_cover_endpoints_and_label() {
        let annotation = DimensionAnnotation::horizontal(
            Point::new(0.0, -0.5),
            Point::new(10.0, -0.5),
            "10.00 in",
            Point::new(5.0, -0.7),
            LabelSide::Below,
        );

        let bounds = annotation.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.max_x(), 10.0);
        assert_approx_eq!(f32, bounds.min_y(), -0.7);
        assert_approx_eq!(f32, bounds.max_y(), -0.5);
    }

    #[test]
    fn test_horizontal_render_has_markers_and_label() {
        let annotation = DimensionAnnotation::horizontal(
            Point::new(0.0, -0.5),
            Point::new(10.0, -0.5),
            "10.00 in",
            Point::new(5.0, -0.7),
            LabelSide::Below,
        );

        let rendered = render_to_string(&annotation);
        assert!(rendered.contains("marker-start"));
        assert!(rendered.contains("marker-end"));
        assert!(rendered.contains("arrow-head-black"));
        assert!(rendered.contains("arrow-tail-black"));
        assert!(rendered.contains("10.00 in"));
        assert!(rendered.contains("dominant-baseline=\"hanging\""));
    }

    #[test]
    fn test_above_label_keeps_default_baseline() {
        let annotation = DimensionAnnotation::horizontal(
            Point::new(0.0, 5.5),
            Point::new(10.0, 5.5),
            "10.00 in",
            Point::new(5.0, 5.7),
            LabelSide::Above,
        );

        let rendered = render_to_string(&annotation);
        assert!(!rendered.contains("dominant-baseline=\"hanging\""));
    }

    #[test]
    fn test_vertical_render_rotates_label() {
        let annotation = DimensionAnnotation::vertical(
            Point::new(-0.5, 0.0),
            Point::new(-0.5, 5.0),
            "5.00 in",
            Point::new(-0.7, 2.5),
        );

        let rendered = render_to_string(&annotation);
        assert!(rendered.contains("rotate(-90"));
        assert!(rendered.contains("5.00 in"));
    }

    #[test]
    fn test_marker_definitions_per_color() {
        let black = Color::default();
        let blue = Color::new("blue").unwrap();

        let defs = create_marker_definitions([&black, &blue].into_iter());
        let rendered = defs.to_string();

        assert!(rendered.contains("arrow-head-black"));
        assert!(rendered.contains("arrow-tail-black"));
        assert!(rendered.contains("arrow-head-blue"));
        assert!(rendered.contains("arrow-tail-blue"));
    }
}
