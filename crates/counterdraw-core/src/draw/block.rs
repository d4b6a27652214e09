//! Info blocks: multi-line metadata text with an opaque background.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, TextStyle},
    geometry::{Bounds, Point, Projection},
};

/// A block of metadata lines anchored at its top-center point.
///
/// The anchor is in plan space; the text extends downward from it. An
/// opaque background keeps the block readable where it overlaps the piece
/// outline, and an optional border frames it.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoBlock {
    anchor: Point,
    lines: Vec<String>,
}

impl InfoBlock {
    /// Creates a block with the given top-center anchor and text lines.
    pub fn new(anchor: Point, lines: Vec<String>) -> Self {
        Self { anchor, lines }
    }

    /// Returns the plan-space top-center anchor of the block.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the text lines of the block, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the plan-space position of the block as a degenerate
    /// bounds at its anchor.
    ///
    /// Text extent is a pixel-space quantity and depends on the text style
    /// at render time, so only the anchor participates in plan-space
    /// bounds checks.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.anchor, self.anchor)
    }

    /// Renders the block: an optional background rectangle sized from the
    /// measured text, then one `<tspan>` per line.
    pub fn render_to_layers(
        &self,
        proj: Projection,
        text: &TextStyle,
        background: Option<&Color>,
        border: Option<&Color>,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let anchor = proj.to_svg(self.anchor);
        let line_refs: Vec<&str> = self.lines.iter().map(String::as_str).collect();

        if let Some(bg_color) = background {
            let padding = text.padding();
            let text_size = text.measure(&line_refs);

            let mut rect = svg_element::Rectangle::new()
                .set("x", anchor.x() - text_size.width() / 2.0 - padding.left())
                .set("y", anchor.y() - padding.top())
                .set("width", text_size.width() + padding.horizontal_sum())
                .set("height", text_size.height() + padding.vertical_sum())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);

            if let Some(border_color) = border {
                rect = rect
                    .set("stroke", border_color.to_string())
                    .set("stroke-opacity", border_color.alpha())
                    .set("stroke-width", 1.0);
            }

            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }

        let mut rendered_text = svg_element::Text::new("")
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "hanging")
            .set("font-family", text.font_family())
            .set("font-size", text.font_size());

        if let Some(color) = text.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for (index, line) in self.lines.iter().enumerate() {
            let dy = if index == 0 { 0.0 } else { text.line_height() };
            let tspan = svg_element::TSpan::new("")
                .set("x", anchor.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn test_projection() -> Projection {
        Projection::new(Bounds::new(-2.0, -4.0, 12.0, 7.0), 10.0)
    }

    fn render_to_string(
        block: &InfoBlock,
        background: Option<&Color>,
        border: Option<&Color>,
    ) -> String {
        block
            .render_to_layers(test_projection(), &TextStyle::default(), background, border)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_block_bounds_is_anchor() {
        let block = InfoBlock::new(Point::new(5.0, 4.75), vec!["Location: A".to_string()]);
        let bounds = block.bounds();

        assert_approx_eq!(f32, bounds.min_x(), 5.0);
        assert_approx_eq!(f32, bounds.max_x(), 5.0);
        assert_approx_eq!(f32, bounds.min_y(), 4.75);
        assert_approx_eq!(f32, bounds.max_y(), 4.75);
    }

    #[test]
    fn test_block_renders_one_tspan_per_line() {
        let block = InfoBlock::new(
            Point::new(5.0, -3.5),
            vec![
                "Priority: 1".to_string(),
                "Backsplash: N/A".to_string(),
                "Comments: ".to_string(),
            ],
        );

        let rendered = render_to_string(&block, None, None);
        assert_eq!(rendered.matches("<tspan").count(), 3);
        assert!(rendered.contains("Priority: 1"));
        assert!(rendered.contains("Backsplash: N/A"));
    }

    #[test]
    fn test_block_background_is_translucent_white() {
        let block = InfoBlock::new(Point::new(5.0, 4.75), vec!["Location: A".to_string()]);
        let white = Color::new("white").unwrap().with_alpha(0.8);

        let rendered = render_to_string(&block, Some(&white), None);
        assert!(rendered.contains("fill-opacity=\"0.8\""));
        assert!(rendered.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_block_border_only_with_background() {
        let block = InfoBlock::new(Point::new(5.0, -3.5), vec!["Finish: Matte".to_string()]);
        let white = Color::new("white").unwrap().with_alpha(0.8);
        let gray = Color::new("gray").unwrap();

        let bordered = render_to_string(&block, Some(&white), Some(&gray));
        assert!(bordered.contains("stroke=\"gray\""));

        let plain = render_to_string(&block, Some(&white), None);
        assert!(!plain.contains("stroke=\"gray\""));
    }

    #[test]
    fn test_block_without_background_has_no_rect() {
        let block = InfoBlock::new(Point::new(0.0, 0.0), vec!["AHU: AHU-3".to_string()]);
        let rendered = render_to_string(&block, None, None);
        assert!(!rendered.contains("data-layer=\"background\""));
    }
}
