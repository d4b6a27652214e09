//! Stroke definitions for outlines and dimension lines.
//!
//! Strokes follow SVG/CSS terminology. The [`apply_stroke!`](crate::apply_stroke!)
//! macro applies a full [`StrokeDefinition`] to any SVG element in one go.

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual pattern of a stroke.
///
/// Each variant maps to an SVG `stroke-dasharray` value; `Solid` omits the
/// attribute entirely.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line (5px dash, 5px gap)
    Dashed,
    /// Dotted line (2px dot, 3px gap)
    Dotted,
    /// Custom SVG dasharray pattern, e.g. `"10,5,2,5"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use counterdraw_core::draw::{StrokeDefinition, StrokeStyle};
/// use counterdraw_core::color::Color;
///
/// // The piece outline: blue, 2px
/// let outline = StrokeDefinition::new(Color::new("blue").unwrap(), 2.0);
///
/// // A dashed construction line
/// let mut guide = StrokeDefinition::new(Color::default(), 1.0);
/// guide.set_style(StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies color, opacity, width, and dash pattern (if not solid) to any
/// SVG element.
///
/// # Examples
///
/// ```
/// use counterdraw_core::draw::StrokeDefinition;
/// use counterdraw_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 1.5);
/// let line = svg_element::Path::new().set("d", "M 0 0 L 10 0");
///
/// let line = counterdraw_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 2.0);
        stroke.set_color(Color::new("gray").unwrap());
        stroke.set_width(1.5);
        stroke.set_style(StrokeStyle::Dashed);

        assert_eq!(stroke.color().to_string(), "gray");
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(*stroke.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));
        assert_eq!(
            StrokeStyle::Custom("10,5,2,5".to_string()).to_svg_value(),
            Some("10,5,2,5".to_string())
        );
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(
            StrokeStyle::from_str("dashed").unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            StrokeStyle::from_str("dotted").unwrap(),
            StrokeStyle::Dotted
        );
        assert_eq!(
            StrokeStyle::from_str("7,3").unwrap(),
            StrokeStyle::Custom("7,3".to_string())
        );
    }

    #[test]
    fn test_apply_stroke_macro() {
        let stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 2.0);
        let rect = svg::node::element::Rectangle::new();
        let rect = apply_stroke!(rect, &stroke);

        let rendered = rect.to_string();
        assert!(rendered.contains("stroke=\"blue\""));
        assert!(rendered.contains("stroke-width=\"2\""));
        assert!(!rendered.contains("stroke-dasharray"));
    }
}
