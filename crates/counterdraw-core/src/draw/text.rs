//! Text styling and measurement for labels and info blocks.
//!
//! [`TextStyle`] configures font properties and padding for the text
//! rendered in a drawing. Measurement uses approximate font metrics
//! (average glyph advance and a fixed line-height factor) rather than
//! glyph shaping: the only consumer is the opaque background box behind
//! an info block, which does not need sub-pixel accuracy.

use crate::{
    color::Color,
    geometry::{Insets, Size},
};

/// Points-to-pixels factor at standard DPI.
const PT_TO_PX: f32 = 1.33;

/// Line height as a multiple of the pixel font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Average glyph advance as a fraction of the pixel font size.
const AVERAGE_ADVANCE: f32 = 0.55;

/// Defines the visual style for text elements in a drawing.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` points |
/// | Text color | `None` (SVG default, typically black) |
/// | Padding | 4px on all sides |
///
/// # Examples
///
/// ```
/// # use counterdraw_core::draw::TextStyle;
/// let mut style = TextStyle::new();
/// style.set_font_size(12);
/// style.set_font_family("Helvetica");
///
/// let size = style.measure(&["Location: Kitchen-1", "AHU: AHU-3"]);
/// assert!(size.width() > 0.0);
/// assert!(size.height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TextStyle {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    padding: Insets,
}

impl TextStyle {
    /// Creates a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family name (e.g. "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the padding applied around text when a background is drawn.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the padding configuration.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Returns the font size converted to pixels.
    pub fn font_size_px(&self) -> f32 {
        f32::from(self.font_size) * PT_TO_PX
    }

    /// Returns the line height in pixels.
    pub fn line_height(&self) -> f32 {
        self.font_size_px() * LINE_HEIGHT_FACTOR
    }

    /// Estimates the pixel size of a block of text lines, excluding padding.
    ///
    /// Width is the widest line at the average glyph advance; height is one
    /// line height per line.
    pub fn measure(&self, lines: &[&str]) -> Size {
        if lines.is_empty() {
            return Size::default();
        }

        let advance = self.font_size_px() * AVERAGE_ADVANCE;
        let max_chars = lines.iter().map(|line| line.chars().count()).max();
        let width = max_chars.unwrap_or(0) as f32 * advance;
        let height = lines.len() as f32 * self.line_height();

        Size::new(width, height)
    }

    /// Estimates the pixel size of a block of text lines, including padding.
    pub fn measure_padded(&self, lines: &[&str]) -> Size {
        self.measure(lines).add_padding(self.padding)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 10,
            color: None,
            padding: Insets::uniform(4.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_style_defaults() {
        let style = TextStyle::new();
        assert_eq!(style.font_family(), "sans-serif");
        assert_eq!(style.font_size(), 10);
        assert!(style.color().is_none());
        assert_approx_eq!(f32, style.padding().top(), 4.0);
    }

    #[test]
    fn test_text_style_setters() {
        let mut style = TextStyle::new();
        style.set_font_size(14);
        style.set_font_family("monospace");
        style.set_padding(Insets::uniform(2.0));

        assert_eq!(style.font_size(), 14);
        assert_eq!(style.font_family(), "monospace");
        assert_approx_eq!(f32, style.padding().horizontal_sum(), 4.0);
    }

    #[test]
    fn test_measure_empty() {
        let style = TextStyle::new();
        let size = style.measure(&[]);
        assert!(size.is_zero());
    }

    #[test]
    fn test_measure_single_line() {
        let style = TextStyle::new();
        let size = style.measure(&["Finish: Matte"]);

        assert!(size.width() > 0.0);
        assert_approx_eq!(f32, size.height(), style.line_height());
    }

    #[test]
    fn test_measure_width_tracks_longest_line() {
        let style = TextStyle::new();
        let short = style.measure(&["ab"]);
        let both = style.measure(&["ab", "a much longer line"]);

        assert!(both.width() > short.width());
        assert_approx_eq!(f32, both.height(), 2.0 * style.line_height());
    }

    #[test]
    fn test_measure_larger_font_is_larger() {
        let mut small = TextStyle::new();
        small.set_font_size(8);
        let mut large = TextStyle::new();
        large.set_font_size(16);

        let line = ["Priority: 1"];
        assert!(large.measure(&line).width() > small.measure(&line).width());
        assert!(large.measure(&line).height() > small.measure(&line).height());
    }

    #[test]
    fn test_measure_padded_adds_padding() {
        let mut style = TextStyle::new();
        style.set_padding(Insets::uniform(5.0));

        let bare = style.measure(&["Comments:"]);
        let padded = style.measure_padded(&["Comments:"]);

        assert_approx_eq!(f32, padded.width() - bare.width(), 10.0);
        assert_approx_eq!(f32, padded.height() - bare.height(), 10.0);
    }
}
