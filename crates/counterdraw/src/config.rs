//! Configuration types for counter drawing rendering.
//!
//! This module provides the configuration structures that control how
//! drawings are styled and scaled. All types implement
//! [`serde::Deserialize`] for loading from TOML, and every field is
//! optional with a sensible default, so an empty config file is valid.
//!
//! # Example
//!
//! ```
//! # use counterdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().outline_color().is_ok());
//! assert_eq!(config.drawing().scale(), 40.0);
//! ```

use serde::Deserialize;

use counterdraw_core::{color::Color, draw::StrokeStyle};

const DEFAULT_OUTLINE_COLOR: &str = "blue";
const DEFAULT_OUTLINE_WIDTH: f32 = 2.0;
const DEFAULT_DIMENSION_COLOR: &str = "black";
const DEFAULT_DIMENSION_WIDTH: f32 = 1.5;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE: u16 = 10;
const DEFAULT_INFO_BACKGROUND: &str = "white";
const DEFAULT_INFO_BACKGROUND_OPACITY: f32 = 0.8;
const DEFAULT_LEGEND_BORDER: &str = "gray";
const DEFAULT_SCALE: f32 = 40.0;

/// Top-level application configuration combining style, drawing, and
/// source settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Drawing configuration section.
    #[serde(default)]
    drawing: DrawingConfig,

    /// Source configuration section.
    #[serde(default)]
    source: SourceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, drawing: DrawingConfig, source: SourceConfig) -> Self {
        Self {
            style,
            drawing,
            source,
        }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the drawing configuration.
    pub fn drawing(&self) -> &DrawingConfig {
        &self.drawing
    }

    /// Returns the source configuration.
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }
}

/// Visual styling configuration for rendered drawings.
///
/// Color fields hold CSS color strings and are parsed on access, so an
/// invalid configured color surfaces as an error rather than a panic.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke color of the piece outline.
    #[serde(default)]
    outline_color: Option<String>,

    /// Stroke width of the piece outline, in pixels.
    #[serde(default)]
    outline_width: Option<f32>,

    /// Stroke pattern of the piece outline (solid, dashed, dotted, or a
    /// custom dasharray).
    #[serde(default)]
    outline_style: Option<String>,

    /// Stroke color of dimension arrows.
    #[serde(default)]
    dimension_color: Option<String>,

    /// Stroke width of dimension arrows, in pixels.
    #[serde(default)]
    dimension_width: Option<f32>,

    /// Stroke pattern of dimension arrows.
    #[serde(default)]
    dimension_style: Option<String>,

    /// Font family for labels and info blocks.
    #[serde(default)]
    font_family: Option<String>,

    /// Font size for labels and info blocks, in points.
    #[serde(default)]
    font_size: Option<u16>,

    /// Background color behind info blocks.
    #[serde(default)]
    info_background: Option<String>,

    /// Opacity of the info block background (0.0 to 1.0).
    #[serde(default)]
    info_background_opacity: Option<f32>,

    /// Border color of the bottom legend block.
    #[serde(default)]
    legend_border: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed outline [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn outline_color(&self) -> Result<Color, String> {
        parse_color(self.outline_color.as_deref(), DEFAULT_OUTLINE_COLOR)
    }

    /// Returns the outline stroke width in pixels.
    pub fn outline_width(&self) -> f32 {
        self.outline_width.unwrap_or(DEFAULT_OUTLINE_WIDTH)
    }

    /// Returns the outline stroke pattern.
    pub fn outline_style(&self) -> StrokeStyle {
        parse_stroke_style(self.outline_style.as_deref())
    }

    /// Returns the parsed dimension arrow [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn dimension_color(&self) -> Result<Color, String> {
        parse_color(self.dimension_color.as_deref(), DEFAULT_DIMENSION_COLOR)
    }

    /// Returns the dimension stroke width in pixels.
    pub fn dimension_width(&self) -> f32 {
        self.dimension_width.unwrap_or(DEFAULT_DIMENSION_WIDTH)
    }

    /// Returns the dimension arrow stroke pattern.
    pub fn dimension_style(&self) -> StrokeStyle {
        parse_stroke_style(self.dimension_style.as_deref())
    }

    /// Returns the font family for labels.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Returns the font size for labels, in points.
    pub fn font_size(&self) -> u16 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Returns the info block background [`Color`] with its configured
    /// opacity applied.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn info_background(&self) -> Result<Color, String> {
        let opacity = self
            .info_background_opacity
            .unwrap_or(DEFAULT_INFO_BACKGROUND_OPACITY);
        parse_color(self.info_background.as_deref(), DEFAULT_INFO_BACKGROUND)
            .map(|color| color.with_alpha(opacity))
    }

    /// Returns the legend border [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn legend_border(&self) -> Result<Color, String> {
        parse_color(self.legend_border.as_deref(), DEFAULT_LEGEND_BORDER)
    }
}

/// Drawing projection configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DrawingConfig {
    /// Uniform scale in pixels per inch. The scale is the same on both
    /// axes, which is what keeps the drawing's aspect ratio equal.
    #[serde(default)]
    scale: Option<f32>,
}

impl DrawingConfig {
    /// Returns the scale in pixels per inch.
    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }
}

/// Default table source configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SourceConfig {
    /// Default table address (CSV path or URL) used when none is given on
    /// the command line.
    #[serde(default)]
    address: Option<String>,
}

impl SourceConfig {
    /// Returns the configured default table address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

fn parse_color(configured: Option<&str>, default: &str) -> Result<Color, String> {
    let value = configured.unwrap_or(default);
    Color::new(value).map_err(|err| format!("invalid color in config: {err}"))
}

fn parse_stroke_style(configured: Option<&str>) -> StrokeStyle {
    // Unrecognized values become custom dasharray patterns, so parsing
    // cannot fail.
    configured
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = AppConfig::default();

        assert_eq!(config.style().outline_color().unwrap().to_string(), "blue");
        assert_eq!(config.style().outline_width(), 2.0);
        assert_eq!(
            config.style().dimension_color().unwrap().to_string(),
            "black"
        );
        assert_eq!(config.style().dimension_width(), 1.5);
        assert_eq!(config.style().font_family(), "sans-serif");
        assert_eq!(config.style().font_size(), 10);
        assert_eq!(config.style().legend_border().unwrap().to_string(), "gray");
        assert_eq!(config.drawing().scale(), 40.0);
        assert!(config.source().address().is_none());
    }

    #[test]
    fn test_stroke_styles_default_to_solid() {
        let config = AppConfig::default();
        assert_eq!(config.style().outline_style(), StrokeStyle::Solid);
        assert_eq!(config.style().dimension_style(), StrokeStyle::Solid);

        let style = StyleConfig {
            dimension_style: Some("dashed".to_string()),
            ..StyleConfig::default()
        };
        assert_eq!(style.dimension_style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_info_background_carries_opacity() {
        let config = AppConfig::default();
        let background = config.style().info_background().unwrap();
        assert!((background.alpha() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let style = StyleConfig {
            outline_color: Some("not-a-color".to_string()),
            ..StyleConfig::default()
        };
        assert!(style.outline_color().is_err());
    }
}
