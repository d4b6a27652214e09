//! SVG rendering for laid-out drawings.
//!
//! [`SvgRenderer`] projects the plan-space [`Drawing`] into an SVG
//! document. The projection scales uniformly (pixels per inch) and flips
//! the vertical axis; the uniform scale is what gives the drawing its
//! equal aspect ratio. No coordinate axes or tick marks are emitted, only
//! the drawing elements themselves.

use log::debug;
use svg::Document;

use counterdraw_core::{
    color::Color,
    draw::{LayeredOutput, StrokeDefinition, TextStyle, annotation},
    geometry::Projection,
};

use crate::{config::AppConfig, export::Error, layout::Drawing};

/// Renders drawings to SVG documents with styles resolved from
/// configuration.
pub struct SvgRenderer {
    outline_stroke: StrokeDefinition,
    dimension_stroke: StrokeDefinition,
    text: TextStyle,
    info_background: Color,
    legend_border: Color,
    scale: f32,
}

impl SvgRenderer {
    /// Creates a renderer, resolving and validating all configured styles
    /// up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] when a configured color cannot be
    /// parsed.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let style = config.style();

        let outline_color = style.outline_color().map_err(Error::InvalidStyle)?;
        let dimension_color = style.dimension_color().map_err(Error::InvalidStyle)?;
        let info_background = style.info_background().map_err(Error::InvalidStyle)?;
        let legend_border = style.legend_border().map_err(Error::InvalidStyle)?;

        let mut text = TextStyle::new();
        text.set_font_family(style.font_family());
        text.set_font_size(style.font_size());

        let mut outline_stroke = StrokeDefinition::new(outline_color, style.outline_width());
        outline_stroke.set_style(style.outline_style());
        let mut dimension_stroke = StrokeDefinition::new(dimension_color, style.dimension_width());
        dimension_stroke.set_style(style.dimension_style());

        Ok(Self {
            outline_stroke,
            dimension_stroke,
            text,
            info_background,
            legend_border,
            scale: config.drawing().scale(),
        })
    }

    /// Renders a drawing to an SVG document string.
    pub fn render(&self, drawing: &Drawing) -> String {
        let proj = Projection::new(drawing.view_bounds(), self.scale);
        let svg_size = proj.svg_size();

        debug!(
            width = svg_size.width(),
            height = svg_size.height();
            "Rendering SVG document"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        // Arrowhead markers, one pair per stroke color in use
        let marker_color = self.dimension_stroke.color();
        doc = doc.add(annotation::create_marker_definitions(
            [&marker_color].into_iter(),
        ));

        let mut output = LayeredOutput::new();

        output.merge(drawing.outline().render_to_layers(proj, &self.outline_stroke));

        for dimension in drawing.dimensions() {
            output.merge(dimension.render_to_layers(proj, &self.dimension_stroke, &self.text));
        }

        output.merge(drawing.top_info().render_to_layers(
            proj,
            &self.text,
            Some(&self.info_background),
            None,
        ));
        output.merge(drawing.legend().render_to_layers(
            proj,
            &self.text,
            Some(&self.info_background),
            Some(&self.legend_border),
        ));

        for node in output.render() {
            doc = doc.add(node);
        }

        doc.to_string()
    }
}
