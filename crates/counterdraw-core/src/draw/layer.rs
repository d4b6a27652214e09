//! Layer-based rendering system for SVG output.
//!
//! Drawable elements specify which z-order layer their SVG nodes belong
//! to; the exporter renders layers bottom to top so that backgrounds stay
//! behind the outline and text stays on top of everything.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order; the `Ord`
/// derive uses declaration order, so the first variant renders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Opaque backgrounds behind info blocks - renders first
    Background,
    /// The piece outline rectangle
    Outline,
    /// Dimension arrows
    Dimension,
    /// Labels and info block text - renders last
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Outline => "outline",
            Self::Dimension => "dimension",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Nodes are collected in any order and emitted grouped by layer, bottom
/// to top, when rendered.
///
/// # Example
///
/// ```
/// # use counterdraw_core::draw::{RenderLayer, LayeredOutput};
/// # use svg::node::element::Rectangle;
/// let mut output = LayeredOutput::new();
///
/// output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
/// output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
///
/// let svg_nodes = output.render();
/// assert_eq!(svg_nodes.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a
    /// `data-layer` attribute identifying the layer. Layers are emitted
    /// bottom to top based on the `Ord` of [`RenderLayer`].
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
