//! Layer-based rendering system for SVG output.
//!
//! Renderers push SVG nodes into a [`LayeredOutput`] tagged with a
//! [`RenderLayer`]; [`LayeredOutput::render`] then emits one `<g>` per
//! non-empty layer in z-order.
//!
//! # Example
//!
//! ```
//! # use sashwork_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Path;
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Sash, Box::new(Path::new()));
//! output.add_to_layer(RenderLayer::Frame, Box::new(Path::new()));
//!
//! // Frame renders before Sash regardless of insertion order
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill behind the whole drawing
    Background,
    /// The primary frame outline with its apertures
    Frame,
    /// Beveled edge shading strips over the outer boundary
    Shading,
    /// Independent sash outlines
    Sash,
}

impl RenderLayer {
    /// Returns the class name used for this layer's group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Frame => "outerframe",
            Self::Shading => "shading",
            Self::Sash => "sashes",
        }
    }
}

/// SVG nodes grouped by rendering layer.
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
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element whose `class` attribute
    /// names the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("class", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("class", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Path;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Sash, Box::new(Path::new().set("id", "a")));
        output.add_to_layer(RenderLayer::Frame, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Sash, Box::new(Path::new().set("id", "b")));
        assert!(!output.is_empty());

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 2);
        let sashes = &rendered[1];
        assert!(sashes.contains("class=\"sashes\""));
        let first = sashes.find("id=\"a\"").unwrap();
        let second = sashes.find("id=\"b\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_layered_output_render_order() {
        let mut output = LayeredOutput::new();

        output.add_to_layer(RenderLayer::Sash, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Shading, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Frame, Box::new(Path::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("class=\"outerframe\""));
        assert!(rendered[1].contains("class=\"shading\""));
        assert!(rendered[2].contains("class=\"sashes\""));
    }
}
