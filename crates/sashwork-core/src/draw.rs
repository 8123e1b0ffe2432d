//! Visual definitions shared by every renderer.
//!
//! - [`StrokeDefinition`]: stroke color and width applied to outline paths
//! - [`RenderLayer`] / [`LayeredOutput`]: z-ordered collection of SVG nodes

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::StrokeDefinition;
