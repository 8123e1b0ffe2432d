//! Stroke definition for frame outlines.
//!
//! A frame drawing uses a single stroke style: one color and one width.
//! Use the [`apply_stroke!`](crate::apply_stroke!) macro to apply it to SVG
//! elements.
//!
//! ```
//! use sashwork_core::draw::StrokeDefinition;
//! use sashwork_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#bada55").unwrap(), 2.0);
//! let path = svg_element::Path::new().set("d", "M0 0L10 0L10 10z");
//!
//! let path = sashwork_core::apply_stroke!(path, &stroke);
//! ```

use crate::color::Color;

/// A stroke definition for rendering frame outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    /// The accent outline stroke: `#bada55`, 2 units wide.
    fn default() -> Self {
        Self {
            color: Color::new("#bada55").expect("'#bada55' is a valid CSS color"),
            width: 2.0,
        }
    }
}

/// Apply stroke color, opacity and width to an SVG element.
///
/// # Examples
///
/// ```
/// use sashwork_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let polygon = svg_element::Polygon::new().set("points", "0,0 10,0 10,10");
///
/// let polygon = sashwork_core::apply_stroke!(polygon, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
