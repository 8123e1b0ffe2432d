//! Closed polygons and the even-odd outlines built from them.

use std::fmt::Write as _;

use svg::node::element::path::Data;

use crate::geometry::{Point, Rect};

/// A closed polygon; the last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The four corners of `rect`, clockwise from its top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.corners().to_vec())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace signed area. Positive for clockwise traversal on screen
    /// (y pointing down).
    pub fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x() * b.y() - b.x() * a.y()
            })
            .sum::<f32>()
            / 2.0
    }

    /// Appends move/line/close commands for this polygon to `data`.
    fn append_to(&self, data: Data) -> Data {
        let Some((first, rest)) = self.vertices.split_first() else {
            return data;
        };

        rest.iter()
            .fold(data.move_to((first.x(), first.y())), |data, vertex| {
                data.line_to((vertex.x(), vertex.y()))
            })
            .close()
    }

    /// Appends this polygon in compact `M x y L x y ... z` form.
    fn write_path(&self, out: &mut String) {
        if self.vertices.is_empty() {
            return;
        }
        for (index, vertex) in self.vertices.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail
            let _ = write!(out, "{command}{} {}", vertex.x(), vertex.y());
        }
        out.push('z');
    }
}

/// An outer boundary followed by zero or more hole boundaries.
///
/// Meant to be drawn as a single path with the even-odd fill rule, so every
/// hole renders as a cut-out.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableOutline {
    polygons: Vec<Polygon>,
}

impl RenderableOutline {
    /// Returns the outer boundary.
    pub fn outer(&self) -> &Polygon {
        &self.polygons[0]
    }

    /// Returns the hole boundaries in paint order.
    pub fn holes(&self) -> &[Polygon] {
        &self.polygons[1..]
    }

    /// Returns every polygon, outer boundary first.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Builds SVG path data for the whole outline.
    pub fn to_path_data(&self) -> Data {
        self.polygons
            .iter()
            .fold(Data::new(), |data, polygon| polygon.append_to(data))
    }

    /// Renders the outline as a compact path-data string.
    ///
    /// ```
    /// use sashwork_core::{engine::compose_outline, geometry::{Point, Rect}};
    ///
    /// let outer = Rect::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
    /// let hole = Rect::from_corners(Point::new(10.0, 10.0), Point::new(90.0, 40.0));
    ///
    /// assert_eq!(
    ///     compose_outline(outer, &[hole]).to_path_string(),
    ///     "M0 0L100 0L100 50L0 50zM10 10L90 10L90 40L10 40z"
    /// );
    /// ```
    pub fn to_path_string(&self) -> String {
        let mut out = String::new();
        for polygon in &self.polygons {
            polygon.write_path(&mut out);
        }
        out
    }
}

/// Combines the outer rectangle and the aperture rectangles into one outline.
///
/// The outer polygon always comes first; apertures follow in the given order.
pub fn compose_outline(outer: Rect, apertures: &[Rect]) -> RenderableOutline {
    let polygons = std::iter::once(outer)
        .chain(apertures.iter().copied())
        .map(Polygon::from_rect)
        .collect();

    RenderableOutline { polygons }
}
