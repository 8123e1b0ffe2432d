//! Beveled edge shading along an outer boundary.
//!
//! Every edge of the outer polygon gets a strip `width` deep running along
//! the inside of that edge, with mitered ends so neighbouring strips meet on
//! the corner bisector. The polygon is treated as a closed cycle: the last
//! edge runs from the final vertex back to the first.

use crate::{color::Color, error::GeometryError, geometry::Point};

use super::outline::Polygon;

/// Colors for the shading strips.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadingColor {
    /// Every side uses the same color for stroke and fill.
    Uniform(Color),
    /// Per-side stroke and fill colors, indexed by side in outline order
    /// (top, right, bottom, left for a rectangle).
    PerSide {
        stroke: [Color; 4],
        fill: [Color; 4],
    },
}

impl ShadingColor {
    /// Returns the (stroke, fill) colors for `side`; indices wrap every four sides.
    pub fn for_side(&self, side: usize) -> (Color, Color) {
        match self {
            Self::Uniform(color) => (*color, *color),
            Self::PerSide { stroke, fill } => (stroke[side % 4], fill[side % 4]),
        }
    }
}

/// One beveled strip along one edge of the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingSegment {
    side: usize,
    points: [Point; 4],
}

impl ShadingSegment {
    /// Returns the index of the edge this strip runs along.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns edge start, edge end, inset end and inset start.
    pub fn points(&self) -> [Point; 4] {
        self.points
    }

    /// Renders the strip as an SVG `points` attribute value.
    pub fn to_points_string(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Unit normal of the edge `a -> b` pointing into the polygon.
fn inward_normal(a: Point, b: Point, clockwise: bool) -> Point {
    let direction = b.sub_point(a);
    let length = direction.hypot();
    if length == 0.0 {
        return Point::default();
    }
    let direction = direction.scale(1.0 / length);
    if clockwise {
        Point::new(-direction.y(), direction.x())
    } else {
        Point::new(direction.y(), -direction.x())
    }
}

/// Moves a corner inward so that both adjoining edges end up `width` away.
fn miter_offset(n_prev: Point, n_next: Point, width: f32) -> Point {
    let denominator = 1.0 + n_prev.dot(n_next);
    if denominator.abs() < f32::EPSILON {
        return n_next.scale(width);
    }
    n_prev.add_point(n_next).scale(width / denominator)
}

/// Computes one shading strip per edge of `outer`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidShadingWidth`] if `width` is negative or
/// not finite.
pub fn compute_shading(
    outer: &Polygon,
    width: f32,
) -> Result<Vec<ShadingSegment>, GeometryError> {
    if !width.is_finite() || width < 0.0 {
        return Err(GeometryError::InvalidShadingWidth(width));
    }

    let vertices = outer.vertices();
    let n = vertices.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let clockwise = outer.signed_area() >= 0.0;
    let normals: Vec<Point> = (0..n)
        .map(|i| inward_normal(vertices[i], vertices[(i + 1) % n], clockwise))
        .collect();
    let inset: Vec<Point> = (0..n)
        .map(|i| {
            let offset = miter_offset(normals[(i + n - 1) % n], normals[i], width);
            vertices[i].add_point(offset)
        })
        .collect();

    Ok((0..n)
        .map(|side| {
            let next = (side + 1) % n;
            ShadingSegment {
                side,
                points: [vertices[side], vertices[next], inset[next], inset[side]],
            }
        })
        .collect())
}
