//! The parametric frame description consumed by the engine.
//!
//! A [`FrameSpec`] is immutable input: the engine never mutates it and never
//! caches anything derived from it. Updates such as a resized frame produce a
//! new value ([`FrameSpec::with_frame_dims`]).
//!
//! All types deserialize from the compact tuple notation used in frame files:
//!
//! ```
//! use sashwork_core::spec::FrameSpec;
//!
//! let spec: FrameSpec = toml::from_str(r#"
//!     frame_dims = [2400, 900]
//!     divisions = [[600, 1200], [385]]
//!     areas = [[0, 0, 1, 2], [1, 0, 1, 1], [1, 1, 1, 1], [2, 0, 1, 2]]
//!     sashes = [[0, 0, 1, 2]]
//! "#).unwrap();
//!
//! assert_eq!(spec.areas().len(), 4);
//! assert_eq!(spec.sashes().len(), 1);
//! ```

use serde::Deserialize;

use crate::{
    error::{AreaKind, Axis, GeometryError},
    geometry::{Point, Size},
};

/// A rectangular region of the grid, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[usize; 4]")]
pub struct Area {
    start_x: usize,
    start_y: usize,
    span_x: usize,
    span_y: usize,
}

impl Area {
    /// Creates an area starting at cell (`start_x`, `start_y`) and spanning
    /// `span_x` × `span_y` cells.
    pub fn new(start_x: usize, start_y: usize, span_x: usize, span_y: usize) -> Self {
        Self {
            start_x,
            start_y,
            span_x,
            span_y,
        }
    }

    /// The single area covering a grid with no divisions.
    pub fn full() -> Self {
        Self::new(0, 0, 1, 1)
    }

    /// Returns the first cell index along `axis`.
    pub fn start(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.start_x,
            Axis::Vertical => self.start_y,
        }
    }

    /// Returns the number of cells spanned along `axis`.
    pub fn span(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.span_x,
            Axis::Vertical => self.span_y,
        }
    }

    /// Returns the grid line index where the area ends along `axis`.
    pub fn end(self, axis: Axis) -> usize {
        self.start(axis).saturating_add(self.span(axis))
    }

    /// Checks that the area spans at least one cell and stays inside a grid
    /// of `cells_x` × `cells_y` cells.
    pub fn validate(
        self,
        kind: AreaKind,
        index: usize,
        cells_x: usize,
        cells_y: usize,
    ) -> Result<(), GeometryError> {
        for (axis, cells) in [(Axis::Horizontal, cells_x), (Axis::Vertical, cells_y)] {
            if self.span(axis) == 0 {
                return Err(GeometryError::EmptySpan { kind, index, axis });
            }
            let end = self.end(axis);
            if end > cells {
                return Err(GeometryError::AreaOutOfBounds {
                    kind,
                    index,
                    axis,
                    end,
                    cells,
                });
            }
        }
        Ok(())
    }
}

impl From<[usize; 4]> for Area {
    fn from([start_x, start_y, span_x, span_y]: [usize; 4]) -> Self {
        Self::new(start_x, start_y, span_x, span_y)
    }
}

/// Inter-division spacings for both axes.
///
/// An empty list means the axis has no internal division and therefore a
/// single cell.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "(Vec<f32>, Vec<f32>)")]
pub struct Divisions {
    x: Vec<f32>,
    y: Vec<f32>,
}

impl Divisions {
    /// Creates divisions from mullion (`x`) and transom (`y`) spacings.
    pub fn new(x: Vec<f32>, y: Vec<f32>) -> Self {
        Self { x, y }
    }

    /// No internal division on either axis.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the spacings along `axis`.
    pub fn spacings(&self, axis: Axis) -> &[f32] {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }

    /// Returns the number of grid cells along `axis`.
    pub fn cells(&self, axis: Axis) -> usize {
        self.spacings(axis).len() + 1
    }

    /// Returns true when neither axis is divided.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

impl From<(Vec<f32>, Vec<f32>)> for Divisions {
    fn from((x, y): (Vec<f32>, Vec<f32>)) -> Self {
        Self::new(x, y)
    }
}

/// Material thicknesses deducted when resolving apertures.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Outer frame thickness, deducted on sides touching the grid boundary.
    edge: f32,
    /// Mullion/transom thickness, deducted on sides touching a division.
    interior: f32,
    /// Sash frame thickness, inset from the sash opening on every side.
    sash_margin: f32,
}

impl Profile {
    pub fn new(edge: f32, interior: f32, sash_margin: f32) -> Self {
        Self {
            edge,
            interior,
            sash_margin,
        }
    }

    /// Returns the outer frame thickness.
    pub fn edge(&self) -> f32 {
        self.edge
    }

    /// Returns the mullion/transom thickness.
    pub fn interior(&self) -> f32 {
        self.interior
    }

    /// Returns the sash frame thickness.
    pub fn sash_margin(&self) -> f32 {
        self.sash_margin
    }

    /// Checks that every thickness is finite and non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in [
            ("edge", self.edge),
            ("interior", self.interior),
            ("sash margin", self.sash_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidThickness { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            edge: 52.0,
            interior: 35.0,
            sash_margin: 20.0,
        }
    }
}

/// The root parametric description of one frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameSpec {
    frame_dims: Size,
    #[serde(default)]
    offset: Point,
    #[serde(default)]
    divisions: Divisions,
    areas: Vec<Area>,
    #[serde(default)]
    sashes: Option<Vec<Area>>,
}

impl FrameSpec {
    /// Creates a frame at the origin with no sashes.
    pub fn new(frame_dims: Size, divisions: Divisions, areas: Vec<Area>) -> Self {
        Self {
            frame_dims,
            offset: Point::default(),
            divisions,
            areas,
            sashes: None,
        }
    }

    /// Returns a copy translated to `offset`.
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a copy carrying the given sash areas.
    pub fn with_sashes(mut self, sashes: Vec<Area>) -> Self {
        self.sashes = Some(sashes);
        self
    }

    /// Returns a copy with the overall size replaced.
    pub fn with_frame_dims(&self, width: f32, height: f32) -> Self {
        Self {
            frame_dims: Size::new(width, height),
            ..self.clone()
        }
    }

    /// Returns the overall outer size.
    pub fn frame_dims(&self) -> Size {
        self.frame_dims
    }

    /// Returns the translation applied to the whole frame.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the division spacings.
    pub fn divisions(&self) -> &Divisions {
        &self.divisions
    }

    /// Returns the areas in paint order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Returns the sash areas; empty when none were declared.
    pub fn sashes(&self) -> &[Area] {
        self.sashes.as_deref().unwrap_or_default()
    }

    /// Returns the overall extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.frame_dims.width(),
            Axis::Vertical => self.frame_dims.height(),
        }
    }

    /// Validates the specification against `profile`.
    ///
    /// Checks the frame size, offset, division spacings and every area and
    /// sash reference. Aperture sizes are checked later, when they are
    /// resolved.
    pub fn validate(&self, profile: &Profile) -> Result<(), GeometryError> {
        profile.validate()?;

        if !self.offset.is_finite() {
            return Err(GeometryError::InvalidOffset {
                x: self.offset.x(),
                y: self.offset.y(),
            });
        }

        for axis in [Axis::Horizontal, Axis::Vertical] {
            let extent = self.extent(axis);
            if !extent.is_finite() || extent <= 0.0 {
                return Err(GeometryError::InvalidFrameDimension {
                    axis,
                    value: extent,
                });
            }

            let spacings = self.divisions.spacings(axis);
            if let Some((index, &value)) = spacings
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite() || **value <= 0.0)
            {
                return Err(GeometryError::InvalidSpacing { axis, index, value });
            }

            let total: f32 = spacings.iter().sum();
            if total > extent {
                return Err(GeometryError::DivisionsExceedExtent {
                    axis,
                    total,
                    extent,
                });
            }
        }

        let cells_x = self.divisions.cells(Axis::Horizontal);
        let cells_y = self.divisions.cells(Axis::Vertical);
        for (index, area) in self.areas.iter().enumerate() {
            area.validate(AreaKind::Area, index, cells_x, cells_y)?;
        }
        for (index, sash) in self.sashes().iter().enumerate() {
            sash.validate(AreaKind::Sash, index, cells_x, cells_y)?;
        }

        Ok(())
    }
}
