//! Validation errors raised at the geometry engine boundary.
//!
//! Every variant identifies the offending input precisely (which list, which
//! entry, which axis) so a host can point the user at the bad value.

use std::fmt;

use thiserror::Error;

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis, divided by mullions.
    Horizontal,
    /// The y axis, divided by transoms.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Which list of a frame specification an area came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaKind {
    Area,
    Sash,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area => write!(f, "area"),
            Self::Sash => write!(f, "sash"),
        }
    }
}

/// Errors produced when a frame specification cannot be turned into geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("frame {axis} dimension must be a positive number, got {value}")]
    InvalidFrameDimension { axis: Axis, value: f32 },

    #[error("frame offset must be finite, got ({x}, {y})")]
    InvalidOffset { x: f32, y: f32 },

    #[error("{axis} division {index} must be a positive number, got {value}")]
    InvalidSpacing { axis: Axis, index: usize, value: f32 },

    #[error("{axis} divisions add up to {total}, exceeding the frame extent {extent}")]
    DivisionsExceedExtent { axis: Axis, total: f32, extent: f32 },

    #[error("{kind} {index} has a zero {axis} span")]
    EmptySpan {
        kind: AreaKind,
        index: usize,
        axis: Axis,
    },

    #[error("{kind} {index} ends at {axis} grid line {end}, but the grid only has {cells} cells on that axis")]
    AreaOutOfBounds {
        kind: AreaKind,
        index: usize,
        axis: Axis,
        end: usize,
        cells: usize,
    },

    #[error("{kind} {index} resolves to a negative {axis} size ({size}) after frame deductions")]
    NegativeAperture {
        kind: AreaKind,
        index: usize,
        axis: Axis,
        size: f32,
    },

    #[error("{name} thickness must be a finite, non-negative number, got {value}")]
    InvalidThickness { name: &'static str, value: f32 },

    #[error("shading width must be a finite, non-negative number, got {0}")]
    InvalidShadingWidth(f32),
}

impl GeometryError {
    /// Rewrites the area reference of an error to point at entry `index` of
    /// list `kind`.
    ///
    /// Used when an error raised inside a derived frame must name the entry
    /// of the parent it was derived from. Variants without an area reference
    /// are returned unchanged.
    pub fn attributed_to(self, kind: AreaKind, index: usize) -> Self {
        match self {
            Self::EmptySpan { axis, .. } => Self::EmptySpan { kind, index, axis },
            Self::AreaOutOfBounds {
                axis, end, cells, ..
            } => Self::AreaOutOfBounds {
                kind,
                index,
                axis,
                end,
                cells,
            },
            Self::NegativeAperture { axis, size, .. } => Self::NegativeAperture {
                kind,
                index,
                axis,
                size,
            },
            other => other,
        }
    }

    /// A short hint on how to fix the input, for diagnostic output.
    pub fn help(&self) -> &'static str {
        match self {
            Self::InvalidFrameDimension { .. } => "frame_dims must hold two positive numbers",
            Self::InvalidOffset { .. } => "offset must hold two finite numbers",
            Self::InvalidSpacing { .. } => "division spacings are bar-to-bar distances and must be positive",
            Self::DivisionsExceedExtent { .. } => {
                "reduce the division spacings or enlarge the frame"
            }
            Self::EmptySpan { .. } => "every area must span at least one cell on each axis",
            Self::AreaOutOfBounds { .. } => {
                "start cell plus span must not exceed the number of divisions plus one"
            }
            Self::NegativeAperture { .. } => {
                "the cell is narrower than the frame members around it; widen it or thin the profile"
            }
            Self::InvalidThickness { .. } => "profile thicknesses must be zero or positive",
            Self::InvalidShadingWidth(_) => "shading width must be zero or positive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message_names_area_and_axis() {
        let err = GeometryError::AreaOutOfBounds {
            kind: AreaKind::Sash,
            index: 2,
            axis: Axis::Horizontal,
            end: 4,
            cells: 3,
        };
        assert_eq!(
            err.to_string(),
            "sash 2 ends at horizontal grid line 4, but the grid only has 3 cells on that axis"
        );
    }

    #[test]
    fn test_negative_aperture_message() {
        let err = GeometryError::NegativeAperture {
            kind: AreaKind::Area,
            index: 0,
            axis: Axis::Vertical,
            size: -4.0,
        };
        assert_eq!(
            err.to_string(),
            "area 0 resolves to a negative vertical size (-4) after frame deductions"
        );
        assert!(!err.help().is_empty());
    }

    #[test]
    fn test_attributed_to_rewrites_area_reference() {
        let empty = GeometryError::EmptySpan {
            kind: AreaKind::Area,
            index: 0,
            axis: Axis::Vertical,
        };
        assert_eq!(
            empty.attributed_to(AreaKind::Sash, 4),
            GeometryError::EmptySpan {
                kind: AreaKind::Sash,
                index: 4,
                axis: Axis::Vertical,
            }
        );

        let out_of_bounds = GeometryError::AreaOutOfBounds {
            kind: AreaKind::Area,
            index: 0,
            axis: Axis::Horizontal,
            end: 2,
            cells: 1,
        };
        assert_eq!(
            out_of_bounds.attributed_to(AreaKind::Sash, 1),
            GeometryError::AreaOutOfBounds {
                kind: AreaKind::Sash,
                index: 1,
                axis: Axis::Horizontal,
                end: 2,
                cells: 1,
            }
        );

        let negative = GeometryError::NegativeAperture {
            kind: AreaKind::Area,
            index: 0,
            axis: Axis::Horizontal,
            size: -3.0,
        };
        assert_eq!(
            negative.attributed_to(AreaKind::Sash, 2),
            GeometryError::NegativeAperture {
                kind: AreaKind::Sash,
                index: 2,
                axis: Axis::Horizontal,
                size: -3.0,
            }
        );
    }

    #[test]
    fn test_attributed_to_keeps_frame_level_errors() {
        let err = GeometryError::InvalidFrameDimension {
            axis: Axis::Vertical,
            value: 0.0,
        };
        assert_eq!(err.clone().attributed_to(AreaKind::Sash, 1), err);
    }
}
