//! Resolving grid areas into aperture rectangles.
//!
//! An area's raw rectangle runs between the grid lines it starts and ends on.
//! Each side is then moved inward by the thickness of the member it sits
//! against: the outer frame (`edge`) when it lies on the grid boundary, a
//! mullion or transom (`interior`) otherwise.

use crate::{
    error::{AreaKind, Axis, GeometryError},
    geometry::{Insets, Point, Rect},
    spec::Area,
};

use super::axis::CumulativeAxis;

/// Failure to resolve one area, before it is attributed to an input entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ApertureError {
    /// The area references a grid line past the end of the axis.
    OutOfBounds { axis: Axis, end: usize, cells: usize },
    /// The deductions exceed the raw span.
    Negative { axis: Axis, size: f32 },
}

impl ApertureError {
    /// Attributes the failure to entry `index` of the `kind` list.
    pub fn at(self, kind: AreaKind, index: usize) -> GeometryError {
        match self {
            Self::OutOfBounds { axis, end, cells } => GeometryError::AreaOutOfBounds {
                kind,
                index,
                axis,
                end,
                cells,
            },
            Self::Negative { axis, size } => GeometryError::NegativeAperture {
                kind,
                index,
                axis,
                size,
            },
        }
    }
}

/// Looks up the start and end positions of `area` along one axis.
fn span_on(area: Area, axis: &CumulativeAxis) -> Result<(f32, f32), ApertureError> {
    let start = area.start(axis.axis());
    let end = area.end(axis.axis());
    let out_of_bounds = || ApertureError::OutOfBounds {
        axis: axis.axis(),
        end,
        cells: axis.cells(),
    };

    let from = axis.position(start).ok_or_else(out_of_bounds)?;
    let to = axis.position(end).ok_or_else(out_of_bounds)?;
    Ok((from, to))
}

/// Computes the undeducted rectangle covered by `area`.
///
/// Coordinates are relative to the frame origin.
pub fn raw_rect(
    area: Area,
    x_axis: &CumulativeAxis,
    y_axis: &CumulativeAxis,
) -> Result<Rect, ApertureError> {
    let (x0, x1) = span_on(area, x_axis)?;
    let (y0, y1) = span_on(area, y_axis)?;
    Ok(Rect::from_corners(Point::new(x0, y0), Point::new(x1, y1)))
}

/// Selects the deduction for each side of `area`.
///
/// Sides on the first or last grid line of their axis use `edge`; every
/// other side uses `interior`.
pub fn deductions(
    area: Area,
    x_axis: &CumulativeAxis,
    y_axis: &CumulativeAxis,
    edge: f32,
    interior: f32,
) -> Insets {
    let pick = |axis: &CumulativeAxis, index: usize| {
        if axis.is_outer(index) { edge } else { interior }
    };

    Insets::new(
        pick(y_axis, area.start(Axis::Vertical)),
        pick(x_axis, area.end(Axis::Horizontal)),
        pick(y_axis, area.end(Axis::Vertical)),
        pick(x_axis, area.start(Axis::Horizontal)),
    )
}

/// Resolves `area` into its aperture rectangle.
///
/// A zero-size aperture is returned as is; a negative one is rejected.
///
/// ```
/// use sashwork_core::{engine::{CumulativeAxis, resolve_aperture}, error::Axis, spec::Area};
///
/// let x = CumulativeAxis::build(Axis::Horizontal, &[600.0, 1200.0], 2400.0);
/// let y = CumulativeAxis::build(Axis::Vertical, &[385.0], 900.0);
///
/// let aperture = resolve_aperture(Area::new(0, 0, 1, 2), &x, &y, 52.0, 35.0).unwrap();
/// assert_eq!((aperture.min_x(), aperture.min_y()), (52.0, 52.0));
/// assert_eq!((aperture.width(), aperture.height()), (513.0, 796.0));
/// ```
pub fn resolve_aperture(
    area: Area,
    x_axis: &CumulativeAxis,
    y_axis: &CumulativeAxis,
    edge: f32,
    interior: f32,
) -> Result<Rect, ApertureError> {
    let raw = raw_rect(area, x_axis, y_axis)?;
    let aperture = raw.shrink(deductions(area, x_axis, y_axis, edge, interior));

    if aperture.width() < 0.0 {
        return Err(ApertureError::Negative {
            axis: Axis::Horizontal,
            size: aperture.width(),
        });
    }
    if aperture.height() < 0.0 {
        return Err(ApertureError::Negative {
            axis: Axis::Vertical,
            size: aperture.height(),
        });
    }

    Ok(aperture)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Axes with 0..4 divisions and some slack before the extent.
    fn axis_strategy(axis: Axis) -> impl Strategy<Value = CumulativeAxis> {
        (prop::collection::vec(200.0f32..800.0, 0..4), 200.0f32..800.0).prop_map(
            move |(spacings, slack)| {
                let extent = spacings.iter().sum::<f32>() + slack;
                CumulativeAxis::build(axis, &spacings, extent)
            },
        )
    }

    /// An area fully inside the grid, given as fractions of the cell count.
    fn area_for(x: &CumulativeAxis, y: &CumulativeAxis, picks: (usize, usize, usize, usize)) -> Area {
        let (sx, sy, wx, wy) = picks;
        let start_x = sx % x.cells();
        let start_y = sy % y.cells();
        let span_x = 1 + wx % (x.cells() - start_x);
        let span_y = 1 + wy % (y.cells() - start_y);
        Area::new(start_x, start_y, span_x, span_y)
    }

    fn check_aperture_within_raw(
        x: &CumulativeAxis,
        y: &CumulativeAxis,
        area: Area,
        edge: f32,
        interior: f32,
    ) -> Result<(), TestCaseError> {
        let raw = raw_rect(area, x, y).map_err(|err| TestCaseError::fail(format!("{err:?}")))?;
        match resolve_aperture(area, x, y, edge, interior) {
            Ok(aperture) => prop_assert!(
                raw.contains(&aperture),
                "aperture {aperture:?} escapes raw rect {raw:?}"
            ),
            Err(ApertureError::Negative { .. }) => {}
            Err(err) => prop_assert!(false, "unexpected error {err:?}"),
        }
        Ok(())
    }

    fn check_side_selection(
        x: &CumulativeAxis,
        y: &CumulativeAxis,
        area: Area,
    ) -> Result<(), TestCaseError> {
        let insets = deductions(area, x, y, 52.0, 35.0);

        let expect = |outer: bool| if outer { 52.0 } else { 35.0 };
        prop_assert_eq!(insets.left(), expect(area.start(Axis::Horizontal) == 0));
        prop_assert_eq!(insets.top(), expect(area.start(Axis::Vertical) == 0));
        prop_assert_eq!(
            insets.right(),
            expect(area.end(Axis::Horizontal) == x.len() - 1)
        );
        prop_assert_eq!(
            insets.bottom(),
            expect(area.end(Axis::Vertical) == y.len() - 1)
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn aperture_within_raw_rect(
            x in axis_strategy(Axis::Horizontal),
            y in axis_strategy(Axis::Vertical),
            picks in (0usize..8, 0usize..8, 0usize..8, 0usize..8),
            edge in 0.0f32..100.0,
            interior in 0.0f32..100.0,
        ) {
            let area = area_for(&x, &y, picks);
            check_aperture_within_raw(&x, &y, area, edge, interior)?;
        }

        #[test]
        fn outer_sides_use_edge_thickness(
            x in axis_strategy(Axis::Horizontal),
            y in axis_strategy(Axis::Vertical),
            picks in (0usize..8, 0usize..8, 0usize..8, 0usize..8),
        ) {
            let area = area_for(&x, &y, picks);
            check_side_selection(&x, &y, area)?;
        }
    }
}
