//! Cumulative coordinates along one grid axis.

use crate::error::Axis;

/// Turns inter-division spacings into absolute grid line positions.
///
/// The result starts at `0`, adds each spacing in turn and ends with
/// `total_extent`, so it always holds `spacings.len() + 2` values. The extent
/// is appended as given; whether it is large enough is checked by
/// [`FrameSpec::validate`](crate::spec::FrameSpec::validate), not here.
///
/// ```
/// use sashwork_core::engine::build_cumulative_axis;
///
/// assert_eq!(build_cumulative_axis(&[600.0, 1200.0], 2400.0), vec![0.0, 600.0, 1800.0, 2400.0]);
/// assert_eq!(build_cumulative_axis(&[], 900.0), vec![0.0, 900.0]);
/// ```
pub fn build_cumulative_axis(spacings: &[f32], total_extent: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(spacings.len() + 2);
    positions.push(0.0);
    positions.extend(spacings.iter().scan(0.0_f32, |running, spacing| {
        *running += spacing;
        Some(*running)
    }));
    positions.push(total_extent);
    positions
}

/// The grid line positions of one axis, derived fresh for every computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeAxis {
    axis: Axis,
    positions: Vec<f32>,
}

impl CumulativeAxis {
    /// Builds the axis from its spacings and overall extent.
    pub fn build(axis: Axis, spacings: &[f32], total_extent: f32) -> Self {
        Self {
            axis,
            positions: build_cumulative_axis(spacings, total_extent),
        }
    }

    /// Returns which axis these positions belong to.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns all grid line positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Returns the position of grid line `index`, if it exists.
    pub fn position(&self, index: usize) -> Option<f32> {
        self.positions.get(index).copied()
    }

    /// Returns the number of grid lines.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the axis holds no grid lines.
    ///
    /// [`CumulativeAxis::build`] always emits the two boundary lines, so a
    /// built axis is never empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of cells between the grid lines.
    pub fn cells(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Returns true if grid line `index` is on the frame boundary.
    pub fn is_outer(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.positions.len()
    }
}
