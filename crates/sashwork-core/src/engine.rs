//! The frame geometry engine.
//!
//! Every function here is a pure computation over its arguments: the same
//! [`FrameSpec`] and [`Profile`] always produce the same geometry, and
//! nothing is cached between calls.
//!
//! # Pipeline
//!
//! 1. [`build_cumulative_axis`] turns each axis' division spacings into grid
//!    line positions.
//! 2. [`resolve_aperture`] maps every area onto those lines and shrinks it by
//!    the edge or interior thickness on each side.
//! 3. [`compose_outline`] joins the outer rectangle and the apertures into a
//!    single even-odd [`RenderableOutline`].
//! 4. [`expand_sashes`] derives a frame spec per sash and runs steps 1 to 3 on
//!    it again.
//!
//! [`compute_frame`] runs the whole thing; [`compute_shading`] is an optional
//! decoration on top of the primary outline.
//!
//! ```
//! use sashwork_core::{
//!     engine::compute_frame,
//!     geometry::Size,
//!     spec::{Area, Divisions, FrameSpec, Profile},
//! };
//!
//! let spec = FrameSpec::new(
//!     Size::new(2400.0, 900.0),
//!     Divisions::new(vec![600.0, 1200.0], vec![385.0]),
//!     vec![Area::new(0, 0, 1, 2), Area::new(1, 0, 1, 1), Area::new(1, 1, 1, 1), Area::new(2, 0, 1, 2)],
//! )
//! .with_sashes(vec![Area::new(0, 0, 1, 2)]);
//!
//! let geometry = compute_frame(&spec, &Profile::default()).unwrap();
//! assert_eq!(geometry.outline().holes().len(), 4);
//! assert_eq!(geometry.sashes().len(), 1);
//! ```

mod aperture;
mod axis;
mod outline;
mod sash;
mod shading;

pub use aperture::{ApertureError, deductions, raw_rect, resolve_aperture};
pub use axis::{CumulativeAxis, build_cumulative_axis};
pub use outline::{Polygon, RenderableOutline, compose_outline};
pub use sash::{derive_sash_spec, expand_sashes};
pub use shading::{ShadingColor, ShadingSegment, compute_shading};

use log::{debug, trace};

use crate::{
    error::{AreaKind, Axis, GeometryError},
    geometry::Rect,
    spec::{FrameSpec, Profile},
};

/// Everything computed for one frame: the primary outline and one outline
/// per sash.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    frame_rect: Rect,
    outline: RenderableOutline,
    sashes: Vec<RenderableOutline>,
}

impl FrameGeometry {
    /// Returns the outer rectangle of the frame, offset applied.
    pub fn frame_rect(&self) -> Rect {
        self.frame_rect
    }

    /// Returns the primary outline.
    pub fn outline(&self) -> &RenderableOutline {
        &self.outline
    }

    /// Returns the sash outlines in sash declaration order.
    pub fn sashes(&self) -> &[RenderableOutline] {
        &self.sashes
    }

    /// Iterates over the primary outline followed by every sash outline.
    pub fn outlines(&self) -> impl Iterator<Item = &RenderableOutline> {
        std::iter::once(&self.outline).chain(self.sashes.iter())
    }
}

/// Computes the outline of one frame spec: its outer boundary with every
/// area cut out.
///
/// The spec is validated first; no geometry is produced for invalid input.
pub fn compute_outline(
    spec: &FrameSpec,
    profile: &Profile,
) -> Result<RenderableOutline, GeometryError> {
    spec.validate(profile)?;

    let divisions = spec.divisions();
    let x_axis = CumulativeAxis::build(
        Axis::Horizontal,
        divisions.spacings(Axis::Horizontal),
        spec.extent(Axis::Horizontal),
    );
    let y_axis = CumulativeAxis::build(
        Axis::Vertical,
        divisions.spacings(Axis::Vertical),
        spec.extent(Axis::Vertical),
    );
    trace!(x:? = x_axis.positions(), y:? = y_axis.positions(); "Built cumulative axes");

    let offset = spec.offset();
    let apertures = spec
        .areas()
        .iter()
        .enumerate()
        .map(|(index, &area)| {
            resolve_aperture(area, &x_axis, &y_axis, profile.edge(), profile.interior())
                .map(|aperture| aperture.translate(offset))
                .map_err(|err| err.at(AreaKind::Area, index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let outer = Rect::new_from_top_left(offset, spec.frame_dims());
    debug!(apertures = apertures.len(); "Resolved apertures");

    Ok(compose_outline(outer, &apertures))
}

/// Computes the primary outline and all sash outlines for `spec`.
pub fn compute_frame(spec: &FrameSpec, profile: &Profile) -> Result<FrameGeometry, GeometryError> {
    let outline = compute_outline(spec, profile)?;
    let sashes = expand_sashes(spec, profile)?;

    Ok(FrameGeometry {
        frame_rect: Rect::new_from_top_left(spec.offset(), spec.frame_dims()),
        outline,
        sashes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Point, Size},
        spec::{Area, Divisions},
    };

    fn example_spec() -> FrameSpec {
        FrameSpec::new(
            Size::new(2400.0, 900.0),
            Divisions::new(vec![600.0, 1200.0], vec![385.0]),
            vec![
                Area::new(0, 0, 1, 2),
                Area::new(1, 0, 1, 1),
                Area::new(1, 1, 1, 1),
                Area::new(2, 0, 1, 2),
            ],
        )
    }

    #[test]
    fn test_compute_outline_example() {
        let outline = compute_outline(&example_spec(), &Profile::default()).unwrap();

        assert_eq!(
            outline.to_path_string(),
            "M0 0L2400 0L2400 900L0 900z\
             M52 52L565 52L565 848L52 848z\
             M635 52L1765 52L1765 350L635 350z\
             M635 420L1765 420L1765 848L635 848z\
             M1835 52L2348 52L2348 848L1835 848z"
        );
    }

    #[test]
    fn test_compute_outline_applies_offset() {
        let spec = example_spec().with_offset(Point::new(-100.0, 25.0));
        let outline = compute_outline(&spec, &Profile::default()).unwrap();

        assert_eq!(outline.outer().vertices()[0], Point::new(-100.0, 25.0));
        assert_eq!(outline.holes()[0].vertices()[0], Point::new(-48.0, 77.0));
    }

    #[test]
    fn test_compute_outline_rejects_malformed_reference() {
        let spec = FrameSpec::new(
            Size::new(2400.0, 900.0),
            Divisions::new(vec![600.0, 1200.0], vec![385.0]),
            vec![Area::new(0, 0, 1, 3)],
        );

        assert_eq!(
            compute_outline(&spec, &Profile::default()),
            Err(GeometryError::AreaOutOfBounds {
                kind: AreaKind::Area,
                index: 0,
                axis: Axis::Vertical,
                end: 3,
                cells: 2,
            })
        );
    }

    #[test]
    fn test_compute_outline_rejects_zero_span() {
        let spec = FrameSpec::new(
            Size::new(2400.0, 900.0),
            Divisions::none(),
            vec![Area::new(0, 0, 0, 1)],
        );

        assert!(matches!(
            compute_outline(&spec, &Profile::default()),
            Err(GeometryError::EmptySpan { .. })
        ));
    }

    #[test]
    fn test_compute_outline_rejects_negative_aperture() {
        let spec = FrameSpec::new(
            Size::new(1000.0, 80.0),
            Divisions::none(),
            vec![Area::full()],
        );

        assert_eq!(
            compute_outline(&spec, &Profile::default()),
            Err(GeometryError::NegativeAperture {
                kind: AreaKind::Area,
                index: 0,
                axis: Axis::Vertical,
                size: -24.0,
            })
        );
    }

    #[test]
    fn test_compute_frame() {
        let spec = example_spec().with_sashes(vec![
            Area::new(0, 0, 1, 2),
            Area::new(1, 0, 1, 1),
            Area::new(2, 0, 1, 2),
        ]);
        let geometry = compute_frame(&spec, &Profile::default()).unwrap();

        assert_eq!(
            geometry.frame_rect(),
            Rect::from_corners(Point::new(0.0, 0.0), Point::new(2400.0, 900.0))
        );
        assert_eq!(geometry.outline().holes().len(), 4);
        assert_eq!(geometry.sashes().len(), 3);
        assert_eq!(geometry.outlines().count(), 4);
        assert_eq!(geometry.outlines().next(), Some(geometry.outline()));
    }

    #[test]
    fn test_compute_frame_without_sashes() {
        let geometry = compute_frame(&example_spec(), &Profile::default()).unwrap();
        assert!(geometry.sashes().is_empty());
    }

    #[test]
    fn test_compute_frame_is_deterministic() {
        let spec = example_spec().with_sashes(vec![Area::new(1, 1, 1, 1)]);
        let profile = Profile::default();

        assert_eq!(
            compute_frame(&spec, &profile).unwrap(),
            compute_frame(&spec, &profile).unwrap()
        );
    }

    #[test]
    fn test_custom_profile() {
        let spec = FrameSpec::new(Size::new(1000.0, 500.0), Divisions::none(), vec![Area::full()]);
        let outline = compute_outline(&spec, &Profile::new(70.0, 35.0, 20.0)).unwrap();

        assert_eq!(
            outline.holes()[0],
            Polygon::from_rect(Rect::from_corners(
                Point::new(70.0, 70.0),
                Point::new(930.0, 430.0)
            ))
        );
    }
}
