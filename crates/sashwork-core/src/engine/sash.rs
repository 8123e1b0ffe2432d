//! Sash sub-frames.
//!
//! A sash is carved from its parent's grid, then treated as a frame of its
//! own: it gets a fresh [`FrameSpec`] with no divisions and a single
//! full-span area, and goes through the same outline pipeline.

use log::{debug, trace};

use crate::{
    error::{AreaKind, Axis, GeometryError},
    geometry::{Point, Size},
    spec::{Area, Divisions, FrameSpec, Profile},
};

use super::{
    aperture::raw_rect,
    axis::CumulativeAxis,
    compute_outline,
    outline::RenderableOutline,
};

/// Derives the self-contained frame spec for sash `index` of `parent`.
///
/// The sash opening is the raw grid rectangle of `sash` (no frame
/// deductions), translated by the parent's offset and inset by the profile's
/// sash margin on every side.
///
/// # Errors
///
/// Returns the parent's validation error if `parent` is not a valid frame,
/// [`GeometryError::EmptySpan`] or [`GeometryError::AreaOutOfBounds`] if
/// `sash` does not fit the parent's grid, and
/// [`GeometryError::NegativeAperture`] if the margins leave no positive size.
pub fn derive_sash_spec(
    parent: &FrameSpec,
    sash: Area,
    index: usize,
    profile: &Profile,
) -> Result<FrameSpec, GeometryError> {
    parent.validate(profile)?;

    let divisions = parent.divisions();
    sash.validate(
        AreaKind::Sash,
        index,
        divisions.cells(Axis::Horizontal),
        divisions.cells(Axis::Vertical),
    )?;

    sash_spec(parent, sash, index, profile)
}

/// Computes one independent outline per sash of `spec`, in declaration order.
///
/// A spec without sashes yields an empty list. Errors raised while resolving
/// a sash's own aperture name that sash.
pub fn expand_sashes(
    spec: &FrameSpec,
    profile: &Profile,
) -> Result<Vec<RenderableOutline>, GeometryError> {
    spec.validate(profile)?;
    debug!(sash_count = spec.sashes().len(); "Expanding sashes");

    spec.sashes()
        .iter()
        .enumerate()
        .map(|(index, &sash)| {
            let sash_spec = sash_spec(spec, sash, index, profile)?;
            compute_outline(&sash_spec, profile)
                .map_err(|err| err.attributed_to(AreaKind::Sash, index))
        })
        .collect()
}

/// Builds the sash spec, assuming `parent` and `sash` are already validated.
fn sash_spec(
    parent: &FrameSpec,
    sash: Area,
    index: usize,
    profile: &Profile,
) -> Result<FrameSpec, GeometryError> {
    let divisions = parent.divisions();
    let x_axis = CumulativeAxis::build(
        Axis::Horizontal,
        divisions.spacings(Axis::Horizontal),
        parent.extent(Axis::Horizontal),
    );
    let y_axis = CumulativeAxis::build(
        Axis::Vertical,
        divisions.spacings(Axis::Vertical),
        parent.extent(Axis::Vertical),
    );

    let opening = raw_rect(sash, &x_axis, &y_axis)
        .map_err(|err| err.at(AreaKind::Sash, index))?
        .translate(parent.offset());

    let margin = profile.sash_margin();
    let width = opening.width() - 2.0 * margin;
    let height = opening.height() - 2.0 * margin;
    for (axis, size) in [(Axis::Horizontal, width), (Axis::Vertical, height)] {
        if size <= 0.0 {
            return Err(GeometryError::NegativeAperture {
                kind: AreaKind::Sash,
                index,
                axis,
                size,
            });
        }
    }

    let spec = FrameSpec::new(Size::new(width, height), Divisions::none(), vec![Area::full()])
        .with_offset(opening.min_point().add_point(Point::new(margin, margin)));
    trace!(index, spec:?; "Derived sash spec");

    Ok(spec)
}
