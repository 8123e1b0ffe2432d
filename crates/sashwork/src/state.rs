//! The current frame and its derived geometry, kept together.

use log::{debug, warn};

use sashwork_core::{
    engine::{FrameGeometry, compute_frame},
    error::GeometryError,
    spec::{FrameSpec, Profile},
};

/// Holds one frame spec together with the geometry computed from it.
///
/// Every change goes through [`compute_frame`] first. The spec and the
/// geometry are replaced together only when that succeeds; after a failed
/// update both still describe the previous frame.
///
/// ```
/// use sashwork::{FrameState, spec::{Area, Divisions, FrameSpec, Profile}, geometry::Size};
///
/// let spec = FrameSpec::new(Size::new(1200.0, 1000.0), Divisions::none(), vec![Area::full()]);
/// let mut state = FrameState::new(spec, Profile::default()).unwrap();
///
/// state.resize(1400.0, 1000.0).unwrap();
/// assert_eq!(state.geometry().frame_rect().width(), 1400.0);
///
/// // Too small for the frame profile: the previous frame is kept
/// assert!(state.resize(80.0, 1000.0).is_err());
/// assert_eq!(state.spec().frame_dims().width(), 1400.0);
/// ```
#[derive(Debug, Clone)]
pub struct FrameState {
    profile: Profile,
    spec: FrameSpec,
    geometry: FrameGeometry,
}

impl FrameState {
    /// Computes the initial geometry for `spec`.
    pub fn new(spec: FrameSpec, profile: Profile) -> Result<Self, GeometryError> {
        let geometry = compute_frame(&spec, &profile)?;
        Ok(Self {
            profile,
            spec,
            geometry,
        })
    }

    pub fn spec(&self) -> &FrameSpec {
        &self.spec
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replaces the current frame with `spec`.
    ///
    /// # Errors
    ///
    /// Returns the geometry error for `spec`; the state is left unchanged.
    pub fn update(&mut self, spec: FrameSpec) -> Result<(), GeometryError> {
        match compute_frame(&spec, &self.profile) {
            Ok(geometry) => {
                debug!(sashes = geometry.sashes().len(); "Frame state updated");
                self.spec = spec;
                self.geometry = geometry;
                Ok(())
            }
            Err(err) => {
                warn!(err:% = err; "Rejected frame update");
                Err(err)
            }
        }
    }

    /// Changes the overall frame size, keeping everything else.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), GeometryError> {
        self.update(self.spec.with_frame_dims(width, height))
    }
}
