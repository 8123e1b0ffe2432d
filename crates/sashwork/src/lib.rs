//! Sashwork - Parametric window and door frames rendered to SVG.
//!
//! A frame is described as an overall size, a grid of mullions and transoms,
//! the openings cut into that grid and the sashes mounted in them. This crate
//! decodes such descriptions, computes their outlines and renders them.

pub mod config;
pub mod export;

mod error;
mod state;

pub use sashwork_core::{color, draw, engine, geometry, spec};
pub use sashwork_core::error::{AreaKind, Axis, GeometryError};

pub use error::SashworkError;
pub use state::FrameState;

use log::{debug, info, trace};

use config::AppConfig;
use engine::FrameGeometry;
use export::{Exporter, svg::SvgBuilder};
use spec::FrameSpec;

/// Builder for decoding, computing and rendering Sashwork frames.
///
/// This provides an API for processing frame descriptions through decoding,
/// geometry and rendering stages.
///
/// # Examples
///
/// ```rust
/// use sashwork::{FrameBuilder, config::AppConfig};
///
/// let source = r#"
/// frame_dims = [1200, 1000]
/// areas = [[0, 0, 1, 1]]
/// sashes = [[0, 0, 1, 1]]
/// "#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = FrameBuilder::new(config);
///
/// // Decode source into a frame spec
/// let spec = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the frame to SVG
/// let svg = builder.render_svg(&spec)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = FrameBuilder::default();
/// ```
#[derive(Default)]
pub struct FrameBuilder {
    config: AppConfig,
}

impl FrameBuilder {
    /// Create a new frame builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including profile and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode a TOML frame description into a [`FrameSpec`].
    ///
    /// Only the shape of the document is checked here; the geometry is
    /// validated when the spec is computed.
    ///
    /// # Arguments
    ///
    /// * `source` - TOML source text
    ///
    /// # Errors
    ///
    /// Returns [`SashworkError::Spec`] if the text is not a well-formed
    /// frame description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sashwork::FrameBuilder;
    ///
    /// let spec = FrameBuilder::default()
    ///     .parse("frame_dims = [900, 2100]\nareas = [[0, 0, 1, 1]]")
    ///     .expect("Failed to parse frame");
    /// assert_eq!(spec.areas().len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<FrameSpec, SashworkError> {
        info!("Parsing frame description");

        let spec: FrameSpec =
            toml::from_str(source).map_err(|err| SashworkError::new_spec_error(err, source))?;

        debug!(areas = spec.areas().len(), sashes = spec.sashes().len(); "Frame description parsed");
        trace!(spec:?; "Parsed frame spec");

        Ok(spec)
    }

    /// Compute the primary and sash outlines of `spec` with the configured
    /// profile.
    ///
    /// # Errors
    ///
    /// Returns [`SashworkError::Geometry`] if the spec fails validation.
    pub fn compute(&self, spec: &FrameSpec) -> Result<FrameGeometry, SashworkError> {
        info!(
            width = spec.frame_dims().width(),
            height = spec.frame_dims().height();
            "Computing frame geometry"
        );

        let geometry = engine::compute_frame(spec, self.config.profile())?;

        debug!(
            apertures = geometry.outline().holes().len(),
            sashes = geometry.sashes().len();
            "Frame geometry computed"
        );
        Ok(geometry)
    }

    /// Compute `spec` and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `SashworkError` for geometry errors, invalid style settings
    /// or rendering failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sashwork::{FrameBuilder, config::AppConfig};
    ///
    /// let builder = FrameBuilder::new(AppConfig::default());
    /// let spec = builder
    ///     .parse("frame_dims = [2400, 900]\ndivisions = [[600, 1200], []]\nareas = [[0, 0, 1, 1], [1, 0, 1, 1], [2, 0, 1, 1]]")
    ///     .expect("Failed to parse");
    ///
    /// let svg = builder.render_svg(&spec)
    ///     .expect("Failed to render frame");
    ///
    /// assert!(svg.contains("evenodd"));
    /// ```
    pub fn render_svg(&self, spec: &FrameSpec) -> Result<String, SashworkError> {
        let geometry = self.compute(spec)?;

        let exporter = SvgBuilder::new().with_style(self.config.style()).build()?;
        let svg = exporter.export_frame(&geometry)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Wrap `spec` in a [`FrameState`] using the configured profile.
    pub fn state(&self, spec: FrameSpec) -> Result<FrameState, SashworkError> {
        Ok(FrameState::new(spec, *self.config.profile())?)
    }
}
