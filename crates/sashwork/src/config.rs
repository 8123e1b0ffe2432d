//! Configuration types for Sashwork frame rendering.
//!
//! This module provides configuration structures that control the material
//! profile used by the geometry engine and the styling of the rendered SVG.
//! All types implement [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining profile and style settings.
//! - [`StyleConfig`] - Controls stroke, fill, background, padding and edge shading.
//! - [`ShadingConfig`] - Optional beveled edge shading over the outer frame boundary.
//!
//! # Example
//!
//! ```
//! # use sashwork::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.profile().edge(), 52.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use sashwork_core::{
    color::Color, draw::StrokeDefinition, engine::ShadingColor, spec::Profile,
};

/// Space left around the frame's outer rectangle in the rendered drawing.
pub const DEFAULT_PADDING: f32 = 100.0;

/// Top-level application configuration combining profile and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Material thicknesses section.
    #[serde(default)]
    profile: Profile,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified profile and style configurations.
    ///
    /// # Arguments
    ///
    /// * `profile` - Frame, mullion and sash thicknesses.
    /// * `style` - Visual styling options.
    pub fn new(profile: Profile, style: StyleConfig) -> Self {
        Self { profile, style }
    }

    /// Returns the material profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered frames.
///
/// Fields that are not set fall back to renderer defaults. Colors are kept
/// as strings and parsed on access so a bad value is reported with context.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Outline stroke [`Color`], as a color string.
    #[serde(default)]
    stroke_color: Option<String>,

    /// Outline stroke width.
    #[serde(default)]
    stroke_width: Option<f32>,

    /// Outline fill [`Color`]; black when absent.
    #[serde(default)]
    fill_color: Option<String>,

    /// Background [`Color`] drawn behind the whole viewport.
    #[serde(default)]
    background_color: Option<String>,

    /// Space around the frame, in drawing units.
    #[serde(default)]
    padding: Option<f32>,

    /// Edge shading over the outer boundary; no shading when absent.
    #[serde(default)]
    shading: Option<ShadingConfig>,
}

impl StyleConfig {
    /// Returns a copy with the stroke color replaced.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    /// Returns a copy with the fill color replaced.
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    /// Returns a copy with the background color replaced.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns a copy with the padding replaced.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Returns a copy with edge shading enabled.
    pub fn with_shading(mut self, shading: ShadingConfig) -> Self {
        self.shading = Some(shading);
        self
    }

    /// Returns the outline [`StrokeDefinition`], defaults filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if the color does not parse or the width is negative
    /// or not finite.
    pub fn stroke(&self) -> Result<StrokeDefinition, String> {
        let mut stroke = StrokeDefinition::default();
        if let Some(color) = &self.stroke_color {
            let color =
                Color::new(color).map_err(|err| format!("Invalid stroke color in config: {err}"))?;
            stroke.set_color(color);
        }
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(format!(
                    "Invalid stroke width in config: {width} (must be a non-negative number)"
                ));
            }
            stroke.set_width(width);
        }
        Ok(stroke)
    }

    /// Returns the parsed fill [`Color`], black if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn fill_color(&self) -> Result<Color, String> {
        match &self.fill_color {
            None => Ok(Color::default()),
            Some(color) => {
                Color::new(color).map_err(|err| format!("Invalid fill color in config: {err}"))
            }
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the padding around the frame, [`DEFAULT_PADDING`] if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the padding is negative or not finite.
    pub fn padding(&self) -> Result<f32, String> {
        match self.padding {
            None => Ok(DEFAULT_PADDING),
            Some(padding) if padding.is_finite() && padding >= 0.0 => Ok(padding),
            Some(padding) => Err(format!(
                "Invalid padding in config: {padding} (must be a non-negative number)"
            )),
        }
    }

    /// Returns the resolved edge shading, or `None` if shading is off.
    ///
    /// # Errors
    ///
    /// Returns an error if the shading section is inconsistent or any of
    /// its colors does not parse.
    pub fn shading(&self) -> Result<Option<ShadingStyle>, String> {
        self.shading.as_ref().map(ShadingConfig::resolve).transpose()
    }
}

/// The `[style.shading]` section.
///
/// Either a single `color` for every side, or both `stroke_colors` and
/// `fill_colors` with one entry per side (top, right, bottom, left).
#[derive(Debug, Clone, Deserialize)]
pub struct ShadingConfig {
    width: f32,

    #[serde(default)]
    color: Option<String>,

    #[serde(default)]
    stroke_colors: Option<[String; 4]>,

    #[serde(default)]
    fill_colors: Option<[String; 4]>,
}

impl ShadingConfig {
    /// Shading with one color on every side.
    pub fn uniform(width: f32, color: impl Into<String>) -> Self {
        Self {
            width,
            color: Some(color.into()),
            stroke_colors: None,
            fill_colors: None,
        }
    }

    /// Shading with per-side stroke and fill colors.
    pub fn per_side(width: f32, stroke_colors: [String; 4], fill_colors: [String; 4]) -> Self {
        Self {
            width,
            color: None,
            stroke_colors: Some(stroke_colors),
            fill_colors: Some(fill_colors),
        }
    }

    fn resolve(&self) -> Result<ShadingStyle, String> {
        let parse_all = |names: &[String; 4], what: &str| -> Result<[Color; 4], String> {
            let mut colors = [Color::default(); 4];
            for (slot, name) in colors.iter_mut().zip(names) {
                *slot = Color::new(name)
                    .map_err(|err| format!("Invalid shading {what} color in config: {err}"))?;
            }
            Ok(colors)
        };

        let colors = match (&self.color, &self.stroke_colors, &self.fill_colors) {
            (Some(color), None, None) => ShadingColor::Uniform(
                Color::new(color)
                    .map_err(|err| format!("Invalid shading color in config: {err}"))?,
            ),
            (None, Some(stroke), Some(fill)) => ShadingColor::PerSide {
                stroke: parse_all(stroke, "stroke")?,
                fill: parse_all(fill, "fill")?,
            },
            _ => {
                return Err(
                    "Invalid shading in config: set either `color` or both `stroke_colors` and `fill_colors`"
                        .to_string(),
                );
            }
        };

        Ok(ShadingStyle {
            width: self.width,
            colors,
        })
    }
}

/// Edge shading with its colors parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingStyle {
    width: f32,
    colors: ShadingColor,
}

impl ShadingStyle {
    /// Depth of each strip, measured inward from the outer edge.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn colors(&self) -> &ShadingColor {
        &self.colors
    }
}
