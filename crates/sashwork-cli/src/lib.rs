//! CLI logic for the Sashwork frame renderer.
//!
//! This module contains the core CLI logic: load configuration, decode the
//! frame description, apply size overrides and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use sashwork::{FrameBuilder, SashworkError, spec::FrameSpec};

/// Run the Sashwork CLI application
///
/// This function processes the input file through the Sashwork pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SashworkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed frame descriptions
/// - Geometry validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SashworkError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing frame"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = FrameBuilder::new(app_config);
    let spec = apply_size_overrides(builder.parse(&source)?, args);
    let svg = builder.render_svg(&spec)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Replaces the frame size with `--width`/`--height` where given.
fn apply_size_overrides(spec: FrameSpec, args: &Args) -> FrameSpec {
    if args.width.is_none() && args.height.is_none() {
        return spec;
    }

    let dims = spec.frame_dims();
    let width = args.width.unwrap_or(dims.width());
    let height = args.height.unwrap_or(dims.height());
    info!(width, height; "Overriding frame size");

    spec.with_frame_dims(width, height)
}
