//! Error types for Sashwork operations.
//!
//! This module provides the main error type [`SashworkError`] which wraps
//! the conditions that can occur while loading, computing and rendering a
//! frame.

use std::io;

use thiserror::Error;

use sashwork_core::error::GeometryError;

/// The main error type for Sashwork operations.
///
/// The `Spec` variant keeps the source text of the frame description so the
/// decode error's span can be shown against it.
#[derive(Debug, Error)]
pub enum SashworkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid frame description: {}", .err.message())]
    Spec { err: toml::de::Error, src: String },

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl SashworkError {
    /// Create a new `Spec` error with the associated source text.
    pub fn new_spec_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Spec {
            err,
            src: src.into(),
        }
    }
}
