//! Sashwork Core Types and Geometry Engine
//!
//! This crate provides the foundational types and the pure geometry engine
//! for Sashwork window and door frames. It includes:
//!
//! - **Geometry**: Points, sizes, rectangles and insets ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke definitions and layered SVG output ([`draw`] module)
//! - **Spec**: The parametric frame description ([`spec::FrameSpec`])
//! - **Engine**: Axis building, aperture resolution, outline composition,
//!   sash expansion and edge shading ([`engine`] module)
//! - **Errors**: Validation errors raised at the engine boundary ([`error::GeometryError`])

pub mod color;
pub mod draw;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod spec;
