pub mod svg;

use sashwork_core::{
    engine::FrameGeometry,
    geometry::{Insets, Point, Rect, Size},
};

use crate::error::SashworkError;

/// A single exporter trait for computed frame geometry.
pub trait Exporter {
    /// Renders `geometry` into the exporter's output format.
    fn export_frame(&self, geometry: &FrameGeometry) -> Result<String, SashworkError>;
}

/// The visible region of a drawing: the frame's outer rectangle grown by
/// `padding` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    min: Point,
    size: Size,
}

impl Viewport {
    /// Builds the viewport around `rect`.
    ///
    /// ```
    /// use sashwork::export::Viewport;
    /// use sashwork_core::geometry::{Point, Rect};
    ///
    /// let frame = Rect::from_corners(Point::new(0.0, 0.0), Point::new(2400.0, 900.0));
    /// assert_eq!(Viewport::around(frame, 100.0).to_view_box(), "-100 -100 2600 1100");
    /// ```
    pub fn around(rect: Rect, padding: f32) -> Self {
        let padded = rect.add_padding(Insets::uniform(padding));
        Self {
            min: padded.min_point(),
            size: padded.to_size(),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Formats the viewport as an SVG `viewBox` value.
    pub fn to_view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min.x(),
            self.min.y(),
            self.size.width(),
            self.size.height()
        )
    }
}
