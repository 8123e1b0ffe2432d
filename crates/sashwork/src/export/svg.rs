//! SVG rendering of computed frame geometry.
//!
//! [`SvgBuilder`] resolves the style configuration once; the resulting
//! [`Svg`] exporter turns a [`FrameGeometry`] into a complete document held
//! in memory.

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Path, Polygon as SvgPolygon, Rectangle},
};

use sashwork_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    engine::{FrameGeometry, Polygon, RenderableOutline, compute_shading},
};

use crate::{
    config::{ShadingStyle, StyleConfig},
    error::SashworkError,
    export::{Exporter, Viewport},
};

/// Builder for the [`Svg`] exporter.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `style` instead of the default styling.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the style into concrete colors and sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SashworkError::Config`] if any style value is invalid.
    pub fn build(self) -> Result<Svg, SashworkError> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            stroke: style.stroke().map_err(SashworkError::Config)?,
            fill: style.fill_color().map_err(SashworkError::Config)?,
            background: style.background_color().map_err(SashworkError::Config)?,
            padding: style.padding().map_err(SashworkError::Config)?,
            shading: style.shading().map_err(SashworkError::Config)?,
        })
    }
}

/// SVG exporter with a fully resolved style.
#[derive(Debug, Clone)]
pub struct Svg {
    stroke: StrokeDefinition,
    fill: Color,
    background: Option<Color>,
    padding: f32,
    shading: Option<ShadingStyle>,
}

impl Svg {
    /// Draws one outline as a single even-odd path.
    fn render_outline(&self, outline: &RenderableOutline) -> Path {
        let path = Path::new()
            .set("d", outline.to_path_data())
            .set("fill-rule", "evenodd");
        let path = apply_stroke!(path, &self.stroke);

        path.set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha())
    }

    /// Draws one beveled strip per side of `outer`.
    fn render_shading(
        &self,
        shading: &ShadingStyle,
        outer: &Polygon,
    ) -> Result<Vec<SvgPolygon>, SashworkError> {
        let segments = compute_shading(outer, shading.width())?;
        debug!(segments = segments.len(), width = shading.width(); "Computed edge shading");

        Ok(segments
            .iter()
            .map(|segment| {
                let (stroke_color, fill_color) = shading.colors().for_side(segment.side());
                let stroke = StrokeDefinition::new(stroke_color, self.stroke.width());
                let strip = SvgPolygon::new()
                    .set("points", segment.to_points_string())
                    .set("fill", fill_color.to_string())
                    .set("fill-opacity", fill_color.alpha());
                apply_stroke!(strip, &stroke)
            })
            .collect())
    }

    /// Builds the complete document for `geometry`.
    pub fn render_document(&self, geometry: &FrameGeometry) -> Result<Document, SashworkError> {
        let viewport = Viewport::around(geometry.frame_rect(), self.padding);
        let mut output = LayeredOutput::new();

        if let Some(color) = &self.background {
            let background = Rectangle::new()
                .set("x", viewport.min().x())
                .set("y", viewport.min().y())
                .set("width", viewport.size().width())
                .set("height", viewport.size().height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        output.add_to_layer(
            RenderLayer::Frame,
            Box::new(self.render_outline(geometry.outline())),
        );

        if let Some(shading) = &self.shading {
            for strip in self.render_shading(shading, geometry.outline().outer())? {
                output.add_to_layer(RenderLayer::Shading, Box::new(strip));
            }
        }

        for sash in geometry.sashes() {
            output.add_to_layer(RenderLayer::Sash, Box::new(self.render_outline(sash)));
        }

        let doc = output.render().into_iter().fold(
            Document::new()
                .set("viewBox", viewport.to_view_box())
                .set("width", viewport.size().width())
                .set("height", viewport.size().height()),
            |doc, node| doc.add(node),
        );
        debug!(view_box = viewport.to_view_box(); "SVG document rendered");

        Ok(doc)
    }

    /// Serializes `doc` into a string.
    pub fn write_document(&self, doc: &Document) -> Result<String, SashworkError> {
        let mut buffer = Vec::new();
        if let Err(err) = svg::write(&mut buffer, doc) {
            error!(err:err; "Failed to write SVG content");
            return Err(SashworkError::Io(err));
        }

        String::from_utf8(buffer).map_err(|err| {
            error!(err:err; "SVG content is not valid UTF-8");
            SashworkError::Export(Box::new(err))
        })
    }
}

impl Exporter for Svg {
    fn export_frame(&self, geometry: &FrameGeometry) -> Result<String, SashworkError> {
        info!(sashes = geometry.sashes().len(); "Exporting frame to SVG");
        let doc = self.render_document(geometry)?;
        self.write_document(&doc)
    }
}

#[cfg(test)]
mod tests {
    use sashwork_core::{
        engine::compute_frame,
        geometry::{Point, Size},
        spec::{Area, Divisions, FrameSpec, Profile},
    };

    use super::*;
    use crate::config::ShadingConfig;

    fn geometry() -> FrameGeometry {
        let spec = FrameSpec::new(
            Size::new(2400.0, 900.0),
            Divisions::new(vec![600.0, 1200.0], vec![385.0]),
            vec![
                Area::new(0, 0, 1, 2),
                Area::new(1, 0, 1, 1),
                Area::new(1, 1, 1, 1),
                Area::new(2, 0, 1, 2),
            ],
        )
        .with_sashes(vec![Area::new(0, 0, 1, 2), Area::new(2, 0, 1, 2)]);
        compute_frame(&spec, &Profile::default()).unwrap()
    }

    fn export(style: &StyleConfig, geometry: &FrameGeometry) -> String {
        SvgBuilder::new()
            .with_style(style)
            .build()
            .unwrap()
            .export_frame(geometry)
            .unwrap()
    }

    #[test]
    fn test_default_document() {
        let svg = export(&StyleConfig::default(), &geometry());

        assert!(svg.contains(r#"viewBox="-100 -100 2600 1100""#));
        assert!(svg.contains(r#"class="outerframe""#));
        assert!(svg.contains(r#"class="sashes""#));
        assert!(!svg.contains(r#"class="shading""#));
        assert!(!svg.contains(r#"class="background""#));
        assert_eq!(svg.matches(r#"fill-rule="evenodd""#).count(), 3);
        assert_eq!(svg.matches(r#"fill="black""#).count(), 3);
        assert_eq!(svg.matches(r#"stroke-width="2""#).count(), 3);
    }

    #[test]
    fn test_default_outlines_are_filled() {
        let svg = export(&StyleConfig::default(), &geometry());

        // Apertures only read as holes on a filled path
        assert!(!svg.contains(r#"fill="none""#));
        let paths: Vec<&str> = svg
            .split("<path")
            .skip(1)
            .map(|rest| rest.split("/>").next().unwrap())
            .collect();
        assert_eq!(paths.len(), 3);
        for path in paths {
            assert!(path.contains(r#"fill-rule="evenodd""#));
            assert!(path.contains(r#"fill="black""#));
            assert!(path.contains(r#"fill-opacity="1""#));
        }
    }

    #[test]
    fn test_transparent_fill() {
        let style = StyleConfig::default().with_fill_color("transparent");
        let svg = export(&style, &geometry());

        assert_eq!(svg.matches(r#"fill-opacity="0""#).count(), 3);
    }

    #[test]
    fn test_layer_order() {
        let style = StyleConfig::default()
            .with_background_color("white")
            .with_shading(ShadingConfig::uniform(10.0, "gray"));
        let svg = export(&style, &geometry());

        let background = svg.find(r#"class="background""#).unwrap();
        let frame = svg.find(r#"class="outerframe""#).unwrap();
        let shading = svg.find(r#"class="shading""#).unwrap();
        let sashes = svg.find(r#"class="sashes""#).unwrap();
        assert!(background < frame && frame < shading && shading < sashes);
    }

    #[test]
    fn test_shading_strips() {
        let style = StyleConfig::default().with_shading(ShadingConfig::uniform(10.0, "gray"));
        let svg = export(&style, &geometry());

        assert_eq!(svg.matches("<polygon").count(), 4);
        assert!(svg.contains(r#"points="0,0 2400,0 2390,10 10,10""#));
    }

    #[test]
    fn test_fill_and_padding() {
        let style = StyleConfig::default()
            .with_fill_color("white")
            .with_padding(0.0);
        let svg = export(&style, &geometry());

        assert!(svg.contains(r#"viewBox="0 0 2400 900""#));
        assert!(!svg.contains(r#"fill="none""#));
        assert_eq!(svg.matches(r#"fill-opacity="1""#).count(), 3);
    }

    #[test]
    fn test_viewport_follows_offset() {
        let spec = FrameSpec::new(Size::new(1000.0, 500.0), Divisions::none(), vec![Area::full()])
            .with_offset(Point::new(200.0, 100.0));
        let geometry = compute_frame(&spec, &Profile::default()).unwrap();
        let svg = export(&StyleConfig::default(), &geometry);

        assert!(svg.contains(r#"viewBox="100 0 1200 700""#));
    }

    #[test]
    fn test_invalid_style_fails_to_build() {
        let style = StyleConfig::default().with_stroke_color("not-a-color");
        let result = SvgBuilder::new().with_style(&style).build();

        assert!(matches!(result, Err(SashworkError::Config(_))));
    }

    #[test]
    fn test_invalid_shading_width() {
        let style = StyleConfig::default().with_shading(ShadingConfig::uniform(-5.0, "gray"));
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();

        assert!(matches!(
            svg.export_frame(&geometry()),
            Err(SashworkError::Geometry(_))
        ));
    }
}
