// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 2D drawing surfaces.
//!
//! The renderer only needs fill/stroke styles, circles, filled polygons and line
//! segments. [`ImageSurface`] rasterizes these into an RGBA buffer with
//! `imageproc`; [`RecordingSurface`] keeps the calls as [`DrawCommand`]s so the
//! emitted geometry can be inspected.

use std::path::Path;

use image::RgbaImage;
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
};

use crate::error::Result;
use crate::geometry::stick_outline;
use crate::pose::Point;
use crate::visualizer::Color;

/// Drawing operations the renderer issues.
///
/// Coordinates are in surface pixels. Clearing between frames is the caller's job.
pub trait DrawingSurface {
    /// Set the color used by `fill_*` operations.
    fn set_fill_color(&mut self, color: Color);
    /// Set the color used by `stroke_*` operations.
    fn set_stroke_color(&mut self, color: Color);
    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f32);
    /// Fill a full circle.
    fn fill_circle(&mut self, center: Point, radius: f32);
    /// Outline a full circle.
    fn stroke_circle(&mut self, center: Point, radius: f32);
    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point]);
    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point);
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill color change.
    SetFillColor(Color),
    /// Stroke color change.
    SetStrokeColor(Color),
    /// Stroke width change.
    SetLineWidth(f32),
    /// Filled circle.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f32,
    },
    /// Outlined circle.
    StrokeCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f32,
    },
    /// Filled polygon.
    FillPolygon(Vec<Point>),
    /// Line segment.
    StrokeLine {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
    },
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded polygons in order.
    #[must_use]
    pub fn polygons(&self) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPolygon(points) => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Recorded filled circles as `(center, radius)`.
    #[must_use]
    pub fn circles(&self) -> Vec<(Point, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius });
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::FillPolygon(points.to_vec()));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }
}

/// RGBA raster surface.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
    fill: Color,
    stroke: Color,
    line_width: f32,
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl ImageSurface {
    /// Create a transparent surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint every pixel with an opaque color.
    pub fn clear(&mut self, color: Color) {
        let pixel = color.to_rgba();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Make every pixel fully transparent.
    pub fn clear_transparent(&mut self) {
        for p in self.image.pixels_mut() {
            p.0 = [0, 0, 0, 0];
        }
    }

    /// Borrow the pixel buffer.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the surface to an image file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

impl DrawingSurface for ImageSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_circle(&mut self, center: Point, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        draw_filled_circle_mut(
            &mut self.image,
            to_pixel(center),
            radius.round() as i32,
            self.fill.to_rgba(),
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_circle(&mut self, center: Point, radius: f32) {
        let color = self.stroke.to_rgba();
        let half = (self.line_width / 2.0).max(0.5);
        let inner = (radius - half).round().max(0.0) as i32;
        let outer = (radius + half).round() as i32;
        for r in inner..outer.max(inner + 1) {
            draw_hollow_circle_mut(&mut self.image, to_pixel(center), r, color);
        }
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        let mut poly: Vec<imageproc::point::Point<i32>> = Vec::with_capacity(points.len());
        for &p in points {
            let (x, y) = to_pixel(p);
            let q = imageproc::point::Point::new(x, y);
            if poly.last() != Some(&q) {
                poly.push(q);
            }
        }
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        // Collapsed to a line or a dot after rounding
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, self.fill.to_rgba());
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        if self.line_width <= 1.0 {
            draw_line_segment_mut(
                &mut self.image,
                (from.x, from.y),
                (to.x, to.y),
                self.stroke.to_rgba(),
            );
            return;
        }

        // Thick strokes are filled as a band of constant width
        let half = self.line_width / 2.0;
        let band = stick_outline(from, half, to, half);
        let fill = self.fill;
        self.fill = self.stroke;
        self.fill_polygon(&band);
        self.fill = fill;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_color(Color::PICTOGRAM);
        surface.fill_circle(Point::new(1.0, 2.0), 3.0);
        surface.fill_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.commands()[0], DrawCommand::SetFillColor(Color::PICTOGRAM));
        assert_eq!(surface.circles(), vec![(Point::new(1.0, 2.0), 3.0)]);
        assert_eq!(surface.polygons().len(), 1);

        surface.clear();
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_image_fill_circle() {
        let mut surface = ImageSurface::new(64, 64);
        surface.clear(Color::WHITE);
        surface.set_fill_color(Color::PICTOGRAM);
        surface.fill_circle(Point::new(32.0, 32.0), 10.0);

        assert_eq!(*surface.image().get_pixel(32, 32), Color::PICTOGRAM.to_rgba());
        assert_eq!(*surface.image().get_pixel(2, 2), Color::WHITE.to_rgba());
    }

    #[test]
    fn test_image_fill_polygon() {
        let mut surface = ImageSurface::new(64, 64);
        surface.set_fill_color(Color::BLACK);
        surface.fill_polygon(&[
            Point::new(10.0, 10.0),
            Point::new(50.0, 10.0),
            Point::new(50.0, 50.0),
            Point::new(10.0, 50.0),
        ]);
        assert_eq!(*surface.image().get_pixel(30, 30), Color::BLACK.to_rgba());
        assert_eq!(surface.image().get_pixel(60, 60).0[3], 0);
    }

    #[test]
    fn test_degenerate_polygon_is_ignored() {
        let mut surface = ImageSurface::new(16, 16);
        surface.set_fill_color(Color::BLACK);
        surface.fill_polygon(&[Point::new(4.0, 4.0), Point::new(4.1, 4.2), Point::new(4.0, 4.0)]);
        surface.fill_polygon(&[]);
        assert!(surface.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_thick_line() {
        let mut surface = ImageSurface::new(32, 32);
        surface.set_stroke_color(Color::WHITE);
        surface.set_line_width(4.0);
        surface.stroke_line(Point::new(2.0, 16.0), Point::new(30.0, 16.0));
        assert_eq!(*surface.image().get_pixel(16, 17), Color::WHITE.to_rgba());
    }
}
