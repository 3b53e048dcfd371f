//! Configured drawing front end.
//!
//! [`Painter`] wraps a [`Canvas`] together with a [`RasterConfig`] that picks
//! the line and triangle rasterizers, so callers can draw without naming an
//! algorithm at every call site.

use crate::basics::{DimU, PointI};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::fill;
use crate::line::{draw_line_with, LineAlgorithm};
use crate::shader::Shader;
use crate::triangle::{fill_triangle_with, TriangleAlgorithm};

// ============================================================================
// RasterConfig
// ============================================================================

/// Rasterizer choice for a [`Painter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RasterConfig {
    pub line: LineAlgorithm,
    pub triangle: TriangleAlgorithm,
}

impl RasterConfig {
    pub fn with_line(mut self, line: LineAlgorithm) -> Self {
        self.line = line;
        self
    }

    pub fn with_triangle(mut self, triangle: TriangleAlgorithm) -> Self {
        self.triangle = triangle;
        self
    }
}

// ============================================================================
// Painter
// ============================================================================

/// A canvas plus the rasterizers to draw on it with.
pub struct Painter<'a> {
    canvas: Canvas<'a>,
    config: RasterConfig,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: Canvas<'a>) -> Self {
        Self::with_config(canvas, RasterConfig::default())
    }

    pub fn with_config(canvas: Canvas<'a>, config: RasterConfig) -> Self {
        log::debug!(
            "painter on {}x{} canvas: line={:?} triangle={:?}",
            canvas.width(),
            canvas.height(),
            config.line,
            config.triangle
        );
        Self { canvas, config }
    }

    pub fn config(&self) -> RasterConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RasterConfig) {
        log::debug!("painter reconfigured: {:?}", config);
        self.config = config;
    }

    pub fn canvas(&self) -> &Canvas<'a> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<'a> {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> Canvas<'a> {
        self.canvas
    }

    /// Overwrite every pixel with `c`.
    pub fn clear(&mut self, c: Color) {
        self.canvas.clear(c);
    }

    /// See [`fill::fill`].
    pub fn fill<S: Shader + ?Sized>(&mut self, shader: &mut S) {
        fill::fill(&mut self.canvas, shader);
    }

    /// See [`fill::fill_blend`].
    pub fn fill_blend<S: Shader + ?Sized>(&mut self, shader: &mut S) {
        fill::fill_blend(&mut self.canvas, shader);
    }

    /// See [`fill::fill_rect`]. Both bounds are inclusive.
    pub fn fill_rect<S: Shader + ?Sized>(&mut self, pos: PointI, dim: DimU, shader: &mut S) {
        fill::fill_rect(&mut self.canvas, pos, dim, shader);
    }

    /// See [`fill::fill_circle`].
    pub fn fill_circle<S: Shader + ?Sized>(&mut self, center: PointI, radius: u32, shader: &mut S) {
        fill::fill_circle(&mut self.canvas, center, radius, shader);
    }

    /// Draw a segment with the configured line algorithm.
    pub fn line<S: Shader + ?Sized>(&mut self, p0: PointI, p1: PointI, shader: &mut S) {
        draw_line_with(self.config.line, &mut self.canvas, p0, p1, shader);
    }

    /// Fill a triangle with the configured triangle algorithm.
    pub fn triangle<S: Shader + ?Sized>(
        &mut self,
        p1: PointI,
        p2: PointI,
        p3: PointI,
        shader: &mut S,
    ) {
        fill_triangle_with(self.config.triangle, &mut self.canvas, p1, p2, p3, shader);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::draw_line_bresenham;
    use crate::shader_solid::Monochrome;
    use crate::triangle::fill_triangle_oriented;

    #[test]
    fn test_default_config() {
        let cfg = RasterConfig::default();
        assert_eq!(cfg.line, LineAlgorithm::Interpolated);
        assert_eq!(cfg.triangle, TriangleAlgorithm::Scanline);
    }

    #[test]
    fn test_builder() {
        let cfg = RasterConfig::default()
            .with_line(LineAlgorithm::Bresenham)
            .with_triangle(TriangleAlgorithm::EdgeUnoriented);
        assert_eq!(cfg.line, LineAlgorithm::Bresenham);
        assert_eq!(cfg.triangle, TriangleAlgorithm::EdgeUnoriented);
    }

    #[test]
    fn test_dispatches_configured_line() {
        let (a, b) = (PointI::new(0, 0), PointI::new(3, 11));

        let mut expected = vec![Color::BLACK; 16 * 16];
        draw_line_bresenham(&mut Canvas::new(&mut expected, 16, 16), a, b, &mut Color::RED);

        let mut data = vec![Color::BLACK; 16 * 16];
        let cfg = RasterConfig::default().with_line(LineAlgorithm::Bresenham);
        let mut painter = Painter::with_config(Canvas::new(&mut data, 16, 16), cfg);
        painter.line(a, b, &mut Color::RED);
        drop(painter);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_dispatches_configured_triangle() {
        let v = [PointI::new(1, 1), PointI::new(2, 9), PointI::new(9, 4)];

        let mut expected = vec![Color::BLACK; 100];
        fill_triangle_oriented(&mut Canvas::new(&mut expected, 10, 10), v[0], v[1], v[2], &mut Color::RED);

        let mut data = vec![Color::BLACK; 100];
        let mut painter = Painter::new(Canvas::new(&mut data, 10, 10));
        painter.set_config(painter.config().with_triangle(TriangleAlgorithm::EdgeOriented));
        painter.triangle(v[0], v[1], v[2], &mut Color::RED);
        drop(painter);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_shapes_with_one_shader() {
        let mut data = vec![Color::TRANSPARENT; 64];
        let mut painter = Painter::new(Canvas::new(&mut data, 8, 8));
        let mut shader = Monochrome::new(Color::WHITE);
        painter.clear(Color::BLACK);
        painter.fill_rect(PointI::new(0, 0), DimU::new(1, 1), &mut shader);
        shader.set_color(Color::RED);
        painter.fill_circle(PointI::new(6, 6), 0, &mut shader);
        let canvas = painter.into_canvas();
        assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(6, 6), Some(Color::RED));
    }

    #[test]
    fn test_fill_and_canvas_access() {
        let mut data = vec![Color::BLACK; 4];
        let mut painter = Painter::new(Canvas::new(&mut data, 2, 2));
        painter.fill(&mut Color::GREEN);
        painter.fill_blend(&mut Color::TRANSPARENT);
        painter.canvas_mut().copy_pixel(0, 0, Color::BLUE);
        assert_eq!(painter.canvas().pixel(0, 0), Some(Color::BLUE));
        assert_eq!(painter.canvas().pixel(1, 1), Some(Color::GREEN));
    }
}
