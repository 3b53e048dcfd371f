//! A strided view over a caller-owned pixel buffer.
//!
//! The canvas borrows its pixels; it never allocates, resizes or frees them.
//! Pixel `(x, y)` lives at index `y * stride + x`. A stride larger than the
//! width allows row padding and is how [`Canvas::sub_canvas`] carves out a
//! region of a larger image without copying.
//!
//! All writes through the canvas are clipped to `[0, width) × [0, height)`.

use crate::basics::{saturate_i32, RectI};
use crate::color::Color;
use crate::error::{CanvasError, Result};
use crate::shader::Shader;

// ============================================================================
// Canvas
// ============================================================================

/// A sized, strided view over a borrowed `[Color]` buffer.
pub struct Canvas<'a> {
    pixels: &'a mut [Color],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> Canvas<'a> {
    /// Create a canvas whose stride equals its width.
    ///
    /// No validation is performed. The caller guarantees that `pixels` holds at
    /// least `width * height` entries; a shorter buffer panics on the first
    /// out-of-range write. Use [`Canvas::try_new`] for a checked variant.
    pub fn new(pixels: &'a mut [Color], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
            stride: width,
        }
    }

    /// Checked form of [`Canvas::new`].
    pub fn try_new(pixels: &'a mut [Color], width: u32, height: u32) -> Result<Self> {
        Self::with_stride(pixels, width, height, width)
    }

    /// Create a canvas with explicit row stride (in pixels).
    ///
    /// Fails if `stride < width` or if the buffer cannot hold `height` rows.
    /// The last row needs only `width` entries, not a full stride.
    pub fn with_stride(
        pixels: &'a mut [Color],
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<Self> {
        if stride < width {
            log::debug!("rejecting canvas: stride {} < width {}", stride, width);
            return Err(CanvasError::StrideTooSmall {
                stride: stride as usize,
                width: width as usize,
            });
        }
        let required = Self::required_len(width, height, stride);
        if pixels.len() < required {
            log::debug!(
                "rejecting canvas: buffer of {} pixels, {} required",
                pixels.len(),
                required
            );
            return Err(CanvasError::BufferTooSmall {
                len: pixels.len(),
                required,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// Minimum buffer length for the given geometry.
    pub fn required_len(width: u32, height: u32, stride: u32) -> usize {
        if height == 0 || width == 0 {
            0
        } else {
            (height as usize - 1) * stride as usize + width as usize
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// `true` if the canvas has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The whole underlying buffer, row padding included.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels[..]
    }

    /// Mutable access to the whole underlying buffer, row padding included.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels[..]
    }

    /// Bounds as an inclusive rectangle. Invalid when the canvas is empty.
    pub fn bounds(&self) -> RectI {
        RectI::new(
            0,
            0,
            saturate_i32(self.width as i64 - 1),
            saturate_i32(self.height as i64 - 1),
        )
    }

    /// `true` if (x, y) addresses a pixel of this canvas.
    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.bounds().hit_test(x, y)
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride as usize + x as usize
    }

    /// Row `y`, without padding.
    pub fn row(&self, y: u32) -> &[Color] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Mutable row `y`, without padding.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride as usize;
        &mut self.pixels[start..start + self.width as usize]
    }

    /// Iterate rows top to bottom, without padding.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// The pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.inbox(x, y) {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Overwrite a single pixel (clipped).
    #[inline]
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: Color) {
        if self.inbox(x, y) {
            let i = self.offset(x, y);
            self.pixels[i] = c;
        }
    }

    /// Paint `c` over a single pixel (clipped).
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, c: Color) {
        if self.inbox(x, y) {
            let i = self.offset(x, y);
            self.pixels[i] = self.pixels[i].blend_over(c);
        }
    }

    /// Evaluate `shader` at (x, y) and blend the result, if (x, y) is inside.
    ///
    /// The shader is not evaluated for clipped pixels.
    #[inline]
    pub fn shade_pixel<S: Shader + ?Sized>(&mut self, x: i32, y: i32, shader: &mut S) {
        if self.inbox(x, y) {
            let i = self.offset(x, y);
            let c = shader.evaluate(x, y);
            self.pixels[i] = self.pixels[i].blend_over(c);
        }
    }

    /// Shade and blend a horizontal span (clipped). x1, x2 are inclusive
    /// endpoints and may come in either order; pixels are visited with x
    /// ascending.
    pub fn shade_hspan<S: Shader + ?Sized>(
        &mut self,
        mut x1: i32,
        y: i32,
        mut x2: i32,
        shader: &mut S,
    ) {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        let b = self.bounds();
        if y > b.y2 || y < b.y1 || x1 > b.x2 || x2 < b.x1 {
            return;
        }
        x1 = x1.max(b.x1);
        x2 = x2.min(b.x2);
        let start = self.offset(0, y);
        let row = &mut self.pixels[start..start + self.width as usize];
        for x in x1..=x2 {
            let p = &mut row[x as usize];
            *p = p.blend_over(shader.evaluate(x, y));
        }
    }

    /// Shade and blend a vertical span (clipped). y1, y2 are inclusive
    /// endpoints and may come in either order; pixels are visited with y
    /// ascending.
    pub fn shade_vspan<S: Shader + ?Sized>(
        &mut self,
        x: i32,
        mut y1: i32,
        mut y2: i32,
        shader: &mut S,
    ) {
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        let b = self.bounds();
        if x > b.x2 || x < b.x1 || y1 > b.y2 || y2 < b.y1 {
            return;
        }
        y1 = y1.max(b.y1);
        y2 = y2.min(b.y2);
        for y in y1..=y2 {
            let i = self.offset(x, y);
            self.pixels[i] = self.pixels[i].blend_over(shader.evaluate(x, y));
        }
    }

    /// Overwrite every pixel with `c`. Row padding is left untouched.
    pub fn clear(&mut self, c: Color) {
        for y in 0..self.height {
            self.row_mut(y).fill(c);
        }
    }

    /// Borrow a rectangular region as its own canvas.
    ///
    /// The region is clipped to this canvas; `None` if nothing remains. The
    /// sub-canvas shares this canvas' stride, so writes through it can never
    /// reach pixels outside the region.
    pub fn sub_canvas(&mut self, x: i32, y: i32, width: u32, height: u32) -> Option<Canvas<'_>> {
        if width == 0 || height == 0 {
            return None;
        }
        let mut r = RectI::new(
            x,
            y,
            saturate_i32(x as i64 + width as i64 - 1),
            saturate_i32(y as i64 + height as i64 - 1),
        );
        if !r.clip(&self.bounds()) {
            return None;
        }
        let (w, h) = (r.width(), r.height());
        let start = self.offset(r.x1, r.y1);
        let len = Self::required_len(w, h, self.stride);
        Some(Canvas {
            pixels: &mut self.pixels[start..start + len],
            width: w,
            height: h,
            stride: self.stride,
        })
    }

    /// Copy pixels from `src` (min of both dimensions).
    pub fn copy_from(&mut self, src: &Canvas<'_>) {
        let h = self.height.min(src.height);
        let w = self.width.min(src.width) as usize;
        for y in 0..h {
            self.row_mut(y)[..w].copy_from_slice(&src.row(y)[..w]);
        }
    }

    /// The underlying buffer as raw bytes (R, G, B, A per pixel on
    /// little-endian targets), row padding included.
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels[..])
    }

    /// Mutable raw byte view of the underlying buffer.
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels[..])
    }
}

impl std::fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("len", &self.pixels.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_basic() {
        let mut data = vec![Color::TRANSPARENT; 40];
        let canvas = Canvas::new(&mut data, 10, 4);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.stride(), 10);
        assert!(!canvas.is_empty());
        assert_eq!(canvas.bounds(), RectI::new(0, 0, 9, 3));
    }

    #[test]
    fn test_with_stride_rejects_small_stride() {
        let mut data = vec![Color::TRANSPARENT; 40];
        let err = Canvas::with_stride(&mut data, 10, 4, 8).unwrap_err();
        assert_eq!(err, CanvasError::StrideTooSmall { stride: 8, width: 10 });
    }

    #[test]
    fn test_with_stride_rejects_short_buffer() {
        let mut data = vec![Color::TRANSPARENT; 20];
        let err = Canvas::with_stride(&mut data, 5, 4, 6).unwrap_err();
        assert_eq!(err, CanvasError::BufferTooSmall { len: 20, required: 23 });
    }

    #[test]
    fn test_with_stride_last_row_unpadded() {
        let mut data = vec![Color::TRANSPARENT; 23];
        let canvas = Canvas::with_stride(&mut data, 5, 4, 6).unwrap();
        assert_eq!(canvas.stride(), 6);
        assert_eq!(canvas.row(3).len(), 5);
    }

    #[test]
    fn test_try_new_zero_height() {
        let mut data: Vec<Color> = Vec::new();
        let canvas = Canvas::try_new(&mut data, 10, 0).unwrap();
        assert!(canvas.is_empty());
        assert!(!canvas.bounds().is_valid());
    }

    #[test]
    fn test_write_read_respects_stride() {
        let mut data = vec![Color::TRANSPARENT; 24];
        {
            let mut canvas = Canvas::with_stride(&mut data, 4, 4, 6).unwrap();
            canvas.copy_pixel(1, 2, Color::RED);
            assert_eq!(canvas.pixel(1, 2), Some(Color::RED));
            assert_eq!(canvas.pixel(4, 0), None);
        }
        assert_eq!(data[2 * 6 + 1], Color::RED);
    }

    #[test]
    fn test_inbox_edges() {
        let mut data = vec![Color::TRANSPARENT; 12];
        let canvas = Canvas::new(&mut data, 4, 3);
        assert!(canvas.inbox(0, 0));
        assert!(canvas.inbox(3, 2));
        assert!(!canvas.inbox(4, 2));
        assert!(!canvas.inbox(3, 3));
        assert!(!canvas.inbox(-1, 0));
        assert!(!canvas.inbox(i32::MIN, i32::MAX));

        let mut none: Vec<Color> = Vec::new();
        let empty = Canvas::new(&mut none, 0, 0);
        assert!(!empty.inbox(0, 0));
    }

    #[test]
    fn test_clipped_writes_are_noops() {
        let mut data = vec![Color::TRANSPARENT; 9];
        let mut canvas = Canvas::new(&mut data, 3, 3);
        canvas.copy_pixel(-1, 0, Color::RED);
        canvas.copy_pixel(3, 0, Color::RED);
        canvas.blend_pixel(0, 3, Color::RED);
        canvas.blend_pixel(0, -7, Color::RED);
        assert!(data.iter().all(|&c| c == Color::TRANSPARENT));
    }

    #[test]
    fn test_blend_pixel_keeps_destination_alpha() {
        let mut data = vec![Color::BLACK; 1];
        let mut canvas = Canvas::new(&mut data, 1, 1);
        canvas.blend_pixel(0, 0, Color::rgba(255, 255, 255, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        canvas.blend_pixel(0, 0, Color::rgba(1, 2, 3, 10).with_alpha(255));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgba(1, 2, 3, 255)));
    }

    #[test]
    fn test_clear_leaves_padding() {
        let pad = Color::rgba(9, 9, 9, 9);
        let mut data = vec![pad; 12];
        Canvas::with_stride(&mut data, 2, 3, 4)
            .unwrap()
            .clear(Color::WHITE);
        for y in 0..3 {
            assert_eq!(data[y * 4], Color::WHITE);
            assert_eq!(data[y * 4 + 1], Color::WHITE);
            assert_eq!(data[y * 4 + 2], pad);
            assert_eq!(data[y * 4 + 3], pad);
        }
    }

    #[test]
    fn test_shade_hspan_clips_and_orders() {
        let mut data = vec![Color::BLACK; 5];
        let mut canvas = Canvas::new(&mut data, 5, 1);
        let mut seen = Vec::new();
        let mut shader = |x: i32, _y: i32| {
            seen.push(x);
            Color::WHITE
        };
        canvas.shade_hspan(7, 0, -3, &mut shader);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(data.iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn test_shade_vspan_outside_column() {
        let mut data = vec![Color::BLACK; 4];
        let mut canvas = Canvas::new(&mut data, 2, 2);
        let mut calls = 0;
        let mut shader = |_x: i32, _y: i32| {
            calls += 1;
            Color::WHITE
        };
        canvas.shade_vspan(2, 0, 1, &mut shader);
        canvas.shade_vspan(-1, 0, 1, &mut shader);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_sub_canvas_writes_stay_inside() {
        let mut data = vec![Color::BLACK; 16];
        {
            let mut canvas = Canvas::new(&mut data, 4, 4);
            let mut sub = canvas.sub_canvas(1, 1, 2, 2).unwrap();
            assert_eq!(sub.width(), 2);
            assert_eq!(sub.height(), 2);
            assert_eq!(sub.stride(), 4);
            sub.clear(Color::WHITE);
            sub.copy_pixel(2, 0, Color::RED); // clipped by the sub-canvas
        }
        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..=2).contains(&x) && (1..=2).contains(&y);
                let expected = if inside { Color::WHITE } else { Color::BLACK };
                assert_eq!(data[y * 4 + x], expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_sub_canvas_clipped_and_empty() {
        let mut data = vec![Color::BLACK; 16];
        let mut canvas = Canvas::new(&mut data, 4, 4);
        let sub = canvas.sub_canvas(-2, 3, 10, 10).unwrap();
        assert_eq!((sub.width(), sub.height()), (4, 1));
        assert!(canvas.sub_canvas(4, 0, 2, 2).is_none());
        assert!(canvas.sub_canvas(0, 0, 0, 2).is_none());
    }

    #[test]
    fn test_copy_from_different_sizes() {
        let mut src_data = vec![Color::RED; 4]; // 2x2
        let src = Canvas::new(&mut src_data, 2, 2);

        let mut dst_data = vec![Color::BLACK; 9]; // 3x3
        let mut dst = Canvas::new(&mut dst_data, 3, 3);
        dst.copy_from(&src);

        assert_eq!(dst.row(0), &[Color::RED, Color::RED, Color::BLACK]);
        assert_eq!(dst.row(1), &[Color::RED, Color::RED, Color::BLACK]);
        assert_eq!(dst.row(2), &[Color::BLACK; 3]);
    }

    #[test]
    fn test_rows_iterator() {
        let mut data = vec![Color::BLACK; 6];
        let canvas = Canvas::with_stride(&mut data, 2, 2, 3).unwrap();
        let rows: Vec<usize> = canvas.rows().map(|r| r.len()).collect();
        assert_eq!(rows, vec![2, 2]);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_as_bytes_layout() {
        let mut data = vec![Color::rgba(1, 2, 3, 4)];
        let canvas = Canvas::new(&mut data, 1, 1);
        let expected = 0x0403_0201u32.to_ne_bytes();
        assert_eq!(canvas.as_bytes(), &expected);
    }
}
