//! One-pixel-thick line segments.
//!
//! Two rasterizers are provided. [`draw_line`] fills, for every column, the
//! run of rows the ideal segment crosses in that column, so steep lines stay
//! connected. [`draw_line_bresenham`] plots exactly one pixel per major-axis
//! step via [`BresenhamInterpolator`]; it is thinner on steep lines.
//!
//! Both blend every covered pixel and clip per pixel. Axis-aligned segments
//! go through the same path in both, so they produce identical output.

use crate::basics::{saturate_i32, PointI, RectI};
use crate::canvas::Canvas;
use crate::dda_line::BresenhamInterpolator;
use crate::shader::Shader;

// ============================================================================
// Algorithm selection
// ============================================================================

/// Which line rasterizer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Per-column slope interpolation ([`draw_line`]).
    #[default]
    Interpolated,
    /// Error accumulator, one pixel per major step ([`draw_line_bresenham`]).
    Bresenham,
}

/// Draw a segment with the chosen algorithm.
pub fn draw_line_with<S: Shader + ?Sized>(
    algorithm: LineAlgorithm,
    canvas: &mut Canvas<'_>,
    p0: PointI,
    p1: PointI,
    shader: &mut S,
) {
    match algorithm {
        LineAlgorithm::Interpolated => draw_line(canvas, p0, p1, shader),
        LineAlgorithm::Bresenham => draw_line_bresenham(canvas, p0, p1, shader),
    }
}

// ============================================================================
// Axis-aligned segments
// ============================================================================

/// Handle vertical and horizontal segments.
///
/// A vertical segment fills its column with y ascending, a horizontal one
/// fills its row with x ascending. A single point counts as vertical.
/// Returns `false` (and draws nothing) if the segment is neither.
pub fn draw_axis_aligned<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p0: PointI,
    p1: PointI,
    shader: &mut S,
) -> bool {
    if p0.x == p1.x {
        canvas.shade_vspan(p0.x, p0.y, p1.y, shader);
        true
    } else if p0.y == p1.y {
        canvas.shade_hspan(p0.x, p0.y, p1.x, shader);
        true
    } else {
        false
    }
}

// ============================================================================
// Interpolated lines
// ============================================================================

/// Draw a segment column by column.
///
/// Endpoints are ordered so that `x0 <= x1`. For each column `x` in
/// `[x0, x1]` the rows from `y0 + (x - x0)·dy/dx` to `y0 + (x + 1 - x0)·dy/dx`
/// (integer division truncating towards zero, multiply first) are filled
/// with y ascending. Every column of the segment gets at least one pixel.
/// The last column may run one slope step past `p1`.
pub fn draw_line<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p0: PointI,
    p1: PointI,
    shader: &mut S,
) {
    if draw_axis_aligned(canvas, p0, p1, shader) {
        return;
    }
    let (a, b) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
    // Products of two 33-bit deltas need more than 64 bits
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;

    // Only the column range can be culled up front: the last column may
    // extend beyond the endpoints' y range.
    let x_first = a.x.max(0);
    let x_last = b.x.min(saturate_i32(canvas.width() as i64 - 1));
    if x_first > x_last || canvas.is_empty() {
        log::trace!("draw_line: {:?}-{:?} has no column on the canvas", p0, p1);
        return;
    }

    for x in x_first..=x_last {
        let k = x as i128 - a.x as i128;
        let ystart = a.y as i128 + (k * dy) / dx;
        let yend = a.y as i128 + ((k + 1) * dy) / dx;
        canvas.shade_vspan(x, saturate_i32(ystart), saturate_i32(yend), shader);
    }
}

// ============================================================================
// Bresenham lines
// ============================================================================

/// Draw a segment with one pixel per major-axis step.
///
/// Pixels are visited in ascending major-axis order; see
/// [`BresenhamInterpolator`] for the stepping rule. The walk starts where
/// the segment enters the canvas along its major axis and stops at the far
/// canvas edge, so off-canvas stretches cost nothing.
pub fn draw_line_bresenham<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p0: PointI,
    p1: PointI,
    shader: &mut S,
) {
    if draw_axis_aligned(canvas, p0, p1, shader) {
        return;
    }
    let mut bbox = RectI::new(p0.x, p0.y, p1.x, p1.y);
    bbox.normalize();
    if !bbox.clip(&canvas.bounds()) {
        log::trace!("draw_line_bresenham: {:?}-{:?} lies outside the canvas", p0, p1);
        return;
    }
    let mut it = BresenhamInterpolator::new(p0, p1);
    let major_len = if it.is_ver() { canvas.height() } else { canvas.width() };
    it.clip_major(0, saturate_i32(major_len as i64 - 1));
    for p in it {
        canvas.shade_pixel(p.x, p.y, shader);
    }
}

// ============================================================================
// Tests
// ============================================================================
