//! Filled triangles.
//!
//! Three rasterizers with the same contract: every pixel enclosed by the three
//! integer vertices, boundary included, is blended once.
//!
//! - [`fill_triangle`] splits the triangle at its middle vertex and fills
//!   horizontal spans between the interpolated edges.
//! - [`fill_triangle_oriented`] tests every pixel of the clipped bounding box
//!   against three edge functions and requires a fixed winding.
//! - [`fill_triangle_unoriented`] uses the same test but accepts either
//!   winding.
//!
//! All three visit pixels in raster order and treat a triangle whose vertices
//! share one row or one column as empty.

use crate::basics::{saturate_i32, sort3_by_y, PointI, RectI};
use crate::canvas::Canvas;
use crate::shader::Shader;

// ============================================================================
// Algorithm selection
// ============================================================================

/// Which triangle rasterizer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleAlgorithm {
    /// Span filling between edges ([`fill_triangle`]).
    #[default]
    Scanline,
    /// Edge functions, counter-clockwise winding only ([`fill_triangle_oriented`]).
    EdgeOriented,
    /// Edge functions, either winding ([`fill_triangle_unoriented`]).
    EdgeUnoriented,
}

/// Fill a triangle with the chosen algorithm.
pub fn fill_triangle_with<S: Shader + ?Sized>(
    algorithm: TriangleAlgorithm,
    canvas: &mut Canvas<'_>,
    p1: PointI,
    p2: PointI,
    p3: PointI,
    shader: &mut S,
) {
    match algorithm {
        TriangleAlgorithm::Scanline => fill_triangle(canvas, p1, p2, p3, shader),
        TriangleAlgorithm::EdgeOriented => fill_triangle_oriented(canvas, p1, p2, p3, shader),
        TriangleAlgorithm::EdgeUnoriented => fill_triangle_unoriented(canvas, p1, p2, p3, shader),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// True if all three vertices share a row or all three share a column.
#[inline]
pub fn is_degenerate(p1: PointI, p2: PointI, p3: PointI) -> bool {
    (p1.y == p2.y && p1.y == p3.y) || (p1.x == p2.x && p1.x == p3.x)
}

/// Signed distance-like value of `p` relative to the directed edge `a → b`.
///
/// `(p.x - a.x)·(a.y - b.y) + (p.y - a.y)·(b.x - a.x)`, exact for any
/// `i32` inputs. Zero on the edge's line; positive on the inner side of an
/// edge of a counter-clockwise triangle in a y-down frame.
#[inline]
pub fn edge_function(a: PointI, b: PointI, p: PointI) -> i128 {
    (p.x as i128 - a.x as i128) * (a.y as i128 - b.y as i128)
        + (p.y as i128 - a.y as i128) * (b.x as i128 - a.x as i128)
}

/// Bounding box of the triangle clipped to the canvas, or `None` if the call
/// has nothing to draw.
fn clipped_bounds(canvas: &Canvas<'_>, p1: PointI, p2: PointI, p3: PointI) -> Option<RectI> {
    if is_degenerate(p1, p2, p3) {
        log::trace!("triangle {:?} {:?} {:?} is degenerate", p1, p2, p3);
        return None;
    }
    let mut bbox = RectI::bounding_box3(p1, p2, p3);
    if !bbox.clip(&canvas.bounds()) {
        log::trace!("triangle {:?} {:?} {:?} lies outside the canvas", p1, p2, p3);
        return None;
    }
    Some(bbox)
}

/// x of the edge through `anchor` with slope `dx/dy` at row `y`.
/// A flat edge (`dy == 0`) stays at `anchor.x`.
#[inline]
fn edge_x(anchor: PointI, dx: i128, dy: i128, y: i32) -> i32 {
    if dy == 0 {
        anchor.x
    } else {
        saturate_i32(anchor.x as i128 + ((y as i128 - anchor.y as i128) * dx) / dy)
    }
}

// ============================================================================
// Scanline
// ============================================================================

/// Fill a triangle span by span.
///
/// The vertices are sorted by y into `v0`, `v1`, `v2`. The upper half covers
/// rows `[v0.y, v1.y)` between the edges `v0→v1` and `v0→v2`; the lower half
/// covers `[v1.y, v2.y]` between `v0→v2` and `v1→v2`. A flat-bottomed
/// triangle has no lower half and its upper half includes `v1.y`. Each row
/// is filled once, x ascending. Winding does not matter.
pub fn fill_triangle<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p1: PointI,
    p2: PointI,
    p3: PointI,
    shader: &mut S,
) {
    let Some(bbox) = clipped_bounds(canvas, p1, p2, p3) else {
        return;
    };
    let [v0, v1, v2] = sort3_by_y(p1, p2, p3);

    // Upper half, anchored at v0
    let upper_end = if v1.y == v2.y { v1.y } else { v1.y.saturating_sub(1) };
    let (dx01, dy01) = (v1.x as i128 - v0.x as i128, v1.y as i128 - v0.y as i128);
    let (dx02, dy02) = (v2.x as i128 - v0.x as i128, v2.y as i128 - v0.y as i128);
    for y in v0.y.max(bbox.y1)..=upper_end.min(bbox.y2) {
        let xa = edge_x(v0, dx01, dy01, y);
        let xb = edge_x(v0, dx02, dy02, y);
        canvas.shade_hspan(xa, y, xb, shader);
    }

    if v1.y == v2.y {
        return;
    }

    // Lower half, anchored at v2
    let (dx12, dy12) = (v2.x as i128 - v1.x as i128, v2.y as i128 - v1.y as i128);
    for y in v1.y.max(bbox.y1)..=v2.y.min(bbox.y2) {
        let xa = edge_x(v2, dx02, dy02, y);
        let xb = edge_x(v2, dx12, dy12, y);
        canvas.shade_hspan(xa, y, xb, shader);
    }
}

// ============================================================================
// Edge functions
// ============================================================================

/// Fill a counter-clockwise triangle by testing every pixel of its bounding
/// box.
///
/// Counter-clockwise here means as seen on screen with y pointing down, for
/// example `(0,0), (0,10), (10,0)`. The edges `p1→p3`, `p3→p2`, `p2→p1` are
/// tested in that order and a pixel is rejected at the first negative value.
/// A clockwise triangle draws nothing.
pub fn fill_triangle_oriented<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p1: PointI,
    p2: PointI,
    p3: PointI,
    shader: &mut S,
) {
    let Some(bbox) = clipped_bounds(canvas, p1, p2, p3) else {
        return;
    };
    for y in bbox.y1..=bbox.y2 {
        for x in bbox.x1..=bbox.x2 {
            let p = PointI::new(x, y);
            if edge_function(p1, p3, p) < 0
                || edge_function(p3, p2, p) < 0
                || edge_function(p2, p1, p) < 0
            {
                continue;
            }
            canvas.shade_pixel(x, y, shader);
        }
    }
}

/// Fill a triangle of either winding by testing every pixel of its bounding
/// box.
///
/// A pixel is inside unless the three edge values mix strictly positive and
/// strictly negative signs.
pub fn fill_triangle_unoriented<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    p1: PointI,
    p2: PointI,
    p3: PointI,
    shader: &mut S,
) {
    let Some(bbox) = clipped_bounds(canvas, p1, p2, p3) else {
        return;
    };
    for y in bbox.y1..=bbox.y2 {
        for x in bbox.x1..=bbox.x2 {
            let p = PointI::new(x, y);
            let d = [
                edge_function(p1, p3, p),
                edge_function(p3, p2, p),
                edge_function(p2, p1, p),
            ];
            let has_neg = d.iter().any(|&v| v < 0);
            let has_pos = d.iter().any(|&v| v > 0);
            if !(has_neg && has_pos) {
                canvas.shade_pixel(x, y, shader);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
