//! Area fills: whole canvas, rectangle and circle.
//!
//! Every fill visits covered pixels in raster order (y ascending, then x
//! ascending) and evaluates the shader exactly once per covered pixel.
//! Pixels outside the canvas are skipped without evaluating the shader.

use crate::basics::{saturate_i32, DimU, PointI, RectI};
use crate::canvas::Canvas;
use crate::shader::Shader;

/// Replace every pixel with the shader's output. No blending.
pub fn fill<S: Shader + ?Sized>(canvas: &mut Canvas<'_>, shader: &mut S) {
    for y in 0..canvas.height() {
        let row = canvas.row_mut(y);
        for (x, p) in row.iter_mut().enumerate() {
            *p = shader.evaluate(x as i32, y as i32);
        }
    }
}

/// Paint the shader's output over every pixel.
pub fn fill_blend<S: Shader + ?Sized>(canvas: &mut Canvas<'_>, shader: &mut S) {
    for y in 0..canvas.height() {
        let row = canvas.row_mut(y);
        for (x, p) in row.iter_mut().enumerate() {
            *p = p.blend_over(shader.evaluate(x as i32, y as i32));
        }
    }
}

/// Blend a rectangle with top-left corner `pos`.
///
/// Both bounds are inclusive: the rectangle covers `pos.x ..= pos.x + dim.x`
/// and `pos.y ..= pos.y + dim.y`, so it is `dim.x + 1` by `dim.y + 1` pixels
/// before clipping.
pub fn fill_rect<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    pos: PointI,
    dim: DimU,
    shader: &mut S,
) {
    let mut r = RectI::new(
        pos.x,
        pos.y,
        saturate_i32(pos.x as i64 + dim.x as i64),
        saturate_i32(pos.y as i64 + dim.y as i64),
    );
    if !r.clip(&canvas.bounds()) {
        log::trace!("fill_rect: {:?} {:?} lies outside the canvas", pos, dim);
        return;
    }
    for y in r.y1..=r.y2 {
        canvas.shade_hspan(r.x1, y, r.x2, shader);
    }
}

/// Blend the disk of all pixels within `radius` of `center`.
///
/// A pixel is covered when `dx² + dy² <= radius²` (exact integer
/// arithmetic, inclusive boundary). Radius 0 covers the center pixel only.
/// Any `center` and `radius` are accepted; the disk is clipped to the canvas.
pub fn fill_circle<S: Shader + ?Sized>(
    canvas: &mut Canvas<'_>,
    center: PointI,
    radius: u32,
    shader: &mut S,
) {
    let r = radius as i64;
    let mut aabb = RectI::new(
        saturate_i32(center.x as i64 - r),
        saturate_i32(center.y as i64 - r),
        saturate_i32(center.x as i64 + r),
        saturate_i32(center.y as i64 + r),
    );
    if !aabb.clip(&canvas.bounds()) {
        log::trace!("fill_circle: {:?} r={} lies outside the canvas", center, radius);
        return;
    }
    // Both squares reach 2^64 for extreme inputs
    let r2 = r as i128 * r as i128;
    for y in aabb.y1..=aabb.y2 {
        let dy = (y as i64 - center.y as i64) as i128;
        let dy2 = dy * dy;
        for x in aabb.x1..=aabb.x2 {
            let dx = (x as i64 - center.x as i64) as i128;
            if dx * dx + dy2 <= r2 {
                canvas.shade_pixel(x, y, shader);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
