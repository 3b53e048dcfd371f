//! The per-pixel color computation interface.
//!
//! A [`Shader`] is evaluated once for every pixel a rasterizer covers, in
//! the rasterizer's documented visitation order. Evaluation takes `&mut self`:
//! shaders may carry state that changes from one pixel to the next (see
//! [`crate::shader_cycle::Cycle`]), and their output is allowed to depend on
//! every earlier call within the same rasterization.
//!
//! Anything with the right shape is a shader:
//!
//! - any `FnMut(i32, i32) -> Color` closure,
//! - a bare [`Color`] (constant shader),
//! - the built-in variants in the `shader_*` modules.
//!
//! Rasterizers take `&mut S` with `S: Shader + ?Sized`, so both concrete
//! types and `&mut dyn Shader` work.

use crate::color::Color;

// ============================================================================
// Shader trait
// ============================================================================

/// Computes the color of the pixel at (x, y).
pub trait Shader {
    fn evaluate(&mut self, x: i32, y: i32) -> Color;
}

impl<F> Shader for F
where
    F: FnMut(i32, i32) -> Color,
{
    #[inline]
    fn evaluate(&mut self, x: i32, y: i32) -> Color {
        self(x, y)
    }
}

/// A plain color is a constant shader.
impl Shader for Color {
    #[inline]
    fn evaluate(&mut self, _x: i32, _y: i32) -> Color {
        *self
    }
}

// ============================================================================
// Axis selection (shared by 1-D shaders)
// ============================================================================

/// Selects which coordinate feeds a one-dimensional shader.
pub trait AxisFunction {
    fn select(&self, x: i32, y: i32) -> i32;
}

/// Feeds `x`, ignores `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisX;

impl AxisFunction for AxisX {
    #[inline]
    fn select(&self, x: i32, _y: i32) -> i32 {
        x
    }
}

/// Feeds `y`, ignores `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisY;

impl AxisFunction for AxisY {
    #[inline]
    fn select(&self, _x: i32, y: i32) -> i32 {
        y
    }
}

// ============================================================================
// Tests
// ============================================================================
