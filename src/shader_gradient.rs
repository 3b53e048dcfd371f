//! One-dimensional linear gradient shader.
//!
//! [`gradient_1d`] maps a scalar to a color between two endpoints; the
//! [`Gradient1D`] shader feeds it either the `x` or the `y` coordinate,
//! selected by an [`AxisFunction`] type parameter.

use crate::color::Color;
use crate::shader::{AxisFunction, AxisX, AxisY, Shader};

// ============================================================================
// Gradient function
// ============================================================================

/// Interpolate between `from` and `to` as `v` moves across `[min, max]`.
///
/// `t = clamp((v - min) / (max - min), 0, 1)` and every channel (alpha
/// included) is `from * (1 - t) + to * t`, rounded to nearest.
///
/// A collapsed span (`max <= min`) is a hard step: `from` below `min`, `to`
/// at or above it.
pub fn gradient_1d(v: i32, min: i32, max: i32, from: Color, to: Color) -> Color {
    if max <= min {
        return if v < min { from } else { to };
    }
    let t = (v as f64 - min as f64) / (max as f64 - min as f64);
    from.lerp(to, t as f32)
}

// ============================================================================
// Gradient1D
// ============================================================================

/// Linear gradient along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient1D<A: AxisFunction> {
    axis: A,
    from: Color,
    to: Color,
    min: i32,
    max: i32,
}

/// Horizontal gradient (driven by `x`).
pub type GradientX = Gradient1D<AxisX>;
/// Vertical gradient (driven by `y`).
pub type GradientY = Gradient1D<AxisY>;

impl<A: AxisFunction + Default> Gradient1D<A> {
    pub fn new(from: Color, to: Color, min: i32, max: i32) -> Self {
        Self::with_axis(A::default(), from, to, min, max)
    }
}

impl<A: AxisFunction> Gradient1D<A> {
    pub fn with_axis(axis: A, from: Color, to: Color, min: i32, max: i32) -> Self {
        Self {
            axis,
            from,
            to,
            min,
            max,
        }
    }

    pub fn set_colors(&mut self, from: Color, to: Color) {
        self.from = from;
        self.to = to;
    }

    pub fn set_span(&mut self, min: i32, max: i32) {
        self.min = min;
        self.max = max;
    }

    pub fn from_color(&self) -> Color {
        self.from
    }

    pub fn to_color(&self) -> Color {
        self.to
    }

    pub fn span(&self) -> (i32, i32) {
        (self.min, self.max)
    }
}

impl<A: AxisFunction> Shader for Gradient1D<A> {
    #[inline]
    fn evaluate(&mut self, x: i32, y: i32) -> Color {
        gradient_1d(
            self.axis.select(x, y),
            self.min,
            self.max,
            self.from,
            self.to,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
