//! Two-color split shader.
//!
//! Paints one color before a threshold on the chosen axis and another at or
//! after it, e.g. the left and right halves of a canvas.

use crate::color::Color;
use crate::shader::{AxisFunction, AxisX, AxisY, Shader};

/// Returns `before` where the axis coordinate is below `threshold`, `after`
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<A: AxisFunction> {
    axis: A,
    threshold: i32,
    before: Color,
    after: Color,
}

/// Left/right split (driven by `x`).
pub type SplitX = Split<AxisX>;
/// Top/bottom split (driven by `y`).
pub type SplitY = Split<AxisY>;

impl<A: AxisFunction + Default> Split<A> {
    pub fn new(threshold: i32, before: Color, after: Color) -> Self {
        Self {
            axis: A::default(),
            threshold,
            before,
            after,
        }
    }
}

impl<A: AxisFunction> Split<A> {
    pub fn set_colors(&mut self, before: Color, after: Color) {
        self.before = before;
        self.after = after;
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }
}

impl<A: AxisFunction> Shader for Split<A> {
    #[inline]
    fn evaluate(&mut self, x: i32, y: i32) -> Color {
        if self.axis.select(x, y) < self.threshold {
            self.before
        } else {
            self.after
        }
    }
}
