//! Stateful color-cycling shader.
//!
//! [`Cycle`] ignores the pixel position entirely and instead counts how many
//! times it has been evaluated, switching to the next color every `period`
//! evaluations. Because rasterizers visit pixels in a fixed order, drawing a
//! line with a `Cycle` produces evenly spaced color bands along it.

use crate::color::Color;
use crate::shader::Shader;

// ============================================================================
// Cycle
// ============================================================================

/// Cycles through a list of colors, `period` pixels per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    colors: Vec<Color>,
    period: usize,
    index: usize,
    count: usize,
}

impl Cycle {
    /// A period of 0 is treated as 1. An empty color list makes the shader
    /// return [`Color::TRANSPARENT`], which leaves blended pixels untouched.
    pub fn new(colors: impl Into<Vec<Color>>, period: usize) -> Self {
        Self {
            colors: colors.into(),
            period: period.max(1),
            index: 0,
            count: 0,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Index of the color the next evaluation returns.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Restart from the first color.
    pub fn reset(&mut self) {
        self.index = 0;
        self.count = 0;
    }
}

impl Shader for Cycle {
    fn evaluate(&mut self, _x: i32, _y: i32) -> Color {
        let Some(&c) = self.colors.get(self.index) else {
            return Color::TRANSPARENT;
        };
        self.count += 1;
        if self.count == self.period {
            self.count = 0;
            self.index = (self.index + 1) % self.colors.len();
        }
        c
    }
}

// ============================================================================
// Tests
// ============================================================================
