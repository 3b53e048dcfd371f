//! Monochrome shader.
//!
//! The simplest shader: ignores the pixel position and returns one color.
//! The color can be changed between rasterization calls, which is how a
//! single shader value paints several shapes in different colors.

use crate::color::Color;
use crate::shader::Shader;

// ============================================================================
// Monochrome
// ============================================================================

/// Returns the same color at every pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Monochrome {
    color: Color,
}

impl Monochrome {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn set_color(&mut self, c: Color) {
        self.color = c;
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl From<Color> for Monochrome {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl Shader for Monochrome {
    #[inline]
    fn evaluate(&mut self, _x: i32, _y: i32) -> Color {
        self.color
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let shader = Monochrome::default();
        assert_eq!(shader.color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_ignores_position() {
        let mut shader = Monochrome::new(Color::BLUE);
        assert_eq!(shader.evaluate(0, 0), Color::BLUE);
        assert_eq!(shader.evaluate(-5, 1_000_000), Color::BLUE);
    }

    #[test]
    fn test_set_color_between_calls() {
        let mut shader = Monochrome::from(Color::RED);
        assert_eq!(shader.evaluate(1, 1), Color::RED);
        shader.set_color(Color::GREEN);
        assert_eq!(shader.evaluate(1, 1), Color::GREEN);
    }
}
