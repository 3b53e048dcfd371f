//! # pastel-raster
//!
//! A small software rasterizer that draws into a caller-owned RGBA8 pixel
//! buffer.
//!
//! - Whole-canvas fills, rectangles and circles
//! - One-pixel lines (per-column interpolation or Bresenham)
//! - Filled triangles (scanline or edge functions)
//! - Pluggable per-pixel shaders: solid, gradient, color cycle, split, or any
//!   closure
//! - Source-over blending that preserves the destination alpha
//!
//! No anti-aliasing, no allocation on the drawing path, no global state.
//!
//! ## Architecture
//!
//! 1. **Canvas** borrows a `[Color]` slice with a width, height and stride and
//!    clips every write to its bounds.
//! 2. **Shader** computes the color of each covered pixel, in the
//!    rasterizer's documented visitation order.
//! 3. **Rasterizers** (`fill`, `line`, `triangle`) decide coverage and blend
//!    shader output into the canvas.
//! 4. **Painter** bundles a canvas with a rasterizer configuration.
//!
//! ```
//! use pastel_raster::{Canvas, Color, PointI};
//! use pastel_raster::triangle::fill_triangle;
//!
//! let mut pixels = vec![Color::BLACK; 16 * 16];
//! let mut canvas = Canvas::new(&mut pixels, 16, 16);
//! fill_triangle(
//!     &mut canvas,
//!     PointI::new(0, 0),
//!     PointI::new(0, 15),
//!     PointI::new(15, 0),
//!     &mut Color::RED,
//! );
//! assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
//! ```

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Pixel storage
pub mod canvas;

// Shaders
pub mod shader;
pub mod shader_cycle;
pub mod shader_gradient;
pub mod shader_solid;
pub mod shader_split;

// Rasterizers
pub mod dda_line;
pub mod fill;
pub mod line;
pub mod triangle;

// Front end
pub mod painter;

pub use basics::{DimU, PointI, RectI};
pub use canvas::Canvas;
pub use color::{blend_over, Color, OrderRgba};
pub use error::{CanvasError, Result};
pub use painter::{Painter, RasterConfig};
pub use shader::Shader;
