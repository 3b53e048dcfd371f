//! Packed 32-bit color and the alpha "over" operator.
//!
//! A [`Color`] stores four 8-bit channels in one `u32`, red in the low byte
//! and alpha in the high byte (`0xAABBGGRR`). On little-endian targets the
//! in-memory byte order is R, G, B, A, which is what encoders and texture
//! uploads expect.

// ============================================================================
// Component order (for encoders)
// ============================================================================

/// RGBA component order: R=0, G=1, B=2, A=3
pub struct OrderRgba;
impl OrderRgba {
    pub const R: usize = 0;
    pub const G: usize = 1;
    pub const B: usize = 2;
    pub const A: usize = 3;
    pub const N: usize = 4;
}

// ============================================================================
// Color
// ============================================================================

/// RGBA color packed into a `u32` as `0xAABBGGRR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MASK: u32 = (1 << Self::BASE_SHIFT) - 1;

    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const RED: Color = Color(0xFF54_72E8);
    pub const GREEN: Color = Color(0xFF79_E854);
    pub const BLUE: Color = Color(0xFFE8_6056);
    pub const YELLOW: Color = Color(0xFF3E_F0AF);
    pub const BLACK: Color = Color(0xFF3A_3C45);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Compose a color from four 8-bit channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Compose an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Compose from wider integers, clamping each channel to `[0, 255]`.
    pub fn rgba_clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        let c = |v: i32| v.clamp(0, Self::BASE_MASK as i32) as u8;
        Self::rgba(c(r), c(g), c(b), c(a))
    }

    /// Extract channel `index` (0 = red, 1 = green, 2 = blue, 3 = alpha).
    ///
    /// Only the low two bits of `index` are used.
    #[inline]
    pub const fn channel(self, index: usize) -> u8 {
        (self.0 >> (Self::BASE_SHIFT as usize * (index & 3))) as u8
    }

    /// Replace channel `index`, leaving the others untouched.
    #[inline]
    pub const fn with_channel(self, index: usize, value: u8) -> Self {
        let shift = Self::BASE_SHIFT as usize * (index & 3);
        Self((self.0 & !(Self::BASE_MASK << shift)) | (value as u32) << shift)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.channel(OrderRgba::R)
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.channel(OrderRgba::G)
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.channel(OrderRgba::B)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.channel(OrderRgba::A)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        self.with_channel(OrderRgba::A, a)
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    pub fn is_transparent(self) -> bool {
        self.a() == 0
    }

    pub fn is_opaque(self) -> bool {
        self.a() == Self::BASE_MASK as u8
    }

    /// Paint `src` over `self` and return the result.
    ///
    /// Per RGB channel: `(src * src_a + dst * (255 - src_a)) / 255`, clamped to
    /// 255. The alpha channel of the result is `self`'s alpha: the destination
    /// is treated as an opaque surface whose coverage never changes.
    #[inline]
    pub fn blend_over(self, src: Color) -> Color {
        let sa = src.a() as u32;
        let inv = Self::BASE_MASK - sa;
        let mix = |d: u8, s: u8| {
            let v = (s as u32 * sa + d as u32 * inv) / Self::BASE_MASK;
            v.min(Self::BASE_MASK) as u8
        };
        Color::rgba(
            mix(self.r(), src.r()),
            mix(self.g(), src.g()),
            mix(self.b(), src.b()),
            self.a(),
        )
    }

    /// Interpolate every channel (alpha included) between `self` and `other`.
    ///
    /// `t` is clamped to `[0, 1]`; results are rounded to nearest.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            let v = a as f32 * (1.0 - t) + b as f32 * t;
            v.round().clamp(0.0, Self::BASE_MASK as f32) as u8
        };
        Color::rgba(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
            mix(self.a(), other.a()),
        )
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Paint `src` over `dst`. Free-function form of [`Color::blend_over`].
#[inline]
pub fn blend_over(dst: Color, src: Color) -> Color {
    dst.blend_over(src)
}

// ============================================================================
// Tests
// ============================================================================
