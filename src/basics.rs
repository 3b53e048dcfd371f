//! Foundation types and small geometry helpers.
//!
//! Points, dimensions, inclusive rectangles, and the min/max/sort helpers
//! shared by every rasterizer.

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer pixel position. May lie outside the canvas.
pub type PointI = PointBase<i32>;

/// Unsigned extent: `x` is the width, `y` the height.
pub type DimU = PointBase<u32>;

impl From<(i32, i32)> for PointI {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for DimU {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub const fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle, edges
    /// included. Always `false` for an invalid rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

impl RectI {
    /// Axis-aligned bounding box of three points.
    pub fn bounding_box3(p1: PointI, p2: PointI, p3: PointI) -> Self {
        Self::new(
            min3(p1.x, p2.x, p3.x),
            min3(p1.y, p2.y, p3.y),
            max3(p1.x, p2.x, p3.x),
            max3(p1.y, p2.y, p3.y),
        )
    }

    /// Width in pixels (inclusive bounds). Zero for an invalid rectangle,
    /// saturated at `u32::MAX` for the full `i32` range.
    pub fn width(&self) -> u32 {
        if self.is_valid() {
            (self.x2 as i64 - self.x1 as i64 + 1).min(u32::MAX as i64) as u32
        } else {
            0
        }
    }

    /// Height in pixels (inclusive bounds). Zero for an invalid rectangle,
    /// saturated at `u32::MAX` for the full `i32` range.
    pub fn height(&self) -> u32 {
        if self.is_valid() {
            (self.y2 as i64 - self.y1 as i64 + 1).min(u32::MAX as i64) as u32
        } else {
            0
        }
    }
}

// ============================================================================
// Min / max / sort helpers
// ============================================================================

#[inline]
pub fn min3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let mut m = a;
    if m > b {
        m = b;
    }
    if m > c {
        m = c;
    }
    m
}

#[inline]
pub fn max3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let mut m = a;
    if m < b {
        m = b;
    }
    if m < c {
        m = c;
    }
    m
}

/// Stable sort of three points by ascending `y` (three compare-swaps).
///
/// Points with equal `y` keep their relative order.
#[inline]
pub fn sort3_by_y(p1: PointI, p2: PointI, p3: PointI) -> [PointI; 3] {
    let mut v = [p1, p2, p3];
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    if v[1].y > v[2].y {
        v.swap(1, 2);
    }
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    v
}

/// Clamp a wide integer into the `i32` range.
#[inline]
pub(crate) fn saturate_i32(v: impl Into<i128>) -> i32 {
    v.into().clamp(i32::MIN as i128, i32::MAX as i128) as i32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min3_max3() {
        assert_eq!(min3(3, 1, 2), 1);
        assert_eq!(min3(-5, 1, 2), -5);
        assert_eq!(max3(3, 1, 2), 3);
        assert_eq!(max3(3, 1, 7), 7);
        assert_eq!(max3(0.5, 1.5, -2.0), 1.5);
    }

    #[test]
    fn test_sort3_by_y() {
        let a = PointI::new(0, 5);
        let b = PointI::new(1, 0);
        let c = PointI::new(2, 3);
        assert_eq!(sort3_by_y(a, b, c), [b, c, a]);
    }

    #[test]
    fn test_sort3_by_y_is_stable() {
        let a = PointI::new(0, 0);
        let b = PointI::new(4, 0);
        let c = PointI::new(9, 0);
        assert_eq!(sort3_by_y(a, b, c), [a, b, c]);

        let d = PointI::new(7, 4);
        let e = PointI::new(1, 2);
        let f = PointI::new(3, 2);
        assert_eq!(sort3_by_y(d, e, f), [e, f, d]);
    }

    #[test]
    fn test_rect_normalize() {
        let mut r = RectI::new(10, 20, 0, 5);
        r.normalize();
        assert_eq!(r, RectI::new(0, 5, 10, 20));
    }

    #[test]
    fn test_rect_clip() {
        let mut r = RectI::new(-5, -5, 50, 3);
        assert!(r.clip(&RectI::new(0, 0, 9, 9)));
        assert_eq!(r, RectI::new(0, 0, 9, 3));

        let mut outside = RectI::new(20, 20, 30, 30);
        assert!(!outside.clip(&RectI::new(0, 0, 9, 9)));
    }

    #[test]
    fn test_rect_hit_test_inclusive() {
        let r = RectI::new(0, 0, 4, 4);
        assert!(r.hit_test(0, 0));
        assert!(r.hit_test(4, 4));
        assert!(!r.hit_test(5, 4));
        assert!(!r.hit_test(-1, 0));
        assert!(!RectI::new(0, 0, -1, -1).hit_test(0, 0));
    }

    #[test]
    fn test_bounding_box3() {
        let r = RectI::bounding_box3(
            PointI::new(3, -2),
            PointI::new(-1, 7),
            PointI::new(5, 0),
        );
        assert_eq!(r, RectI::new(-1, -2, 5, 7));
        assert_eq!(r.width(), 7);
        assert_eq!(r.height(), 10);
    }

    #[test]
    fn test_rect_extent_of_full_range_saturates() {
        let r = RectI::new(i32::MIN, i32::MIN, i32::MAX, 0);
        assert_eq!(r.width(), u32::MAX);
        assert_eq!(r.height(), (i32::MIN as i64).unsigned_abs() as u32 + 1);
        let tall = RectI::new(0, i32::MIN, 0, i32::MAX);
        assert_eq!(tall.height(), u32::MAX);
        assert_eq!(tall.width(), 1);
    }

    #[test]
    fn test_saturate_i32() {
        assert_eq!(saturate_i32(i64::MAX), i32::MAX);
        assert_eq!(saturate_i32(i64::MIN), i32::MIN);
        assert_eq!(saturate_i32(-7i64), -7);
        assert_eq!(saturate_i32(i128::MAX), i32::MAX);
    }

    #[test]
    fn test_rect_extent_of_invalid() {
        let r = RectI::new(1, 1, 0, 0);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: PointI = (3, -4).into();
        assert_eq!(p, PointI::new(3, -4));
        let d: DimU = (9, 9).into();
        assert_eq!(d.x, 9);
        assert_eq!(d.y, 9);
    }
}
