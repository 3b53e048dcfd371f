//! Integer line interpolation.
//!
//! [`BresenhamInterpolator`] walks the pixels of a segment along its major
//! axis using the classic error accumulator: one pixel per major step, no
//! division and no floating point.

use crate::basics::PointI;

// ============================================================================
// Bresenham interpolator
// ============================================================================

/// Bresenham stepping between two integer points.
///
/// If `|Δy| > |Δx|` the line is vertical-major and the roles of x and y are
/// swapped internally. The endpoints are ordered so that the major coordinate
/// ascends, so the yielded points always run left to right (or top to bottom
/// for vertical-major lines), whichever endpoint was given first.
///
/// The error starts at 0. After each plotted pixel it grows by `2·|Δminor|`;
/// once it exceeds `Δmajor` the minor coordinate moves one step towards the
/// far endpoint and the error drops by `2·Δmajor`.
#[derive(Debug, Clone)]
pub struct BresenhamInterpolator {
    major: i32,
    minor: i32,
    major_end: i32,
    inc: i32,
    ver: bool,
    err: i64,
    err_inc: i64,
    err_dec: i64,
    threshold: i64,
    done: bool,
}

impl BresenhamInterpolator {
    pub fn new(p0: PointI, p1: PointI) -> Self {
        let ver = (p1.y as i64 - p0.y as i64).abs() > (p1.x as i64 - p0.x as i64).abs();
        let (mut a, mut b) = if ver {
            ((p0.y, p0.x), (p1.y, p1.x))
        } else {
            ((p0.x, p0.y), (p1.x, p1.y))
        };
        if a.0 > b.0 {
            core::mem::swap(&mut a, &mut b);
        }
        let d_major = b.0 as i64 - a.0 as i64;
        let d_minor = b.1 as i64 - a.1 as i64;
        Self {
            major: a.0,
            minor: a.1,
            major_end: b.0,
            inc: if d_minor < 0 { -1 } else { 1 },
            ver,
            err: 0,
            err_inc: 2 * d_minor.abs(),
            err_dec: 2 * d_major,
            threshold: d_major,
            done: false,
        }
    }

    /// True if the line is vertical-major.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    /// Minor-axis direction (+1 or -1).
    #[inline]
    pub fn inc(&self) -> i32 {
        self.inc
    }

    /// Number of pixels still to be yielded.
    pub fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.major_end as i64 - self.major as i64 + 1) as usize
        }
    }

    /// Restrict the walk to major coordinates in `lo ..= hi`.
    ///
    /// The pixels yielded afterwards are exactly those of the unrestricted
    /// walk whose major coordinate lies in the range. Leading pixels are
    /// skipped in one step: after `n` steps the error is
    /// `e + 2n·|Δminor| - 2m·Δmajor` for the unique `m` that keeps it in
    /// `(-Δmajor, Δmajor]`.
    pub fn clip_major(&mut self, lo: i32, hi: i32) {
        if self.done {
            return;
        }
        self.major_end = self.major_end.min(hi);
        if lo > self.major_end || self.major > self.major_end {
            self.done = true;
            return;
        }
        if lo > self.major {
            let n = lo as i128 - self.major as i128;
            let sum = self.err as i128 + n * self.err_inc as i128;
            let m = (sum + self.threshold as i128 - 1) / self.err_dec as i128;
            self.err = (sum - m * self.err_dec as i128) as i64;
            self.minor = (self.minor as i64 + self.inc as i64 * m as i64) as i32;
            self.major = lo;
        }
    }

    #[inline]
    fn current(&self) -> PointI {
        if self.ver {
            PointI::new(self.minor, self.major)
        } else {
            PointI::new(self.major, self.minor)
        }
    }
}

impl Iterator for BresenhamInterpolator {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.done {
            return None;
        }
        let p = self.current();
        if self.major == self.major_end {
            self.done = true;
            return Some(p);
        }
        self.major += 1;
        self.err += self.err_inc;
        if self.err > self.threshold {
            self.minor += self.inc;
            self.err -= self.err_dec;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamInterpolator {}

impl core::iter::FusedIterator for BresenhamInterpolator {}

// ============================================================================
// Tests
// ============================================================================
