//! Axis-aligned rectangle overlap
//!
//! Everything in the play area is an integer rectangle, so collision is a
//! plain interval test on both axes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer rectangle: top-left corner plus size, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.min.x + self.size.x
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        aabb_overlap(self, other)
    }
}

/// True when the interiors of `a` and `b` share at least one pixel.
///
/// Edges that only touch do not count, and empty rectangles never overlap.
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.min.x < b.right() && b.min.x < a.right() && a.min.y < b.bottom() && b.min.y < a.bottom()
}
