//! Integer width/height rectangle anchored at the origin.

use serde::{Deserialize, Serialize};

use crate::scalar::Real;
use crate::vector2::Coor;

/// Image or viewport dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Geometry {
    /// Create a geometry of `w` by `h`.
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// `w * h`.
    #[inline]
    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// Long side over short side. Infinite when the short side is zero.
    pub fn ratio(&self) -> Real {
        Real::from(self.w.max(self.h)) / Real::from(self.w.min(self.h))
    }

    /// `0 <= x < w` and `0 <= y < h`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.w && y >= 0 && y < self.h
    }

    /// [`contains`](Self::contains) for a coordinate.
    #[inline]
    pub fn contains_coor(&self, c: &Coor) -> bool {
        self.contains(c.x, c.y)
    }
}
