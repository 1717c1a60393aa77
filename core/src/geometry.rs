//! Screen-space points, sizes and rectangles shared by the panel and its collaborators.

use serde::{Deserialize, Serialize};

/// A pixel position on the render surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Pixel dimensions of a sprite frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_i32(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn height_i32(&self) -> i32 {
        self.height as i32
    }
}

/// An axis-aligned rectangle anchored at its top-left pixel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: ScreenPos, size: FrameSize) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns `true` when `pos` lies strictly inside the rectangle.
    ///
    /// Pixels on any of the four edges do not count as inside.
    pub fn contains_exclusive(&self, pos: ScreenPos) -> bool {
        pos.x > self.x && pos.x < self.right() && pos.y > self.y && pos.y < self.bottom()
    }

    /// Returns `true` when the two rectangles share at least one interior pixel.
    pub fn overlaps(&self, other: &ScreenRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
