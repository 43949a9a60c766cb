//! Axis-aligned rectangle collision
//!
//! Everything that can collide in the game is a rectangle: the penguin's
//! hitbox and each obstacle. Screen coordinates, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Open-interval overlap test
    ///
    /// Rectangles that only share an edge or a corner do not overlap; any
    /// positive-area intersection does.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Return the index of the first rectangle in `others` overlapping `rect`
pub fn first_overlap(rect: &Rect, others: impl IntoIterator<Item = Rect>) -> Option<usize> {
    others.into_iter().position(|o| rect.overlaps(&o))
}
