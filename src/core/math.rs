// Math utilities: axis-aligned rectangles and helpers

use glam::Vec2;

/// Axis-aligned rectangle anchored at its bottom-left corner (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a square rectangle at a position
    pub fn square(position: Vec2, size: f32) -> Self {
        Self::new(position.x, position.y, size, size)
    }

    /// Bottom-left corner
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Four corners, counter-clockwise from the bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.x, self.top()),
        ]
    }

    /// Copy of this rectangle moved by an offset
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(
            self.x + offset.x,
            self.y + offset.y,
            self.width,
            self.height,
        )
    }

    /// Strict intersection test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.top().max(other.top()) - y,
        )
    }
}
