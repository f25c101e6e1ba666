//! Room geometry
//!
//! Axis-aligned rectangles with half-open bounds `[x1, x2) × [y1, y2)`.

use serde::{Deserialize, Serialize};

/// Grid coordinate `(x, y)`
pub type Pos = (i32, i32);

/// Rectangle representing a room interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left edge (inclusive)
    pub x1: i32,
    /// Top edge (inclusive)
    pub y1: i32,
    /// Right edge (exclusive)
    pub x2: i32,
    /// Bottom edge (exclusive)
    pub y2: i32,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x.saturating_add(width),
            y2: y.saturating_add(height),
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> i32 {
        self.width() * self.height()
    }

    /// Get center point of room (rounded toward the top-left)
    pub fn center(&self) -> Pos {
        (
            (self.x1 + self.x2).div_euclid(2),
            (self.y1 + self.y2).div_euclid(2),
        )
    }

    /// Check if this rectangle comes within `buffer` cells of another
    ///
    /// The comparison is inclusive, so rectangles that touch at `buffer`
    /// distance still count as intersecting.
    pub fn intersects(&self, other: &Rectangle, buffer: i32) -> bool {
        self.x1 <= other.x2.saturating_add(buffer)
            && self.x2 >= other.x1.saturating_sub(buffer)
            && self.y1 <= other.y2.saturating_add(buffer)
            && self.y2 >= other.y1.saturating_sub(buffer)
    }

    /// Check if point is inside room
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// All interior positions, row by row
    pub fn tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.y1..self.y2).flat_map(move |y| (self.x1..self.x2).map(move |x| (x, y)))
    }
}

/// Squared Euclidean distance between two points
pub fn dist_sq(a: Pos, b: Pos) -> i64 {
    let dx = (a.0 - b.0) as i64;
    let dy = (a.1 - b.1) as i64;
    dx * dx + dy * dy
}
