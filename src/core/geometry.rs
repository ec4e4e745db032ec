//! Plain 2D points in logical pixels.
//!
//! The core never sees egui types; the GUI adapter converts at the edge.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_goes_negative_without_clamping() {
        let p = Point::new(10.0, 5.0) - Point::new(50.0, 10.0);
        assert_eq!(p, Point::new(-40.0, -5.0));
    }

    #[test]
    fn test_add() {
        assert_eq!(Point::new(1.0, 2.0) + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
    }
}
