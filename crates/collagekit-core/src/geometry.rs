//! 2D value types shared across the workspace.
//!
//! `Vec2` carries pointer positions, pixel offsets, gesture deltas, and
//! excursion bounds. `Size` carries tile and image extents. Both are plain
//! `Copy` data with arithmetic only; all clamping and conversion logic lives
//! in the viewport crate.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if either component is smaller than the other vector's.
    pub fn any_less_than(&self, other: Vec2) -> bool {
        self.x < other.x || self.y < other.y
    }

    /// True if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Width/height extents of a tile or a rendered image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Callers must reject degenerate sizes first; a zero height here
    /// produces an infinite ratio rather than a panic.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True if either extent is non-finite or not strictly positive.
    ///
    /// A degenerate size means the tile has not been laid out yet (or the
    /// host reported garbage) and no geometry may be derived from it.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Converts to a vector (width → x, height → y).
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    fn mul(self, rhs: f64) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(3.0, -2.0);
        let b = Vec2::new(1.0, 5.0);

        assert_eq!(a + b, Vec2::new(4.0, 3.0));
        assert_eq!(a - b, Vec2::new(2.0, -7.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -4.0));
        assert_eq!(-a, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_any_less_than() {
        let a = Vec2::new(10.0, 10.0);
        assert!(Vec2::new(5.0, 20.0).any_less_than(a));
        assert!(Vec2::new(20.0, 5.0).any_less_than(a));
        assert!(!Vec2::new(10.0, 10.0).any_less_than(a));
        assert!(!Vec2::new(20.0, 20.0).any_less_than(a));
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::new(0.0, 100.0).is_degenerate());
        assert!(Size::new(100.0, -1.0).is_degenerate());
        assert!(Size::new(f64::NAN, 100.0).is_degenerate());
        assert!(Size::new(f64::INFINITY, 100.0).is_degenerate());
        assert!(!Size::new(200.0, 100.0).is_degenerate());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Size::new(200.0, 100.0).aspect_ratio(), 2.0);
        assert_eq!(Size::new(100.0, 200.0).aspect_ratio(), 0.5);
    }
}
