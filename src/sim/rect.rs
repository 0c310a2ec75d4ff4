//! Axis-aligned rectangles for ball, paddle, and block bounds
//!
//! Screen space: `min` is the top-left corner, y grows downward.
//! Edges are inclusive, so two boxes that share an edge overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box for a ball whose top-left corner is at `pos`
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Horizontal spans touch or overlap
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }

    /// Vertical spans touch or overlap
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.bottom() >= other.top() && self.top() <= other.bottom()
    }

    /// Inclusive AABB overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(50.0, 20.0));
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 40.0);
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let a = Aabb::square(Vec2::ZERO, 20.0);
        let touching = Aabb::square(Vec2::new(20.0, 20.0), 20.0);
        let apart = Aabb::square(Vec2::new(20.5, 0.0), 20.0);

        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Aabb::square(Vec2::ZERO, 20.0);
        let beside = Aabb::square(Vec2::new(0.0, 30.0), 20.0);
        assert!(a.overlaps_x(&beside));
        assert!(!a.overlaps_y(&beside));
        assert!(!a.overlaps(&beside));
    }
}
