//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a box-vs-box overlap test. Boxes are rebuilt
//! from an entity's position and fixed half-extents each tick, never cached.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::extents_to_corners;

/// An axis-aligned box (no rotation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centered on `center`, extending `half_extents` along each axis
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let (min, max) = extents_to_corners(center, half_extents);
        Self { min, max }
    }

    /// Closed-interval overlap on all three axes (touching faces intersect)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// The eight corners, bottom face first (used for wireframe drawing)
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }
}

/// Corner index pairs forming the 12 edges of a box from `Aabb::corners`
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::new(0.7, 0.2, -0.3), Vec3::splat(0.4));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        // Overlaps on x and y, separated on z
        let b = Aabb::from_center(Vec3::new(0.1, 0.1, 2.0), Vec3::splat(0.5));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_from_center_corners() {
        let aabb = Aabb::from_center(Vec3::new(1.0, 0.5, 3.0), Vec3::new(2.0, 0.5, 1.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 1.0, 4.0));
    }

    #[test]
    fn test_corners_span_box() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        let corners = aabb.corners();
        assert_eq!(corners[0], Vec3::splat(-1.0));
        assert_eq!(corners[6], Vec3::ONE);
        for (a, b) in BOX_EDGES {
            // Every edge runs along exactly one axis
            let d = (corners[a] - corners[b]).abs();
            let axes = [d.x, d.y, d.z].iter().filter(|v| **v > 0.0).count();
            assert_eq!(axes, 1);
        }
    }
}
