//! Upright capsule shape.
//!
//! Both the kinematic controller and the rigidbody collider are
//! Y-aligned capsules described relative to their owner's position.

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Y-aligned capsule relative to an owning position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapsuleShape {
    /// Total height including both hemispherical caps.
    pub height: f32,
    /// Cap radius.
    pub radius: f32,
    /// Capsule center relative to the owner position.
    pub center: Vec3,
}

impl CapsuleShape {
    /// Creates a capsule whose bottom sits exactly on the owner position.
    pub fn foot_anchored(height: f32, radius: f32) -> Self {
        Self {
            height,
            radius,
            center: Vec3::new(0.0, height * 0.5, 0.0),
        }
    }

    /// Height actually used for geometry. A capsule is never shorter than its two caps.
    #[inline]
    pub fn effective_height(&self) -> f32 {
        self.height.max(2.0 * self.radius)
    }

    /// Lowest point of the capsule for an owner at `position`.
    #[inline]
    pub fn bottom(&self, position: Vec3) -> Vec3 {
        position + self.center - Vec3::Y * (self.effective_height() * 0.5)
    }

    /// Highest point of the capsule for an owner at `position`.
    #[inline]
    pub fn top(&self, position: Vec3) -> Vec3 {
        position + self.center + Vec3::Y * (self.effective_height() * 0.5)
    }

    /// Centers of the bottom and top cap spheres.
    pub fn segment(&self, position: Vec3) -> (Vec3, Vec3) {
        let half_inner = (self.effective_height() * 0.5 - self.radius).max(0.0);
        let c = position + self.center;
        (c - Vec3::Y * half_inner, c + Vec3::Y * half_inner)
    }

    /// True if a sphere overlaps this capsule placed at `position`.
    pub fn overlaps_sphere(&self, position: Vec3, sphere_center: Vec3, sphere_radius: f32) -> bool {
        let (a, b) = self.segment(position);
        let reach = self.radius + sphere_radius;
        crate::point_segment_distance_sqr(sphere_center, a, b) < reach * reach
    }
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self::foot_anchored(1.8, 0.2)
    }
}
