//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

use crate::{Vec2, Vec3};

/// Axis-aligned box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Point of the box closest to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// True if a sphere strictly overlaps the box.
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) < radius * radius
    }

    /// True if a disc of `radius` at `xz` overlaps the box footprint on the XZ plane.
    pub fn footprint_overlaps_disc(&self, xz: Vec2, radius: f32) -> bool {
        let cx = xz.x.clamp(self.min.x, self.max.x);
        let cz = xz.y.clamp(self.min.z, self.max.z);
        let dx = xz.x - cx;
        let dz = xz.y - cz;
        dx * dx + dz * dz < radius * radius
    }

    /// Translates the box in place.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.min += delta;
        self.max += delta;
    }

    /// True if min ≤ max on every axis and all coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }
}
