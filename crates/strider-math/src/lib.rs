//! # strider-math
//!
//! Geometry primitives for the Strider body engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, etc.)
//! - Capsule shape with foot-anchored placement helpers
//! - Axis-aligned boxes with sphere and footprint queries
//! - A position/rotation/scale pose

pub mod aabb;
pub mod capsule;
pub mod pose;

pub use aabb::Aabb;
pub use capsule::CapsuleShape;
pub use pose::Pose;

// Re-export glam types as the canonical math types for Strider.
pub use glam::{EulerRot, Quat, Vec2, Vec3};

/// Squared distance from `point` to the segment `a`–`b`.
pub fn point_segment_distance_sqr(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return point.distance_squared(a);
    }
    let t = ((point - a).dot(ab) / len2).clamp(0.0, 1.0);
    point.distance_squared(a + ab * t)
}
