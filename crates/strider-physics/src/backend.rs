//! Physics service traits consumed by the body engine.
//!
//! The three traits mirror the primitives a host engine offers:
//! a kinematic capsule controller moved by explicit calls, a dynamic
//! rigidbody with a capsule collider, and scene queries plus pairwise
//! collision filtering.

use strider_math::{CapsuleShape, Vec3};
use strider_types::{ColliderId, LayerId};

use crate::flags::CollisionFlags;

/// Capsule and skin width of a kinematic controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerShape {
    /// Capsule relative to the controller position.
    pub capsule: CapsuleShape,
    /// Inset margin kept between the capsule and any surface.
    pub skin_width: f32,
}

/// A capsule controller moved by explicit calls, unaffected by forces.
///
/// The controller position is its transform origin; the capsule hangs off it
/// through [`CapsuleShape::center`].
pub trait KinematicController {
    /// Collider that represents the controller in the scene.
    fn controller_collider(&self) -> ColliderId;

    /// Layer of the controller collider.
    fn controller_layer(&self) -> LayerId;

    /// Current controller position.
    fn controller_position(&self) -> Vec3;

    /// Teleports the controller without collision resolution.
    fn set_controller_position(&mut self, position: Vec3);

    /// Current capsule and skin width.
    fn controller_shape(&self) -> ControllerShape;

    /// Resizes the capsule. Radius and skin width are owned by the controller.
    fn set_controller_capsule(&mut self, height: f32, center: Vec3);

    /// Moves by `delta` with collision resolution.
    ///
    /// A zero-length move may skip resolution entirely, which is why callers
    /// nudge instead of passing `Vec3::ZERO`.
    fn move_controller(&mut self, delta: Vec3) -> CollisionFlags;

    /// Built-in ground flag from the last move.
    fn controller_grounded(&self) -> bool;
}

/// A physically simulated body with a capsule collider.
pub trait DynamicBody {
    /// Collider attached to the rigidbody.
    fn body_collider(&self) -> ColliderId;

    /// Layer of the rigidbody collider.
    fn body_layer(&self) -> LayerId;

    fn body_position(&self) -> Vec3;

    fn set_body_position(&mut self, position: Vec3);

    fn body_velocity(&self) -> Vec3;

    fn set_body_velocity(&mut self, velocity: Vec3);

    /// True when the body ignores forces and only moves when told to.
    fn is_body_kinematic(&self) -> bool;

    fn set_body_kinematic(&mut self, kinematic: bool);

    fn body_capsule(&self) -> CapsuleShape;

    fn set_body_capsule(&mut self, capsule: CapsuleShape);
}

/// Scene queries and collision filtering.
pub trait SpatialQuery {
    /// Every collider overlapping the sphere, regardless of filtering.
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<ColliderId>;

    /// Layer of a collider, `None` if the collider does not exist.
    fn collider_layer(&self, collider: ColliderId) -> Option<LayerId>;

    /// True if the layer matrix disables collision between the two layers.
    fn layers_ignore_collision(&self, a: LayerId, b: LayerId) -> bool;

    /// Enables (`ignore = false`) or disables collision between two colliders.
    fn ignore_collision(&mut self, a: ColliderId, b: ColliderId, ignore: bool);

    /// True if collision between the two colliders is currently disabled pairwise.
    fn is_collision_ignored(&self, a: ColliderId, b: ColliderId) -> bool;
}

/// Everything the body engine needs from a physics engine.
pub trait PhysicsBackend: KinematicController + DynamicBody + SpatialQuery {}

impl<T> PhysicsBackend for T where T: KinematicController + DynamicBody + SpatialQuery + ?Sized {}
