//! Grounded check.
//!
//! The controller's own ground flag has false negatives on some slopes and
//! ledges, so a negative answer is cross-checked with a sphere overlap just
//! under the capsule. A positive flag is taken as is.

use strider_math::Vec3;
use strider_physics::{ControllerShape, PhysicsBackend};

use crate::exclusion::IgnoredColliders;

/// Center and radius of the ground probe for a controller at `position`.
///
/// The probe has the cap radius and sits `radius - skin - epsilon` above
/// the capsule bottom, so it reaches `skin + epsilon` below the capsule.
pub fn ground_probe(shape: &ControllerShape, position: Vec3, epsilon: f32) -> (Vec3, f32) {
    let radius = shape.capsule.radius;
    let lift = (radius - shape.skin_width - epsilon).max(0.0);
    (shape.capsule.bottom(position) + Vec3::Y * lift, radius)
}

/// True if the controller stands on something the body collides with.
pub fn is_grounded<P>(physics: &P, ignored: &IgnoredColliders, epsilon: f32) -> bool
where
    P: PhysicsBackend + ?Sized,
{
    if physics.controller_grounded() {
        return true;
    }

    let (center, radius) = ground_probe(
        &physics.controller_shape(),
        physics.controller_position(),
        epsilon,
    );
    let controller = physics.controller_collider();
    let body = physics.body_collider();
    let controller_layer = physics.controller_layer();
    let body_layer = physics.body_layer();

    physics
        .overlap_sphere(center, radius)
        .into_iter()
        .filter(|&c| c != controller && c != body && !ignored.contains(c))
        .filter_map(|c| physics.collider_layer(c))
        .any(|layer| {
            !(physics.layers_ignore_collision(layer, controller_layer)
                && physics.layers_ignore_collision(layer, body_layer))
        })
}
