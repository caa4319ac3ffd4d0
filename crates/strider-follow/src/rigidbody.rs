//! Modifiers that drive target velocities towards the source.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use strider_math::{Pose, Vec3};

use crate::modifier::{desired_position, desired_rotation, PropertyModifier};
use crate::target::FollowTarget;

/// Sets the linear velocity that closes the gap to the source in one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidbodyVelocity {
    pub apply_offset: bool,
    /// Largest velocity magnitude (m/s).
    pub max_distance_delta: f32,
    /// Beyond this gap the target is let go with zero velocity. `0` disables it.
    pub break_distance: f32,
}

impl Default for RigidbodyVelocity {
    fn default() -> Self {
        Self {
            apply_offset: false,
            max_distance_delta: 10.0,
            break_distance: 0.0,
        }
    }
}

impl PropertyModifier for RigidbodyVelocity {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let gap = desired_position(source, target, offset) - target.pose.position;
        if self.break_distance > 0.0 && gap.length() > self.break_distance {
            tracing::trace!(gap = gap.length(), "follow broken by distance");
            target.velocity = Vec3::ZERO;
            return;
        }
        target.velocity = (gap / dt).clamp_length_max(self.max_distance_delta);
    }

    fn apply_offset(&self) -> bool {
        self.apply_offset
    }

    fn name(&self) -> &str {
        "rigidbody_velocity"
    }
}

/// Sets the angular velocity that closes the rotation gap in one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidbodyAngularVelocity {
    pub apply_offset: bool,
    /// Largest angular speed (rad/s).
    pub max_angular_velocity: f32,
}

impl Default for RigidbodyAngularVelocity {
    fn default() -> Self {
        Self {
            apply_offset: false,
            max_angular_velocity: 50.0,
        }
    }
}

impl PropertyModifier for RigidbodyAngularVelocity {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let wanted = desired_rotation(source, offset);
        let delta = (wanted * target.pose.rotation.inverse()).normalize();
        let (axis, mut angle) = delta.to_axis_angle();
        if angle > PI {
            angle -= 2.0 * PI;
        }
        if !axis.is_finite() || angle.abs() <= f32::EPSILON {
            target.angular_velocity = Vec3::ZERO;
            return;
        }
        target.angular_velocity = (axis * (angle / dt)).clamp_length_max(self.max_angular_velocity);
    }

    fn apply_offset(&self) -> bool {
        self.apply_offset
    }

    fn name(&self) -> &str {
        "rigidbody_angular_velocity"
    }
}
