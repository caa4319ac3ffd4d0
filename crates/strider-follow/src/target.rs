//! Follow targets.

use serde::{Deserialize, Serialize};
use strider_math::{Pose, Quat, Vec3};

/// An object moved by a follower.
///
/// `velocity` and `angular_velocity` are only meaningful for non-kinematic
/// targets; transform modifiers write the pose directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowTarget {
    pub pose: Pose,
    pub velocity: Vec3,
    /// Scaled axis, radians per second.
    pub angular_velocity: Vec3,
    pub kinematic: bool,
}

impl FollowTarget {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kinematic: true,
        }
    }

    /// A target moved through its velocities.
    pub fn dynamic(pose: Pose) -> Self {
        Self {
            kinematic: false,
            ..Self::new(pose)
        }
    }

    /// Advances a non-kinematic target by its velocities.
    pub fn integrate(&mut self, dt: f32) {
        if self.kinematic {
            return;
        }
        self.pose.position += self.velocity * dt;
        let spin = Quat::from_scaled_axis(self.angular_velocity * dt);
        self.pose.rotation = (spin * self.pose.rotation).normalize();
    }
}

/// Per-axis lock. A locked axis keeps the target's current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLock {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisLock {
    pub const NONE: AxisLock = AxisLock {
        x: false,
        y: false,
        z: false,
    };

    /// Takes `wanted` on free axes and `current` on locked ones.
    pub fn apply(&self, current: Vec3, wanted: Vec3) -> Vec3 {
        Vec3::new(
            if self.x { current.x } else { wanted.x },
            if self.y { current.y } else { wanted.y },
            if self.z { current.z } else { wanted.z },
        )
    }
}
