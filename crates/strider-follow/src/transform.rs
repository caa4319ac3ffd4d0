//! Modifiers that snap the target transform onto the source.

use serde::{Deserialize, Serialize};
use strider_math::{Pose, Vec3};

use crate::modifier::{desired_position, desired_rotation, PropertyModifier};
use crate::target::{AxisLock, FollowTarget};

/// Copies the source position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformPosition {
    pub apply_offset: bool,
    pub lock: AxisLock,
}

impl PropertyModifier for TransformPosition {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, _dt: f32) {
        let wanted = desired_position(source, target, offset);
        target.pose.position = self.lock.apply(target.pose.position, wanted);
    }

    fn apply_offset(&self) -> bool {
        self.apply_offset
    }

    fn name(&self) -> &str {
        "transform_position"
    }
}

/// Copies the source rotation.
///
/// Axis locks act on the Euler angles (XYZ order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformRotation {
    pub apply_offset: bool,
    pub lock: AxisLock,
}

impl PropertyModifier for TransformRotation {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, _dt: f32) {
        let wanted = desired_rotation(source, offset);
        if self.lock == AxisLock::NONE {
            target.pose.rotation = wanted;
            return;
        }
        let order = strider_math::EulerRot::XYZ;
        let (cx, cy, cz) = target.pose.rotation.to_euler(order);
        let (wx, wy, wz) = wanted.to_euler(order);
        let euler = self.lock.apply(Vec3::new(cx, cy, cz), Vec3::new(wx, wy, wz));
        target.pose.rotation = strider_math::Quat::from_euler(order, euler.x, euler.y, euler.z);
    }

    fn apply_offset(&self) -> bool {
        self.apply_offset
    }

    fn name(&self) -> &str {
        "transform_rotation"
    }
}

/// Copies the source scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformScale {
    pub apply_offset: bool,
    pub lock: AxisLock,
}

impl PropertyModifier for TransformScale {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, _dt: f32) {
        let wanted = match offset {
            Some(offset) => {
                let divisor = Vec3::select(offset.scale.cmpeq(Vec3::ZERO), Vec3::ONE, offset.scale);
                source.scale / divisor
            }
            None => source.scale,
        };
        target.pose.scale = self.lock.apply(target.pose.scale, wanted);
    }

    fn apply_offset(&self) -> bool {
        self.apply_offset
    }

    fn name(&self) -> &str {
        "transform_scale"
    }
}
