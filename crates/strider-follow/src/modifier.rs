//! Property modifier trait and the position/rotation/scale bundle.

use strider_math::Pose;

use crate::target::FollowTarget;

/// Updates one property of a target so that it follows a source.
///
/// `offset` is a pose in the target's local space marking the point of the
/// target that should coincide with the source. It is ignored unless
/// [`apply_offset`](PropertyModifier::apply_offset) is true.
pub trait PropertyModifier: Send {
    fn modify(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, dt: f32);

    /// Whether the target offset is honoured.
    fn apply_offset(&self) -> bool;

    /// Returns the modifier's name.
    fn name(&self) -> &str;
}

/// Position, rotation and scale modifiers applied in that order.
#[derive(Default)]
pub struct FollowModifier {
    pub position: Option<Box<dyn PropertyModifier>>,
    pub rotation: Option<Box<dyn PropertyModifier>>,
    pub scale: Option<Box<dyn PropertyModifier>>,
}

impl FollowModifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, modifier: impl PropertyModifier + 'static) -> Self {
        self.position = Some(Box::new(modifier));
        self
    }

    pub fn with_rotation(mut self, modifier: impl PropertyModifier + 'static) -> Self {
        self.rotation = Some(Box::new(modifier));
        self
    }

    pub fn with_scale(mut self, modifier: impl PropertyModifier + 'static) -> Self {
        self.scale = Some(Box::new(modifier));
        self
    }

    /// Runs every configured modifier against one target.
    pub fn apply(&mut self, source: &Pose, target: &mut FollowTarget, offset: Option<&Pose>, dt: f32) {
        for slot in [&mut self.position, &mut self.rotation, &mut self.scale] {
            if let Some(modifier) = slot.as_mut() {
                let offset = if modifier.apply_offset() { offset } else { None };
                modifier.modify(source, target, offset, dt);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

impl std::fmt::Debug for FollowModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |m: &Option<Box<dyn PropertyModifier>>| m.as_ref().map(|m| m.name().to_owned());
        f.debug_struct("FollowModifier")
            .field("position", &name(&self.position))
            .field("rotation", &name(&self.rotation))
            .field("scale", &name(&self.scale))
            .finish()
    }
}

/// Where the target must be placed so that its offset point sits on the source.
pub(crate) fn desired_position(source: &Pose, target: &FollowTarget, offset: Option<&Pose>) -> strider_math::Vec3 {
    match offset {
        Some(offset) => {
            source.position - target.pose.rotation * (offset.position * target.pose.scale)
        }
        None => source.position,
    }
}

/// Rotation that makes the target's offset orientation match the source.
pub(crate) fn desired_rotation(source: &Pose, offset: Option<&Pose>) -> strider_math::Quat {
    match offset {
        Some(offset) => (source.rotation * offset.rotation.inverse()).normalize(),
        None => source.rotation,
    }
}
