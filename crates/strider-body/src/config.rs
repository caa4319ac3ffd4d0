//! Body representation configuration.

use serde::{Deserialize, Serialize};
use strider_types::constants;
use strider_types::{ColliderId, InteractorId, StriderError, StriderResult};

/// Tunables for [`BodyRepresentation`](crate::BodyRepresentation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Clearance between the ground probe and the skin width (meters).
    pub ground_probe_epsilon: f32,

    /// Squared per-frame rigidbody displacement under which a landed body
    /// counts as settled.
    pub settle_threshold_sqr: f32,

    /// Movement used instead of a zero-length controller move.
    pub zero_move_nudge: [f32; 3],

    /// Smallest upward controller correction that moves the floor anchor.
    pub step_up_epsilon: f32,

    /// Colliders that never collide with the body. They are not restored on release.
    pub ignored_colliders: Vec<ColliderId>,

    /// Interactors whose grabbed objects stop colliding with the body.
    pub tracked_interactors: Vec<InteractorId>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            ground_probe_epsilon: constants::GROUND_PROBE_EPSILON,
            settle_threshold_sqr: constants::NEAR_ZERO_DISPLACEMENT_SQR,
            zero_move_nudge: constants::ZERO_MOVE_NUDGE,
            step_up_epsilon: constants::STEP_UP_EPSILON,
            ignored_colliders: Vec::new(),
            tracked_interactors: Vec::new(),
        }
    }
}

impl BodyConfig {
    /// Checks that every value is usable.
    pub fn validate(&self) -> StriderResult<()> {
        if !(self.ground_probe_epsilon >= 0.0 && self.ground_probe_epsilon.is_finite()) {
            return Err(StriderError::InvalidConfig(
                "ground_probe_epsilon must be a non-negative finite number".into(),
            ));
        }
        if !(self.settle_threshold_sqr > 0.0 && self.settle_threshold_sqr.is_finite()) {
            return Err(StriderError::InvalidConfig(
                "settle_threshold_sqr must be positive".into(),
            ));
        }
        if self.zero_move_nudge == [0.0; 3] || self.zero_move_nudge.iter().any(|c| !c.is_finite()) {
            return Err(StriderError::InvalidConfig(
                "zero_move_nudge must be a finite non-zero vector".into(),
            ));
        }
        if self.step_up_epsilon < 0.0 {
            return Err(StriderError::InvalidConfig(
                "step_up_epsilon must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
