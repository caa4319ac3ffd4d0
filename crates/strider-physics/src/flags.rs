//! Collision flags reported by a kinematic move.

use serde::{Deserialize, Serialize};

/// Which sides of the controller touched something during a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    /// Blocked horizontally.
    pub sides: bool,
    /// Hit a ceiling.
    pub above: bool,
    /// Resting on or landed on a support.
    pub below: bool,
}

impl CollisionFlags {
    /// True if the move touched nothing.
    pub fn is_none(&self) -> bool {
        !(self.sides || self.above || self.below)
    }
}
