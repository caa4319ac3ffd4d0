//! Strongly-typed identifiers for physics and interaction entities.
//!
//! Newtype wrappers keep collider handles, layer indices and
//! interaction handles from being mixed up.

use serde::{Deserialize, Serialize};

/// Handle of a collider owned by the physics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColliderId(pub u32);

/// Collision layer index (0..32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u8);

/// Handle of an interactor (a hand or controller that can grab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InteractorId(pub u32);

/// Handle of an interactable (an object that can be grabbed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InteractableId(pub u32);

impl ColliderId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LayerId {
    /// The default layer every collider starts on.
    pub const DEFAULT: LayerId = LayerId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for ColliderId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for InteractorId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for InteractableId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
