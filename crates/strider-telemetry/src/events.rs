//! Body event types.
//!
//! Lightweight value types emitted by the body engine during a frame.
//! Each carries the frame index that produced it.

use serde::{Deserialize, Serialize};
use strider_types::InteractableId;

/// An event emitted by the body engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyEvent {
    /// Frame number (1 for the first processed frame).
    pub frame: u64,
    /// Event payload.
    pub kind: BodyEventKind,
}

/// Movement authority as carried by events.
///
/// Mirrors the body crate's authority enum so that telemetry does not
/// depend on the body engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityTag {
    KinematicOnly,
    KinematicUntilAirborne,
    DynamicOnly,
    DynamicUntilGrounded,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyEventKind {
    /// The body touched ground after being airborne.
    BecameGrounded,

    /// The body lost ground contact.
    BecameAirborne,

    /// Position authority moved between the controller and the rigidbody.
    AuthorityChanged {
        from: AuthorityTag,
        to: AuthorityTag,
    },

    /// Colliders of a grabbed interactable stopped colliding with the body.
    CollidersIgnored {
        interactable: InteractableId,
        /// Colliders newly scheduled for restoration on release.
        count: u32,
    },

    /// Colliders of a released interactable collide with the body again.
    CollidersRestored {
        interactable: InteractableId,
        count: u32,
    },
}

impl BodyEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: BodyEventKind) -> Self {
        Self { frame, kind }
    }

    /// True for the two grounded-state notifications.
    pub fn is_grounding(&self) -> bool {
        matches!(
            self.kind,
            BodyEventKind::BecameGrounded | BodyEventKind::BecameAirborne
        )
    }
}
