//! Grabbable objects as seen by the body.

use serde::{Deserialize, Serialize};
use strider_types::{ColliderId, InteractableId};

/// An object an interactor can grab, with every collider it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactable {
    pub id: InteractableId,
    pub colliders: Vec<ColliderId>,
}

impl Interactable {
    pub fn new(id: InteractableId, colliders: Vec<ColliderId>) -> Self {
        Self { id, colliders }
    }
}
