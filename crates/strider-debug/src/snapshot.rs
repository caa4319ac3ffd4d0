//! Body snapshots and frame traces.
//!
//! A snapshot captures what the body engine and the physics backend agree
//! on after one processed frame.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strider_body::{BodyRepresentation, MovementAuthority};
use strider_math::Vec3;
use strider_physics::PhysicsBackend;
use strider_types::{StriderError, StriderResult};

/// State of one body after a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub frame: u64,
    pub authority: MovementAuthority,
    pub grounded: bool,
    pub source: Option<Vec3>,
    pub offset: Option<Vec3>,
    pub controller_position: Vec3,
    pub controller_height: f32,
    pub body_position: Vec3,
    pub body_kinematic: bool,
    /// Colliders currently ignored by the body.
    pub ignored: usize,
    /// Ignored colliders that collide again on release.
    pub pending_restore: usize,
}

impl BodySnapshot {
    /// Captures the current state of `body` and its physics representation.
    pub fn capture<P>(body: &BodyRepresentation, physics: &P) -> Self
    where
        P: PhysicsBackend + ?Sized,
    {
        Self {
            frame: body.frame(),
            authority: body.authority(),
            grounded: body.is_grounded(),
            source: body.source(),
            offset: body.offset(),
            controller_position: physics.controller_position(),
            controller_height: physics.controller_shape().capsule.height,
            body_position: physics.body_position(),
            body_kinematic: physics.is_body_kinematic(),
            ignored: body.ignored().len(),
            pending_restore: body.ignored().pending_len(),
        }
    }

    /// Source height above the floor anchor, if both are set.
    pub fn standing_height(&self) -> Option<f32> {
        Some(self.source?.y - self.offset.unwrap_or(Vec3::ZERO).y)
    }
}

/// Ordered snapshots of a run.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTrace {
    /// Timestep of the run (seconds).
    pub dt: f32,
    pub snapshots: Vec<BodySnapshot>,
}

impl FrameTrace {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: BodySnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Frames at which the grounded state differs from the previous snapshot.
    pub fn grounded_transitions(&self) -> Vec<(u64, bool)> {
        self.snapshots
            .windows(2)
            .filter(|w| w[0].grounded != w[1].grounded)
            .map(|w| (w[1].frame, w[1].grounded))
            .collect()
    }

    /// Frames at which the authority differs from the previous snapshot.
    pub fn authority_changes(&self) -> Vec<(u64, MovementAuthority)> {
        self.snapshots
            .windows(2)
            .filter(|w| w[0].authority != w[1].authority)
            .map(|w| (w[1].frame, w[1].authority))
            .collect()
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> StriderResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| StriderError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> StriderResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| StriderError::Serialization(format!("Trace deserialization failed: {e}")))
    }

    pub fn save(&self, path: &Path) -> StriderResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        tracing::debug!(path = %path.display(), frames = self.len(), "trace written");
        Ok(())
    }

    pub fn load(path: &Path) -> StriderResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}
