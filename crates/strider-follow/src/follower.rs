//! Object follower.

use serde::{Deserialize, Serialize};
use strider_math::Pose;

use crate::modifier::FollowModifier;
use crate::target::FollowTarget;

/// A candidate source. Inactive sources are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowSource {
    pub pose: Pose,
    pub active: bool,
}

impl FollowSource {
    pub fn new(pose: Pose) -> Self {
        Self { pose, active: true }
    }
}

#[derive(Debug, Clone)]
struct FollowEntry {
    target: FollowTarget,
    offset: Option<Pose>,
}

/// Moves every target after the first active source.
#[derive(Debug, Default)]
pub struct ObjectFollower {
    sources: Vec<FollowSource>,
    targets: Vec<FollowEntry>,
    modifier: FollowModifier,
}

impl ObjectFollower {
    pub fn new(modifier: FollowModifier) -> Self {
        Self {
            sources: Vec::new(),
            targets: Vec::new(),
            modifier,
        }
    }

    /// Appends a source and returns its index.
    pub fn add_source(&mut self, source: FollowSource) -> usize {
        self.sources.push(source);
        self.sources.len() - 1
    }

    pub fn source_mut(&mut self, index: usize) -> Option<&mut FollowSource> {
        self.sources.get_mut(index)
    }

    /// Appends a target with an optional local offset and returns its index.
    pub fn add_target(&mut self, target: FollowTarget, offset: Option<Pose>) -> usize {
        self.targets.push(FollowEntry { target, offset });
        self.targets.len() - 1
    }

    pub fn target(&self, index: usize) -> Option<&FollowTarget> {
        self.targets.get(index).map(|e| &e.target)
    }

    pub fn target_mut(&mut self, index: usize) -> Option<&mut FollowTarget> {
        self.targets.get_mut(index).map(|e| &mut e.target)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn modifier_mut(&mut self) -> &mut FollowModifier {
        &mut self.modifier
    }

    /// Index of the source currently being followed.
    pub fn active_source(&self) -> Option<usize> {
        self.sources.iter().position(|s| s.active)
    }

    /// Applies the modifier to every target. Returns how many were updated.
    pub fn process(&mut self, dt: f32) -> usize {
        let Some(index) = self.active_source() else {
            return 0;
        };
        let source = self.sources[index].pose;
        for entry in &mut self.targets {
            self.modifier.apply(&source, &mut entry.target, entry.offset.as_ref(), dt);
        }
        self.targets.len()
    }
}
