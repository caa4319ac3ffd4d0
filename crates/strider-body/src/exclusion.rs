//! Collision exclusion bookkeeping.
//!
//! Held objects must not collide with the body that holds them. When a
//! tracked interactor grabs something, its colliders join the ignored set;
//! only the ones that were not already ignored are remembered as
//! pending-restore, and only those collide again on release. Colliders
//! ignored for any other reason stay ignored.

use std::collections::BTreeSet;

use strider_types::ColliderId;

/// Ignored colliders plus the subset this mechanism may restore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredColliders {
    ignored: BTreeSet<ColliderId>,
    pending_restore: BTreeSet<ColliderId>,
}

impl IgnoredColliders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignores a collider for good. It is never restored by [`end_ignore`](Self::end_ignore).
    ///
    /// Returns true if the collider was not ignored before.
    pub fn ignore_permanently(&mut self, collider: ColliderId) -> bool {
        self.pending_restore.remove(&collider);
        self.ignored.insert(collider)
    }

    /// Adds every collider to the ignored set.
    ///
    /// Returns the colliders that were not ignored before; those become
    /// pending-restore.
    pub fn begin_ignore(&mut self, colliders: &[ColliderId]) -> Vec<ColliderId> {
        let mut fresh = Vec::new();
        for &c in colliders {
            if !self.ignored.contains(&c) && self.pending_restore.insert(c) {
                fresh.push(c);
            }
        }
        self.ignored.extend(colliders.iter().copied());
        fresh
    }

    /// Drops every collider that is both listed and pending-restore.
    ///
    /// Returns the colliders whose collisions should resume.
    pub fn end_ignore(&mut self, colliders: &[ColliderId]) -> Vec<ColliderId> {
        let mut restored = Vec::new();
        for &c in colliders {
            if self.pending_restore.remove(&c) {
                self.ignored.remove(&c);
                restored.push(c);
            }
        }
        restored
    }

    /// Drops every pending-restore collider and returns them.
    pub fn release_all(&mut self) -> Vec<ColliderId> {
        let pending = std::mem::take(&mut self.pending_restore);
        for c in &pending {
            self.ignored.remove(c);
        }
        pending.into_iter().collect()
    }

    #[inline]
    pub fn contains(&self, collider: ColliderId) -> bool {
        self.ignored.contains(&collider)
    }

    #[inline]
    pub fn is_pending_restore(&self, collider: ColliderId) -> bool {
        self.pending_restore.contains(&collider)
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending_restore.len()
    }

    /// Ignored colliders in id order.
    pub fn iter(&self) -> impl Iterator<Item = ColliderId> + '_ {
        self.ignored.iter().copied()
    }
}
