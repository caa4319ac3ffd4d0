//! The body representation and its per-frame reconciliation.
//!
//! ## Coordinates
//!
//! - The **source** is the tracked head position in world space.
//! - The **offset** is the play-area origin; its `y` is the floor the user
//!   stands on. Without an offset the floor is world `y = 0`.
//! - The controller position is the capsule foot. The capsule spans from
//!   the floor to the source, minus the skin width.

use strider_math::{CapsuleShape, Vec3};
use strider_physics::PhysicsBackend;
use strider_telemetry::{BodyEvent, BodyEventKind, EventBus};
use strider_types::{ColliderId, InteractorId, StriderResult};

use crate::authority::{AuthorityMachine, MovementAuthority};
use crate::config::BodyConfig;
use crate::exclusion::IgnoredColliders;
use crate::grounded;
use crate::interaction::Interactable;

use std::collections::BTreeSet;

/// Keeps a kinematic controller and a dynamic rigidbody in agreement with
/// a tracked source.
pub struct BodyRepresentation {
    config: BodyConfig,
    source: Option<Vec3>,
    offset: Option<Vec3>,
    authority: AuthorityMachine,
    ignored: IgnoredColliders,
    tracked_interactors: BTreeSet<InteractorId>,
    previous_body_position: Vec3,
    /// `None` until the first frame after enable has established a baseline.
    previous_grounded: Option<bool>,
    grounded: bool,
    frame: u64,
    enabled: bool,
    events: EventBus,
}

impl BodyRepresentation {
    pub fn new(config: BodyConfig) -> Self {
        let tracked_interactors = config.tracked_interactors.iter().copied().collect();
        Self {
            config,
            source: None,
            offset: None,
            authority: AuthorityMachine::default(),
            ignored: IgnoredColliders::new(),
            tracked_interactors,
            previous_body_position: Vec3::ZERO,
            previous_grounded: None,
            grounded: false,
            frame: 0,
            enabled: false,
            events: EventBus::new(),
        }
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn config(&self) -> &BodyConfig {
        &self.config
    }

    pub fn source(&self) -> Option<Vec3> {
        self.source
    }

    /// Sets the tracked head position. `None` pauses processing.
    pub fn set_source(&mut self, source: Option<Vec3>) {
        self.source = source;
    }

    pub fn offset(&self) -> Option<Vec3> {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Option<Vec3>) {
        self.offset = offset;
    }

    pub fn authority(&self) -> MovementAuthority {
        self.authority.current()
    }

    /// Grounded state computed by the last processed frame.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Number of frames processed since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ignored(&self) -> &IgnoredColliders {
        &self.ignored
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    // ─── Lifecycle ────────────────────────────────────────────

    /// Starts processing.
    ///
    /// Snaps the controller and rigidbody onto the source and resets the
    /// authority to [`MovementAuthority::KinematicUntilAirborne`].
    pub fn enable<P>(&mut self, physics: &mut P)
    where
        P: PhysicsBackend + ?Sized,
    {
        if self.enabled {
            return;
        }

        for collider in self.config.ignored_colliders.clone() {
            self.ignore_collider(physics, collider);
        }

        if let Some(source) = self.source {
            self.match_controller_with_source(physics, source, true);
        }
        self.match_rigidbody_with_controller(physics);
        self.previous_body_position = physics.body_position();
        self.previous_grounded = None;
        self.apply_authority(physics, MovementAuthority::KinematicUntilAirborne);
        self.enabled = true;

        tracing::debug!(frame = self.frame, "body representation enabled");
    }

    /// Stops processing and lets every collider ignored on grab collide again.
    pub fn disable<P>(&mut self, physics: &mut P)
    where
        P: PhysicsBackend + ?Sized,
    {
        if !self.enabled {
            return;
        }

        let restored = self.ignored.release_all();
        for &collider in &restored {
            Self::set_ignored_with_body(physics, collider, false);
        }
        self.previous_grounded = None;
        self.enabled = false;

        tracing::debug!(
            frame = self.frame,
            restored = restored.len(),
            "body representation disabled"
        );
    }

    // ─── Authority ────────────────────────────────────────────

    /// Hands position authority to `authority` immediately.
    pub fn set_authority<P>(&mut self, physics: &mut P, authority: MovementAuthority)
    where
        P: PhysicsBackend + ?Sized,
    {
        self.apply_authority(physics, authority);
    }

    /// Like [`set_authority`](Self::set_authority), from a raw discriminant.
    pub fn set_authority_index<P>(&mut self, physics: &mut P, index: u8) -> StriderResult<()>
    where
        P: PhysicsBackend + ?Sized,
    {
        let authority = MovementAuthority::try_from(index)?;
        self.apply_authority(physics, authority);
        Ok(())
    }

    fn apply_authority<P>(&mut self, physics: &mut P, next: MovementAuthority)
    where
        P: PhysicsBackend + ?Sized,
    {
        physics.set_body_kinematic(next.is_kinematic());
        let previous = self.authority.set(next, self.frame);
        if previous != next {
            tracing::debug!(frame = self.frame, from = %previous, to = %next, "authority changed");
            self.events.emit(BodyEvent::new(
                self.frame,
                BodyEventKind::AuthorityChanged {
                    from: previous.into(),
                    to: next.into(),
                },
            ));
        }
    }

    // ─── Collision Exclusion ──────────────────────────────────

    /// Makes grabs by `interactor` exempt the grabbed object from body collisions.
    pub fn track_interactor(&mut self, interactor: InteractorId) -> bool {
        self.tracked_interactors.insert(interactor)
    }

    pub fn untrack_interactor(&mut self, interactor: InteractorId) -> bool {
        self.tracked_interactors.remove(&interactor)
    }

    pub fn is_tracking(&self, interactor: InteractorId) -> bool {
        self.tracked_interactors.contains(&interactor)
    }

    /// Stops `collider` from colliding with the body for good.
    pub fn ignore_collider<P>(&mut self, physics: &mut P, collider: ColliderId)
    where
        P: PhysicsBackend + ?Sized,
    {
        self.ignored.ignore_permanently(collider);
        Self::set_ignored_with_body(physics, collider, true);
    }

    /// Handles a grab. Ignored unless `interactor` is tracked.
    pub fn on_grabbed<P>(&mut self, physics: &mut P, interactor: InteractorId, interactable: &Interactable)
    where
        P: PhysicsBackend + ?Sized,
    {
        if !self.enabled || !self.tracked_interactors.contains(&interactor) {
            return;
        }

        let fresh = self.ignored.begin_ignore(&interactable.colliders);
        for &collider in &interactable.colliders {
            Self::set_ignored_with_body(physics, collider, true);
        }
        if !fresh.is_empty() {
            tracing::debug!(
                frame = self.frame,
                interactor = interactor.0,
                interactable = interactable.id.0,
                count = fresh.len(),
                "ignoring grabbed colliders"
            );
            self.events.emit(BodyEvent::new(
                self.frame,
                BodyEventKind::CollidersIgnored {
                    interactable: interactable.id,
                    count: fresh.len() as u32,
                },
            ));
        }
    }

    /// Handles a release. Only colliders this mechanism ignored collide again.
    pub fn on_ungrabbed<P>(&mut self, physics: &mut P, interactor: InteractorId, interactable: &Interactable)
    where
        P: PhysicsBackend + ?Sized,
    {
        let restored = self.ignored.end_ignore(&interactable.colliders);
        for &collider in &restored {
            Self::set_ignored_with_body(physics, collider, false);
        }
        if !restored.is_empty() {
            tracing::debug!(
                frame = self.frame,
                interactor = interactor.0,
                interactable = interactable.id.0,
                count = restored.len(),
                "restoring released colliders"
            );
            self.events.emit(BodyEvent::new(
                self.frame,
                BodyEventKind::CollidersRestored {
                    interactable: interactable.id,
                    count: restored.len() as u32,
                },
            ));
        }
    }

    fn set_ignored_with_body<P>(physics: &mut P, collider: ColliderId, ignore: bool)
    where
        P: PhysicsBackend + ?Sized,
    {
        let controller = physics.controller_collider();
        let body = physics.body_collider();
        physics.ignore_collision(collider, controller, ignore);
        physics.ignore_collision(collider, body, ignore);
    }

    // ─── Frame Processing ─────────────────────────────────────

    /// Reconciles both representations for one physics step.
    ///
    /// Call after the physics engine has integrated the rigidbody. Does
    /// nothing while disabled or without a source.
    pub fn process<P>(&mut self, physics: &mut P)
    where
        P: PhysicsBackend + ?Sized,
    {
        if !self.enabled {
            return;
        }
        let Some(mut source) = self.source else {
            return;
        };
        if !source.is_finite() {
            tracing::warn!(frame = self.frame, "skipping frame with non-finite source");
            return;
        }

        self.frame += 1;
        let skin = physics.controller_shape().skin_width;
        let authority = self.authority.current();

        // The rigidbody decides the floor height unless the controller is pinned.
        let mut offset_synced = false;
        if let Some(offset) = self.offset.as_mut() {
            if authority != MovementAuthority::KinematicOnly {
                let floor = physics.body_position().y - skin;
                source.y += floor - offset.y;
                offset.y = floor;
                offset_synced = true;
            }
        }

        // While the rigidbody drives, carry the controller and the user along.
        let physics_movement = physics.body_position() - self.previous_body_position;
        if authority.is_dynamic() {
            let before = physics.controller_position();
            physics.move_controller(physics_movement);
            let mut moved = physics.controller_position() - before;
            // The offset already took the vertical from the rigidbody height above.
            if offset_synced {
                moved.y = 0.0;
            }
            if let Some(offset) = self.offset.as_mut() {
                *offset += moved;
            }
            source += moved;
        }

        let target = self.match_controller_with_source(physics, source, false);

        let grounded = grounded::is_grounded(&*physics, &self.ignored, self.config.ground_probe_epsilon);

        if let Some(next) = self.authority.evaluate(
            grounded,
            physics_movement.length_squared(),
            self.config.settle_threshold_sqr,
            self.frame,
        ) {
            self.apply_authority(physics, next);
        }

        // A stepped-up controller lifts the floor and the user with it.
        if grounded {
            let rise = physics.controller_position().y - target.y;
            if rise > self.config.step_up_epsilon {
                if let Some(offset) = self.offset.as_mut() {
                    offset.y += rise;
                    source.y += rise;
                }
            }
        }

        self.match_rigidbody_with_controller(physics);
        self.previous_body_position = physics.body_position();
        self.source = Some(source);
        self.update_grounded(grounded);

        tracing::trace!(
            frame = self.frame,
            grounded,
            authority = %self.authority.current(),
            foot_y = physics.controller_position().y,
            "frame processed"
        );
    }

    /// Resizes and moves the controller so it spans floor to source.
    ///
    /// Returns where the controller should end up if nothing is in the way.
    fn match_controller_with_source<P>(&self, physics: &mut P, source: Vec3, teleport: bool) -> Vec3
    where
        P: PhysicsBackend + ?Sized,
    {
        let shape = physics.controller_shape();
        let radius = shape.capsule.radius;
        let skin = shape.skin_width;
        let floor = self.offset.map_or(0.0, |o| o.y);

        // A capsule clamped to its diameter grows upward from the floor.
        let height = (source.y - floor - skin).max(2.0 * radius);
        let foot = (source.y - height).max(floor + skin);
        let target = Vec3::new(source.x, foot, source.z);
        physics.set_controller_capsule(height, Vec3::new(0.0, height * 0.5, 0.0));

        if teleport {
            physics.set_controller_position(target);
        } else {
            let mut movement = target - physics.controller_position();
            if movement == Vec3::ZERO {
                movement = Vec3::from(self.config.zero_move_nudge);
            }
            physics.move_controller(movement);
        }

        target
    }

    /// Gives the rigidbody the controller's capsule, grown by the skin width,
    /// and moves it onto the controller.
    fn match_rigidbody_with_controller<P>(&self, physics: &mut P)
    where
        P: PhysicsBackend + ?Sized,
    {
        let shape = physics.controller_shape();
        let height = shape.capsule.height;
        let skin = shape.skin_width;
        physics.set_body_capsule(CapsuleShape {
            height: height + skin,
            radius: shape.capsule.radius,
            center: Vec3::new(
                shape.capsule.center.x,
                (height - skin) * 0.5,
                shape.capsule.center.z,
            ),
        });
        let position = physics.controller_position();
        physics.set_body_position(position);
    }

    fn update_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
        match self.previous_grounded {
            Some(previous) if previous != grounded => {
                let kind = if grounded {
                    BodyEventKind::BecameGrounded
                } else {
                    BodyEventKind::BecameAirborne
                };
                tracing::debug!(frame = self.frame, grounded, "grounded state changed");
                self.events.emit(BodyEvent::new(self.frame, kind));
            }
            _ => {}
        }
        self.previous_grounded = Some(grounded);
    }
}

impl std::fmt::Debug for BodyRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyRepresentation")
            .field("source", &self.source)
            .field("offset", &self.offset)
            .field("authority", &self.authority.current())
            .field("grounded", &self.grounded)
            .field("frame", &self.frame)
            .field("enabled", &self.enabled)
            .finish()
    }
}
