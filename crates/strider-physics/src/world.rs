//! Reference physics world.
//!
//! A deliberately small scene made of axis-aligned boxes, one kinematic
//! capsule controller and one capsule rigidbody. It resolves only what the
//! body engine relies on: resting on supports, stepping up ledges, being
//! blocked by walls, falling under gravity and landing.

use std::collections::BTreeSet;

use strider_math::{Aabb, CapsuleShape, Vec2, Vec3};
use strider_types::{ColliderId, LayerId, StriderError, StriderResult};

use crate::backend::{ControllerShape, DynamicBody, KinematicController, SpatialQuery};
use crate::config::WorldConfig;
use crate::flags::CollisionFlags;
use crate::layers::LayerMatrix;

const CONTROLLER: ColliderId = ColliderId(0);
const BODY: ColliderId = ColliderId(1);
const FIRST_BOX: u32 = 2;

/// An axis-aligned box collider.
#[derive(Debug, Clone)]
pub struct BoxCollider {
    pub id: ColliderId,
    pub aabb: Aabb,
    pub layer: LayerId,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
struct ControllerState {
    position: Vec3,
    shape: ControllerShape,
    grounded: bool,
}

#[derive(Debug, Clone)]
struct BodyState {
    position: Vec3,
    velocity: Vec3,
    kinematic: bool,
    capsule: CapsuleShape,
}

/// Box world implementing [`PhysicsBackend`](crate::PhysicsBackend).
pub struct SimWorld {
    config: WorldConfig,
    layers: LayerMatrix,
    boxes: Vec<BoxCollider>,
    ignored_pairs: BTreeSet<(ColliderId, ColliderId)>,
    controller: ControllerState,
    body: BodyState,
}

impl SimWorld {
    /// Creates an empty world with the controller and rigidbody at the origin.
    pub fn new(config: WorldConfig) -> Self {
        let radius = config.controller_radius;
        let capsule = CapsuleShape::foot_anchored(2.0 * radius, radius);
        Self {
            controller: ControllerState {
                position: Vec3::ZERO,
                shape: ControllerShape {
                    capsule,
                    skin_width: config.skin_width,
                },
                grounded: false,
            },
            body: BodyState {
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                kinematic: true,
                capsule,
            },
            config,
            layers: LayerMatrix::default(),
            boxes: Vec::new(),
            ignored_pairs: BTreeSet::new(),
        }
    }

    /// Creates a world with a floor slab whose top face is at `y = height`.
    pub fn with_floor(config: WorldConfig, height: f32) -> Self {
        let mut world = Self::new(config);
        world.add_box(
            Aabb::new(Vec3::new(-50.0, height - 1.0, -50.0), Vec3::new(50.0, height, 50.0)),
            LayerId::DEFAULT,
        );
        world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerMatrix {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerMatrix {
        &mut self.layers
    }

    /// Adds a box collider and returns its id.
    pub fn add_box(&mut self, aabb: Aabb, layer: LayerId) -> ColliderId {
        let id = ColliderId(FIRST_BOX + self.boxes.len() as u32);
        self.boxes.push(BoxCollider {
            id,
            aabb,
            layer,
            enabled: true,
        });
        tracing::trace!(collider = id.0, ?aabb, "box collider added");
        id
    }

    /// Looks up a box collider.
    pub fn box_collider(&self, id: ColliderId) -> Option<&BoxCollider> {
        id.0.checked_sub(FIRST_BOX)
            .and_then(|i| self.boxes.get(i as usize))
    }

    fn box_collider_mut(&mut self, id: ColliderId) -> StriderResult<&mut BoxCollider> {
        id.0.checked_sub(FIRST_BOX)
            .and_then(|i| self.boxes.get_mut(i as usize))
            .ok_or(StriderError::UnknownCollider(id))
    }

    /// Enables or disables a box collider.
    pub fn set_box_enabled(&mut self, id: ColliderId, enabled: bool) -> StriderResult<()> {
        self.box_collider_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Moves a box collider by `delta`.
    pub fn translate_box(&mut self, id: ColliderId, delta: Vec3) -> StriderResult<()> {
        self.box_collider_mut(id)?.aabb.translate(delta);
        Ok(())
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Advances the rigidbody by one physics step.
    ///
    /// Kinematic rigidbodies are left untouched. A dynamic rigidbody
    /// accelerates under gravity and lands on the highest support it
    /// started above.
    pub fn step(&mut self, dt: f32) {
        if self.body.kinematic || dt <= 0.0 {
            return;
        }
        let tol = self.config.contact_tolerance;
        let gravity = Vec3::from(self.config.gravity);
        self.body.velocity += gravity * dt;

        let capsule = self.body.capsule;
        let bottom_before = capsule.bottom(self.body.position).y;
        let mut next = self.body.position + self.body.velocity * dt;
        let footprint = Vec2::new(next.x, next.z);

        let support = self
            .solid_boxes(BODY, self.body_layer())
            .filter(|b| b.aabb.footprint_overlaps_disc(footprint, capsule.radius))
            .filter(|b| b.aabb.max.y <= bottom_before + tol)
            .map(|b| b.aabb.max.y)
            .fold(None, |acc: Option<f32>, y| Some(acc.map_or(y, |a| a.max(y))));

        if let Some(top) = support {
            let bottom_after = capsule.bottom(next).y;
            if bottom_after <= top {
                next.y += top - bottom_after;
                let keep = 1.0 - self.config.horizontal_damping.clamp(0.0, 1.0);
                self.body.velocity.y = self.body.velocity.y.max(0.0);
                self.body.velocity.x *= keep;
                self.body.velocity.z *= keep;
            }
        }
        self.body.position = next;
    }

    /// Boxes that physically interact with `collider` on `layer`.
    fn solid_boxes(&self, collider: ColliderId, layer: LayerId) -> impl Iterator<Item = &BoxCollider> + '_ {
        self.boxes.iter().filter(move |b| {
            b.enabled
                && !self.is_collision_ignored(b.id, collider)
                && !self.layers.ignores(b.layer, layer)
        })
    }

    fn pair(a: ColliderId, b: ColliderId) -> (ColliderId, ColliderId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl KinematicController for SimWorld {
    fn controller_collider(&self) -> ColliderId {
        CONTROLLER
    }

    fn controller_layer(&self) -> LayerId {
        self.config.controller_layer
    }

    fn controller_position(&self) -> Vec3 {
        self.controller.position
    }

    fn set_controller_position(&mut self, position: Vec3) {
        self.controller.position = position;
    }

    fn controller_shape(&self) -> ControllerShape {
        self.controller.shape
    }

    fn set_controller_capsule(&mut self, height: f32, center: Vec3) {
        self.controller.shape.capsule.height = height;
        self.controller.shape.capsule.center = center;
    }

    fn move_controller(&mut self, delta: Vec3) -> CollisionFlags {
        let mut flags = CollisionFlags::default();
        let ControllerShape { capsule, skin_width: skin } = self.controller.shape;
        let tol = self.config.contact_tolerance;
        let layer = self.controller_layer();
        let mut pos = self.controller.position;

        // Horizontal pass: step up low ledges, stop at anything taller.
        let horizontal = Vec3::new(delta.x, 0.0, delta.z);
        if horizontal.length_squared() > 0.0 {
            let mut next = pos + horizontal;
            let footprint = Vec2::new(next.x, next.z);
            let bottom = capsule.bottom(next).y;
            let top = capsule.top(next).y;
            let mut climb = 0.0_f32;
            let mut blocked = false;

            for b in self.solid_boxes(CONTROLLER, layer) {
                if !b.aabb.footprint_overlaps_disc(footprint, capsule.radius) {
                    continue;
                }
                if b.aabb.max.y <= bottom - skin + tol || b.aabb.min.y >= top + skin {
                    continue;
                }
                let rise = b.aabb.max.y + skin - bottom;
                if rise <= self.config.step_offset {
                    climb = climb.max(rise);
                } else {
                    blocked = true;
                }
            }

            if blocked {
                next.x = pos.x;
                next.z = pos.z;
                flags.sides = true;
            } else if climb > 0.0 {
                next.y += climb;
                flags.below = true;
            }
            pos = next;
        }

        // Vertical pass: land on the highest support, stop under the lowest ceiling.
        let footprint = Vec2::new(pos.x, pos.z);
        let bottom = capsule.bottom(pos).y;
        let top = capsule.top(pos).y;
        let mut new_bottom = bottom + delta.y;

        if delta.y <= 0.0 {
            let rest = self
                .solid_boxes(CONTROLLER, layer)
                .filter(|b| b.aabb.footprint_overlaps_disc(footprint, capsule.radius))
                .filter(|b| b.aabb.max.y <= bottom - skin + tol)
                .map(|b| b.aabb.max.y + skin)
                .fold(None, |acc: Option<f32>, y| Some(acc.map_or(y, |a| a.max(y))));
            if let Some(rest) = rest {
                if new_bottom <= rest + tol {
                    new_bottom = new_bottom.max(rest);
                    flags.below = true;
                }
            }
        } else {
            let ceiling = self
                .solid_boxes(CONTROLLER, layer)
                .filter(|b| b.aabb.footprint_overlaps_disc(footprint, capsule.radius))
                .filter(|b| b.aabb.min.y >= top + skin - tol)
                .map(|b| b.aabb.min.y - skin)
                .fold(None, |acc: Option<f32>, y| Some(acc.map_or(y, |a| a.min(y))));
            if let Some(ceiling) = ceiling {
                let height = top - bottom;
                if new_bottom + height > ceiling {
                    new_bottom = (ceiling - height).max(bottom);
                    flags.above = true;
                }
            }
        }

        pos.y += new_bottom - bottom;
        self.controller.position = pos;
        self.controller.grounded = flags.below;
        flags
    }

    fn controller_grounded(&self) -> bool {
        self.controller.grounded
    }
}

impl DynamicBody for SimWorld {
    fn body_collider(&self) -> ColliderId {
        BODY
    }

    fn body_layer(&self) -> LayerId {
        self.config.body_layer
    }

    fn body_position(&self) -> Vec3 {
        self.body.position
    }

    fn set_body_position(&mut self, position: Vec3) {
        self.body.position = position;
    }

    fn body_velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn set_body_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    fn is_body_kinematic(&self) -> bool {
        self.body.kinematic
    }

    fn set_body_kinematic(&mut self, kinematic: bool) {
        if kinematic {
            self.body.velocity = Vec3::ZERO;
        }
        self.body.kinematic = kinematic;
    }

    fn body_capsule(&self) -> CapsuleShape {
        self.body.capsule
    }

    fn set_body_capsule(&mut self, capsule: CapsuleShape) {
        self.body.capsule = capsule;
    }
}

impl SpatialQuery for SimWorld {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<ColliderId> {
        let mut hits: Vec<ColliderId> = self
            .boxes
            .iter()
            .filter(|b| b.enabled && b.aabb.overlaps_sphere(center, radius))
            .map(|b| b.id)
            .collect();
        if self
            .controller
            .shape
            .capsule
            .overlaps_sphere(self.controller.position, center, radius)
        {
            hits.push(CONTROLLER);
        }
        if self.body.capsule.overlaps_sphere(self.body.position, center, radius) {
            hits.push(BODY);
        }
        hits.sort_unstable();
        hits
    }

    fn collider_layer(&self, collider: ColliderId) -> Option<LayerId> {
        match collider {
            CONTROLLER => Some(self.config.controller_layer),
            BODY => Some(self.config.body_layer),
            id => self.box_collider(id).map(|b| b.layer),
        }
    }

    fn layers_ignore_collision(&self, a: LayerId, b: LayerId) -> bool {
        self.layers.ignores(a, b)
    }

    fn ignore_collision(&mut self, a: ColliderId, b: ColliderId, ignore: bool) {
        let key = Self::pair(a, b);
        if ignore {
            self.ignored_pairs.insert(key);
        } else {
            self.ignored_pairs.remove(&key);
        }
    }

    fn is_collision_ignored(&self, a: ColliderId, b: ColliderId) -> bool {
        self.ignored_pairs.contains(&Self::pair(a, b))
    }
}
