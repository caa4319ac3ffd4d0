//! Integration tests for strider-physics.

use strider_math::{Aabb, Vec3};
use strider_physics::{
    DynamicBody, KinematicController, LayerMatrix, SimWorld, SpatialQuery, WorldConfig,
};
use strider_types::LayerId;

fn standing_world() -> SimWorld {
    let mut world = SimWorld::with_floor(WorldConfig::default(), 0.0);
    world.set_controller_capsule(1.6, Vec3::new(0.0, 0.8, 0.0));
    world.set_controller_position(Vec3::new(0.0, 0.01, 0.0));
    world
}

// ─── Layer Matrix Tests ───────────────────────────────────────

#[test]
fn layers_collide_by_default() {
    let m = LayerMatrix::default();
    assert!(!m.ignores(LayerId(0), LayerId(31)));
}

#[test]
fn layer_ignore_is_symmetric() {
    let mut m = LayerMatrix::default();
    m.set_collision(LayerId(3), LayerId(7), false);
    assert!(m.ignores(LayerId(3), LayerId(7)));
    assert!(m.ignores(LayerId(7), LayerId(3)));
    m.set_collision(LayerId(7), LayerId(3), true);
    assert!(!m.ignores(LayerId(3), LayerId(7)));
}

// ─── Kinematic Controller Tests ───────────────────────────────

#[test]
fn resting_controller_reports_below() {
    let mut world = standing_world();
    let flags = world.move_controller(Vec3::new(0.0, -1e-4, 0.0));
    assert!(flags.below);
    assert!(world.controller_grounded());
    assert!((world.controller_position().y - 0.01).abs() < 1e-5);
}

#[test]
fn controller_lands_instead_of_tunneling() {
    let mut world = standing_world();
    world.set_controller_position(Vec3::new(0.0, 1.0, 0.0));
    let flags = world.move_controller(Vec3::new(0.0, -5.0, 0.0));
    assert!(flags.below);
    assert!((world.controller_position().y - 0.01).abs() < 1e-5);
}

#[test]
fn controller_steps_up_low_ledge() {
    let mut world = standing_world();
    world.add_box(Aabb::new(Vec3::new(0.3, 0.0, -1.0), Vec3::new(2.0, 0.2, 1.0)), LayerId::DEFAULT);
    let flags = world.move_controller(Vec3::new(0.2, 0.0, 0.0));
    assert!(flags.below);
    assert!(!flags.sides);
    assert!((world.controller_position().y - 0.21).abs() < 1e-5);
}

#[test]
fn controller_blocked_by_wall() {
    let mut world = standing_world();
    world.add_box(Aabb::new(Vec3::new(0.3, 0.0, -1.0), Vec3::new(0.5, 3.0, 1.0)), LayerId::DEFAULT);
    let flags = world.move_controller(Vec3::new(0.2, 0.0, 0.0));
    assert!(flags.sides);
    assert!(world.controller_position().x.abs() < 1e-6);
}

#[test]
fn ignored_pair_lets_controller_through() {
    let mut world = standing_world();
    let wall = world.add_box(Aabb::new(Vec3::new(0.3, 0.0, -1.0), Vec3::new(0.5, 3.0, 1.0)), LayerId::DEFAULT);
    world.ignore_collision(wall, world.controller_collider(), true);
    let flags = world.move_controller(Vec3::new(0.2, 0.0, 0.0));
    assert!(!flags.sides);
    assert!((world.controller_position().x - 0.2).abs() < 1e-6);
}

#[test]
fn controller_stops_under_ceiling() {
    let mut world = standing_world();
    world.add_box(Aabb::new(Vec3::new(-1.0, 2.0, -1.0), Vec3::new(1.0, 2.5, 1.0)), LayerId::DEFAULT);
    let flags = world.move_controller(Vec3::new(0.0, 1.0, 0.0));
    assert!(flags.above);
    let top = world.controller_position().y + 1.6;
    assert!(top <= 2.0);
}

// ─── Rigidbody Tests ──────────────────────────────────────────

#[test]
fn kinematic_body_ignores_gravity() {
    let mut world = standing_world();
    world.set_body_position(Vec3::new(0.0, 3.0, 0.0));
    world.step(1.0 / 60.0);
    assert_eq!(world.body_position().y, 3.0);
}

#[test]
fn dynamic_body_falls_and_lands() {
    let mut world = standing_world();
    world.set_body_capsule(strider_math::CapsuleShape::foot_anchored(1.6, 0.2));
    world.set_body_position(Vec3::new(0.0, 1.0, 0.0));
    world.set_body_kinematic(false);
    for _ in 0..120 {
        world.step(1.0 / 60.0);
    }
    assert!(world.body_position().y.abs() < 1e-4);
    assert!(world.body_velocity().y.abs() < 1e-6);
}

#[test]
fn weightless_world_leaves_dynamic_body_in_place() {
    let mut world = SimWorld::with_floor(WorldConfig::weightless(), 0.0);
    world.set_body_position(Vec3::new(0.0, 2.0, 0.0));
    world.set_body_kinematic(false);
    world.step(1.0 / 60.0);
    assert!((world.body_position().y - 2.0).abs() < 1e-6);
}

#[test]
fn making_body_kinematic_clears_velocity() {
    let mut world = standing_world();
    world.set_body_kinematic(false);
    world.set_body_velocity(Vec3::new(1.0, -2.0, 0.0));
    world.set_body_kinematic(true);
    assert_eq!(world.body_velocity(), Vec3::ZERO);
}

// ─── Query Tests ──────────────────────────────────────────────

#[test]
fn overlap_sphere_reports_self_colliders_and_floor() {
    let world = standing_world();
    let hits = world.overlap_sphere(Vec3::new(0.0, 0.1, 0.0), 0.2);
    assert!(hits.contains(&world.controller_collider()));
    assert!(hits.iter().any(|id| id.0 >= 2));
    let mut sorted = hits.clone();
    sorted.sort();
    assert_eq!(hits, sorted);
}

#[test]
fn disabled_box_is_not_reported() {
    let mut world = SimWorld::new(WorldConfig::default());
    let b = world.add_box(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)), LayerId(2));
    assert_eq!(world.collider_layer(b), Some(LayerId(2)));
    world.set_box_enabled(b, false).unwrap();
    assert!(!world.overlap_sphere(Vec3::new(5.0, 0.0, 0.0), 4.5).contains(&b));
}

#[test]
fn unknown_box_is_an_error() {
    let mut world = SimWorld::new(WorldConfig::default());
    assert!(world.translate_box(strider_types::ColliderId(99), Vec3::X).is_err());
}

#[test]
fn pairwise_ignore_round_trip() {
    let mut world = SimWorld::new(WorldConfig::default());
    let b = world.add_box(Aabb::new(Vec3::ZERO, Vec3::ONE), LayerId::DEFAULT);
    let body = world.body_collider();
    world.ignore_collision(body, b, true);
    assert!(world.is_collision_ignored(b, body));
    world.ignore_collision(b, body, false);
    assert!(!world.is_collision_ignored(body, b));
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn world_config_from_partial_toml() {
    let cfg: WorldConfig = toml::from_str("step_offset = 0.5\ncontroller_layer = 3\n").unwrap();
    assert!((cfg.step_offset - 0.5).abs() < 1e-6);
    assert_eq!(cfg.controller_layer, LayerId(3));
    assert!((cfg.skin_width - 0.01).abs() < 1e-6);
}
