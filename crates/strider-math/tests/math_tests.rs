//! Integration tests for strider-math.

use strider_math::{point_segment_distance_sqr, Aabb, CapsuleShape, Pose, Quat, Vec2, Vec3};

// ─── Capsule Tests ────────────────────────────────────────────

#[test]
fn foot_anchored_capsule_bottom_is_owner_position() {
    let c = CapsuleShape::foot_anchored(1.6, 0.2);
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert!((c.bottom(p) - p).length() < 1e-6);
    assert!((c.top(p).y - 3.6).abs() < 1e-6);
}

#[test]
fn capsule_never_shorter_than_caps() {
    let c = CapsuleShape {
        height: 0.1,
        radius: 0.2,
        center: Vec3::new(0.0, 0.05, 0.0),
    };
    assert!((c.effective_height() - 0.4).abs() < 1e-6);
    let (a, b) = c.segment(Vec3::ZERO);
    assert!((a - b).length() < 1e-6);
}

#[test]
fn capsule_sphere_overlap() {
    let c = CapsuleShape::foot_anchored(2.0, 0.25);
    assert!(c.overlaps_sphere(Vec3::ZERO, Vec3::new(0.4, 1.0, 0.0), 0.2));
    assert!(!c.overlaps_sphere(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), 0.2));
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let d = point_segment_distance_sqr(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
    assert!((d - 16.0).abs() < 1e-5);
}

// ─── Box Tests ────────────────────────────────────────────────

#[test]
fn aabb_sphere_overlap() {
    let b = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 0.0, 1.0));
    assert!(b.overlaps_sphere(Vec3::new(0.0, 0.1, 0.0), 0.2));
    assert!(!b.overlaps_sphere(Vec3::new(0.0, 0.5, 0.0), 0.2));
}

#[test]
fn aabb_footprint_disc() {
    let b = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(b.footprint_overlaps_disc(Vec2::new(1.1, 0.5), 0.2));
    assert!(!b.footprint_overlaps_disc(Vec2::new(1.5, 0.5), 0.2));
}

#[test]
fn aabb_validity() {
    assert!(Aabb::new(Vec3::ZERO, Vec3::ONE).is_valid());
    assert!(!Aabb::new(Vec3::ONE, Vec3::ZERO).is_valid());
    assert!(!Aabb::new(Vec3::splat(f32::NAN), Vec3::ONE).is_valid());
}

// ─── Pose Tests ───────────────────────────────────────────────

#[test]
fn pose_transform_point() {
    let pose = Pose::from_position(Vec3::new(1.0, 0.0, 0.0))
        .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
    let p = pose.transform_point(Vec3::X);
    assert!((p - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn pose_serialization() {
    let pose = Pose::from_position(Vec3::new(0.5, 1.5, -2.0));
    let json = serde_json::to_string(&pose).unwrap();
    let recovered: Pose = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, pose);
}
