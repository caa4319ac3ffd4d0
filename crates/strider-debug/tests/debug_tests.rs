//! Integration tests for strider-debug.

use strider_body::{BodyConfig, BodyRepresentation, MovementAuthority};
use strider_debug::{BodySnapshot, FrameTrace, InspectionHook, TraceRecorder};
use strider_math::Vec3;
use strider_physics::{SimWorld, WorldConfig};

fn snapshot(frame: u64, grounded: bool, authority: MovementAuthority) -> BodySnapshot {
    BodySnapshot {
        frame,
        authority,
        grounded,
        source: Some(Vec3::new(0.0, 1.7, 0.0)),
        offset: Some(Vec3::ZERO),
        controller_position: Vec3::new(0.0, 0.01, 0.0),
        controller_height: 1.69,
        body_position: Vec3::new(0.0, 0.01, 0.0),
        body_kinematic: !authority.is_dynamic(),
        ignored: 0,
        pending_restore: 0,
    }
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn capture_reads_body_and_world() {
    let mut world = SimWorld::with_floor(WorldConfig::default(), 0.0);
    let mut body = BodyRepresentation::new(BodyConfig::default());
    body.set_offset(Some(Vec3::ZERO));
    body.set_source(Some(Vec3::new(0.0, 1.7, 0.0)));
    body.enable(&mut world);
    body.process(&mut world);

    let snap = BodySnapshot::capture(&body, &world);
    assert_eq!(snap.frame, 1);
    assert!(snap.grounded);
    assert!(snap.body_kinematic);
    assert!((snap.controller_height - 1.69).abs() < 1e-5);
    assert!((snap.standing_height().unwrap() - 1.7).abs() < 1e-5);
}

#[test]
fn trace_round_trip() {
    let mut trace = FrameTrace::new(1.0 / 60.0);
    trace.push(snapshot(1, true, MovementAuthority::KinematicUntilAirborne));
    trace.push(snapshot(2, false, MovementAuthority::DynamicUntilGrounded));

    let bytes = trace.to_bytes().unwrap();
    let recovered = FrameTrace::from_bytes(&bytes).unwrap();
    assert_eq!(recovered, trace);
}

#[test]
fn garbage_bytes_fail_cleanly() {
    assert!(FrameTrace::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn trace_reports_transitions() {
    let mut trace = FrameTrace::new(0.01);
    trace.push(snapshot(1, true, MovementAuthority::KinematicUntilAirborne));
    trace.push(snapshot(2, false, MovementAuthority::DynamicUntilGrounded));
    trace.push(snapshot(3, false, MovementAuthority::DynamicUntilGrounded));
    trace.push(snapshot(4, true, MovementAuthority::DynamicUntilGrounded));
    trace.push(snapshot(5, true, MovementAuthority::KinematicUntilAirborne));

    assert_eq!(trace.grounded_transitions(), vec![(2, false), (4, true)]);
    assert_eq!(
        trace.authority_changes(),
        vec![
            (2, MovementAuthority::DynamicUntilGrounded),
            (5, MovementAuthority::KinematicUntilAirborne),
        ]
    );
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn recorder_collects_snapshots() {
    let mut hook = TraceRecorder::new(0.01);
    for f in 1..=4 {
        hook.on_frame(&snapshot(f, true, MovementAuthority::KinematicOnly));
    }
    hook.on_simulation_end();
    assert_eq!(hook.name(), "trace_recorder");
    assert_eq!(hook.trace().len(), 4);
}

#[test]
fn recorder_stride_skips_frames() {
    let mut hook = TraceRecorder::new(0.01).with_stride(2);
    for f in 1..=5 {
        hook.on_frame(&snapshot(f, true, MovementAuthority::KinematicOnly));
    }
    let trace = hook.into_trace();
    let frames: Vec<u64> = trace.snapshots.iter().map(|s| s.frame).collect();
    assert_eq!(frames, vec![2, 4]);
}
