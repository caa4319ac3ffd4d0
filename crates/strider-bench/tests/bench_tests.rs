//! Integration tests for strider-bench.

use std::sync::{Arc, Mutex};

use strider_bench::metrics::BenchmarkMetrics;
use strider_bench::runner::BenchmarkRunner;
use strider_bench::scenarios::{Scenario, ScenarioKind};
use strider_debug::{InspectionHook, TraceRecorder};
use strider_io::{validate_input, SimulationInput, SourceMotion};
use strider_telemetry::CallbackSink;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 4);
    for &kind in ScenarioKind::all() {
        assert_eq!(kind.name().parse::<ScenarioKind>().unwrap(), kind);
        validate_input(&Scenario::from_kind(kind).input).unwrap();
    }
    assert!("sphere_drape".parse::<ScenarioKind>().is_err());
}

#[test]
fn stair_climb_setup() {
    let s = Scenario::stair_climb();
    assert_eq!(s.kind, ScenarioKind::StairClimb);
    assert_eq!(s.input.boxes.len(), 5);
    assert!((s.input.boxes[4].max[1] - 0.75).abs() < 1e-6);
}

#[test]
fn build_world_registers_boxes() {
    let s = Scenario::held_prop();
    let (world, ids) = BenchmarkRunner::build_world(&s.input);
    assert_eq!(ids.len(), 1);
    assert_eq!(world.box_count(), 2); // floor + crate
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_standing() {
    let metrics = BenchmarkRunner::run(&Scenario::standing()).unwrap();
    assert_eq!(metrics.scenario, "standing");
    assert_eq!(metrics.frames, 240);
    assert_eq!(metrics.grounded_transitions, 0);
    assert_eq!(metrics.authority_switches, 0);
    assert_eq!(metrics.final_authority, "kinematic_until_airborne");
    assert!(metrics.final_grounded);
    assert!(metrics.max_drop < 1e-3);
    assert!(metrics.total_wall_time >= 0.0);
}

#[test]
fn run_ledge_step_off() {
    let metrics = BenchmarkRunner::run(&Scenario::ledge_step_off()).unwrap();
    assert_eq!(metrics.grounded_transitions, 2);
    assert_eq!(metrics.authority_switches, 2);
    assert_eq!(metrics.final_authority, "kinematic_until_airborne");
    assert!(metrics.final_grounded);
    assert!((metrics.max_drop - 1.0).abs() < 0.02, "drop {}", metrics.max_drop);
    assert!(metrics.final_floor_height.abs() < 0.02);
    assert!((metrics.final_source_height - 1.7).abs() < 0.01);
}

#[test]
fn run_stair_climb() {
    let metrics = BenchmarkRunner::run(&Scenario::stair_climb()).unwrap();
    assert_eq!(metrics.grounded_transitions, 0);
    assert_eq!(metrics.final_authority, "kinematic_until_airborne");
    assert!((metrics.final_floor_height - 0.75).abs() < 1e-3);
    assert!((metrics.final_source_height - 1.7).abs() < 1e-3);
    assert!(metrics.max_drop < 1e-3);
}

#[test]
fn run_held_prop() {
    let metrics = BenchmarkRunner::run(&Scenario::held_prop()).unwrap();
    assert_eq!(metrics.grounded_transitions, 2);
    assert_eq!(metrics.authority_switches, 2);
    assert!(metrics.final_grounded);
    assert!((metrics.max_drop - 0.3).abs() < 0.02);
    assert!(metrics.final_floor_height.abs() < 0.02);
}

#[test]
fn hooks_and_sinks_observe_run() {
    let scenario = Scenario::ledge_step_off();
    let mut recorder = TraceRecorder::new(scenario.input.params.dt);
    let seen = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&seen);
    let sink = CallbackSink::new("count", move |_| *counter.lock().unwrap() += 1);

    let metrics = BenchmarkRunner::run_input(
        "ledge",
        &scenario.input,
        &mut [&mut recorder as &mut dyn InspectionHook],
        vec![Box::new(sink)],
    )
    .unwrap();

    let trace = recorder.into_trace();
    assert_eq!(trace.len(), 480);
    assert_eq!(trace.grounded_transitions().len(), 2);
    assert_eq!(*seen.lock().unwrap(), 4);
    assert_eq!(metrics.scenario, "ledge");
}

#[test]
fn invalid_input_is_rejected() {
    let mut input = SimulationInput::new(SourceMotion::stationary([0.0, 1.7, 0.0]));
    input.params.frames = 0;
    assert!(BenchmarkRunner::run_input("bad", &input, &mut [], Vec::new()).is_err());
}

#[test]
fn run_all_scenarios() {
    let results = BenchmarkRunner::run_all().unwrap();
    assert_eq!(results.len(), 4);
    for (m, kind) in results.iter().zip(ScenarioKind::all()) {
        assert_eq!(m.scenario, kind.name());
    }
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn csv_export() {
    let metrics = vec![BenchmarkMetrics {
        scenario: "test".into(),
        frames: 100,
        total_wall_time: 0.01,
        avg_frame_time: 0.0001,
        max_frame_time: 0.0003,
        grounded_transitions: 2,
        authority_switches: 2,
        final_authority: "kinematic_until_airborne".into(),
        final_grounded: true,
        final_floor_height: 0.0,
        final_source_height: 1.7,
        max_drop: 1.0,
    }];
    let csv = BenchmarkMetrics::to_csv(&metrics);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("scenario,frames"));
    assert!(lines[1].starts_with("test,100,"));
    assert_eq!(lines[0].split(',').count(), lines[1].split(',').count());
}
