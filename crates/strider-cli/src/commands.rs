//! CLI command implementations.

use std::path::Path;

use strider_bench::metrics::BenchmarkMetrics;
use strider_bench::runner::BenchmarkRunner;
use strider_bench::scenarios::{Scenario, ScenarioKind};
use strider_debug::{FrameTrace, InspectionHook, TraceRecorder};
use strider_io::{validate_input, SimulationInput};
use strider_telemetry::{EventSink, TracingSink};

/// Run a simulation from an input file.
pub fn simulate(
    config_path: &str,
    trace_path: Option<&str>,
    log_events: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Strider Simulation");
    println!("──────────────────");
    println!("Input: {config_path}");
    println!();

    let path = Path::new(config_path);
    let input = SimulationInput::load(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("simulation");

    let mut recorder = TraceRecorder::new(input.params.dt);
    let mut sinks: Vec<Box<dyn EventSink>> = Vec::new();
    if log_events {
        sinks.push(Box::new(TracingSink::new()));
    }

    let metrics = if trace_path.is_some() {
        BenchmarkRunner::run_input(name, &input, &mut [&mut recorder as &mut dyn InspectionHook], sinks)?
    } else {
        BenchmarkRunner::run_input(name, &input, &mut [], sinks)?
    };

    println!("Frames:          {} ({:.2}s simulated)", metrics.frames, input.duration());
    println!("Wall time:       {:.3}ms", metrics.total_wall_time * 1000.0);
    println!("Grounded events: {}", metrics.grounded_transitions);
    println!("Authority swaps: {}", metrics.authority_switches);
    println!("Final authority: {}", metrics.final_authority);
    println!("Final grounded:  {}", metrics.final_grounded);
    println!("Floor height:    {:.4}m", metrics.final_floor_height);
    println!("Head height:     {:.4}m", metrics.final_source_height);
    println!("Max drop:        {:.4}m", metrics.max_drop);

    if let Some(out) = trace_path {
        let trace = recorder.into_trace();
        trace.save(Path::new(out))?;
        println!();
        println!("Trace ({} frames) written to: {out}", trace.len());
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Strider Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind: ScenarioKind = scenario_name.parse().map_err(|e| {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            format!("{e}. Available: {}, all", available.join(", "))
        })?;
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} boxes, {} frames)",
            kind.name(),
            scenario.input.boxes.len(),
            scenario.input.params.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}ms", metrics.total_wall_time * 1000.0);
        println!("  Avg frame:     {:.2}us", metrics.avg_frame_time * 1e6);
        println!("  Transitions:   {}", metrics.grounded_transitions);
        println!("  Final:         {}", metrics.final_authority);
        println!("  Max drop:      {:.4}m", metrics.max_drop);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a frame trace.
pub fn inspect(path: &str, show_frames: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Strider Trace Inspector");
    println!("───────────────────────");
    println!();

    let trace = FrameTrace::load(Path::new(path)).map_err(|e| format!("Failed to read trace: {e}"))?;

    println!("Frames:       {}", trace.len());
    println!("Timestep:     {:.4}s", trace.dt);

    let Some(last) = trace.snapshots.last() else {
        return Ok(());
    };

    let min_y = trace
        .snapshots
        .iter()
        .map(|s| s.controller_position.y)
        .fold(f32::INFINITY, f32::min);
    let max_y = trace
        .snapshots
        .iter()
        .map(|s| s.controller_position.y)
        .fold(f32::NEG_INFINITY, f32::max);
    println!("Foot Y range: [{min_y:.4}, {max_y:.4}]");
    println!("Final:        {} (grounded: {})", last.authority, last.grounded);
    println!();

    println!("Grounded transitions:");
    for (frame, grounded) in trace.grounded_transitions() {
        println!("  frame {frame:>6}: {}", if grounded { "grounded" } else { "airborne" });
    }
    println!("Authority changes:");
    for (frame, authority) in trace.authority_changes() {
        println!("  frame {frame:>6}: {authority}");
    }

    if show_frames {
        println!();
        println!("{:>6}  {:<26} {:>5}  {:>8}  {:>8}  {:>7}", "frame", "authority", "gnd", "foot_y", "height", "ignored");
        for s in &trace.snapshots {
            println!(
                "{:>6}  {:<26} {:>5}  {:>8.4}  {:>8.4}  {:>7}",
                s.frame,
                s.authority.name(),
                s.grounded,
                s.controller_position.y,
                s.controller_height,
                s.ignored,
            );
        }
    }

    Ok(())
}

/// Validate a simulation input.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Strider Validator");
    println!("─────────────────");
    println!();

    println!("Validating input: {path}");
    let input = SimulationInput::load(Path::new(path))?;
    validate_input(&input)?;
    println!(
        "✅ Input is valid ({} boxes, {} grabs, {} frames).",
        input.boxes.len(),
        input.grabs.len(),
        input.params.frames
    );

    Ok(())
}
