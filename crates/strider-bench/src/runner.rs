//! Benchmark runner: drives the body engine through a simulation input
//! against the reference world and collects metrics.

use std::time::Instant;

use strider_body::{BodyRepresentation, Interactable, MovementAuthority};
use strider_debug::{BodySnapshot, InspectionHook};
use strider_io::{validate_input, SimulationInput};
use strider_math::Vec3;
use strider_physics::{KinematicController, SimWorld};
use strider_telemetry::{BodyEventKind, EventSink, VecSink};
use strider_types::{ColliderId, InteractableId, StriderResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> StriderResult<BenchmarkMetrics> {
        Self::run_input(scenario.kind.name(), &scenario.input, &mut [], Vec::new())
    }

    /// Run every scenario and return metrics for each.
    pub fn run_all() -> StriderResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }

    /// Builds the reference world described by `input`.
    ///
    /// Returns the world and the collider id of every input box, in order.
    pub fn build_world(input: &SimulationInput) -> (SimWorld, Vec<ColliderId>) {
        let mut world = match input.params.floor_height {
            Some(height) => SimWorld::with_floor(input.world.clone(), height),
            None => SimWorld::new(input.world.clone()),
        };
        let ids = input
            .boxes
            .iter()
            .map(|b| world.add_box(b.aabb(), b.layer))
            .collect();
        (world, ids)
    }

    /// Runs an arbitrary input.
    ///
    /// `hooks` see a snapshot after every frame; `sinks` receive every body
    /// event in addition to the runner's own counters.
    pub fn run_input(
        name: &str,
        input: &SimulationInput,
        hooks: &mut [&mut dyn InspectionHook],
        sinks: Vec<Box<dyn EventSink>>,
    ) -> StriderResult<BenchmarkMetrics> {
        validate_input(input)?;
        let dt = input.params.dt;
        let (mut world, box_ids) = Self::build_world(input);

        let mut body = BodyRepresentation::new(input.body.clone());
        let events = VecSink::new();
        body.events_mut().add_sink(Box::new(events.clone()));
        for sink in sinks {
            body.events_mut().add_sink(sink);
        }

        let motion = &input.source;
        body.set_offset(input.offset.map(Vec3::from));
        body.set_source(Some(motion.position_at(0.0)));
        body.enable(&mut world);
        if input.authority != MovementAuthority::KinematicUntilAirborne {
            body.set_authority(&mut world, input.authority);
        }

        let start_height = world.controller_position().y;
        let mut lowest = start_height;
        // Displacement the engine applied to the source on top of the script.
        let mut carried = Vec3::ZERO;
        let mut frame_times = Vec::with_capacity(input.params.frames as usize);
        let total_start = Instant::now();

        for frame in 1..=input.params.frames {
            for grab in input.grabs.iter().filter(|g| g.frame == frame) {
                let interactable = Interactable::new(
                    InteractableId(grab.box_index as u32),
                    vec![box_ids[grab.box_index]],
                );
                if grab.release {
                    body.on_ungrabbed(&mut world, grab.interactor, &interactable);
                } else {
                    body.on_grabbed(&mut world, grab.interactor, &interactable);
                }
            }

            let scripted = motion.position_at(frame as f32 * dt);
            body.set_source(Some(scripted + carried));

            let frame_start = Instant::now();
            world.step(dt);
            body.process(&mut world);
            frame_times.push(frame_start.elapsed().as_secs_f64());

            if let Some(source) = body.source() {
                carried = source - scripted;
            }
            lowest = lowest.min(world.controller_position().y);

            if !hooks.is_empty() {
                let snapshot = BodySnapshot::capture(&body, &world);
                for hook in hooks.iter_mut() {
                    hook.on_frame(&snapshot);
                }
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        for hook in hooks.iter_mut() {
            hook.on_simulation_end();
        }
        body.events_mut().finalize();

        let received = events.events();
        let grounded_transitions = received.iter().filter(|e| e.is_grounding()).count() as u32;
        let authority_switches = received
            .iter()
            .filter(|e| matches!(e.kind, BodyEventKind::AuthorityChanged { .. }))
            .count() as u32;

        let floor = body.offset().map_or(0.0, |o| o.y);
        let source_height = body.source().map_or(0.0, |s| s.y - floor);
        let avg_frame_time = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let max_frame_time = frame_times.iter().copied().fold(0.0, f64::max);

        tracing::debug!(
            scenario = name,
            frames = input.params.frames,
            grounded_transitions,
            authority_switches,
            "run finished"
        );

        Ok(BenchmarkMetrics {
            scenario: name.to_string(),
            frames: input.params.frames,
            total_wall_time,
            avg_frame_time,
            max_frame_time,
            grounded_transitions,
            authority_switches,
            final_authority: body.authority().name().to_string(),
            final_grounded: body.is_grounded(),
            final_floor_height: floor,
            final_source_height: source_height,
            max_drop: (start_height - lowest).max(0.0),
        })
    }
}
