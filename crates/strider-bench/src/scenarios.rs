//! Benchmark scenarios: world geometry, configs and scripted motion.
//!
//! Four canonical scenarios for regression testing:
//! 1. **Standing**: Idle on a flat floor
//! 2. **Ledge step-off**: Walk off a raised platform and land
//! 3. **Stair climb**: Walk up a flight of low steps
//! 4. **Held prop**: Stand on a box, then grab it

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strider_io::{BoxSpec, GrabAction, SimulationInput, SourceMotion};
use strider_types::{InteractorId, StriderError};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Idle on a flat floor.
    Standing,
    /// Walk off a 1 m platform.
    LedgeStepOff,
    /// Walk up five 15 cm steps.
    StairClimb,
    /// Stand on a crate, grab it, release it.
    HeldProp,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Standing,
            ScenarioKind::LedgeStepOff,
            ScenarioKind::StairClimb,
            ScenarioKind::HeldProp,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Standing => "standing",
            ScenarioKind::LedgeStepOff => "ledge_step_off",
            ScenarioKind::StairClimb => "stair_climb",
            ScenarioKind::HeldProp => "held_prop",
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = StriderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| StriderError::InvalidScenario(format!("Unknown scenario: '{s}'")))
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub input: SimulationInput,
}

/// Interactor used by scripted grabs.
pub const SCENARIO_HAND: InteractorId = InteractorId(1);

impl Scenario {
    /// Standing still on a flat floor for 4 seconds, breathing gently.
    pub fn standing() -> Self {
        let mut input = SimulationInput::new(SourceMotion {
            start: [0.0, 1.7, 0.0],
            velocity: [0.0; 3],
            bob_amplitude: 0.01,
            bob_frequency: 0.25,
        });
        input.params.frames = 240;
        Self {
            kind: ScenarioKind::Standing,
            input,
        }
    }

    /// Walking at 0.5 m/s off the edge of a 1 m platform.
    ///
    /// The edge is crossed after 2 seconds; the run lasts 8.
    pub fn ledge_step_off() -> Self {
        let mut input = SimulationInput::new(SourceMotion {
            start: [-1.0, 2.7, 0.0],
            velocity: [0.5, 0.0, 0.0],
            bob_amplitude: 0.0,
            bob_frequency: 0.0,
        });
        input.offset = Some([0.0, 1.0, 0.0]);
        input.boxes.push(BoxSpec::new([-5.0, 0.0, -5.0], [0.0, 1.0, 5.0]));
        input.params.frames = 480;
        Self {
            kind: ScenarioKind::LedgeStepOff,
            input,
        }
    }

    /// Walking at 0.4 m/s up five steps, each 0.15 m high and 0.3 m deep.
    pub fn stair_climb() -> Self {
        let mut input = SimulationInput::new(SourceMotion {
            start: [0.0, 1.7, 0.0],
            velocity: [0.4, 0.0, 0.0],
            bob_amplitude: 0.0,
            bob_frequency: 0.0,
        });
        for i in 0..5 {
            let x = 0.5 + 0.3 * i as f32;
            let top = 0.15 * (i + 1) as f32;
            input.boxes.push(BoxSpec::new([x, 0.0, -1.0], [4.0, top, 1.0]));
        }
        input.params.frames = 360;
        Self {
            kind: ScenarioKind::StairClimb,
            input,
        }
    }

    /// Standing on a 0.3 m crate that is grabbed after half a second and
    /// released two seconds later.
    pub fn held_prop() -> Self {
        let mut input = SimulationInput::new(SourceMotion::stationary([0.0, 2.0, 0.0]));
        input.offset = Some([0.0, 0.3, 0.0]);
        input.boxes.push(BoxSpec::new([-0.5, 0.0, -0.5], [0.5, 0.3, 0.5]));
        input.body.tracked_interactors = vec![SCENARIO_HAND];
        input.grabs = vec![
            GrabAction {
                frame: 30,
                interactor: SCENARIO_HAND,
                box_index: 0,
                release: false,
            },
            GrabAction {
                frame: 150,
                interactor: SCENARIO_HAND,
                box_index: 0,
                release: true,
            },
        ];
        input.params.frames = 240;
        Self {
            kind: ScenarioKind::HeldProp,
            input,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Standing => Self::standing(),
            ScenarioKind::LedgeStepOff => Self::ledge_step_off(),
            ScenarioKind::StairClimb => Self::stair_climb(),
            ScenarioKind::HeldProp => Self::held_prop(),
        }
    }
}
