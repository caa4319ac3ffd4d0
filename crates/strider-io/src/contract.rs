//! Simulation input contract types.
//!
//! These types are serializable so that runs can be described in TOML or
//! JSON files and handed to the CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strider_body::{BodyConfig, MovementAuthority};
use strider_math::{Aabb, Vec3};
use strider_physics::WorldConfig;
use strider_types::{constants, InteractorId, LayerId, StriderError, StriderResult};

/// Complete description of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Run length and timestep.
    #[serde(default)]
    pub params: SimulationParams,

    /// Reference world settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Body representation settings.
    #[serde(default)]
    pub body: BodyConfig,

    /// Authority set right after the body is enabled.
    #[serde(default)]
    pub authority: MovementAuthority,

    /// Floor anchor. `None` runs the body without an offset.
    #[serde(default)]
    pub offset: Option<[f32; 3]>,

    /// Static and grabbable box colliders.
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,

    /// Scripted head motion.
    pub source: SourceMotion,

    /// Scripted grabs and releases.
    #[serde(default)]
    pub grabs: Vec<GrabAction>,
}

/// Run length and timestep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Number of physics steps.
    pub frames: u32,
    /// Timestep in seconds (e.g., 1/60).
    pub dt: f32,
    /// Top of an infinite floor slab. `None` for no floor.
    pub floor_height: Option<f32>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            frames: 120,
            dt: constants::DEFAULT_DT,
            floor_height: Some(0.0),
        }
    }
}

/// An axis-aligned box collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub min: [f32; 3],
    pub max: [f32; 3],
    #[serde(default)]
    pub layer: LayerId,
}

impl BoxSpec {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self {
            min,
            max,
            layer: LayerId::DEFAULT,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(Vec3::from(self.min), Vec3::from(self.max))
    }
}

/// Head motion: a start point moving at constant velocity, with an
/// optional vertical bob as produced by walking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMotion {
    pub start: [f32; 3],
    #[serde(default)]
    pub velocity: [f32; 3],
    /// Bob amplitude (meters).
    #[serde(default)]
    pub bob_amplitude: f32,
    /// Bob frequency (Hz).
    #[serde(default)]
    pub bob_frequency: f32,
}

impl SourceMotion {
    pub fn stationary(start: [f32; 3]) -> Self {
        Self {
            start,
            velocity: [0.0; 3],
            bob_amplitude: 0.0,
            bob_frequency: 0.0,
        }
    }

    /// Scripted position `t` seconds after the start, relative to the initial floor.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let bob = self.bob_amplitude * (std::f32::consts::TAU * self.bob_frequency * t).sin();
        Vec3::from(self.start) + Vec3::from(self.velocity) * t + Vec3::Y * bob
    }
}

/// Grab (or release) of one box by an interactor at a given frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrabAction {
    /// Frame before which the action happens (1-based).
    pub frame: u32,
    pub interactor: InteractorId,
    /// Index into [`SimulationInput::boxes`].
    pub box_index: usize,
    #[serde(default)]
    pub release: bool,
}

impl SimulationInput {
    /// An input with defaults everywhere and the head at `start`.
    pub fn new(source: SourceMotion) -> Self {
        Self {
            params: SimulationParams::default(),
            world: WorldConfig::default(),
            body: BodyConfig::default(),
            authority: MovementAuthority::default(),
            offset: Some([0.0; 3]),
            boxes: Vec::new(),
            source,
            grabs: Vec::new(),
        }
    }

    pub fn from_toml_str(s: &str) -> StriderResult<Self> {
        toml::from_str(s).map_err(|e| StriderError::Serialization(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> StriderResult<Self> {
        serde_json::from_str(s).map_err(|e| StriderError::Serialization(e.to_string()))
    }

    /// Loads an input file, choosing the format by extension (`.json`, else TOML).
    pub fn load(path: &Path) -> StriderResult<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading simulation input");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// Total simulated time in seconds.
    pub fn duration(&self) -> f32 {
        self.params.frames as f32 * self.params.dt
    }
}
