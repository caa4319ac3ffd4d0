//! Input validation.
//!
//! Validates simulation inputs before the engine receives them,
//! catching data-level errors early with clear diagnostics.

use strider_types::constants::MAX_LAYERS;
use strider_types::{LayerId, StriderError, StriderResult};

use crate::contract::{SimulationInput, SimulationParams};

/// Validates a complete simulation input.
///
/// Checks:
/// - Run parameters are usable
/// - Controller radius and skin width fit together
/// - Boxes are well formed and on existing layers
/// - Scripted motion and grabs are in range
pub fn validate_input(input: &SimulationInput) -> StriderResult<()> {
    validate_params(&input.params)?;

    let world = &input.world;
    if world.gravity.iter().any(|g| !g.is_finite()) {
        return Err(StriderError::InvalidConfig("Gravity must be finite".into()));
    }
    if !(world.controller_radius > 0.0) {
        return Err(StriderError::InvalidConfig(
            "Controller radius must be positive".into(),
        ));
    }
    if !(world.skin_width >= 0.0 && world.skin_width < world.controller_radius) {
        return Err(StriderError::InvalidConfig(format!(
            "Skin width {} must be in [0, radius {})",
            world.skin_width, world.controller_radius
        )));
    }
    if world.step_offset < 0.0 {
        return Err(StriderError::InvalidConfig(
            "Step offset must be non-negative".into(),
        ));
    }
    check_layer("controller_layer", world.controller_layer)?;
    check_layer("body_layer", world.body_layer)?;

    input.body.validate()?;

    for (i, b) in input.boxes.iter().enumerate() {
        if !b.aabb().is_valid() {
            return Err(StriderError::InvalidScenario(format!(
                "Box {i}: min {:?} exceeds max {:?}",
                b.min, b.max
            )));
        }
        check_layer(&format!("box {i} layer"), b.layer)?;
    }

    let source = &input.source;
    let finite = source.start.iter().chain(source.velocity.iter()).all(|v| v.is_finite())
        && source.bob_amplitude.is_finite()
        && source.bob_frequency.is_finite();
    if !finite {
        return Err(StriderError::InvalidScenario(
            "Source motion must be finite".into(),
        ));
    }
    if let Some(offset) = input.offset {
        if offset.iter().any(|v| !v.is_finite()) {
            return Err(StriderError::InvalidScenario("Offset must be finite".into()));
        }
    }

    for grab in &input.grabs {
        if grab.box_index >= input.boxes.len() {
            return Err(StriderError::InvalidScenario(format!(
                "Grab at frame {} refers to box {} but only {} boxes exist",
                grab.frame,
                grab.box_index,
                input.boxes.len()
            )));
        }
        if grab.frame == 0 || grab.frame > input.params.frames {
            return Err(StriderError::InvalidScenario(format!(
                "Grab frame {} outside 1..={}",
                grab.frame, input.params.frames
            )));
        }
    }

    Ok(())
}

/// Validates run parameters.
fn validate_params(params: &SimulationParams) -> StriderResult<()> {
    if !(params.dt > 0.0) {
        return Err(StriderError::InvalidConfig(
            "Timestep dt must be positive".into(),
        ));
    }
    if params.dt > 1.0 {
        return Err(StriderError::InvalidConfig(
            "Timestep dt > 1.0 is unreasonably large".into(),
        ));
    }
    if params.frames == 0 {
        return Err(StriderError::InvalidConfig("Frames must be >= 1".into()));
    }
    if let Some(h) = params.floor_height {
        if !h.is_finite() {
            return Err(StriderError::InvalidConfig("Floor height must be finite".into()));
        }
    }
    Ok(())
}

fn check_layer(what: &str, layer: LayerId) -> StriderResult<()> {
    if layer.index() >= MAX_LAYERS {
        return Err(StriderError::InvalidConfig(format!(
            "{what} {} is outside 0..{MAX_LAYERS}",
            layer.0
        )));
    }
    Ok(())
}
