//! Integration tests for strider-io.

use strider_body::MovementAuthority;
use strider_io::{validate_input, BoxSpec, GrabAction, SimulationInput, SimulationParams, SourceMotion};
use strider_math::Vec3;
use strider_types::{InteractorId, LayerId, StriderError};

const SAMPLE: &str = r#"
authority = "dynamic_only"
offset = [0.0, 0.5, 0.0]

[params]
frames = 240
dt = 0.01

[world]
step_offset = 0.25

[body]
tracked_interactors = [1]

[source]
start = [0.0, 2.2, 0.0]
velocity = [0.5, 0.0, 0.0]

[[boxes]]
min = [-1.0, 0.0, -1.0]
max = [1.0, 0.5, 1.0]

[[boxes]]
min = [2.0, 0.0, 2.0]
max = [2.2, 0.2, 2.2]
layer = 3

[[grabs]]
frame = 10
interactor = 1
box_index = 1
"#;

fn make_valid_input() -> SimulationInput {
    SimulationInput::new(SourceMotion::stationary([0.0, 1.7, 0.0]))
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_params() {
    let params = SimulationParams::default();
    assert_eq!(params.frames, 120);
    assert!((params.dt - 1.0 / 60.0).abs() < 1e-6);
    assert_eq!(params.floor_height, Some(0.0));
}

#[test]
fn parse_toml_input() {
    let input = SimulationInput::from_toml_str(SAMPLE).unwrap();
    assert_eq!(input.params.frames, 240);
    assert_eq!(input.authority, MovementAuthority::DynamicOnly);
    assert_eq!(input.offset, Some([0.0, 0.5, 0.0]));
    assert!((input.world.step_offset - 0.25).abs() < 1e-6);
    assert!((input.world.skin_width - 0.01).abs() < 1e-6);
    assert_eq!(input.body.tracked_interactors, vec![InteractorId(1)]);
    assert_eq!(input.boxes.len(), 2);
    assert_eq!(input.boxes[0].layer, LayerId::DEFAULT);
    assert_eq!(input.boxes[1].layer, LayerId(3));
    assert!(!input.grabs[0].release);
    assert!((input.duration() - 2.4).abs() < 1e-4);
    validate_input(&input).unwrap();
}

#[test]
fn json_input_round_trip() {
    let input = SimulationInput::from_toml_str(SAMPLE).unwrap();
    let json = serde_json::to_string(&input).unwrap();
    let recovered = SimulationInput::from_json_str(&json).unwrap();
    assert_eq!(recovered.boxes, input.boxes);
    assert_eq!(recovered.grabs, input.grabs);
    assert_eq!(recovered.source, input.source);
}

#[test]
fn malformed_input_is_serialization_error() {
    let err = SimulationInput::from_toml_str("[source]\nstart = 3\n").unwrap_err();
    assert!(matches!(err, StriderError::Serialization(_)));
}

#[test]
fn source_motion_moves_and_bobs() {
    let motion = SourceMotion {
        start: [0.0, 1.7, 0.0],
        velocity: [1.0, 0.0, 0.0],
        bob_amplitude: 0.05,
        bob_frequency: 1.0,
    };
    assert_eq!(motion.position_at(0.0), Vec3::new(0.0, 1.7, 0.0));
    let p = motion.position_at(0.25);
    assert!((p.x - 0.25).abs() < 1e-6);
    assert!((p.y - 1.75).abs() < 1e-5);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_input_passes() {
    assert!(validate_input(&make_valid_input()).is_ok());
}

#[test]
fn negative_dt_rejected() {
    let mut input = make_valid_input();
    input.params.dt = -0.01;
    assert!(validate_input(&input).is_err());
}

#[test]
fn huge_dt_rejected() {
    let mut input = make_valid_input();
    input.params.dt = 2.0;
    assert!(validate_input(&input).is_err());
}

#[test]
fn zero_frames_rejected() {
    let mut input = make_valid_input();
    input.params.frames = 0;
    assert!(validate_input(&input).is_err());
}

#[test]
fn skin_width_must_be_below_radius() {
    let mut input = make_valid_input();
    input.world.skin_width = 0.2;
    assert!(validate_input(&input).is_err());
    input.world.skin_width = -0.01;
    assert!(validate_input(&input).is_err());
}

#[test]
fn zero_radius_rejected() {
    let mut input = make_valid_input();
    input.world.controller_radius = 0.0;
    assert!(validate_input(&input).is_err());
}

#[test]
fn inverted_box_rejected() {
    let mut input = make_valid_input();
    input.boxes.push(BoxSpec::new([1.0, 0.0, 0.0], [0.0, 1.0, 1.0]));
    assert!(matches!(
        validate_input(&input),
        Err(StriderError::InvalidScenario(_))
    ));
}

#[test]
fn out_of_range_layer_rejected() {
    let mut input = make_valid_input();
    let mut b = BoxSpec::new([0.0; 3], [1.0; 3]);
    b.layer = LayerId(32);
    input.boxes.push(b);
    assert!(validate_input(&input).is_err());
}

#[test]
fn non_finite_gravity_rejected() {
    let mut input = make_valid_input();
    input.world.gravity = [0.0, f32::NAN, 0.0];
    assert!(validate_input(&input).is_err());
}

#[test]
fn grab_must_reference_existing_box() {
    let mut input = make_valid_input();
    input.grabs.push(GrabAction {
        frame: 5,
        interactor: InteractorId(1),
        box_index: 0,
        release: false,
    });
    assert!(validate_input(&input).is_err());
    input.boxes.push(BoxSpec::new([0.0; 3], [1.0; 3]));
    assert!(validate_input(&input).is_ok());
    input.grabs[0].frame = 0;
    assert!(validate_input(&input).is_err());
}
