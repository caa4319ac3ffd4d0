//! Physical constants and engine defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default physics timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Squared rigidbody displacement below which the body counts as settled.
pub const NEAR_ZERO_DISPLACEMENT_SQR: f32 = 1.0e-6;

/// Movement handed to the kinematic controller when the requested delta is
/// exactly zero. A zero-length move skips collision resolution.
pub const ZERO_MOVE_NUDGE: [f32; 3] = [0.0, -1.0e-4, 0.0];

/// Extra clearance kept between the ground probe and the skin width.
pub const GROUND_PROBE_EPSILON: f32 = 1.0e-3;

/// Default kinematic controller radius (meters).
pub const DEFAULT_RADIUS: f32 = 0.2;

/// Default kinematic controller skin width (meters).
pub const DEFAULT_SKIN_WIDTH: f32 = 0.01;

/// Default maximum step the controller climbs without being blocked (meters).
pub const DEFAULT_STEP_OFFSET: f32 = 0.3;

/// Default tolerance for resting contacts in the reference world (meters).
pub const DEFAULT_CONTACT_TOLERANCE: f32 = 1.0e-3;

/// Number of collision layers.
pub const MAX_LAYERS: usize = 32;

/// Smallest upward controller correction treated as a step up (meters).
pub const STEP_UP_EPSILON: f32 = 1.0e-5;
