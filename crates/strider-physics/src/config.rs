//! Reference world configuration.

use serde::{Deserialize, Serialize};
use strider_types::constants;
use strider_types::LayerId;

/// Configuration for [`SimWorld`](crate::SimWorld).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Highest ledge the kinematic controller climbs instead of being blocked (meters).
    pub step_offset: f32,

    /// Distance within which a support counts as touching (meters).
    pub contact_tolerance: f32,

    /// Fraction of horizontal rigidbody velocity removed on landing (0.0–1.0).
    pub horizontal_damping: f32,

    /// Kinematic controller cap radius (meters).
    pub controller_radius: f32,

    /// Kinematic controller skin width (meters).
    pub skin_width: f32,

    /// Layer of the kinematic controller collider.
    pub controller_layer: LayerId,

    /// Layer of the rigidbody collider.
    pub body_layer: LayerId,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -constants::GRAVITY, 0.0],
            step_offset: constants::DEFAULT_STEP_OFFSET,
            contact_tolerance: constants::DEFAULT_CONTACT_TOLERANCE,
            horizontal_damping: 0.5,
            controller_radius: constants::DEFAULT_RADIUS,
            skin_width: constants::DEFAULT_SKIN_WIDTH,
            controller_layer: LayerId(8),
            body_layer: LayerId(9),
        }
    }
}

impl WorldConfig {
    /// A world without gravity, for tests that only exercise kinematic moves.
    pub fn weightless() -> Self {
        Self {
            gravity: [0.0; 3],
            ..Default::default()
        }
    }
}
