//! A fixed number of pulses.

use serde::{Deserialize, Serialize};

use crate::{clamp_intensity, MAX_IMPULSES_PER_TICK};
use crate::output::HapticOutput;
use crate::process::HapticProcess;

/// Plays `count` impulses separated by `interval` seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalPulse {
    intensity: f32,
    count: u32,
    interval: f32,
    #[serde(skip)]
    fired: u32,
    #[serde(skip)]
    elapsed: f32,
    #[serde(skip)]
    active: bool,
}

impl IntervalPulse {
    pub fn new(intensity: f32, count: u32, interval: f32) -> Self {
        Self {
            intensity: clamp_intensity(intensity),
            count,
            interval: interval.max(0.0),
            fired: 0,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Impulses sent since the last `begin`.
    pub fn fired(&self) -> u32 {
        self.fired
    }
}

impl HapticProcess for IntervalPulse {
    fn begin(&mut self) {
        self.fired = 0;
        self.elapsed = 0.0;
        self.active = self.count > 0;
    }

    fn cancel(&mut self, output: &mut dyn HapticOutput) {
        if self.active {
            tracing::debug!(fired = self.fired, "haptic process cancelled");
        }
        self.active = false;
        output.stop();
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn tick(&mut self, dt: f32, output: &mut dyn HapticOutput) {
        let mut sent = 0;
        while self.active && sent < MAX_IMPULSES_PER_TICK {
            let due = f64::from(self.fired) * f64::from(self.interval);
            if due > f64::from(self.elapsed) {
                break;
            }
            output.send_impulse(self.intensity, self.interval);
            self.fired += 1;
            sent += 1;
            if self.fired >= self.count {
                self.active = false;
            }
        }
        self.elapsed += dt.max(0.0);
    }

    fn name(&self) -> &str {
        "interval"
    }
}
