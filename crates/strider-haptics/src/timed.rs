//! Pulses at a fixed interval for a fixed duration.

use serde::{Deserialize, Serialize};

use crate::{clamp_intensity, MAX_IMPULSES_PER_TICK};
use crate::output::HapticOutput;
use crate::process::HapticProcess;

/// Repeats an impulse every `interval` seconds until `duration` has elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedPulse {
    intensity: f32,
    duration: f32,
    interval: f32,
    #[serde(skip)]
    elapsed: f32,
    /// Index of the next impulse; it falls due at `index * interval`.
    #[serde(skip)]
    next_index: u64,
    #[serde(skip)]
    active: bool,
}

impl TimedPulse {
    /// Creates an idle pulse. A non-positive interval plays a single impulse.
    pub fn new(intensity: f32, duration: f32, interval: f32) -> Self {
        Self {
            intensity: clamp_intensity(intensity),
            duration: duration.max(0.0),
            interval,
            elapsed: 0.0,
            next_index: 0,
            active: false,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl HapticProcess for TimedPulse {
    fn begin(&mut self) {
        self.elapsed = 0.0;
        self.next_index = 0;
        self.active = self.duration > 0.0;
    }

    fn cancel(&mut self, output: &mut dyn HapticOutput) {
        if self.active {
            tracing::debug!(elapsed = self.elapsed, "haptic process cancelled");
        }
        self.active = false;
        output.stop();
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn tick(&mut self, dt: f32, output: &mut dyn HapticOutput) {
        if !self.active {
            return;
        }
        if self.interval > 0.0 {
            let interval = f64::from(self.interval);
            let elapsed = f64::from(self.elapsed);
            let duration = f64::from(self.duration);
            let mut sent = 0;
            loop {
                let due = self.next_index as f64 * interval;
                if due > elapsed || due >= duration {
                    break;
                }
                if sent == MAX_IMPULSES_PER_TICK {
                    self.next_index = ((elapsed / interval).floor() as u64).saturating_add(1);
                    break;
                }
                output.send_impulse(self.intensity, self.interval);
                self.next_index += 1;
                sent += 1;
            }
        } else if self.next_index == 0 {
            output.send_impulse(self.intensity, self.duration);
            self.next_index = 1;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.active = false;
        }
    }

    fn name(&self) -> &str {
        "timed"
    }
}
