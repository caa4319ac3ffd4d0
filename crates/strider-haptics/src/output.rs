//! Haptic device seam.

use serde::{Deserialize, Serialize};

/// A device able to play vibration impulses.
pub trait HapticOutput {
    /// Plays one impulse. `intensity` is in `[0, 1]`, `duration` in seconds.
    fn send_impulse(&mut self, intensity: f32, duration: f32);

    /// Stops any impulse in progress.
    fn stop(&mut self);
}

/// One impulse as received by an output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impulse {
    pub intensity: f32,
    pub duration: f32,
}

/// Output that records what it was asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    pub impulses: Vec<Impulse>,
    pub stops: usize,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HapticOutput for RecordingOutput {
    fn send_impulse(&mut self, intensity: f32, duration: f32) {
        self.impulses.push(Impulse { intensity, duration });
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}
