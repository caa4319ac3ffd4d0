//! Pulses driven by an amplitude stream, such as audio output.

use serde::{Deserialize, Serialize};

use crate::clamp_intensity;
use crate::output::HapticOutput;
use crate::process::HapticProcess;

/// Each tick plays one impulse whose intensity is the RMS of the samples
/// pushed since the previous tick, times `gain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampledPulse {
    gain: f32,
    #[serde(skip)]
    samples: Vec<f32>,
    #[serde(skip)]
    active: bool,
}

impl SampledPulse {
    pub fn new(gain: f32) -> Self {
        Self {
            gain: gain.max(0.0),
            samples: Vec::new(),
            active: false,
        }
    }

    /// Buffers samples for the next tick. Ignored while inactive.
    pub fn push_samples(&mut self, samples: &[f32]) {
        if self.active {
            self.samples.extend(samples.iter().copied().filter(|s| s.is_finite()));
        }
    }

    pub fn buffered(&self) -> usize {
        self.samples.len()
    }

    /// Root mean square of `samples`, zero when empty.
    pub fn rms(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = samples.iter().map(|s| s * s).sum();
        (sum / samples.len() as f32).sqrt()
    }
}

impl HapticProcess for SampledPulse {
    fn begin(&mut self) {
        self.samples.clear();
        self.active = true;
    }

    fn cancel(&mut self, output: &mut dyn HapticOutput) {
        self.samples.clear();
        if self.active {
            tracing::debug!("haptic process cancelled");
        }
        self.active = false;
        output.stop();
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn tick(&mut self, dt: f32, output: &mut dyn HapticOutput) {
        if !self.active || self.samples.is_empty() {
            return;
        }
        let intensity = clamp_intensity(Self::rms(&self.samples) * self.gain);
        self.samples.clear();
        output.send_impulse(intensity, dt.max(0.0));
    }

    fn name(&self) -> &str {
        "sampled"
    }
}
