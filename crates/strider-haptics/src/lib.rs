//! # strider-haptics
//!
//! Haptic pulse patterns driven by the caller's frame tick.
//!
//! A [`HapticProcess`] is a small state object: `begin` arms it, every
//! `tick` advances its clock and sends whatever impulses fall due to a
//! [`HapticOutput`], and `cancel` stops it together with the device.

pub mod interval;
pub mod output;
pub mod process;
pub mod sampled;
pub mod timed;

pub use interval::IntervalPulse;
pub use output::{HapticOutput, Impulse, RecordingOutput};
pub use process::HapticProcess;
pub use sampled::SampledPulse;
pub use timed::TimedPulse;

/// Most impulses a process sends in one tick. Anything further overdue is
/// dropped by timed pulses and deferred by counted ones.
pub const MAX_IMPULSES_PER_TICK: u32 = 64;

/// Clamps an intensity into `[0, 1]`. NaN maps to zero.
#[inline]
pub fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}
