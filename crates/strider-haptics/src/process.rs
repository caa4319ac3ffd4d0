//! Haptic process trait.

use crate::output::HapticOutput;

/// A haptic pattern advanced by the caller.
///
/// ```text
/// pulse.begin();
/// while pulse.is_active() {
///     pulse.tick(dt, &mut device);
/// }
/// ```
pub trait HapticProcess {
    /// Arms the pattern from its start. Restarts an active pattern.
    fn begin(&mut self);

    /// Disarms the pattern and stops the device.
    fn cancel(&mut self, output: &mut dyn HapticOutput);

    fn is_active(&self) -> bool;

    /// Sends every impulse due at the current time, then advances by `dt`.
    fn tick(&mut self, dt: f32, output: &mut dyn HapticOutput);

    /// Returns the pattern's name.
    fn name(&self) -> &str;
}
