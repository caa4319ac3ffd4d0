//! Inspection hooks for live debugging.
//!
//! Hooks are called by a simulation driver after every processed frame and
//! once at the end of a run.

use crate::snapshot::{BodySnapshot, FrameTrace};

/// Trait for read-only observers of a simulation run.
///
/// # Lifecycle
///
/// ```text
/// for each frame:
///   body.process(physics)
///   hook.on_frame(snapshot)
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook {
    /// Called after every processed frame.
    fn on_frame(&mut self, snapshot: &BodySnapshot);

    /// Called when the run completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that records every snapshot into a [`FrameTrace`].
#[derive(Debug, Default)]
pub struct TraceRecorder {
    trace: FrameTrace,
    /// Record every n-th frame. `0` and `1` record all.
    stride: u64,
}

impl TraceRecorder {
    pub fn new(dt: f32) -> Self {
        Self {
            trace: FrameTrace::new(dt),
            stride: 1,
        }
    }

    pub fn with_stride(mut self, stride: u64) -> Self {
        self.stride = stride;
        self
    }

    pub fn trace(&self) -> &FrameTrace {
        &self.trace
    }

    pub fn into_trace(self) -> FrameTrace {
        self.trace
    }
}

impl InspectionHook for TraceRecorder {
    fn on_frame(&mut self, snapshot: &BodySnapshot) {
        if self.stride <= 1 || snapshot.frame % self.stride == 0 {
            self.trace.push(snapshot.clone());
        }
    }

    fn name(&self) -> &str {
        "trace_recorder"
    }
}
