//! Event bus: synchronous, in-order dispatch to pluggable sinks.
//!
//! Every `emit` reaches every registered sink before it returns, in the
//! order the sinks were added. Nothing is queued, so an observer always
//! sees the body in the state that produced the event.

use crate::events::BodyEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for body notifications.
pub struct EventBus {
    /// Registered sinks, in dispatch order.
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. Disabled bus is a no-op.
    enabled: bool,
    /// Events emitted since creation (including ones dropped while disabled).
    emitted: u64,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            enabled: true,
            emitted: 0,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Dispatches an event to every sink. If the bus is disabled, this is a no-op.
    pub fn emit(&mut self, event: BodyEvent) {
        self.emitted += 1;
        if !self.enabled {
            return;
        }
        for sink in &mut self.sinks {
            sink.handle(&event);
        }
    }

    /// Tells every sink the run is over.
    pub fn finalize(&mut self) {
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Number of `emit` calls so far.
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("EventBus")
            .field("sinks", &names)
            .field("enabled", &self.enabled)
            .field("emitted", &self.emitted)
            .finish()
    }
}
