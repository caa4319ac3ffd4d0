//! Pluggable event sinks.
//!
//! Sinks consume events from the bus (collect them, log them,
//! forward them to gameplay callbacks).

use std::sync::{Arc, Mutex};

use crate::events::BodyEvent;

/// Trait for event consumers.
///
/// Implement this to create custom observers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &BodyEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec`.
///
/// Clones share the same storage, so a clone kept outside the bus can
/// read what the registered copy received.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<BodyEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far.
    pub fn events(&self) -> Vec<BodyEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every event received so far.
    pub fn drain(&self) -> Vec<BodyEvent> {
        match self.events.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &BodyEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &BodyEvent) {
        tracing::info!(
            frame = event.frame,
            event = ?event.kind,
            "body_event"
        );
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// Forwards events to a closure, the way gameplay code subscribes to a
/// single notification.
pub struct CallbackSink<F>
where
    F: FnMut(&BodyEvent) + Send,
{
    name: String,
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(&BodyEvent) + Send,
{
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> EventSink for CallbackSink<F>
where
    F: FnMut(&BodyEvent) + Send,
{
    fn handle(&mut self, event: &BodyEvent) {
        (self.callback)(event);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
