//! # strider-telemetry
//!
//! Event bus for body notifications. Emits typed events
//! (grounded/airborne transitions, authority switches, collision
//! exclusion updates) to pluggable sinks, synchronously and in
//! registration order.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{AuthorityTag, BodyEvent, BodyEventKind};
pub use sinks::{CallbackSink, EventSink, TracingSink, VecSink};
