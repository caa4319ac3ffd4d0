//! # strider-debug
//!
//! Inspection hooks and body snapshots for debugging body behaviour.
//! Snapshots are collected per frame into a trace that serializes to a
//! compact binary file for later inspection.

pub mod hooks;
pub mod snapshot;

pub use hooks::{InspectionHook, TraceRecorder};
pub use snapshot::{BodySnapshot, FrameTrace};
