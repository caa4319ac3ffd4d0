//! # strider-io
//!
//! Simulation input contract and validation.
//!
//! Defines the boundary types that the CLI and benchmark scenarios use to
//! describe a run of the body engine: world geometry, configs, the scripted
//! head motion and scripted grabs.

pub mod contract;
pub mod validator;

pub use contract::{BoxSpec, GrabAction, SimulationInput, SimulationParams, SourceMotion};
pub use validator::validate_input;
