//! # strider-physics
//!
//! The physics services the body engine consumes, expressed as traits,
//! plus a small reference world that implements them.
//!
//! The body engine never talks to a concrete engine. It is handed a
//! [`PhysicsBackend`], which is any type that is at the same time a
//! [`KinematicController`], a [`DynamicBody`] and a [`SpatialQuery`].
//! A host engine binding implements the three traits over its own
//! character controller, rigidbody and scene queries; [`SimWorld`]
//! implements them over axis-aligned boxes for tests and the CLI.

pub mod backend;
pub mod config;
pub mod flags;
pub mod layers;
pub mod world;

pub use backend::{ControllerShape, DynamicBody, KinematicController, PhysicsBackend, SpatialQuery};
pub use config::WorldConfig;
pub use flags::CollisionFlags;
pub use layers::LayerMatrix;
pub use world::SimWorld;
