//! # strider-body
//!
//! Avatar body representation for tracked VR users.
//!
//! A body is represented twice: by a kinematic capsule controller that
//! follows the tracked head precisely, and by a dynamic rigidbody that can
//! fall and be pushed. Every physics step [`BodyRepresentation::process`]
//! reconciles the two, hands position authority to the rigidbody while the
//! body is airborne and back to the controller once it has settled, and
//! reports grounded/airborne transitions.
//!
//! ## Key Types
//!
//! - [`BodyRepresentation`]: per-frame reconciliation entry point
//! - [`MovementAuthority`]: which representation is the source of truth
//! - [`AuthorityMachine`]: grounded/airborne authority transitions
//! - [`IgnoredColliders`]: collision exclusion for held objects
//! - [`BodyConfig`]: tunables

pub mod authority;
pub mod config;
pub mod exclusion;
pub mod grounded;
pub mod interaction;
pub mod representation;

pub use authority::{AuthorityMachine, MovementAuthority};
pub use config::BodyConfig;
pub use exclusion::IgnoredColliders;
pub use interaction::Interactable;
pub use representation::BodyRepresentation;
