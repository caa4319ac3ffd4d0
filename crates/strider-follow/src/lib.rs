//! # strider-follow
//!
//! Makes target objects follow a source object.
//!
//! An [`ObjectFollower`] picks the first active source and hands it, with
//! every target, to a [`FollowModifier`]. The modifier is a bundle of up to
//! three [`PropertyModifier`]s, one each for position, rotation and scale,
//! that either snap the target transform or drive its velocities.

pub mod follower;
pub mod modifier;
pub mod rigidbody;
pub mod target;
pub mod transform;

pub use follower::{FollowSource, ObjectFollower};
pub use modifier::{FollowModifier, PropertyModifier};
pub use rigidbody::{RigidbodyAngularVelocity, RigidbodyVelocity};
pub use target::{AxisLock, FollowTarget};
pub use transform::{TransformPosition, TransformRotation, TransformScale};
