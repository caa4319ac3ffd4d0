//! Movement authority and its state machine.
//!
//! Exactly one of the two body representations is the position source of
//! truth at any time. The two "until" modes hand authority over
//! automatically; the two "only" modes are pinned and change only when
//! written from outside.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strider_telemetry::AuthorityTag;
use strider_types::{StriderError, StriderResult};

/// Which representation drives the body position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MovementAuthority {
    /// The kinematic controller always drives.
    KinematicOnly = 0,
    /// The kinematic controller drives until the body leaves the ground.
    #[default]
    KinematicUntilAirborne = 1,
    /// The rigidbody always drives.
    DynamicOnly = 2,
    /// The rigidbody drives until the body has landed and settled.
    DynamicUntilGrounded = 3,
}

impl MovementAuthority {
    /// Returns all authorities.
    pub fn all() -> &'static [MovementAuthority] {
        &[
            MovementAuthority::KinematicOnly,
            MovementAuthority::KinematicUntilAirborne,
            MovementAuthority::DynamicOnly,
            MovementAuthority::DynamicUntilGrounded,
        ]
    }

    /// True when the rigidbody is the source of truth.
    #[inline]
    pub fn is_dynamic(self) -> bool {
        matches!(
            self,
            MovementAuthority::DynamicOnly | MovementAuthority::DynamicUntilGrounded
        )
    }

    /// True when the kinematic controller is the source of truth.
    #[inline]
    pub fn is_kinematic(self) -> bool {
        !self.is_dynamic()
    }

    /// True for the modes that never transition on their own.
    #[inline]
    pub fn is_pinned(self) -> bool {
        matches!(
            self,
            MovementAuthority::KinematicOnly | MovementAuthority::DynamicOnly
        )
    }

    /// Returns the snake_case name used in configs and logs.
    pub fn name(self) -> &'static str {
        match self {
            MovementAuthority::KinematicOnly => "kinematic_only",
            MovementAuthority::KinematicUntilAirborne => "kinematic_until_airborne",
            MovementAuthority::DynamicOnly => "dynamic_only",
            MovementAuthority::DynamicUntilGrounded => "dynamic_until_grounded",
        }
    }
}

impl fmt::Display for MovementAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for MovementAuthority {
    type Error = StriderError;

    fn try_from(value: u8) -> StriderResult<Self> {
        match value {
            0 => Ok(MovementAuthority::KinematicOnly),
            1 => Ok(MovementAuthority::KinematicUntilAirborne),
            2 => Ok(MovementAuthority::DynamicOnly),
            3 => Ok(MovementAuthority::DynamicUntilGrounded),
            other => Err(StriderError::InvalidAuthority(other)),
        }
    }
}

impl FromStr for MovementAuthority {
    type Err = StriderError;

    fn from_str(s: &str) -> StriderResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| StriderError::InvalidConfig(format!("Unknown movement authority: '{s}'")))
    }
}

impl From<MovementAuthority> for AuthorityTag {
    fn from(a: MovementAuthority) -> Self {
        match a {
            MovementAuthority::KinematicOnly => AuthorityTag::KinematicOnly,
            MovementAuthority::KinematicUntilAirborne => AuthorityTag::KinematicUntilAirborne,
            MovementAuthority::DynamicOnly => AuthorityTag::DynamicOnly,
            MovementAuthority::DynamicUntilGrounded => AuthorityTag::DynamicUntilGrounded,
        }
    }
}

/// Current authority plus the frame the body last went dynamic.
///
/// ```text
/// KinematicUntilAirborne ──(not grounded)──────────────────────▶ DynamicUntilGrounded
/// DynamicUntilGrounded ──(grounded ∧ settled ∧ a frame passed)──▶ KinematicUntilAirborne
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityMachine {
    current: MovementAuthority,
    dynamic_since: u64,
}

impl AuthorityMachine {
    pub fn new(authority: MovementAuthority) -> Self {
        Self {
            current: authority,
            dynamic_since: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> MovementAuthority {
        self.current
    }

    /// Frame at which a dynamic mode was last entered.
    #[inline]
    pub fn dynamic_since(&self) -> u64 {
        self.dynamic_since
    }

    /// Switches to `next` at `frame` and returns the previous authority.
    pub fn set(&mut self, next: MovementAuthority, frame: u64) -> MovementAuthority {
        if next.is_dynamic() {
            self.dynamic_since = frame;
        }
        std::mem::replace(&mut self.current, next)
    }

    /// Decides whether the authority should change this frame.
    ///
    /// `displacement_sqr` is the squared distance the rigidbody travelled
    /// since the previous frame. Returning to kinematic requires that at
    /// least one whole frame separates this frame from the switch to dynamic.
    pub fn evaluate(
        &self,
        grounded: bool,
        displacement_sqr: f32,
        settle_threshold_sqr: f32,
        frame: u64,
    ) -> Option<MovementAuthority> {
        match self.current {
            MovementAuthority::KinematicUntilAirborne if !grounded => {
                Some(MovementAuthority::DynamicUntilGrounded)
            }
            MovementAuthority::DynamicUntilGrounded
                if grounded
                    && displacement_sqr < settle_threshold_sqr
                    && frame > self.dynamic_since + 1 =>
            {
                Some(MovementAuthority::KinematicUntilAirborne)
            }
            _ => None,
        }
    }
}

impl Default for AuthorityMachine {
    fn default() -> Self {
        Self::new(MovementAuthority::KinematicUntilAirborne)
    }
}
