//! Error types for the rules core.
//!
//! Only two preconditions can be violated by the rules themselves: a cube
//! coordinate whose components do not sum to zero, and a roster lookup for a
//! ship that was never added. Damage and combat never fail; they clamp or log.

use thiserror::Error;

/// Errors raised by the rules core and the game roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsimError {
    /// A cube coordinate was built from a triple with `q + r + s != 0`.
    #[error("invalid cube coordinate ({q}, {r}, {s}): components must sum to zero")]
    InvalidCoordinate {
        /// Column axis
        q: i32,
        /// Row axis
        r: i32,
        /// Third axis
        s: i32,
    },

    /// No ship with this name is registered in the game.
    #[error("ship {0} not found")]
    ShipNotFound(String),

    /// A ship was ordered to fire on itself.
    #[error("ship {0} cannot fire on itself")]
    SelfTarget(String),

    /// A game configuration could not be parsed.
    #[error("invalid game configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WsimError>;
