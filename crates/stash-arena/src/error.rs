//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocation would move the cursor past the end of the reservation.
    CapacityExceeded {
        /// Number of bytes requested (before rounding).
        requested: usize,
        /// Bytes already in use when the request was made.
        used: usize,
        /// Total reservation size in bytes.
        reservation: usize,
    },
    /// The backing provider could not commit memory for the reservation.
    ReservationFailed {
        /// Number of bytes the provider was asked to commit.
        requested: usize,
    },
    /// The arena configuration is unusable.
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                used,
                reservation,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes with {used} of {reservation} bytes in use"
                )
            }
            Self::ReservationFailed { requested } => {
                write!(f, "could not commit {requested} bytes of backing memory")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
