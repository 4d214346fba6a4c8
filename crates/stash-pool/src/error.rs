//! Pool-specific error types.
//!
//! Stale or forged handles are not errors: lookups return `None` and
//! frees are no-ops. Only failures to produce a new slot surface here.

use std::error::Error;
use std::fmt;

use stash_arena::ArenaError;

/// Errors that can occur while creating a pool or allocating a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The backing arena could not be created or could not fit another slot.
    Arena(ArenaError),
    /// The generation counter reached the freed sentinel. Generations
    /// never wrap, so no further allocations are possible.
    GenerationsExhausted,
    /// The pool already holds its maximum number of slots and none are free.
    SlotLimitReached {
        /// The configured slot limit.
        limit: u32,
    },
    /// Header plus payload does not fit in a `usize`.
    ResourceTooLarge {
        /// The requested payload size in bytes.
        resource_size: usize,
    },
    /// The pool configuration is unusable.
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "pool arena: {e}"),
            Self::GenerationsExhausted => write!(f, "pool generation counter exhausted"),
            Self::SlotLimitReached { limit } => {
                write!(f, "pool slot limit of {limit} reached")
            }
            Self::ResourceTooLarge { resource_size } => {
                write!(f, "resource size {resource_size} too large for a pool slot")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid pool config: {reason}"),
        }
    }
}

impl Error for PoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for PoolError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
