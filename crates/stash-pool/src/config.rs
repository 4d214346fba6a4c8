//! Pool configuration parameters.

use stash_arena::ArenaConfig;

use crate::error::PoolError;

/// Configuration for a [`ResourcePool`](crate::ResourcePool).
///
/// The resource size is fixed for the pool's lifetime: a pool holds one
/// kind of record. Heterogeneous records need one pool per kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Payload bytes per slot. Zero is allowed (header-only slots).
    pub resource_size: usize,

    /// Maximum number of slots the pool will ever carve.
    ///
    /// Default: [`PoolConfig::DEFAULT_MAX_SLOTS`]. Must be in
    /// `1..=DEFAULT_MAX_SLOTS`.
    pub max_slots: u32,

    /// Configuration of the backing arena.
    pub arena: ArenaConfig,
}

impl PoolConfig {
    /// Largest slot count: `u32::MAX` itself marks the end of a list.
    pub const DEFAULT_MAX_SLOTS: u32 = u32::MAX - 1;

    /// Create a config for slots of `resource_size` payload bytes.
    pub fn new(resource_size: usize) -> Self {
        Self {
            resource_size,
            max_slots: Self::DEFAULT_MAX_SLOTS,
            arena: ArenaConfig::default(),
        }
    }

    /// Set the maximum slot count.
    pub fn max_slots(mut self, max_slots: u32) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Set the backing arena configuration.
    pub fn arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `max_slots` is out of range
    /// and [`PoolError::Arena`] if the arena config is invalid.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_slots == 0 || self.max_slots > Self::DEFAULT_MAX_SLOTS {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_slots must be in 1..={}, got {}",
                    Self::DEFAULT_MAX_SLOTS,
                    self.max_slots
                ),
            });
        }
        self.arena.validate()?;
        Ok(())
    }
}
