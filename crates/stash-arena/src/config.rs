//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; the values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Upper bound for the cursor, in bytes.
    ///
    /// This is a logical reservation: with the default [`LazyCommit`]
    /// backing only the bytes the cursor actually passes over are ever
    /// committed, so a very large value costs nothing up front.
    ///
    /// Default: 1 TiB. Must be non-zero.
    ///
    /// [`LazyCommit`]: crate::LazyCommit
    pub reservation: usize,

    /// Bytes to commit at creation, before the first allocation.
    ///
    /// Default: 0. Must not exceed `reservation`.
    pub initial_commit: usize,
}

impl ArenaConfig {
    /// Default reservation: 1 TiB on 64-bit targets, `isize::MAX` elsewhere.
    pub const DEFAULT_RESERVATION: usize = if usize::BITS >= 64 {
        1 << 40
    } else {
        isize::MAX as usize
    };

    /// Default initial commit.
    pub const DEFAULT_INITIAL_COMMIT: usize = 0;

    /// Create a config with the default reservation.
    pub fn new() -> Self {
        Self {
            reservation: Self::DEFAULT_RESERVATION,
            initial_commit: Self::DEFAULT_INITIAL_COMMIT,
        }
    }

    /// Create a config with the given reservation size in bytes.
    pub fn with_reservation(reservation: usize) -> Self {
        Self {
            reservation,
            ..Self::new()
        }
    }

    /// Set the number of bytes committed at creation.
    pub fn initial_commit(mut self, bytes: usize) -> Self {
        self.initial_commit = bytes;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if the reservation is zero or
    /// smaller than the initial commit.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.reservation == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "reservation must be non-zero".into(),
            });
        }
        if self.initial_commit > self.reservation {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "initial commit {} exceeds reservation {}",
                    self.initial_commit, self.reservation
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_large_and_uncommitted() {
        let config = ArenaConfig::default();
        assert!(config.reservation >= 1 << 30);
        assert_eq!(config.initial_commit, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_reservation_preserves_size() {
        let config = ArenaConfig::with_reservation(4096);
        assert_eq!(config.reservation, 4096);
    }

    #[test]
    fn zero_reservation_rejected() {
        let config = ArenaConfig::with_reservation(0);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn initial_commit_beyond_reservation_rejected() {
        let config = ArenaConfig::with_reservation(64).initial_commit(128);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }
}
