//! Arena occupancy metrics.
//!
//! [`ArenaStats`] is a point-in-time copy of an arena's counters, taken
//! with [`Arena::stats`](crate::Arena::stats).

/// Occupancy and commit counters for a single arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Bytes between the start of the arena and the cursor.
    pub used_bytes: usize,
    /// Bytes of backing memory currently committed.
    pub committed_bytes: usize,
    /// Logical reservation size in bytes.
    pub reservation_bytes: usize,
    /// Highest cursor position ever reached, in bytes.
    pub high_water_bytes: usize,
    /// Number of times the backing provider was asked for more memory.
    pub commit_count: u64,
}

impl ArenaStats {
    /// Bytes left before the cursor hits the reservation.
    pub fn remaining_bytes(&self) -> usize {
        self.reservation_bytes.saturating_sub(self.used_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_saturates_for_inconsistent_counters() {
        let s = ArenaStats {
            used_bytes: 64,
            reservation_bytes: 32,
            ..ArenaStats::default()
        };
        assert_eq!(s.remaining_bytes(), 0);
    }

    #[test]
    fn default_stats_are_zero() {
        let s = ArenaStats::default();
        assert_eq!(s.used_bytes, 0);
        assert_eq!(s.committed_bytes, 0);
        assert_eq!(s.reservation_bytes, 0);
        assert_eq!(s.high_water_bytes, 0);
        assert_eq!(s.commit_count, 0);
    }

    #[test]
    fn remaining_is_reservation_minus_used() {
        let s = ArenaStats {
            used_bytes: 24,
            reservation_bytes: 100,
            ..Default::default()
        };
        assert_eq!(s.remaining_bytes(), 76);
    }
}
