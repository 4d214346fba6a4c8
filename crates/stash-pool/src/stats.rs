//! Pool occupancy metrics.

use stash_core::Generation;

/// Point-in-time counters for a [`ResourcePool`](crate::ResourcePool).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots currently allocated.
    pub live: usize,
    /// Slots on the free list.
    pub free: usize,
    /// Slots ever carved from the arena (`live + free`).
    pub slot_count: u32,
    /// Generation the next allocation will receive.
    /// [`Generation::FREED`] once the counter is exhausted.
    pub next_generation: Generation,
    /// Bytes per slot, header included.
    pub stride_bytes: usize,
    /// Bytes of arena memory committed for the pool.
    pub memory_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = PoolStats::default();
        assert_eq!(s.live, 0);
        assert_eq!(s.free, 0);
        assert_eq!(s.slot_count, 0);
        assert_eq!(s.next_generation, Generation::FIRST);
        assert_eq!(s.stride_bytes, 0);
        assert_eq!(s.memory_bytes, 0);
    }
}
