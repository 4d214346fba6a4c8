//! Strongly-typed identifiers for pooled resources.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a slot within a resource pool.
///
/// Slot indices are dense: the n-th slot ever carved from a pool's arena
/// has index `n`, and that index never changes for the slot's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    /// The index as a `usize`, for offset arithmetic.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Allocation stamp of a pool slot.
///
/// Every (re)allocation of a slot receives a fresh generation from the
/// pool's monotonic counter. A handle is valid only while its generation
/// equals the one stored in the slot header.
///
/// [`Generation::FREED`] marks a slot that sits on the free list. It is
/// outside the domain of issued generations: the counter stops one short
/// of it, so a freed slot can never verify against any handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u32);

impl Generation {
    /// Sentinel stored in freed slots and in null handles.
    pub const FREED: Generation = Generation(u32::MAX);

    /// The first generation a pool issues.
    pub const FIRST: Generation = Generation(0);

    /// Whether this is the freed sentinel.
    #[inline]
    pub fn is_freed(self) -> bool {
        self == Self::FREED
    }

    /// The generation issued after this one, or `None` if the next value
    /// would collide with [`Generation::FREED`].
    #[inline]
    pub fn next(self) -> Option<Generation> {
        match self.0.checked_add(1) {
            Some(n) if n != Self::FREED.0 => Some(Generation(n)),
            _ => None,
        }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_freed() {
            write!(f, "freed")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<u32> for Generation {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`PoolId`] allocation.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a resource pool.
///
/// Allocated from a monotonic atomic counter via [`PoolId::next`]. Two
/// pools never share an ID within a process, so a handle issued by one
/// pool can never verify against another, even when slot index and
/// generation happen to coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u64);

impl PoolId {
    /// Allocate a fresh, unique pool ID. Thread-safe.
    pub fn next() -> Self {
        Self(POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_ids_are_unique() {
        let a = PoolId::next();
        let b = PoolId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn generation_next_increments() {
        assert_eq!(Generation::FIRST.next(), Some(Generation(1)));
        assert_eq!(Generation(41).next(), Some(Generation(42)));
    }

    #[test]
    fn generation_never_reaches_sentinel() {
        assert_eq!(Generation(u32::MAX - 2).next(), Some(Generation(u32::MAX - 1)));
        assert_eq!(Generation(u32::MAX - 1).next(), None);
        assert_eq!(Generation::FREED.next(), None);
    }

    #[test]
    fn default_generation_is_first() {
        assert_eq!(Generation::default(), Generation::FIRST);
    }

    #[test]
    fn freed_displays_as_word() {
        assert_eq!(Generation::FREED.to_string(), "freed");
        assert_eq!(Generation(7).to_string(), "7");
        assert!(Generation::FREED.is_freed());
        assert!(!Generation::FIRST.is_freed());
    }

    #[test]
    fn slot_index_conversions() {
        let idx = SlotIndex::from(12);
        assert_eq!(idx.as_usize(), 12);
        assert_eq!(idx.to_string(), "12");
    }
}
