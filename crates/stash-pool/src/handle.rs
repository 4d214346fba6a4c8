//! Pool handles.
//!
//! A [`PoolHandle`] is a weak, copyable lookup key. It does not keep its
//! slot alive; the pool re-checks the generation on every access.

use std::fmt;

use stash_core::{Generation, PoolId, SlotIndex};

/// Reference to one allocation of one slot in one pool.
///
/// Valid while the slot's stored generation equals
/// [`generation`](PoolHandle::generation) and the handle was issued by
/// the pool it is presented to. After the slot is freed (and possibly
/// reused) the handle stays permanently invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    pub(crate) slot: SlotIndex,
    pub(crate) generation: Generation,
    pub(crate) pool: PoolId,
}

impl PoolHandle {
    /// The end-of-enumeration handle for `pool`. Never verifies.
    pub fn null(pool: PoolId) -> Self {
        Self {
            slot: SlotIndex(u32::MAX),
            generation: Generation::FREED,
            pool,
        }
    }

    /// Whether this is a null handle.
    pub fn is_null(&self) -> bool {
        self.generation.is_freed()
    }

    /// Slot index the handle points at.
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// Generation the slot had when the handle was issued.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Identity of the issuing pool.
    pub fn pool(&self) -> PoolId {
        self.pool
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "PoolHandle(null, pool={})", self.pool)
        } else {
            write!(
                f,
                "PoolHandle(slot={}, gen={}, pool={})",
                self.slot, self.generation, self.pool
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_null() {
        let pool = PoolId::next();
        let h = PoolHandle::null(pool);
        assert!(h.is_null());
        assert_eq!(h.generation(), Generation::FREED);
        assert_eq!(h.pool(), pool);
        assert!(h.to_string().contains("null"));
    }

    #[test]
    fn accessors_round_trip() {
        let pool = PoolId::next();
        let h = PoolHandle {
            slot: SlotIndex(3),
            generation: Generation(9),
            pool,
        };
        assert!(!h.is_null());
        assert_eq!(h.slot(), SlotIndex(3));
        assert_eq!(h.generation(), Generation(9));
        assert_eq!(
            h.to_string(),
            format!("PoolHandle(slot=3, gen=9, pool={pool})")
        );
    }
}
