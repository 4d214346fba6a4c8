//! Reference model of a resource pool's observable state.
//!
//! [`PoolModel`] tracks which handles should be live and in which order
//! the pool should enumerate them, so property tests can drive a real
//! [`ResourcePool`](stash_pool::ResourcePool) and a model side by side.

use indexmap::IndexMap;
use stash_core::SlotIndex;
use stash_pool::PoolHandle;

/// Expected live set of a pool, in allocation order.
///
/// Enumeration order of a pool is most-recent-first, i.e. the reverse of
/// the model's insertion order; `shift_remove` keeps the relative order
/// of survivors intact across frees, exactly like unlinking from the
/// pool's live list.
#[derive(Debug, Default)]
pub struct PoolModel {
    live: IndexMap<SlotIndex, PoolHandle>,
    retired: Vec<PoolHandle>,
}

impl PoolModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful allocation.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already live in the model, which means the
    /// pool handed out a slot twice.
    pub fn record_alloc(&mut self, handle: PoolHandle) {
        let previous = self.live.insert(handle.slot(), handle);
        assert!(
            previous.is_none(),
            "slot {} allocated while still live",
            handle.slot()
        );
    }

    /// Record a free. Returns whether the model considered the handle live.
    pub fn record_free(&mut self, handle: PoolHandle) -> bool {
        match self.live.get(&handle.slot()) {
            Some(&live) if live == handle => {
                self.live.shift_remove(&handle.slot());
                self.retired.push(handle);
                true
            }
            _ => false,
        }
    }

    /// Whether the model considers `handle` live.
    pub fn is_live(&self, handle: PoolHandle) -> bool {
        self.live.get(&handle.slot()) == Some(&handle)
    }

    /// Live handles in the order the pool should enumerate them.
    pub fn expected_order(&self) -> Vec<PoolHandle> {
        self.live.values().rev().copied().collect()
    }

    /// Live handle at position `index` in allocation order, if any.
    pub fn live_at(&self, index: usize) -> Option<PoolHandle> {
        self.live.get_index(index).map(|(_, &h)| h)
    }

    /// Every handle that has been freed.
    pub fn retired(&self) -> &[PoolHandle] {
        &self.retired
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
