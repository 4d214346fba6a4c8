//! The generational [`ResourcePool`].

use stash_arena::{Arena, LazyCommit, Region, Reserve};
use stash_core::{align_up, Generation, PoolId, SlotIndex};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::PoolHandle;
use crate::header::{self, SlotHeader, HEADER_SIZE};
use crate::iter::Handles;
use crate::stats::PoolStats;

/// Fixed-size record pool with generation-checked handles.
///
/// Slots are carved from the pool's own arena on first use and never
/// returned to it; the arena only grows. A freed slot goes onto the free
/// list with its generation set to [`Generation::FREED`], and the next
/// [`allocate`](ResourcePool::allocate) pops it and stamps it with a
/// fresh generation. Handles to the previous occupant therefore fail
/// [`verify`](ResourcePool::verify) forever after.
///
/// All handle lookups are O(1): the slot's header sits at
/// `slot × stride` in the arena. [`free`](ResourcePool::free) is O(live)
/// because the live list is singly linked and the predecessor has to be
/// found.
///
/// Dropping the pool drops its arena, releasing every slot at once.
pub struct ResourcePool<R: Reserve = LazyCommit> {
    id: PoolId,
    arena: Arena<R>,
    /// Payload bytes per slot, as configured.
    resource_size: usize,
    /// Header plus aligned payload.
    stride: usize,
    max_slots: u32,
    /// Slots carved so far; the next fresh slot gets this index.
    slot_count: u32,
    /// Stamp for the next allocation. `FREED` once exhausted.
    next_generation: Generation,
    free_head: Option<SlotIndex>,
    live_head: Option<SlotIndex>,
    live: usize,
    free: usize,
}

impl ResourcePool<LazyCommit> {
    /// Create a pool of `resource_size`-byte records with default settings.
    ///
    /// # Errors
    ///
    /// See [`ResourcePool::with_backing`].
    pub fn new(resource_size: usize) -> Result<Self, PoolError> {
        Self::with_config(PoolConfig::new(resource_size))
    }

    /// Create a pool from an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`ResourcePool::with_backing`].
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        Self::with_backing(config, LazyCommit)
    }
}

impl<R: Reserve> ResourcePool<R> {
    /// Create a pool whose arena takes its memory from `backing`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] or [`PoolError::Arena`] if the
    /// configuration is invalid, [`PoolError::ResourceTooLarge`] if a slot
    /// would not be addressable, and [`PoolError::Arena`] if the arena
    /// cannot obtain its initial memory.
    pub fn with_backing(config: PoolConfig, backing: R) -> Result<Self, PoolError> {
        config.validate()?;
        let stride = align_up(config.resource_size)
            .and_then(|payload| payload.checked_add(HEADER_SIZE))
            .ok_or(PoolError::ResourceTooLarge {
                resource_size: config.resource_size,
            })?;
        let arena = Arena::with_backing(config.arena, backing)?;
        let id = PoolId::next();
        tracing::debug!(
            pool = id.get(),
            resource_size = config.resource_size,
            stride,
            "resource pool created"
        );
        Ok(Self {
            id,
            arena,
            resource_size: config.resource_size,
            stride,
            max_slots: config.max_slots,
            slot_count: 0,
            next_generation: Generation::FIRST,
            free_head: None,
            live_head: None,
            live: 0,
            free: 0,
        })
    }

    /// Allocate a slot and return a handle to it.
    ///
    /// Reuses the most recently freed slot if there is one, otherwise
    /// carves a new slot from the arena. The slot gets the next generation
    /// and its payload is zeroed. It becomes the head of the live list.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::GenerationsExhausted`] once the generation
    /// counter has run out, [`PoolError::SlotLimitReached`] if no slot is
    /// free and `max_slots` are carved, and [`PoolError::Arena`] if the
    /// arena cannot fit another slot. The pool is unchanged on error.
    pub fn allocate(&mut self) -> Result<PoolHandle, PoolError> {
        let generation = self.next_generation;
        if generation.is_freed() {
            tracing::warn!(pool = self.id.get(), "pool generations exhausted");
            return Err(PoolError::GenerationsExhausted);
        }

        let slot = match self.free_head {
            Some(slot) => {
                self.free_head = self.next_of(slot);
                self.free -= 1;
                slot
            }
            None => self.carve()?,
        };

        self.next_generation = generation.next().unwrap_or(Generation::FREED);
        let header = self.header_region(slot);
        SlotHeader {
            slot,
            generation,
            next: self.live_head,
        }
        .encode(self.arena.bytes_mut(header));
        let payload = self.payload_region(slot);
        self.arena.bytes_mut(payload).fill(0);
        self.live_head = Some(slot);
        self.live += 1;

        Ok(PoolHandle {
            slot,
            generation,
            pool: self.id,
        })
    }

    /// Whether `handle` refers to the current allocation of its slot.
    ///
    /// O(1). False for null handles, handles from other pools, handles to
    /// freed slots and handles to slots that were freed and reused.
    pub fn verify(&self, handle: PoolHandle) -> bool {
        handle.pool == self.id
            && handle.slot.0 < self.slot_count
            && !handle.generation.is_freed()
            && self.generation_of(handle.slot) == handle.generation
    }

    /// Payload bytes of the slot `handle` refers to, if it still verifies.
    pub fn get(&self, handle: PoolHandle) -> Option<&[u8]> {
        if !self.verify(handle) {
            return None;
        }
        Some(self.arena.bytes(self.payload_region(handle.slot)))
    }

    /// Mutable payload bytes of the slot `handle` refers to, if it still
    /// verifies.
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut [u8]> {
        if !self.verify(handle) {
            return None;
        }
        let region = self.payload_region(handle.slot);
        Some(self.arena.bytes_mut(region))
    }

    /// Free the slot `handle` refers to.
    ///
    /// Returns `false` and does nothing if the handle does not verify, so
    /// double frees and frees of stale handles are harmless. Otherwise the
    /// slot leaves the live list, is stamped [`Generation::FREED`] and
    /// becomes the head of the free list.
    pub fn free(&mut self, handle: PoolHandle) -> bool {
        if !self.verify(handle) {
            return false;
        }
        let slot = handle.slot;
        self.unlink_live(slot);

        let header = self.header_region(slot);
        SlotHeader {
            slot,
            generation: Generation::FREED,
            next: self.free_head,
        }
        .encode(self.arena.bytes_mut(header));
        self.free_head = Some(slot);
        self.live -= 1;
        self.free += 1;
        true
    }

    /// Handle to the most recently allocated live slot, or the null handle
    /// if the pool is empty.
    pub fn first_handle(&self) -> PoolHandle {
        self.handle_or_null(self.live_head)
    }

    /// The live slot after `handle` in enumeration order, or the null
    /// handle at the end of the list or if `handle` no longer verifies.
    pub fn next_handle(&self, handle: PoolHandle) -> PoolHandle {
        if !self.verify(handle) {
            return PoolHandle::null(self.id);
        }
        self.handle_or_null(self.next_of(handle.slot))
    }

    /// Iterate over live handles, most recently allocated first.
    pub fn iter(&self) -> Handles<'_, R> {
        Handles::new(self)
    }

    /// The null handle for this pool.
    pub fn null_handle(&self) -> PoolHandle {
        PoolHandle::null(self.id)
    }

    /// Identity stamped into every handle this pool issues.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no slot is live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever carved from the arena.
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Number of slots waiting on the free list.
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Payload bytes per slot.
    pub fn resource_size(&self) -> usize {
        self.resource_size
    }

    /// Bytes per slot in the arena, header included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Snapshot of the pool's counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            live: self.live,
            free: self.free,
            slot_count: self.slot_count,
            next_generation: self.next_generation,
            stride_bytes: self.stride,
            memory_bytes: self.arena.committed(),
        }
    }

    /// Carve a fresh slot at index `slot_count`.
    fn carve(&mut self) -> Result<SlotIndex, PoolError> {
        if self.slot_count >= self.max_slots {
            tracing::warn!(
                pool = self.id.get(),
                limit = self.max_slots,
                "pool slot limit reached"
            );
            return Err(PoolError::SlotLimitReached {
                limit: self.max_slots,
            });
        }
        let slot = SlotIndex(self.slot_count);
        let region = self.arena.alloc(self.stride)?;
        debug_assert_eq!(region.offset(), self.slot_offset(slot));
        self.slot_count += 1;
        tracing::trace!(pool = self.id.get(), slot = slot.0, "carved pool slot");
        Ok(slot)
    }

    /// Remove `slot` from the live list, fixing up the head if needed.
    fn unlink_live(&mut self, slot: SlotIndex) {
        let after = self.next_of(slot);
        if self.live_head == Some(slot) {
            self.live_head = after;
            return;
        }
        let mut cursor = self.live_head;
        while let Some(current) = cursor {
            let next = self.next_of(current);
            if next == Some(slot) {
                let header = self.header_region(current);
                header::encode_next(self.arena.bytes_mut(header), after);
                return;
            }
            cursor = next;
        }
    }

    fn handle_or_null(&self, slot: Option<SlotIndex>) -> PoolHandle {
        match slot {
            Some(slot) => PoolHandle {
                slot,
                generation: self.generation_of(slot),
                pool: self.id,
            },
            None => PoolHandle::null(self.id),
        }
    }

    fn slot_offset(&self, slot: SlotIndex) -> usize {
        slot.as_usize() * self.stride
    }

    fn header_region(&self, slot: SlotIndex) -> Region {
        Region::from_parts(self.slot_offset(slot), HEADER_SIZE)
    }

    fn payload_region(&self, slot: SlotIndex) -> Region {
        Region::from_parts(self.slot_offset(slot) + HEADER_SIZE, self.resource_size)
    }

    fn header_of(&self, slot: SlotIndex) -> SlotHeader {
        let header = SlotHeader::decode(self.arena.bytes(self.header_region(slot)));
        debug_assert_eq!(header.slot, slot);
        header
    }

    fn generation_of(&self, slot: SlotIndex) -> Generation {
        self.header_of(slot).generation
    }

    fn next_of(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.header_of(slot).next
    }
}
