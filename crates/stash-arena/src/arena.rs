//! The bump-allocating [`Arena`].

use stash_core::align_up;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::region::{ArenaMark, Region};
use crate::reserve::{LazyCommit, Reserve};
use crate::scope::ArenaScope;
use crate::stats::ArenaStats;

/// A linear allocator over one contiguous reservation.
///
/// Allocation rounds the request up to a multiple of 8 bytes and advances
/// the cursor by that amount; the returned [`Region`] starts at the old
/// cursor. Memory is never reclaimed per allocation. Instead the caller
/// takes a [`mark`](Arena::mark) and later [`pop_to`](Arena::pop_to)s it,
/// or [`clear`](Arena::clear)s everything. Neither zeroes memory.
///
/// Invariant: `0 <= cursor <= reservation`, and `cursor` is always a
/// multiple of [`ALIGNMENT`](stash_core::ALIGNMENT).
///
/// Dropping the arena releases the entire reservation at once.
pub struct Arena<R: Reserve = LazyCommit> {
    /// Committed prefix of the reservation.
    data: Vec<u8>,
    /// Bump pointer: next free byte.
    cursor: usize,
    /// Upper bound for `cursor`.
    reservation: usize,
    /// Highest cursor ever observed.
    high_water: usize,
    /// Number of successful growth requests to `backing`.
    commit_count: u64,
    backing: R,
}

impl Arena<LazyCommit> {
    /// Create an arena with the default (lazily committed) backing.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if `config` fails validation
    /// and [`ArenaError::ReservationFailed`] if the initial commit cannot
    /// be satisfied.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        Self::with_backing(config, LazyCommit)
    }

    /// Create an arena with a reservation of `reservation` bytes.
    ///
    /// # Errors
    ///
    /// See [`Arena::new`].
    pub fn with_reservation(reservation: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::with_reservation(reservation))
    }
}

impl<R: Reserve> Arena<R> {
    /// Create an arena whose memory comes from `backing`.
    ///
    /// # Errors
    ///
    /// See [`Arena::new`].
    pub fn with_backing(config: ArenaConfig, mut backing: R) -> Result<Self, ArenaError> {
        config.validate()?;
        let data = backing.initial(&config)?;
        tracing::debug!(
            reservation = config.reservation,
            committed = data.len(),
            "arena created"
        );
        Ok(Self {
            data,
            cursor: 0,
            reservation: config.reservation,
            high_water: 0,
            commit_count: 0,
            backing,
        })
    }

    /// Bump-allocate `size` bytes.
    ///
    /// The cursor advances by `size` rounded up to a multiple of 8. The
    /// returned region's bytes are not zeroed: after a pop they still
    /// hold whatever the discarded allocations wrote.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExceeded`] if the rounded size does
    /// not fit in the rest of the reservation, and
    /// [`ArenaError::ReservationFailed`] if the backing provider cannot
    /// commit the memory. The cursor is unchanged on error.
    pub fn alloc(&mut self, size: usize) -> Result<Region, ArenaError> {
        let new_cursor = align_up(size)
            .and_then(|aligned| self.cursor.checked_add(aligned))
            .filter(|&end| end <= self.reservation)
            .ok_or_else(|| self.capacity_exceeded(size))?;

        if new_cursor > self.data.len() {
            self.commit(new_cursor)?;
        }

        let offset = self.cursor;
        self.cursor = new_cursor;
        self.high_water = self.high_water.max(new_cursor);
        Ok(Region { offset, len: size })
    }

    /// Bump-allocate `size` bytes and zero them.
    ///
    /// # Errors
    ///
    /// See [`Arena::alloc`].
    pub fn alloc_zeroed(&mut self, size: usize) -> Result<Region, ArenaError> {
        let region = self.alloc(size)?;
        self.bytes_mut(region).fill(0);
        Ok(region)
    }

    /// Bump-allocate room for `src` and copy it in.
    ///
    /// # Errors
    ///
    /// See [`Arena::alloc`].
    pub fn alloc_copy(&mut self, src: &[u8]) -> Result<Region, ArenaError> {
        let region = self.alloc(src.len())?;
        self.bytes_mut(region).copy_from_slice(src);
        Ok(region)
    }

    /// Shared view of a region's bytes.
    ///
    /// # Panics
    ///
    /// Panics if the region extends past committed memory, which can only
    /// happen for a region that did not come from this arena.
    pub fn bytes(&self, region: Region) -> &[u8] {
        &self.data[region.offset..region.end()]
    }

    /// Mutable view of a region's bytes.
    ///
    /// # Panics
    ///
    /// Panics if the region extends past committed memory, which can only
    /// happen for a region that did not come from this arena.
    pub fn bytes_mut(&mut self, region: Region) -> &mut [u8] {
        &mut self.data[region.offset..region.end()]
    }

    /// Capture the current cursor as a restore point.
    pub fn mark(&self) -> ArenaMark {
        ArenaMark(self.cursor)
    }

    /// Rewind the cursor to `mark`, abandoning every later allocation.
    ///
    /// O(1) and does not zero anything. Regions allocated after the mark
    /// must not be used again. A mark ahead of the current cursor (taken
    /// before an earlier, deeper pop) is ignored: popping never moves the
    /// cursor forward.
    pub fn pop_to(&mut self, mark: ArenaMark) {
        if mark.0 <= self.cursor {
            self.cursor = mark.0;
        }
    }

    /// Rewind to the start of the arena. Equivalent to
    /// `pop_to(ArenaMark::START)`.
    ///
    /// Committed memory is kept for reuse.
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Open a scope that pops back to the current cursor when dropped.
    ///
    /// The returned guard dereferences to the arena, so allocations go
    /// through it as usual. The pop runs on every exit path, including
    /// early returns via `?` and unwinding.
    pub fn scope(&mut self) -> ArenaScope<'_, R> {
        ArenaScope::new(self)
    }

    /// Bytes allocated so far (the cursor position).
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes left before the reservation is exhausted.
    pub fn remaining(&self) -> usize {
        self.reservation - self.cursor
    }

    /// Logical reservation size in bytes.
    pub fn reservation(&self) -> usize {
        self.reservation
    }

    /// Bytes of backing memory currently committed.
    pub fn committed(&self) -> usize {
        self.data.len()
    }

    /// Highest cursor position ever reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Snapshot of the arena's counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            used_bytes: self.cursor,
            committed_bytes: self.data.len(),
            reservation_bytes: self.reservation,
            high_water_bytes: self.high_water,
            commit_count: self.commit_count,
        }
    }

    fn commit(&mut self, needed: usize) -> Result<(), ArenaError> {
        let before = self.data.len();
        self.backing
            .commit(&mut self.data, needed, self.reservation)?;
        if self.data.len() < needed {
            tracing::warn!(
                needed,
                committed = self.data.len(),
                "arena backing reported a commit it did not make"
            );
            return Err(ArenaError::ReservationFailed { requested: needed });
        }
        self.commit_count += 1;
        tracing::trace!(before, after = self.data.len(), "arena committed memory");
        Ok(())
    }

    fn capacity_exceeded(&self, requested: usize) -> ArenaError {
        tracing::warn!(
            requested,
            used = self.cursor,
            reservation = self.reservation,
            "arena allocation rejected"
        );
        ArenaError::CapacityExceeded {
            requested,
            used: self.cursor,
            reservation: self.reservation,
        }
    }
}
