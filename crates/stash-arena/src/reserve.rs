//! Backing-memory providers for arenas.
//!
//! An arena never allocates on its own. It asks its [`Reserve`]
//! implementation for the initial buffer and, whenever the cursor moves
//! past the committed prefix, for more of the reservation. Swapping the
//! provider changes the commit strategy without touching the bump logic.

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// Source of committed memory for an [`Arena`](crate::Arena).
///
/// Implementations must keep `buf.len()` within the reservation and may
/// only grow the buffer: existing bytes are part of live allocations.
pub trait Reserve {
    /// Produce the buffer the arena starts with.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::ReservationFailed`] if the memory cannot be
    /// obtained.
    fn initial(&mut self, config: &ArenaConfig) -> Result<Vec<u8>, ArenaError>;

    /// Grow `buf` so that `buf.len() >= needed`.
    ///
    /// `needed` never exceeds `reservation`; the arena checks that first.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::ReservationFailed`] if the memory cannot be
    /// obtained. `buf` is left untouched in that case.
    fn commit(
        &mut self,
        buf: &mut Vec<u8>,
        needed: usize,
        reservation: usize,
    ) -> Result<(), ArenaError>;
}

/// Extend `buf` with zeroes to exactly `new_len` bytes.
///
/// Uses a fallible reserve so that running out of memory surfaces as an
/// error instead of aborting the process.
pub(crate) fn grow_to(buf: &mut Vec<u8>, new_len: usize) -> Result<(), ArenaError> {
    if new_len <= buf.len() {
        return Ok(());
    }
    buf.try_reserve_exact(new_len - buf.len())
        .map_err(|_| ArenaError::ReservationFailed { requested: new_len })?;
    buf.resize(new_len, 0);
    Ok(())
}

/// Commit on demand, growing geometrically.
///
/// Each commit at least doubles the committed size (never below
/// [`LazyCommit::MIN_STEP`]) and is capped at the reservation, so a
/// huge reservation only costs what the cursor has actually touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct LazyCommit;

impl LazyCommit {
    /// Smallest committed size after the first growth: 64 KiB.
    pub const MIN_STEP: usize = 64 * 1024;
}

impl Reserve for LazyCommit {
    fn initial(&mut self, config: &ArenaConfig) -> Result<Vec<u8>, ArenaError> {
        let mut buf = Vec::new();
        grow_to(&mut buf, config.initial_commit)?;
        Ok(buf)
    }

    fn commit(
        &mut self,
        buf: &mut Vec<u8>,
        needed: usize,
        reservation: usize,
    ) -> Result<(), ArenaError> {
        if needed <= buf.len() {
            return Ok(());
        }
        let target = buf
            .len()
            .saturating_mul(2)
            .max(Self::MIN_STEP)
            .max(needed)
            .min(reservation);
        grow_to(buf, target)
    }
}

/// Commit the whole reservation when the arena is created.
///
/// Later commits never happen in practice. Only suitable for
/// reservations that fit in physical memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct EagerCommit;

impl Reserve for EagerCommit {
    fn initial(&mut self, config: &ArenaConfig) -> Result<Vec<u8>, ArenaError> {
        let mut buf = Vec::new();
        grow_to(&mut buf, config.reservation)?;
        Ok(buf)
    }

    fn commit(
        &mut self,
        buf: &mut Vec<u8>,
        needed: usize,
        reservation: usize,
    ) -> Result<(), ArenaError> {
        grow_to(buf, needed.max(reservation))
    }
}
