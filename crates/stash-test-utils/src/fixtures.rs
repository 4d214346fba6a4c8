//! Instrumented and failing extension-point implementations.
//!
//! - [`CountingRealloc`]: forwards to the global allocator and keeps a
//!   byte ledger of everything requested and released.
//! - [`FailingRealloc`]: succeeds a fixed number of times, then fails.
//! - [`FailingReserve`]: an arena backing that stops committing memory.

use std::mem::size_of;

use stash_arena::{ArenaConfig, ArenaError, LazyCommit, Reserve};
use stash_array::{ArrayError, Reallocate, SystemRealloc};

/// Byte-accounting reallocation strategy.
///
/// Every block handed out by `reallocate` counts towards
/// `requested_bytes`; every block given back (the old block on a
/// reallocation, or the final block on release) counts towards
/// `released_bytes`. After an array is released the two must match.
#[derive(Debug, Default)]
pub struct CountingRealloc {
    pub requested_bytes: usize,
    pub released_bytes: usize,
    pub reallocations: usize,
    pub releases: usize,
}

impl CountingRealloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes handed out and not yet given back.
    pub fn outstanding_bytes(&self) -> usize {
        self.requested_bytes - self.released_bytes
    }
}

impl Reallocate for CountingRealloc {
    fn reallocate<T>(
        &mut self,
        buf: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), ArrayError> {
        SystemRealloc.reallocate(buf, old_capacity, new_capacity)?;
        self.requested_bytes += new_capacity * size_of::<T>();
        self.released_bytes += old_capacity * size_of::<T>();
        self.reallocations += 1;
        Ok(())
    }

    fn release<T>(&mut self, buf: Vec<T>, capacity: usize) {
        self.released_bytes += capacity * size_of::<T>();
        self.releases += 1;
        drop(buf);
    }
}

/// Reallocation strategy that fails after `remaining` successes.
#[derive(Debug)]
pub struct FailingRealloc {
    pub remaining: usize,
}

impl FailingRealloc {
    pub fn after(successes: usize) -> Self {
        Self {
            remaining: successes,
        }
    }
}

impl Reallocate for FailingRealloc {
    fn reallocate<T>(
        &mut self,
        buf: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), ArrayError> {
        if self.remaining == 0 {
            return Err(ArrayError::ReallocFailed {
                requested_bytes: new_capacity * size_of::<T>(),
            });
        }
        self.remaining -= 1;
        SystemRealloc.reallocate(buf, old_capacity, new_capacity)
    }

    fn release<T>(&mut self, buf: Vec<T>, _capacity: usize) {
        drop(buf);
    }
}

/// Arena backing that stops committing memory.
///
/// [`FailingReserve::always`] refuses even the initial buffer, so arena
/// creation fails. [`FailingReserve::after`] starts empty, grows like
/// [`LazyCommit`] for a fixed number of commits, then refuses.
#[derive(Clone, Copy, Debug)]
pub struct FailingReserve {
    fail_initial: bool,
    pub remaining: usize,
}

impl FailingReserve {
    pub fn always() -> Self {
        Self {
            fail_initial: true,
            remaining: 0,
        }
    }

    pub fn after(commits: usize) -> Self {
        Self {
            fail_initial: false,
            remaining: commits,
        }
    }
}

impl Reserve for FailingReserve {
    fn initial(&mut self, config: &ArenaConfig) -> Result<Vec<u8>, ArenaError> {
        if self.fail_initial {
            return Err(ArenaError::ReservationFailed {
                requested: config.reservation,
            });
        }
        Ok(Vec::new())
    }

    fn commit(
        &mut self,
        buf: &mut Vec<u8>,
        needed: usize,
        reservation: usize,
    ) -> Result<(), ArenaError> {
        if self.remaining == 0 {
            return Err(ArenaError::ReservationFailed { requested: needed });
        }
        self.remaining -= 1;
        LazyCommit.commit(buf, needed, reservation)
    }
}
