//! Reallocation strategies.
//!
//! The strategy is passed to the array at construction instead of being
//! a process-wide hook, so two arrays in the same program can use
//! different allocators.

use crate::error::ArrayError;

/// Provider of backing storage for a [`GrowArray`](crate::GrowArray).
///
/// Capacities are in elements of `T`; byte sizes are
/// `capacity * size_of::<T>()`. Every block handed out by
/// [`reallocate`](Reallocate::reallocate) is eventually returned either
/// by a later `reallocate` (as `old_capacity`) or by
/// [`release`](Reallocate::release).
pub trait Reallocate {
    /// Grow `buf` from `old_capacity` to `new_capacity` elements,
    /// preserving its contents.
    ///
    /// On success `buf.capacity() >= new_capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ReallocFailed`] if the storage cannot be
    /// provided. `buf` must be left unchanged in that case.
    fn reallocate<T>(
        &mut self,
        buf: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), ArrayError>;

    /// Take back storage of `capacity` elements.
    fn release<T>(&mut self, buf: Vec<T>, capacity: usize);
}

impl<A: Reallocate> Reallocate for &mut A {
    fn reallocate<T>(
        &mut self,
        buf: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), ArrayError> {
        (**self).reallocate(buf, old_capacity, new_capacity)
    }

    fn release<T>(&mut self, buf: Vec<T>, capacity: usize) {
        (**self).release(buf, capacity);
    }
}

/// Default strategy: the global allocator, through `Vec`'s fallible
/// reservation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRealloc;

impl Reallocate for SystemRealloc {
    fn reallocate<T>(
        &mut self,
        buf: &mut Vec<T>,
        _old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), ArrayError> {
        let additional = new_capacity.saturating_sub(buf.len());
        buf.try_reserve_exact(additional)
            .map_err(|_| ArrayError::ReallocFailed {
                requested_bytes: new_capacity.saturating_mul(std::mem::size_of::<T>()),
            })
    }

    fn release<T>(&mut self, buf: Vec<T>, _capacity: usize) {
        drop(buf);
    }
}
