//! The doubling [`GrowArray`].

use std::fmt;
use std::ops::Index;

use crate::error::ArrayError;
use crate::realloc::{Reallocate, SystemRealloc};

/// A sequence container with amortised-doubling growth.
///
/// Invariant: `len() <= capacity()`. Capacity is `0` for a new array,
/// becomes [`BASE_CAPACITY`](GrowArray::BASE_CAPACITY) on the first push
/// and doubles whenever a push finds `len() == capacity()`. It never
/// shrinks, not even on [`clear`](GrowArray::clear) or
/// [`pop`](GrowArray::pop).
///
/// Storage is obtained from and returned to the array's [`Reallocate`]
/// strategy. [`release`](GrowArray::release) returns it explicitly;
/// dropping an array that was never released does the same.
pub struct GrowArray<T, A: Reallocate = SystemRealloc> {
    buf: Vec<T>,
    /// Logical capacity, as last agreed with `alloc`.
    capacity: usize,
    alloc: A,
}

impl<T> GrowArray<T, SystemRealloc> {
    /// Create an empty array backed by the global allocator.
    pub fn new() -> Self {
        Self::with_allocator(SystemRealloc)
    }
}

impl<T> Default for GrowArray<T, SystemRealloc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Reallocate> GrowArray<T, A> {
    /// Capacity after the first growth.
    pub const BASE_CAPACITY: usize = 8;

    /// Create an empty array that obtains storage from `alloc`.
    ///
    /// No storage is requested until the first push.
    pub fn with_allocator(alloc: A) -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            alloc,
        }
    }

    /// Append `value`, growing the storage first if the array is full.
    ///
    /// Amortised O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if the doubled capacity is
    /// not representable, or the strategy's error if it cannot provide the
    /// storage. The array is unchanged on error and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        if self.buf.len() == self.capacity {
            self.grow()?;
        }
        self.buf.push(value);
        Ok(())
    }

    /// Push every item of `iter` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`GrowArray::push`]. Items pushed before the failure stay.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), ArrayError> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Drop every element, keeping the storage.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the current storage holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Mutable element at `index`, if in bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Iterate over the elements in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// The reallocation strategy.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Return the storage to the strategy and consume the array.
    pub fn release(mut self) {
        self.release_storage();
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity = if self.capacity == 0 {
            Self::BASE_CAPACITY
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(ArrayError::CapacityOverflow {
                    capacity: self.capacity,
                })?
        };
        let fits = new_capacity
            .checked_mul(std::mem::size_of::<T>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(ArrayError::CapacityOverflow {
                capacity: self.capacity,
            });
        }

        self.alloc
            .reallocate(&mut self.buf, self.capacity, new_capacity)?;
        if self.buf.capacity() < new_capacity {
            // Pushing now would grow through the global allocator instead.
            return Err(ArrayError::ReallocFailed {
                requested_bytes: new_capacity * std::mem::size_of::<T>(),
            });
        }
        tracing::trace!(from = self.capacity, to = new_capacity, "array grew");
        self.capacity = new_capacity;
        Ok(())
    }

    fn release_storage(&mut self) {
        if self.capacity == 0 {
            return;
        }
        let buf = std::mem::take(&mut self.buf);
        let capacity = std::mem::replace(&mut self.capacity, 0);
        self.alloc.release(buf, capacity);
    }
}

impl<T, A: Reallocate> Drop for GrowArray<T, A> {
    fn drop(&mut self) {
        self.release_storage();
    }
}

impl<T, A: Reallocate> Index<usize> for GrowArray<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<'a, T, A: Reallocate> IntoIterator for &'a GrowArray<T, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T: fmt::Debug, A: Reallocate> fmt::Debug for GrowArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("items", &self.buf)
            .finish()
    }
}
