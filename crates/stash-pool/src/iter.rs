//! Enumeration of live handles.

use std::iter::FusedIterator;

use stash_arena::Reserve;

use crate::handle::PoolHandle;
use crate::pool::ResourcePool;

/// Iterator over a pool's live handles, most recently allocated first.
///
/// Created by [`ResourcePool::iter`]. Walks the live list with
/// [`first_handle`](ResourcePool::first_handle) and
/// [`next_handle`](ResourcePool::next_handle) and stops at the null
/// handle.
pub struct Handles<'a, R: Reserve> {
    pool: &'a ResourcePool<R>,
    current: PoolHandle,
}

impl<'a, R: Reserve> Handles<'a, R> {
    pub(crate) fn new(pool: &'a ResourcePool<R>) -> Self {
        Self {
            pool,
            current: pool.first_handle(),
        }
    }
}

impl<R: Reserve> Iterator for Handles<'_, R> {
    type Item = PoolHandle;

    fn next(&mut self) -> Option<PoolHandle> {
        if self.current.is_null() {
            return None;
        }
        let handle = self.current;
        self.current = self.pool.next_handle(handle);
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_null() {
            (0, Some(0))
        } else {
            (1, Some(self.pool.len()))
        }
    }
}

impl<R: Reserve> FusedIterator for Handles<'_, R> {}

impl<'a, R: Reserve> IntoIterator for &'a ResourcePool<R> {
    type Item = PoolHandle;
    type IntoIter = Handles<'a, R>;

    fn into_iter(self) -> Handles<'a, R> {
        self.iter()
    }
}
