//! Benchmark workloads for the Stash allocation toolkit.
//!
//! - [`scratch_frame`]: one frame of mixed-size temporary allocations
//! - [`filled_pool`]: a pool with a fixed number of live slots
//! - [`churn`]: deterministic free/allocate cycles over a pool

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stash_arena::{Arena, ArenaError, Reserve};
use stash_pool::{PoolError, PoolHandle, ResourcePool};

/// Allocation sizes cycled through by [`scratch_frame`].
pub const FRAME_SIZES: [usize; 6] = [8, 24, 64, 3, 256, 40];

/// Make `count` allocations cycling through [`FRAME_SIZES`] inside a
/// scope, touching the first byte of each. Returns the bytes used at the
/// deepest point; the arena is back where it started on return.
pub fn scratch_frame<R: Reserve>(arena: &mut Arena<R>, count: usize) -> Result<usize, ArenaError> {
    let mut scope = arena.scope();
    for i in 0..count {
        let size = FRAME_SIZES[i % FRAME_SIZES.len()];
        let region = scope.alloc(size)?;
        if let Some(first) = scope.bytes_mut(region).first_mut() {
            *first = i as u8;
        }
    }
    Ok(scope.used())
}

/// Create a pool of `resource_size`-byte slots holding `live` handles.
pub fn filled_pool(
    resource_size: usize,
    live: usize,
) -> Result<(ResourcePool, Vec<PoolHandle>), PoolError> {
    let mut pool = ResourcePool::new(resource_size)?;
    let handles = (0..live)
        .map(|_| pool.allocate())
        .collect::<Result<Vec<_>, _>>()?;
    Ok((pool, handles))
}

/// Free and immediately reallocate every `step`-th handle.
///
/// Handles are replaced in place so repeated calls keep working. Every
/// handle must be live; a stale one is left as is and not reallocated.
pub fn churn(
    pool: &mut ResourcePool,
    handles: &mut [PoolHandle],
    step: usize,
) -> Result<(), PoolError> {
    for h in handles.iter_mut().step_by(step.max(1)) {
        let freed = pool.free(*h);
        debug_assert!(freed, "churn given stale handle {h}");
        if freed {
            *h = pool.allocate()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_frame_leaves_arena_empty() {
        let mut arena = Arena::with_reservation(1 << 20).unwrap();
        let peak = scratch_frame(&mut arena, 60).unwrap();
        assert!(peak > 0);
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.high_water(), peak);
    }

    #[test]
    fn churn_keeps_every_handle_valid() {
        let (mut pool, mut handles) = filled_pool(32, 100).unwrap();
        churn(&mut pool, &mut handles, 3).unwrap();
        churn(&mut pool, &mut handles, 3).unwrap();
        assert_eq!(pool.len(), 100);
        assert!(handles.iter().all(|&h| pool.verify(h)));
        assert_eq!(pool.slot_count(), 100);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "stale handle")]
    fn churn_rejects_stale_handles() {
        let (mut pool, mut handles) = filled_pool(8, 4).unwrap();
        pool.free(handles[0]);
        let _ = churn(&mut pool, &mut handles, 1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn churn_skips_stale_handles() {
        let (mut pool, mut handles) = filled_pool(8, 4).unwrap();
        let stale = handles[0];
        pool.free(stale);
        churn(&mut pool, &mut handles, 1).unwrap();
        assert_eq!(handles[0], stale);
        assert_eq!(pool.len(), 3);
    }
}
