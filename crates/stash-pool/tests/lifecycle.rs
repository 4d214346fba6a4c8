//! End-to-end handle lifecycle: allocation, reuse, stale detection and
//! enumeration order, checked against the slot layout the pool promises.

use stash_arena::{ArenaConfig, ArenaError, EagerCommit};
use stash_core::{Generation, SlotIndex};
use stash_pool::{PoolConfig, PoolError, ResourcePool, HEADER_SIZE};
use stash_test_utils::FailingReserve;

#[test]
fn reuse_after_free_invalidates_the_old_handle() {
    let mut pool = ResourcePool::new(16).unwrap();
    let h1 = pool.allocate().unwrap();
    let h2 = pool.allocate().unwrap();
    let h3 = pool.allocate().unwrap();

    assert_eq!(
        [h1.slot(), h2.slot(), h3.slot()],
        [SlotIndex(0), SlotIndex(1), SlotIndex(2)]
    );
    assert_eq!(
        [h1.generation(), h2.generation(), h3.generation()],
        [Generation(0), Generation(1), Generation(2)]
    );
    assert_eq!(pool.iter().collect::<Vec<_>>(), [h3, h2, h1]);

    assert!(pool.free(h2));
    assert!(!pool.verify(h2));
    assert!(pool.get(h2).is_none());

    let h4 = pool.allocate().unwrap();
    assert_eq!(h4.slot(), SlotIndex(1));
    assert_eq!(h4.generation(), Generation(3));
    assert!(pool.verify(h4));
    assert!(!pool.verify(h2));
    assert_eq!(pool.iter().collect::<Vec<_>>(), [h4, h3, h1]);

    // A second free of the stale handle must not touch h4's slot.
    assert!(!pool.free(h2));
    assert!(pool.verify(h4));
    assert_eq!(pool.len(), 3);
}

#[test]
fn payloads_survive_neighbouring_churn() {
    let mut pool = ResourcePool::new(24).unwrap();
    let handles: Vec<_> = (0..32).map(|_| pool.allocate().unwrap()).collect();
    for (i, &h) in handles.iter().enumerate() {
        pool.get_mut(h).unwrap().fill(i as u8);
    }
    for &h in handles.iter().step_by(2) {
        assert!(pool.free(h));
    }
    let fresh: Vec<_> = (0..16).map(|_| pool.allocate().unwrap()).collect();

    for (i, &h) in handles.iter().enumerate().skip(1).step_by(2) {
        assert!(pool.get(h).unwrap().iter().all(|&b| b == i as u8));
    }
    for &h in &fresh {
        let payload = pool.get(h).unwrap();
        assert_eq!(payload.len(), 24);
        assert!(payload.iter().all(|&b| b == 0));
    }
    assert_eq!(pool.slot_count(), 32);
    assert_eq!(pool.free_count(), 0);
}

#[test]
fn stride_and_memory_follow_the_slot_layout() {
    let mut pool = ResourcePool::new(20).unwrap();
    assert_eq!(pool.stride(), HEADER_SIZE + 24);
    for _ in 0..10 {
        pool.allocate().unwrap();
    }
    let stats = pool.stats();
    assert_eq!(stats.stride_bytes, 40);
    assert!(stats.memory_bytes >= 400);
    assert_eq!(stats.live, 10);
}

#[test]
fn eager_backing_fills_up_exactly() {
    let config = PoolConfig::new(16).arena(ArenaConfig::with_reservation(32 * 4));
    let mut pool = ResourcePool::with_backing(config, EagerCommit).unwrap();
    let handles: Vec<_> = (0..4).map(|_| pool.allocate().unwrap()).collect();

    let err = pool.allocate().unwrap_err();
    assert!(matches!(
        err,
        PoolError::Arena(ArenaError::CapacityExceeded { requested: 32, .. })
    ));
    assert_eq!(pool.len(), 4);

    assert!(pool.free(handles[2]));
    let again = pool.allocate().unwrap();
    assert_eq!(again.slot(), handles[2].slot());
}

#[test]
fn creation_fails_when_backing_cannot_commit() {
    let config = PoolConfig::new(8);
    let Err(err) = ResourcePool::with_backing(config, FailingReserve::always()) else {
        panic!("pool creation succeeded without backing memory");
    };
    assert!(matches!(
        err,
        PoolError::Arena(ArenaError::ReservationFailed { .. })
    ));
}

#[test]
fn failed_commit_leaves_the_pool_untouched() {
    // One commit of LazyCommit::MIN_STEP bytes holds 2048 slots of 32 bytes.
    let config = PoolConfig::new(16);
    let mut pool = ResourcePool::with_backing(config, FailingReserve::after(1)).unwrap();
    let handles: Vec<_> = (0..2048).map(|_| pool.allocate().unwrap()).collect();
    let before: Vec<_> = pool.iter().collect();

    let err = pool.allocate().unwrap_err();
    assert_eq!(
        err,
        PoolError::Arena(ArenaError::ReservationFailed { requested: 2049 * 32 })
    );
    assert_eq!(pool.slot_count(), 2048);
    assert_eq!(pool.len(), 2048);
    assert_eq!(pool.free_count(), 0);
    assert_eq!(pool.iter().collect::<Vec<_>>(), before);
    assert!(handles.iter().all(|&h| pool.verify(h)));

    // Reuse needs no new memory.
    assert!(pool.free(handles[7]));
    let again = pool.allocate().unwrap();
    assert_eq!(again.slot(), handles[7].slot());
    assert_eq!(pool.slot_count(), 2048);
}

#[test]
fn handles_from_two_pools_never_cross_verify() {
    let mut a = ResourcePool::new(8).unwrap();
    let mut b = ResourcePool::new(8).unwrap();
    let ha = a.allocate().unwrap();
    let hb = b.allocate().unwrap();

    // Same slot and generation, different pools.
    assert_eq!((ha.slot(), ha.generation()), (hb.slot(), hb.generation()));
    assert!(!a.verify(hb));
    assert!(!b.verify(ha));
    assert!(!a.free(hb));
    assert_eq!(a.len(), 1);
}

#[test]
fn null_handle_terminates_enumeration() {
    let mut pool = ResourcePool::new(4).unwrap();
    assert!(pool.first_handle().is_null());
    let h = pool.allocate().unwrap();
    assert_eq!(pool.first_handle(), h);
    let end = pool.next_handle(h);
    assert!(end.is_null());
    assert_eq!(end, pool.null_handle());
    assert!(pool.next_handle(end).is_null());
}
