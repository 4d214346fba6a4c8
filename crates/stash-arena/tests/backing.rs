//! Arena behaviour when its backing provider stops committing memory.

use stash_arena::{Arena, ArenaConfig, ArenaError, LazyCommit};
use stash_test_utils::FailingReserve;

fn arena_with_one_commit() -> Arena<FailingReserve> {
    Arena::with_backing(ArenaConfig::with_reservation(1 << 20), FailingReserve::after(1)).unwrap()
}

#[test]
fn failed_commit_keeps_cursor_and_contents() {
    let mut arena = arena_with_one_commit();
    let kept = arena.alloc_copy(b"kept").unwrap();
    let fill = LazyCommit::MIN_STEP - arena.used();
    arena.alloc(fill).unwrap();
    assert_eq!(arena.used(), LazyCommit::MIN_STEP);
    let stats_before = arena.stats();

    let err = arena.alloc(1).unwrap_err();
    assert_eq!(
        err,
        ArenaError::ReservationFailed {
            requested: LazyCommit::MIN_STEP + 8
        }
    );
    assert_eq!(arena.used(), LazyCommit::MIN_STEP);
    assert_eq!(arena.stats(), stats_before);
    assert_eq!(arena.bytes(kept), b"kept");
}

#[test]
fn committed_memory_is_still_usable_after_a_failure() {
    let mut arena = arena_with_one_commit();
    let mark = arena.mark();
    arena.alloc(LazyCommit::MIN_STEP).unwrap();
    assert!(arena.alloc(8).is_err());

    arena.pop_to(mark);
    let r = arena.alloc_zeroed(64).unwrap();
    assert_eq!(r.offset(), 0);
    assert!(arena.bytes(r).iter().all(|&b| b == 0));
}

#[test]
fn creation_fails_when_nothing_can_be_committed() {
    let result = Arena::with_backing(ArenaConfig::with_reservation(4096), FailingReserve::always());
    assert!(matches!(
        result,
        Err(ArenaError::ReservationFailed { requested: 4096 })
    ));
}
