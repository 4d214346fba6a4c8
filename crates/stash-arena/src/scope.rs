//! Scoped temporary allocation.
//!
//! [`ArenaScope`] ties an arena mark to a lexical scope: everything
//! allocated through the guard is discarded when it goes out of scope.

use std::ops::{Deref, DerefMut};

use crate::arena::Arena;
use crate::region::ArenaMark;
use crate::reserve::Reserve;

/// Guard that pops its arena back to a saved mark on drop.
///
/// Created by [`Arena::scope`]. Scopes nest: an inner scope taken through
/// the guard restores to the inner mark first, then the outer guard to
/// the outer mark.
///
/// ```
/// use stash_arena::Arena;
///
/// let mut arena = Arena::with_reservation(4096).unwrap();
/// arena.alloc(16).unwrap();
/// {
///     let mut tmp = arena.scope();
///     tmp.alloc(1024).unwrap();
///     assert_eq!(tmp.used(), 1040);
/// }
/// assert_eq!(arena.used(), 16);
/// ```
pub struct ArenaScope<'a, R: Reserve> {
    arena: &'a mut Arena<R>,
    mark: ArenaMark,
}

impl<'a, R: Reserve> ArenaScope<'a, R> {
    pub(crate) fn new(arena: &'a mut Arena<R>) -> Self {
        let mark = arena.mark();
        Self { arena, mark }
    }

    /// The mark this scope restores on drop.
    pub fn mark(&self) -> ArenaMark {
        self.mark
    }
}

impl<R: Reserve> Deref for ArenaScope<'_, R> {
    type Target = Arena<R>;

    fn deref(&self) -> &Arena<R> {
        self.arena
    }
}

impl<R: Reserve> DerefMut for ArenaScope<'_, R> {
    fn deref_mut(&mut self) -> &mut Arena<R> {
        self.arena
    }
}

impl<R: Reserve> Drop for ArenaScope<'_, R> {
    fn drop(&mut self) {
        self.arena.pop_to(self.mark);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, ArenaError};

    #[test]
    fn scope_pops_on_drop() {
        let mut arena = Arena::with_reservation(4096).unwrap();
        arena.alloc(8).unwrap();
        {
            let mut scope = arena.scope();
            scope.alloc(100).unwrap();
            assert_eq!(scope.used(), 112);
            assert_eq!(scope.mark().position(), 8);
        }
        assert_eq!(arena.used(), 8);
    }

    #[test]
    fn scope_pops_on_error_path() {
        fn work(arena: &mut Arena) -> Result<(), ArenaError> {
            let mut scope = arena.scope();
            scope.alloc(32)?;
            scope.alloc(1 << 20)?;
            Ok(())
        }

        let mut arena = Arena::with_reservation(1024).unwrap();
        assert!(work(&mut arena).is_err());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn nested_scopes_restore_in_order() {
        let mut arena = Arena::with_reservation(4096).unwrap();
        let mut outer = arena.scope();
        outer.alloc(16).unwrap();
        {
            let mut inner = outer.scope();
            inner.alloc(64).unwrap();
            assert_eq!(inner.used(), 80);
        }
        assert_eq!(outer.used(), 16);
        drop(outer);
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn scope_pops_on_unwind() {
        let mut arena = Arena::with_reservation(4096).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scope = arena.scope();
            scope.alloc(256).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(arena.used(), 0);
    }
}
