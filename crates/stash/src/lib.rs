//! Stash: a small allocation toolkit.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Stash sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use stash::prelude::*;
//!
//! // Scratch memory for one frame of work.
//! let mut arena = Arena::with_reservation(1 << 20).unwrap();
//! {
//!     let mut frame = arena.scope();
//!     let name = frame.alloc_copy(b"scratch").unwrap();
//!     assert_eq!(frame.bytes(name), b"scratch");
//! }
//! assert_eq!(arena.used(), 0);
//!
//! // A growable list of indices.
//! let mut ids = GrowArray::new();
//! ids.try_extend(0..10u32).unwrap();
//! assert_eq!(ids.capacity(), 16);
//!
//! // Fixed-size records behind generational handles.
//! let mut pool = ResourcePool::new(16).unwrap();
//! let a = pool.allocate().unwrap();
//! pool.get_mut(a).unwrap()[0] = 7;
//! assert!(pool.free(a));
//! let b = pool.allocate().unwrap();
//! assert_eq!(a.slot(), b.slot());
//! assert!(pool.get(a).is_none());
//! assert_eq!(pool.get(b).unwrap()[0], 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stash-core` | Alignment rule, slot indices, generations, pool ids |
//! | [`arena`] | `stash-arena` | Bump arena, marks, scopes, backing providers |
//! | [`array`] | `stash-array` | Doubling array and reallocation strategies |
//! | [`pool`] | `stash-pool` | Generational resource pool and handles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers and the alignment rule (`stash-core`).
pub use stash_core as types;

/// Linear bump arena (`stash-arena`).
///
/// [`arena::Arena`] hands out [`arena::Region`]s; [`arena::Arena::mark`]
/// and [`arena::Arena::pop_to`] rewind it, and [`arena::ArenaScope`]
/// does so automatically on drop.
pub use stash_arena as arena;

/// Growable array (`stash-array`).
///
/// Storage growth goes through the [`array::Reallocate`] trait so callers
/// can account for or redirect it.
pub use stash_array as array;

/// Generational resource pool (`stash-pool`).
pub use stash_pool as pool;

/// Common imports for typical Stash usage.
///
/// ```rust
/// use stash::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use stash_arena::{Arena, ArenaConfig, ArenaMark, ArenaScope, Region};

    // Array
    pub use stash_array::{GrowArray, Reallocate};

    // Pool
    pub use stash_pool::{PoolConfig, PoolHandle, ResourcePool};

    // Errors
    pub use stash_arena::ArenaError;
    pub use stash_array::ArrayError;
    pub use stash_pool::PoolError;
}
