//! Linear bump arena for the Stash allocation toolkit.
//!
//! An [`Arena`] owns one large logical reservation and hands out
//! [`Region`]s of it by advancing a cursor. Individual allocations are
//! never reclaimed; memory comes back in bulk, either by popping the
//! cursor to an earlier [`ArenaMark`] or by clearing the whole arena.
//!
//! # Architecture
//!
//! ```text
//! Arena<R: Reserve>
//! ├── data: Vec<u8>        committed prefix of the reservation
//! ├── cursor               next free byte (always 8-byte aligned)
//! ├── reservation          hard upper bound for the cursor
//! └── backing: R           commits more of the reservation on demand
//!     ├── LazyCommit       (default) geometric growth, touched bytes only
//!     └── EagerCommit      whole reservation committed at creation
//! ```
//!
//! Regions are offsets, not pointers: growing the committed buffer never
//! invalidates a region, and a region can only be resolved through the
//! arena that issued it.
//!
//! The arena is single-threaded. Sharing one between threads requires
//! external synchronisation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod region;
pub mod reserve;
pub mod scope;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use region::{ArenaMark, Region};
pub use reserve::{EagerCommit, LazyCommit, Reserve};
pub use scope::ArenaScope;
pub use stats::ArenaStats;
