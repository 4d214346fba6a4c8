//! Generational resource pool for the Stash allocation toolkit.
//!
//! A [`ResourcePool`] carves fixed-size slots out of an arena it owns and
//! hands out [`PoolHandle`]s to them. Freed slots are recycled; every
//! reuse stamps the slot with a new [`Generation`], so handles to the
//! previous occupant stop verifying instead of silently aliasing the new
//! one.
//!
//! # Slot layout
//!
//! ```text
//! arena offset = slot × stride
//! ┌──────────── header (16 bytes) ────────────┬─── payload ───┐
//! │ slot u32 │ generation u32 │ next u32 │ pad │ resource_size │
//! └───────────────────────────────────────────┴───────────────┘
//! stride = 16 + align_up(resource_size)
//! ```
//!
//! `next` links a slot into exactly one of two intrusive lists: the free
//! list (slots waiting for reuse) or the live list (allocated slots, most
//! recent first, used for enumeration).
//!
//! The pool is single-threaded. Handles are plain `Copy` lookup keys and
//! must be re-verified on every access; [`ResourcePool::get`] does that.
//!
//! [`Generation`]: stash_core::Generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
mod header;
pub mod iter;
pub mod pool;
pub mod stats;

pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::PoolHandle;
pub use header::HEADER_SIZE;
pub use iter::Handles;
pub use pool::ResourcePool;
pub use stats::PoolStats;
