//! Test utilities and reference models for Stash development.
//!
//! Provides instrumented and failing implementations of the two
//! extension points ([`Reallocate`] and [`Reserve`]) plus a reference
//! model of a resource pool's live set for property tests.
//!
//! [`Reallocate`]: stash_array::Reallocate
//! [`Reserve`]: stash_arena::Reserve

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use fixtures::{CountingRealloc, FailingRealloc, FailingReserve};
pub use model::PoolModel;
