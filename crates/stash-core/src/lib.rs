//! Core types for the Stash allocation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! identifiers shared by the arena and pool crates (slot indices,
//! generations, pool identities) and the alignment rule every arena
//! allocation follows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod id;

pub use align::{align_up, ALIGNMENT};
pub use id::{Generation, PoolId, SlotIndex};
