//! Growable array with an injectable reallocation strategy.
//!
//! [`GrowArray`] is a plain sequence container whose only interesting
//! behaviour is its growth contract: capacity starts at zero, jumps to
//! [`GrowArray::BASE_CAPACITY`] on the first push and doubles every time
//! a push finds the array full. All backing storage flows through a
//! [`Reallocate`] implementation chosen at construction, so callers can
//! count, pool or otherwise instrument every byte the array requests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod realloc;

pub use array::GrowArray;
pub use error::ArrayError;
pub use realloc::{Reallocate, SystemRealloc};
