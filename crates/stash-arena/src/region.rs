//! Allocation results and restore points.

use std::fmt;

/// A block of bytes handed out by an [`Arena`](crate::Arena).
///
/// `offset` is the cursor value before the allocation advanced it, so it
/// is always a multiple of [`ALIGNMENT`](stash_core::ALIGNMENT). `len` is
/// the size the caller asked for; the arena reserved `align_up(len)`.
///
/// A region is only meaningful for the arena that issued it, and only
/// until that arena is popped or cleared to a point at or before
/// `offset`. Resolving a region after that returns whatever bytes
/// currently live there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Region {
    /// Build a region from raw parts.
    ///
    /// Used by components that carve a fixed layout out of an arena they
    /// own exclusively and recompute offsets instead of storing regions.
    pub fn from_parts(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset of the region from the start of the arena.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Requested length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the region.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region(off={}, len={})", self.offset, self.len)
    }
}

/// Opaque restore point returned by [`Arena::mark`](crate::Arena::mark).
///
/// Popping to a mark discards every allocation made after it was taken.
/// Marks are ordered by cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaMark(pub(crate) usize);

impl ArenaMark {
    /// The start of an arena; popping to it is the same as clearing.
    pub const START: ArenaMark = ArenaMark(0);

    /// Cursor position captured by this mark, in bytes.
    pub fn position(&self) -> usize {
        self.0
    }
}
