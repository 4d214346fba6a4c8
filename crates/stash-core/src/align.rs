//! Allocation size rounding.

/// Alignment, in bytes, of every arena allocation.
///
/// Allocation sizes are rounded up to a multiple of this value before the
/// cursor advances, so every returned offset is a multiple of it too.
pub const ALIGNMENT: usize = 8;

/// Round `size` up to the next multiple of [`ALIGNMENT`].
///
/// Returns `None` if the rounded value does not fit in a `usize`.
#[inline]
pub const fn align_up(size: usize) -> Option<usize> {
    match size.checked_add(ALIGNMENT - 1) {
        Some(padded) => Some(padded & !(ALIGNMENT - 1)),
        None => None,
    }
}
