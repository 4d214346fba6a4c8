//! On-arena encoding of slot headers.
//!
//! All fields are little-endian `u32`s. `next == u32::MAX` encodes the
//! end of a list, which is why slot indices stop short of `u32::MAX`.

use stash_core::{Generation, SlotIndex};

/// Size of the header that precedes every slot's payload, in bytes.
pub const HEADER_SIZE: usize = 16;

const NO_NEXT: u32 = u32::MAX;

/// Decoded slot header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotHeader {
    pub slot: SlotIndex,
    pub generation: Generation,
    pub next: Option<SlotIndex>,
}

impl SlotHeader {
    pub fn decode(bytes: &[u8]) -> Self {
        Self {
            slot: SlotIndex(read_u32(bytes, 0)),
            generation: Generation(read_u32(bytes, 4)),
            next: match read_u32(bytes, 8) {
                NO_NEXT => None,
                n => Some(SlotIndex(n)),
            },
        }
    }

    pub fn encode(&self, bytes: &mut [u8]) {
        write_u32(bytes, 0, self.slot.0);
        write_u32(bytes, 4, self.generation.0);
        write_u32(bytes, 8, self.next.map_or(NO_NEXT, |n| n.0));
        bytes[12..HEADER_SIZE].fill(0);
    }
}

/// Overwrite only the next field.
pub(crate) fn encode_next(bytes: &mut [u8], next: Option<SlotIndex>) {
    write_u32(bytes, 8, next.map_or(NO_NEXT, |n| n.0));
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(word)
}

fn write_u32(bytes: &mut [u8], at: usize, value: u32) {
    bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
}
