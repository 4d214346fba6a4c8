//! Growable-array error types.

use std::error::Error;
use std::fmt;

/// Errors raised while growing a [`GrowArray`](crate::GrowArray).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Doubling the capacity would overflow the address space.
    CapacityOverflow {
        /// Capacity (in elements) at the time of the failed growth.
        capacity: usize,
    },
    /// The reallocation strategy could not provide the storage.
    ReallocFailed {
        /// Size of the requested block in bytes.
        requested_bytes: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { capacity } => {
                write!(f, "array capacity overflow growing past {capacity} elements")
            }
            Self::ReallocFailed { requested_bytes } => {
                write!(f, "reallocation of {requested_bytes} bytes failed")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_sizes() {
        assert_eq!(
            ArrayError::ReallocFailed {
                requested_bytes: 512
            }
            .to_string(),
            "reallocation of 512 bytes failed"
        );
        assert!(ArrayError::CapacityOverflow { capacity: 16 }
            .to_string()
            .contains("16"));
    }
}
