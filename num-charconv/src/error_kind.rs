use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// The output does not fit in the caller's buffer.
    ValueTooLarge {
        /// Number of bytes the rendering needed when it ran out of room.
        needed: usize,
        /// Length of the caller's buffer in bytes.
        cap: usize,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            ValueTooLarge { needed, cap } => write!(
                f,
                "Value too large: needed at least {} bytes but the buffer holds {} bytes.",
                needed, cap
            ),
        }
    }
}
