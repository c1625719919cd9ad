//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index argument fell outside the valid range for the operation.
    ///
    /// For `get`, `set`, and `remove` the valid range is `[0, len)`;
    /// for `add` it is `[0, len]` (inserting at `len` is an append).
    OutOfRange {
        /// The index that was passed.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for ListError {}
