//! The error type shared by all fallible operations.

use thiserror::Error;


/// Everything that can go wrong when working with a
/// [`MovableVec`][crate::MovableVec], its cursors or its views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was outside of `0..len` (or `0..=len` for insertions and
    /// cursor start positions).
    #[error("index {index} is out of bounds (len is {len})")]
    OutOfBounds {
        index: usize,
        len: usize,
    },

    /// `previous()` was called on a cursor at the front. This is the
    /// out-of-bounds case for the position before index 0, which `usize`
    /// can't express.
    #[error("cursor is at the front, there is no previous element (len is {len})")]
    BeforeFront {
        len: usize,
    },

    /// `set()` or `remove()` was called on a cursor that has not returned an
    /// element since it was created or since its last structural change.
    #[error("cursor has no last returned element")]
    IllegalState,

    /// A range argument was malformed (its start lies behind its end).
    #[error("invalid range {start}..{end}: start is greater than end")]
    InvalidArgument {
        start: usize,
        end: usize,
    },
}

impl Error {
    /// Returns `true` for both out-of-bounds variants.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::OutOfBounds { .. } | Error::BeforeFront { .. } => true,
            _ => false,
        }
    }
}

/// Shorthand for `Result<T, movable_vec::Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfBounds { index, len })
    }
}

/// Checks `index <= len`, the valid positions for inserting.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::OutOfBounds { index, len })
    }
}
