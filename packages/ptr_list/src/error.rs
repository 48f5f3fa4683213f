use thiserror::Error;

/// Errors reported by the fallible `try_*` operations of [`PtrList`][crate::PtrList].
///
/// Each of these corresponds to a precondition of the matching panicking operation.
/// When an operation reports an error, the list has not been modified.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The index does not refer to an item in the list.
    #[error("index {index} is out of bounds in a list of length {len}")]
    IndexOutOfBounds {
        /// The index the caller asked for.
        index: usize,

        /// The length of the list at the time of the call.
        len: usize,
    },

    /// The operation requires at least one item but the list is empty.
    #[error("the operation requires a non-empty list")]
    Empty,

    /// A range of items extends past the end of the list.
    #[error("range of {count} items starting at {start} is out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Index of the first item in the range.
        start: usize,

        /// Number of items in the range.
        count: usize,

        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A range ends before it starts.
    #[error("range from {start} to {end} ends before it starts")]
    InvalidRange {
        /// Position where the range starts.
        start: usize,

        /// Position where the range ends (exclusive).
        end: usize,
    },

    /// A cursor was used with a list other than the one that created it.
    #[error("cursor belongs to list {cursor_list_id} but was used with list {list_id}")]
    ForeignCursor {
        /// ID of the list that created the cursor.
        cursor_list_id: u64,

        /// ID of the list the cursor was used with.
        list_id: u64,
    },
}

/// A specialized `Result` type for list operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, Clone);

    #[test]
    fn messages_mention_the_numbers() {
        let error = Error::IndexOutOfBounds { index: 7, len: 3 };
        let message = error.to_string();
        assert!(message.contains('7'));
        assert!(message.contains('3'));

        let error = Error::RangeOutOfBounds {
            start: 2,
            count: 9,
            len: 5,
        };
        assert_eq!(
            error.to_string(),
            "range of 9 items starting at 2 is out of bounds for length 5"
        );
    }

    #[test]
    fn usable_in_result_context() {
        let result: Result<()> = Err(Error::Empty);
        assert_eq!(result, Err(Error::Empty));
    }
}
