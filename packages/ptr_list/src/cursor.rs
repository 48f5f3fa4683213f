use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position in a [`PtrList`][crate::PtrList].
///
/// A cursor is a plain (list ID, position) pair. It does not borrow the list and does not keep
/// the item at its position alive - it is resolved against the list every time it is used,
/// via [`PtrList::value_at()`][crate::PtrList::value_at],
/// [`PtrList::erase()`][crate::PtrList::erase] and similar methods. These check that the cursor
/// was created by the same list and that the position refers to an item.
///
/// Cursors are obtained from [`PtrList::begin()`][crate::PtrList::begin],
/// [`PtrList::end()`][crate::PtrList::end], [`PtrList::cursor()`][crate::PtrList::cursor] and
/// [`PtrList::find()`][crate::PtrList::find], and can be moved with arithmetic operators.
///
/// # Comparison
///
/// Two cursors compare equal if their positions are equal. The list ID is **not** part of the
/// comparison, so cursors created by two different lists at the same position are equal.
///
/// # Examples
///
/// ```
/// use ptr_list::PtrList;
///
/// let list = PtrList::from([1, 2, 3]);
///
/// let mut sum = 0;
/// let mut cursor = list.begin();
///
/// while cursor != list.end() {
///     sum += list.value_at(cursor);
///     cursor.advance();
/// }
///
/// assert_eq!(sum, 6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    list_id: u64,
    position: usize,
}

impl Cursor {
    #[must_use]
    pub(crate) fn new(list_id: u64, position: usize) -> Self {
        Self { list_id, position }
    }

    /// The index of the item this cursor refers to. A cursor equal to
    /// [`PtrList::end()`][crate::PtrList::end] has a position equal to the length of the list.
    #[must_use]
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The ID of the list that created this cursor.
    #[must_use]
    #[inline]
    pub fn list_id(&self) -> u64 {
        self.list_id
    }

    /// Moves the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the position would overflow `usize`.
    #[inline]
    pub fn advance(&mut self) {
        *self += 1;
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cursor {}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl Hash for Cursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl Add<usize> for Cursor {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self {
            list_id: self.list_id,
            position: self
                .position
                .checked_add(rhs)
                .expect("cursor position overflowed usize"),
        }
    }
}

impl Sub<usize> for Cursor {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self::Output {
        Self {
            list_id: self.list_id,
            position: self
                .position
                .checked_sub(rhs)
                .expect("cursor moved before the start of the list"),
        }
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Cursor: Send, Sync, Copy, std::fmt::Debug);

    #[test]
    fn arithmetic_moves_position() {
        let cursor = Cursor::new(1, 5);

        assert_eq!((cursor + 3).position(), 8);
        assert_eq!((cursor - 5).position(), 0);

        let mut cursor = cursor;
        cursor += 2;
        assert_eq!(cursor.position(), 7);
        cursor -= 4;
        assert_eq!(cursor.position(), 3);
        cursor.advance();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.list_id(), 1);
    }

    #[test]
    #[should_panic]
    fn moving_before_start_panics() {
        _ = Cursor::new(1, 2) - 3;
    }

    #[test]
    fn comparison_ignores_list_identity() {
        let a = Cursor::new(1, 4);
        let b = Cursor::new(2, 4);
        let c = Cursor::new(1, 5);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(c > b);
    }
}
