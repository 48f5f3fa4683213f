use std::any::type_name;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;
use std::{fmt, mem, thread};

use tracing::debug;

use crate::{
    Cursor, DropPolicy, Error, GrowthPolicy, IntoIter, Iter, IterMut, PtrListBuilder, Result,
    Slot, SlotArray, generate_list_id,
};

/// A growable, indexable list that stores every item in its own heap allocation and keeps an
/// array of pointers to the items.
///
/// Because the list only ever moves the pointers, an item stays at the same memory address
/// for as long as it is in the list, no matter how the list grows, shrinks or reorders the
/// other items. Only removing the item itself (or dropping or clearing the list) releases it.
/// This makes it valid to hold a pointer to an item (see [`element_ptr()`][Self::element_ptr])
/// across unrelated mutations of the list, as long as the pointer is not used to create a
/// reference that conflicts with a borrow of the list.
///
/// # Slot array
///
/// The list owns a contiguous array of `capacity()` pointer-sized slots. The first `len()`
/// slots each own one item. Whenever there is a spare slot, the slot right after the last
/// item is null. Single-item insertions that would leave no spare slot grow the array
/// according to the [`GrowthPolicy`] (by default, 4 slots at a time).
///
/// # Preconditions
///
/// Operations that require a valid index or a non-empty list panic when called with an
/// invalid argument. Most of them have a `try_` twin that reports an [`Error`] instead. In
/// both cases, the list is not modified when the precondition is not met.
///
/// # Examples
///
/// ```
/// use ptr_list::PtrList;
///
/// let mut list = PtrList::new();
/// list.reserve(10);
///
/// list.push_back(4);
/// list.push_back(45);
/// list.push_back(23);
///
/// let first = list.element_ptr(0);
///
/// list.insert(0, 88);
/// list.remove_at(2);
///
/// assert_eq!(list, [88, 4, 23]);
///
/// // The item did not move even though its index changed.
/// assert_eq!(list.element_ptr(1), first);
/// ```
///
/// # Thread safety
///
/// The list is [`Send`] if `T` is [`Send`] and [`Sync`] if `T` is [`Sync`]. It performs no
/// internal synchronization.
pub struct PtrList<T> {
    /// Identifies the list in the cursors it creates, so a cursor cannot be resolved
    /// against a list other than the one that created it.
    list_id: u64,

    slots: SlotArray<T>,

    /// Number of occupied slots. Slots `0..len` each own one item.
    len: usize,

    growth_policy: GrowthPolicy,
    drop_policy: DropPolicy,

    /// The list owns values of `T` (through the slots), which matters to the drop checker.
    _items: PhantomData<T>,
}

impl<T> PtrList<T> {
    /// Creates a new, empty list. No memory is allocated until items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::<u32>::new();
    ///
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(GrowthPolicy::default(), DropPolicy::default(), 0)
    }

    /// Creates a new, empty list with `capacity` slots already allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::<u32>::with_capacity(8);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 8);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new_inner(GrowthPolicy::default(), DropPolicy::default(), capacity)
    }

    /// Creates a new list with `len` items, each created via `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::<u32>::with_len(5);
    ///
    /// assert_eq!(list, [0, 0, 0, 0, 0]);
    /// assert!(list.capacity() >= 5);
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut list = Self::new();
        list.resize(len);
        list
    }

    /// Creates a builder for configuring and constructing a [`PtrList`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::{GrowthPolicy, PtrList};
    ///
    /// let list = PtrList::<u32>::builder()
    ///     .growth_policy(GrowthPolicy::Doubling)
    ///     .build();
    /// ```
    #[inline]
    pub fn builder() -> PtrListBuilder<T> {
        PtrListBuilder::new()
    }

    #[must_use]
    pub(crate) fn new_inner(
        growth_policy: GrowthPolicy,
        drop_policy: DropPolicy,
        initial_capacity: usize,
    ) -> Self {
        let mut slots = SlotArray::new();
        slots.grow(initial_capacity);

        Self {
            list_id: generate_list_id(),
            slots,
            len: 0,
            growth_policy,
            drop_policy,
            _items: PhantomData,
        }
    }

    /// The number of items in the list.
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinite loops in callers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of items in the list. Same as [`len()`][Self::len].
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Whether the list has no items. An empty list may still hold slot capacity.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of slots allocated, including the occupied ones.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The policy used to grow the slot array when a single item is added to a full list.
    #[must_use]
    #[inline]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// What happens to remaining items when the list is dropped.
    #[must_use]
    #[inline]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }

    /// Adds `additional` slots to the current capacity.
    ///
    /// Unlike `Vec::reserve()`, this is relative to the current **capacity**, not the current
    /// length, and always allocates when `additional` is non-zero. Two calls of `reserve(5)`
    /// therefore add 10 slots in total. The items do not move - only the slot array is
    /// reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::<u32>::new();
    /// list.reserve(5);
    /// list.reserve(5);
    ///
    /// assert_eq!(list.capacity(), 10);
    /// assert!(list.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds the size of virtual memory.
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }

        self.slots.grow(additional);
        self.restore_sentinel();
    }

    /// Sets the length of the list to `new_len`.
    ///
    /// If the list grows, the new items are created via `T::default()` and the slot array grows
    /// by exactly the missing number of slots if needed. If the list shrinks, the excess items
    /// at the end are dropped and the capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([1, 2, 3]);
    ///
    /// list.resize(5);
    /// assert_eq!(list, [1, 2, 3, 0, 0]);
    ///
    /// list.resize(1);
    /// assert_eq!(list, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Sets the length of the list to `new_len`, creating any new items by calling `f`.
    ///
    /// See [`resize()`][Self::resize] for details.
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        let capacity = self.capacity();

        if new_len > capacity {
            // Cannot wrap because new_len > capacity.
            self.slots.grow(new_len.wrapping_sub(capacity));
        }

        while self.len < new_len {
            self.slots.set(self.len, Some(into_item_ptr(Box::new(f()))));

            // Cannot wrap because len < new_len.
            self.len = self.len.wrapping_add(1);
        }

        self.restore_sentinel();
    }

    /// Drops every item after the first `new_len` items. Does nothing if the list is not longer
    /// than `new_len`. The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        self.release_tail(new_len);
    }

    /// Drops every item and releases the slot array. Afterwards, both the length and the
    /// capacity are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.release_tail(0);
        self.slots = SlotArray::new();
    }

    /// Appends an item to the end of the list.
    ///
    /// If this would leave no spare slot after the new item, the slot array first grows
    /// according to the [growth policy][GrowthPolicy].
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list, [1, 2]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn push_back(&mut self, value: T) {
        // We allocate before touching the slots, so a failed allocation changes nothing.
        let item = Box::new(value);

        self.ensure_spare_slot();
        self.slots.set(self.len, Some(into_item_ptr(item)));

        // Cannot wrap because there was a spare slot, so len < capacity.
        self.len = self.len.wrapping_add(1);

        self.restore_sentinel();
    }

    /// Appends an item to the end of the list. Same as [`push_back()`][Self::push_back].
    #[inline]
    pub fn append(&mut self, value: T) {
        self.push_back(value);
    }

    /// Inserts an item at the start of the list, shifting every other item one slot to the
    /// right. Only the pointers are shifted, the items do not move.
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Appends a clone of every item in `other`, in order.
    ///
    /// The slot array is first grown by `other.len()` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([1, 2]);
    /// let other = PtrList::from([3, 4]);
    ///
    /// list.append_list(&other);
    ///
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// assert_eq!(other, [3, 4]);
    /// ```
    pub fn append_list(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.reserve(other.len());

        for item in other {
            self.push_back(item.clone());
        }
    }

    /// Inserts an item at index `at`, shifting the items at `at..len()` one slot to the right.
    ///
    /// If `at` is greater than the length of the list, the item is appended to the end
    /// instead. Only the pointers are shifted, so the shifted items stay at the same memory
    /// address.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([4, 45, 23, 73, 77]);
    ///
    /// list.insert(2, 88);
    /// assert_eq!(list, [4, 45, 88, 23, 73, 77]);
    ///
    /// list.insert(1000, 1);
    /// assert_eq!(list, [4, 45, 88, 23, 73, 77, 1]);
    /// ```
    pub fn insert(&mut self, at: usize, value: T) {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let at = at.min(self.len);
        let item = Box::new(value);

        self.ensure_spare_slot();

        // The new item goes into the spare slot first and is then rotated into place.
        let len = self.len;
        self.slots.set(len, Some(into_item_ptr(item)));

        // Cannot wrap because there was a spare slot, so len < capacity.
        let new_len = len.wrapping_add(1);

        self.slots
            .as_mut_slice()
            .get_mut(at..new_len)
            .expect("guarded by spare slot check above")
            .rotate_right(1);

        self.len = new_len;
        self.restore_sentinel();
    }

    /// Removes the item at index `at` and returns it, shifting the items after it one slot
    /// to the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([45, 4, 73]);
    ///
    /// assert_eq!(list.remove_at(1), 4);
    /// assert_eq!(list, [45, 73]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the list is empty or `at` is out of bounds.
    pub fn remove_at(&mut self, at: usize) -> T {
        self.try_remove_at(at)
            .unwrap_or_else(|error| panic!("remove_at({at}) failed: {error}"))
    }

    /// Removes the item at index `at` and returns it, shifting the items after it one slot
    /// to the left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty and [`Error::IndexOutOfBounds`] if `at`
    /// does not refer to an item. The list is not modified in that case.
    pub fn try_remove_at(&mut self, at: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.check_index(at)?;

        Ok(self.remove_at_unchecked(at))
    }

    /// Drops `count` consecutive items starting at index `at`, then shifts the remaining items
    /// to the left to close the gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([45, 4, 45, 23, 73, 77, 88, 99, 111]);
    ///
    /// list.remove_range(2, 4);
    /// assert_eq!(list, [45, 4, 88, 99, 111]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the list is empty or if `at + count` exceeds the length of the list.
    pub fn remove_range(&mut self, at: usize, count: usize) {
        self.try_remove_range(at, count)
            .unwrap_or_else(|error| panic!("remove_range({at}, {count}) failed: {error}"));
    }

    /// Drops `count` consecutive items starting at index `at`, then shifts the remaining items
    /// to the left to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty and [`Error::RangeOutOfBounds`] if
    /// `at + count` exceeds the length of the list. The list is not modified in that case.
    pub fn try_remove_range(&mut self, at: usize, count: usize) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        if at.checked_add(count).is_none_or(|end| end > self.len) {
            return Err(Error::RangeOutOfBounds {
                start: at,
                count,
                len: self.len,
            });
        }

        #[cfg(debug_assertions)]
        self.integrity_check();

        // The doomed pointers are rotated to the end, from where they are released.
        self.occupied_mut()
            .get_mut(at..)
            .expect("guarded by range check above")
            .rotate_left(count);

        // Cannot wrap because count <= len - at.
        self.release_tail(self.len.wrapping_sub(count));

        Ok(())
    }

    /// Removes the first item and returns it, or returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        Some(self.remove_at_unchecked(0))
    }

    /// Removes the last item and returns it, or returns `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // Cannot wrap because the list is not empty.
        Some(self.remove_at_unchecked(self.len.wrapping_sub(1)))
    }

    /// Drops the first item equal to `value`, shifting the items after it to the left.
    ///
    /// Returns whether an item was removed. If no item is equal to `value`, the list is
    /// not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([1, 88, 2, 88]);
    ///
    /// assert!(list.remove_one(&88));
    /// assert_eq!(list, [1, 2, 88]);
    ///
    /// assert!(!list.remove_one(&42));
    /// assert_eq!(list, [1, 2, 88]);
    /// ```
    pub fn remove_one(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                drop(self.remove_at_unchecked(index));
                true
            }
            None => false,
        }
    }

    /// Drops every item equal to `value`, compacting the remaining items in a single pass.
    ///
    /// Returns the number of items removed. The remaining items keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([45, 88, 4, 73, 88]);
    ///
    /// assert_eq!(list.remove_all(&88), 2);
    /// assert_eq!(list, [45, 4, 73]);
    /// ```
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let len = self.len;
        let mut kept: usize = 0;

        // Survivors are swapped down to `kept`, which leaves the doomed pointers at the end.
        for index in 0..len {
            if self.item(index) == value {
                continue;
            }

            self.occupied_mut().swap(kept, index);

            // Cannot wrap because kept <= index < len.
            kept = kept.wrapping_add(1);
        }

        self.release_tail(kept);

        // Cannot wrap because kept <= len.
        len.wrapping_sub(kept)
    }

    /// Removes the item at the cursor and returns a cursor at the same position, which now
    /// refers to the item that followed the removed one (or is equal to [`end()`][Self::end]).
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([45, 73]);
    ///
    /// let next = list.erase(list.begin() + 1);
    ///
    /// assert_eq!(next, list.end());
    /// assert_eq!(list, [45]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the cursor was created by a different list or does not refer to an item.
    pub fn erase(&mut self, cursor: Cursor) -> Cursor {
        self.try_erase(cursor)
            .unwrap_or_else(|error| panic!("erase() failed: {error}"))
    }

    /// Removes the item at the cursor and returns a cursor at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignCursor`] if the cursor was created by a different list and
    /// [`Error::IndexOutOfBounds`] if it does not refer to an item. The list is not modified
    /// in that case.
    pub fn try_erase(&mut self, cursor: Cursor) -> Result<Cursor> {
        self.check_cursor(cursor)?;
        self.check_index(cursor.position())?;
        self.try_remove_range(cursor.position(), 1)?;

        Ok(Cursor::new(self.list_id, cursor.position()))
    }

    /// Drops the items from `from` (inclusive) to `to` (exclusive) and returns a cursor at the
    /// position of `from`. Does nothing if the two cursors are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([45, 4, 88, 45, 23, 73, 77]);
    ///
    /// let next = list.erase_range(list.begin() + 3, list.begin() + 5);
    ///
    /// assert_eq!(next, list.end() - 2);
    /// assert_eq!(list, [45, 4, 88, 73, 77]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either cursor was created by a different list, if either cursor is past
    /// the end of the list or if `to` comes before `from`.
    pub fn erase_range(&mut self, from: Cursor, to: Cursor) -> Cursor {
        self.try_erase_range(from, to)
            .unwrap_or_else(|error| panic!("erase_range() failed: {error}"))
    }

    /// Drops the items from `from` (inclusive) to `to` (exclusive) and returns a cursor at the
    /// position of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignCursor`] if either cursor was created by a different list,
    /// [`Error::RangeOutOfBounds`] if either cursor is past the end of the list and
    /// [`Error::InvalidRange`] if `to` comes before `from`. The list is not modified in
    /// that case.
    pub fn try_erase_range(&mut self, from: Cursor, to: Cursor) -> Result<Cursor> {
        self.check_cursor(from)?;
        self.check_cursor(to)?;

        let start = from.position();
        let end = to.position();

        if start > self.len || end > self.len {
            return Err(Error::RangeOutOfBounds {
                start,
                count: end.saturating_sub(start),
                len: self.len,
            });
        }

        let Some(count) = end.checked_sub(start) else {
            return Err(Error::InvalidRange { start, end });
        };

        if count == 0 {
            return Ok(from);
        }

        self.try_remove_range(start, count)?;

        Ok(Cursor::new(self.list_id, start))
    }

    /// Exchanges the items at indexes `a` and `b`. Only the two pointers are exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.try_swap(a, b)
            .unwrap_or_else(|error| panic!("swap({a}, {b}) failed: {error}"));
    }

    /// Exchanges the items at indexes `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is out of bounds. The list is not
    /// modified in that case.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;

        if a != b {
            self.occupied_mut().swap(a, b);
        }

        Ok(())
    }

    /// Moves the item at index `from` to index `to`, shifting every item between the two
    /// positions by one slot to close the gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([4, 45, 23, 73, 77]);
    ///
    /// list.move_item(3, 1);
    /// assert_eq!(list, [4, 73, 45, 23, 77]);
    ///
    /// list.move_item(1, 3);
    /// assert_eq!(list, [4, 45, 23, 73, 77]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn move_item(&mut self, from: usize, to: usize) {
        self.try_move_item(from, to)
            .unwrap_or_else(|error| panic!("move_item({from}, {to}) failed: {error}"));
    }

    /// Moves the item at index `from` to index `to`, shifting every item between the two
    /// positions by one slot to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is out of bounds. The list is not
    /// modified in that case.
    pub fn try_move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from < to {
            self.occupied_mut()
                .get_mut(from..=to)
                .expect("guarded by index checks above")
                .rotate_left(1);
        } else if from > to {
            self.occupied_mut()
                .get_mut(to..=from)
                .expect("guarded by index checks above")
                .rotate_right(1);
        }

        Ok(())
    }

    /// Whether any item in the list is equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first item equal to `value`, or `None` if there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::from([4, 45, 88]);
    ///
    /// assert_eq!(list.index_of(&45), Some(1));
    /// assert_eq!(list.index_of(&42), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns a cursor at the first item equal to `value`, or [`end()`][Self::end] if there
    /// is no such item.
    #[must_use]
    pub fn find(&self, value: &T) -> Cursor
    where
        T: PartialEq,
    {
        self.index_of(value)
            .map_or_else(|| self.end(), |index| Cursor::new(self.list_id, index))
    }

    /// Returns a reference to the first item, or `None` if the list is empty.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last item, or `None` if the list is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns a reference to the first item.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        self.first().expect("front() called on an empty list")
    }

    /// Returns a reference to the last item.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        self.last().expect("back() called on an empty list")
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn front_mut(&mut self) -> &mut T {
        self.get_mut(0).expect("front_mut() called on an empty list")
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn back_mut(&mut self) -> &mut T {
        let index = self
            .len
            .checked_sub(1)
            .expect("back_mut() called on an empty list");

        self.get_mut(index)
            .expect("guarded by non-empty check above")
    }

    /// Returns a reference to the item at `index`, or `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        (index < self.len).then(|| self.item(index))
    }

    /// Returns an exclusive reference to the item at `index`, or `None` if the index is out
    /// of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let mut ptr = self.item_ptr(index);

        // SAFETY: Occupied slots point to live items exclusively owned by the list, and we
        // hold an exclusive borrow of the list for the lifetime of the returned reference.
        Some(unsafe { ptr.as_mut() })
    }

    /// Returns a reference to the item at `index`, accepting an index of any integer type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::from([10, 20, 30]);
    ///
    /// assert_eq!(*list.at(1_u8), 20);
    /// assert_eq!(*list.at(2_i64), 30);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the index is negative or out of bounds.
    #[must_use]
    pub fn at<I>(&self, index: I) -> &T
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let position = self.resolve_index(index);
        self.item(position)
    }

    /// Returns an exclusive reference to the item at `index`, accepting an index of any
    /// integer type.
    ///
    /// # Panics
    ///
    /// Panics if the index is negative or out of bounds.
    #[must_use]
    pub fn at_mut<I>(&mut self, index: I) -> &mut T
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let position = self.resolve_index(index);
        self.get_mut(position)
            .expect("guarded by bounds check in resolve_index()")
    }

    /// Returns a pointer to the item at `index`.
    ///
    /// The pointer stays valid until the item is removed from the list or the list is
    /// cleared or dropped. Inserting, removing, swapping or moving **other** items and growing
    /// the slot array do not affect it.
    ///
    /// The list itself keeps no references to its items except while one of its methods is
    /// executing, so the pointer may be used from unsafe code while the list is not borrowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let mut list = PtrList::from([1, 2, 3]);
    /// let ptr = list.element_ptr(2);
    ///
    /// list.push_front(0);
    /// list.reserve(1000);
    /// list.remove_at(1);
    ///
    /// // SAFETY: The item is still in the list and the list is not borrowed.
    /// assert_eq!(unsafe { *ptr.as_ptr() }, 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn element_ptr(&self, index: usize) -> NonNull<T> {
        self.check_index(index)
            .unwrap_or_else(|error| panic!("element_ptr({index}) failed: {error}"));

        self.item_ptr(index)
    }

    /// Returns an iterator over shared references to the items, in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.occupied())
    }

    /// Returns an iterator over exclusive references to the items, in order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.occupied_mut())
    }

    /// Returns a cursor at the first item (equal to [`end()`][Self::end] if the list is empty).
    #[must_use]
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.list_id, 0)
    }

    /// Returns a cursor one position past the last item.
    #[must_use]
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.list_id, self.len)
    }

    /// Returns a cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is greater than the length of the list.
    #[must_use]
    pub fn cursor(&self, position: usize) -> Cursor {
        assert!(
            position <= self.len,
            "cursor position {position} is past the end of a list of length {}",
            self.len
        );

        Cursor::new(self.list_id, position)
    }

    /// Returns a reference to the item at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor was created by a different list or does not refer to an item.
    #[must_use]
    pub fn value_at(&self, cursor: Cursor) -> &T {
        let index = self.resolve_cursor(cursor);
        self.item(index)
    }

    /// Returns an exclusive reference to the item at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor was created by a different list or does not refer to an item.
    #[must_use]
    pub fn value_at_mut(&mut self, cursor: Cursor) -> &mut T {
        let index = self.resolve_cursor(cursor);
        self.get_mut(index)
            .expect("guarded by bounds check in resolve_cursor()")
    }

    fn resolve_index<I>(&self, index: I) -> usize
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        index
            .try_into()
            .ok()
            .filter(|position| *position < self.len)
            .unwrap_or_else(|| {
                panic!(
                    "index {index} is negative or out of bounds in a list of length {} of {}",
                    self.len,
                    type_name::<T>()
                )
            })
    }

    fn resolve_cursor(&self, cursor: Cursor) -> usize {
        self.check_cursor(cursor)
            .and_then(|()| self.check_index(cursor.position()))
            .unwrap_or_else(|error| panic!("cannot resolve cursor: {error}"));

        cursor.position()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok(())
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<()> {
        if cursor.list_id() != self.list_id {
            return Err(Error::ForeignCursor {
                cursor_list_id: cursor.list_id(),
                list_id: self.list_id,
            });
        }

        Ok(())
    }

    /// The occupied part of the slot array.
    fn occupied(&self) -> &[Slot<T>] {
        self.slots
            .as_slice()
            .get(..self.len)
            .expect("length never exceeds capacity")
    }

    fn occupied_mut(&mut self) -> &mut [Slot<T>] {
        let len = self.len;

        self.slots
            .as_mut_slice()
            .get_mut(..len)
            .expect("length never exceeds capacity")
    }

    /// The caller is responsible for ensuring that `index` refers to an occupied slot.
    fn item_ptr(&self, index: usize) -> NonNull<T> {
        self.slots
            .get(index)
            .unwrap_or_else(|| {
                panic!(
                    "occupied slot {index} is null in list of {}",
                    type_name::<T>()
                )
            })
    }

    /// The caller is responsible for ensuring that `index` refers to an occupied slot.
    fn item(&self, index: usize) -> &T {
        let ptr = self.item_ptr(index);

        // SAFETY: Occupied slots point to live items exclusively owned by the list, and the
        // shared borrow of the list prevents them from being released or mutated meanwhile.
        unsafe { ptr.as_ref() }
    }

    /// Grows the slot array if appending one item would leave no spare slot after it.
    fn ensure_spare_slot(&mut self) {
        let capacity = self.capacity();

        let required = self
            .len
            .checked_add(1)
            .expect("list length exceeds size of virtual memory");

        if required >= capacity {
            self.slots
                .grow(self.growth_policy.additional_capacity(capacity));
        }
    }

    /// Nulls the slot right after the last item, if there is such a slot.
    #[cfg_attr(test, mutants::skip)] // Only observable via integrity_check().
    fn restore_sentinel(&mut self) {
        if self.slots.capacity() > self.len {
            self.slots.set(self.len, None);
        }
    }

    /// The caller is responsible for ensuring that `index` refers to an occupied slot.
    fn remove_at_unchecked(&mut self, index: usize) -> T {
        #[cfg(debug_assertions)]
        self.integrity_check();

        self.occupied_mut()
            .get_mut(index..)
            .expect("caller guarantees index is in bounds")
            .rotate_left(1);

        // Cannot wrap because the caller guarantees that the list is not empty.
        let new_len = self.len.wrapping_sub(1);
        self.len = new_len;

        // Taking the item out of the slot also turns the slot into the sentinel.
        let ptr = self
            .slots
            .take(new_len)
            .expect("occupied slots are never null");

        // SAFETY: The slot owned this allocation, which was created from a `Box`. The slot is
        // now null and outside the occupied range, so we are the only remaining owner.
        *unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    /// Drops every item at or after `new_len` and shortens the list to `new_len`.
    ///
    /// The length is updated and each slot is nulled before its item is dropped, so even
    /// if dropping an item panics, the list never refers to a released item.
    fn release_tail(&mut self, new_len: usize) {
        let old_len = self.len;
        self.len = new_len;

        for index in new_len..old_len {
            if let Some(ptr) = self.slots.take(index) {
                // SAFETY: The slot owned this allocation, which was created from a `Box`.
                // The slot is now null, so we are the only remaining owner.
                drop(unsafe { Box::from_raw(ptr.as_ptr()) });
            }
        }
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        let capacity = self.slots.capacity();

        assert!(
            self.len <= capacity,
            "length {} exceeds capacity {capacity} in list of {}",
            self.len,
            type_name::<T>()
        );

        for (index, slot) in self.occupied().iter().enumerate() {
            assert!(
                slot.is_some(),
                "occupied slot {index} is null in list of {}",
                type_name::<T>()
            );
        }

        if capacity > self.len {
            assert!(
                self.slots.get(self.len).is_none(),
                "sentinel slot {} is not null in list of {}",
                self.len,
                type_name::<T>()
            );
        }
    }
}

/// Turns a boxed item into the pointer stored in a slot. The slot becomes the owner.
fn into_item_ptr<T>(item: Box<T>) -> NonNull<T> {
    NonNull::from(Box::leak(item))
}

impl<T> Default for PtrList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for PtrList<T> {
    /// Creates a deep copy of the list: every item is cloned into a new allocation.
    ///
    /// The copy has the same growth and drop policies as the original but is a different list
    /// as far as cursors are concerned.
    fn clone(&self) -> Self {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let mut list = Self::new_inner(self.growth_policy, self.drop_policy, 0);
        list.clone_items_from(self);
        list
    }

    /// Releases every item and the slot array of `self`, then deep-copies `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.growth_policy = source.growth_policy;
        self.drop_policy = source.drop_policy;
        self.clone_items_from(source);
    }
}

impl<T: Clone> PtrList<T> {
    /// Appends clones of the items of `source`. Expects `self` to be empty.
    fn clone_items_from(&mut self, source: &Self) {
        debug_assert!(self.is_empty());

        if source.is_empty() {
            return;
        }

        // One extra slot holds the sentinel.
        let required = source
            .len()
            .checked_add(1)
            .expect("list length exceeds size of virtual memory");

        self.slots
            .grow(required.saturating_sub(self.slots.capacity()));

        for item in source {
            self.slots
                .set(self.len, Some(into_item_ptr(Box::new(item.clone()))));

            // Cannot wrap because len < source.len().
            self.len = self.len.wrapping_add(1);
        }

        self.restore_sentinel();
    }
}

impl<T: PartialEq> PartialEq for PtrList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PtrList<T> {}

impl<T: PartialEq> PartialEq<[T]> for PtrList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for PtrList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == *other.as_slice()
    }
}

impl<T: Hash> Hash for PtrList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);

        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PtrList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for PtrList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index {index} is out of bounds in a list of length {} of {}",
                self.len,
                type_name::<T>()
            )
        })
    }
}

impl<T> IndexMut<usize> for PtrList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;

        self.get_mut(index).unwrap_or_else(|| {
            panic!(
                "index {index} is out of bounds in a list of length {len} of {}",
                type_name::<T>()
            )
        })
    }
}

impl<T> Extend<T> for PtrList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();

        // Make room for the known items plus the sentinel, so growth happens at most once
        // for iterators with an exact size hint.
        let required = self
            .len
            .saturating_add(lower_bound)
            .saturating_add(1);
        self.slots
            .grow(required.saturating_sub(self.slots.capacity()));
        self.restore_sentinel();

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for PtrList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for PtrList<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for PtrList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a PtrList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PtrList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for PtrList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // The items now belong to the iterator, which leaves the list empty and without
        // memory to release when it is dropped at the end of this function.
        let len = mem::take(&mut self.len);
        let slots = mem::take(&mut self.slots);

        IntoIter::new(slots, len)
    }
}

impl<T> Drop for PtrList<T> {
    fn drop(&mut self) {
        let was_empty = self.is_empty();

        self.release_tail(0);
        drop(mem::take(&mut self.slots));

        // We do this check at the end so we clean up the memory first.
        //
        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if !was_empty && self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking()
        {
            debug!(
                item_type = type_name::<T>(),
                list_id = self.list_id,
                "non-empty list dropped with a policy that forbids dropping items"
            );

            panic!(
                "dropped a non-empty list of {} with a policy that requires it to be empty",
                type_name::<T>()
            );
        }
    }
}

// SAFETY: The list exclusively owns its items through raw pointers, like `Vec<Box<T>>` does
// through `Box`, so it can move between threads whenever the items can.
unsafe impl<T: Send> Send for PtrList<T> {}
// SAFETY: A shared reference to the list only grants shared access to the items, like
// `Vec<Box<T>>`, so it can be shared between threads whenever the items can.
unsafe impl<T: Sync> Sync for PtrList<T> {}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::undocumented_unsafe_blocks,
    clippy::redundant_clone,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    use new_zealand::nz;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(PtrList<u32>: Send, Sync, fmt::Debug, Default, Clone);
    assert_impl_all!(PtrList<Cell<u32>>: Send);
    assert_not_impl_any!(PtrList<Cell<u32>>: Sync);
    assert_not_impl_any!(PtrList<Rc<u32>>: Send, Sync);
    assert_impl_all!(IntoIter<u32>: Send, Sync);
    assert_impl_all!(Iter<'static, u32>: Send, Sync, Clone);

    /// Counts how many instances have been dropped.
    #[derive(Debug)]
    struct Droppable {
        value: u32,
        drops: Rc<Cell<usize>>,
    }

    impl Droppable {
        fn new(value: u32, drops: &Rc<Cell<usize>>) -> Self {
            Self {
                value,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Drop for Droppable {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    /// Asserts the slot invariants that every public operation must preserve.
    fn assert_slots_consistent<T>(list: &PtrList<T>) {
        #[cfg(debug_assertions)]
        list.integrity_check();

        if list.capacity() > list.len() {
            assert!(list.slots.get(list.len()).is_none());
        }
    }

    fn five() -> PtrList<i32> {
        PtrList::from([4, 45, 23, 73, 77])
    }

    #[test]
    fn smoke_test() {
        let mut list = PtrList::new();
        assert!(list.is_empty());

        list.reserve(10);
        list.push_back(4);
        list.push_back(45);
        list.push_back(23);
        list.push_back(73);
        list.push_back(77);

        assert_eq!(list.len(), 5);
        assert_eq!(list.count(), 5);
        assert!(list.capacity() >= 10);
        assert_eq!(list[0], 4);
        assert_eq!(list[4], 77);
        assert_eq!(list.iter().sum::<i32>(), 222);

        list.insert(2, 88);

        assert_eq!(list, [4, 45, 88, 23, 73, 77]);
        assert_eq!(*list.front(), 4);
        assert_eq!(list.first(), Some(&4));
        assert_eq!(*list.back(), 77);
        assert_eq!(list.last(), Some(&77));
        assert!(list.contains(&88));
        assert!(!list.contains(&42));
        assert_ne!(list.find(&88), list.end());
        assert_eq!(list.find(&42), list.end());

        let mut sum = 0;
        let mut cursor = list.begin();
        while cursor != list.end() {
            sum += *list.value_at(cursor);
            cursor.advance();
        }
        assert_eq!(sum, 310);

        list.clear();
        assert_eq!(list.len(), 0);
        assert_slots_consistent(&list);
    }

    #[test]
    fn sized_construction_and_resizing() {
        let mut list = PtrList::<i32>::with_len(5);
        assert_eq!(list.len(), 5);
        assert!(list.capacity() >= 5);

        list.resize(10);
        assert_eq!(list.len(), 10);
        assert!(list.capacity() >= 10);
        assert!(list.iter().all(|item| *item == 0));
        assert_slots_consistent(&list);

        let capacity = list.capacity();
        list.resize(0);
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), capacity);
        assert_slots_consistent(&list);
    }

    #[test]
    fn reserve_is_additive() {
        let mut list = PtrList::<i32>::with_len(5);
        let capacity = list.capacity();

        list.reserve(10);
        assert_eq!(list.len(), 5);
        assert_eq!(list.capacity(), capacity + 10);

        list.reserve(0);
        assert_eq!(list.len(), 5);
        assert_eq!(list.capacity(), capacity + 10);
        assert_slots_consistent(&list);
    }

    #[test]
    fn resize_with_uses_closure() {
        let mut list = PtrList::from([1]);
        let mut next = 10;

        list.resize_with(4, || {
            next += 1;
            next
        });

        assert_eq!(list, [1, 11, 12, 13]);
    }

    #[test]
    fn removing_items() {
        let mut list = five();

        assert_eq!(list.pop_back(), Some(77));
        assert_eq!(list.len(), 4);
        assert_eq!(list[3], 73);

        assert_eq!(list.pop_front(), Some(4));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], 45);

        assert_eq!(list.remove_at(1), 23);
        assert_eq!(list, [45, 73]);

        let next = list.erase(list.begin() + 1);
        assert_eq!(next, list.end());
        assert_eq!(list, [45]);

        for value in [4, 45, 23, 73, 77, 88, 99, 111] {
            list.push_back(value);
        }

        list.remove_range(2, 4);
        assert_eq!(list, [45, 4, 88, 99, 111]);

        for value in [45, 23, 73, 77, 88, 99, 111] {
            list.push_back(value);
        }

        let next = list.erase_range(list.begin() + 3, list.begin() + 7);
        assert_eq!(next, list.end() - 5);
        assert_eq!(list, [45, 4, 88, 73, 77, 88, 99, 111]);

        assert!(list.remove_one(&88));
        assert_eq!(list, [45, 4, 73, 77, 88, 99, 111]);

        list.insert(2, 88);
        assert_eq!(list.remove_all(&88), 2);
        assert_eq!(list, [45, 4, 73, 77, 99, 111]);
        assert_slots_consistent(&list);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn remove_range_of_eight() {
        let mut list = PtrList::from([45, 4, 23, 73, 77, 88, 99, 111]);

        list.remove_range(1, 4);

        assert_eq!(list, [45, 88, 99, 111]);
        assert_slots_consistent(&list);
    }

    #[test]
    fn remove_range_from_middle_of_nine() {
        let mut list = PtrList::from([45, 4, 45, 23, 73, 77, 88, 99, 111]);

        list.remove_range(2, 4);
        assert_eq!(list, [45, 4, 88, 99, 111]);

        let mut list = PtrList::from([45, 4, 23, 73, 77, 88, 99, 111]);

        list.remove_range(2, 4);
        assert_eq!(list, [45, 4, 99, 111]);
        assert_slots_consistent(&list);
    }

    #[test]
    fn remove_range_of_zero_is_noop() {
        let mut list = five();

        list.remove_range(2, 0);
        list.remove_range(5, 0);

        assert_eq!(list, [4, 45, 23, 73, 77]);
    }

    #[test]
    fn remove_one_and_remove_all_agree_on_single_match() {
        let mut a = PtrList::from([1, 88, 2]);
        let mut b = a.clone();

        assert!(a.remove_one(&88));
        assert_eq!(b.remove_all(&88), 1);

        assert_eq!(a, b);
    }

    #[test]
    fn remove_one_only_removes_first_of_two() {
        let mut a = PtrList::from([88, 1, 88, 2]);
        let mut b = a.clone();

        assert!(a.remove_one(&88));
        assert_eq!(b.remove_all(&88), 2);

        assert_eq!(a, [1, 88, 2]);
        assert_eq!(b, [1, 2]);
    }

    #[test]
    fn remove_one_missing_value_is_noop() {
        let mut list = five();

        assert!(!list.remove_one(&42));
        assert_eq!(list.len(), 5);
        assert_eq!(list.remove_all(&42), 0);
        assert_eq!(list, [4, 45, 23, 73, 77]);
    }

    #[test]
    fn remove_all_can_empty_the_list() {
        let mut list = PtrList::from([7, 7, 7]);

        assert_eq!(list.remove_all(&7), 3);
        assert!(list.is_empty());
        assert_slots_consistent(&list);
    }

    #[test]
    fn move_and_swap_and_copy() {
        let mut list = five();

        list.move_item(3, 1);
        assert_eq!(list, [4, 73, 45, 23, 77]);

        list.swap(0, 2);
        assert_eq!(list, [45, 73, 4, 23, 77]);

        let mut copy = PtrList::new();
        copy.clone_from(&list);
        assert_eq!(copy, [45, 73, 4, 23, 77]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(copy.len(), 5);

        copy.clear();
        assert!(copy.is_empty());
    }

    #[test]
    fn swap_and_move_to_same_index_are_noops() {
        let mut list = five();

        list.swap(2, 2);
        list.move_item(4, 4);

        assert_eq!(list, [4, 45, 23, 73, 77]);
    }

    #[test]
    fn move_forward_shifts_left() {
        let mut list = five();

        list.move_item(0, 4);

        assert_eq!(list, [45, 23, 73, 77, 4]);
    }

    #[test]
    fn insert_out_of_range_appends() {
        let mut list = PtrList::from([1, 2]);

        list.insert(99, 3);
        list.push_front(0);

        assert_eq!(list, [0, 1, 2, 3]);
        assert_slots_consistent(&list);
    }

    #[test]
    fn insert_into_empty_list() {
        let mut list = PtrList::new();

        list.insert(0, "a");
        list.insert(0, "b");

        assert_eq!(list, ["b", "a"]);
    }

    #[test]
    fn default_growth_adds_four_slots() {
        let mut list = PtrList::new();

        list.push_back(1);
        assert_eq!(list.capacity(), 4);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.capacity(), 4);

        // Appending the fourth item would leave no spare slot.
        list.push_back(4);
        assert_eq!(list.capacity(), 8);
        assert_slots_consistent(&list);
    }

    #[test]
    fn doubling_growth() {
        let mut list = PtrList::builder()
            .growth_policy(GrowthPolicy::Doubling)
            .build();

        for i in 0..8 {
            list.append(i);
        }

        assert_eq!(list.capacity(), 16);
        assert_slots_consistent(&list);
    }

    #[test]
    fn fixed_increment_of_one_still_works() {
        let mut list = PtrList::builder()
            .growth_policy(GrowthPolicy::FixedIncrement(nz!(1)))
            .build();

        for i in 0..20 {
            list.push_back(i);
            list.insert(0, i);
            assert_slots_consistent(&list);
        }

        assert_eq!(list.len(), 40);
    }

    #[test]
    fn sentinel_maintained_by_every_operation() {
        let mut list = PtrList::with_capacity(20);

        list.extend([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_slots_consistent(&list);

        list.insert(3, 100);
        assert_slots_consistent(&list);

        list.remove_at(0);
        assert_slots_consistent(&list);

        list.remove_range(1, 3);
        assert_slots_consistent(&list);

        list.push_back(7);
        list.remove_all(&7);
        assert_slots_consistent(&list);

        list.remove_one(&8);
        assert_slots_consistent(&list);

        list.truncate(1);
        assert_slots_consistent(&list);

        list.resize(6);
        assert_slots_consistent(&list);

        _ = list.pop_front();
        _ = list.pop_back();
        assert_slots_consistent(&list);
    }

    #[test]
    fn item_addresses_are_stable() {
        let mut list = PtrList::new();
        for value in 0..10 {
            list.push_back(value);
        }

        let ptr = list.element_ptr(5);

        list.insert(0, 100);
        list.reserve(1000);
        list.push_back(11);
        list.remove_at(1);
        list.swap(5, 0);
        list.move_item(0, 8);
        list.remove_range(0, 2);

        let index = list.index_of(&5).unwrap();
        assert_eq!(list.element_ptr(index), ptr);
        assert_eq!(unsafe { *ptr.as_ptr() }, 5);
        assert_eq!(std::ptr::from_ref(&list[index]), ptr.as_ptr().cast_const());
    }

    #[test]
    fn clone_is_deep() {
        let mut a = PtrList::from([String::from("x"), String::from("y")]);
        let b = a.clone();

        assert_eq!(a, b);
        assert_ne!(a.element_ptr(0), b.element_ptr(0));

        a[0].push('!');
        assert_ne!(a, b);
        assert_eq!(b[0], "x");

        a.remove_at(1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn clone_keeps_policies_and_gets_new_identity() {
        let a = PtrList::<u8>::builder()
            .growth_policy(GrowthPolicy::Doubling)
            .build();
        let b = a.clone();

        assert_eq!(b.growth_policy(), GrowthPolicy::Doubling);
        assert_ne!(a.begin().list_id(), b.begin().list_id());
    }

    #[test]
    fn clone_from_replaces_content() {
        let source = PtrList::from([1, 2, 3]);
        let mut target = PtrList::from([9, 9, 9, 9, 9, 9]);

        target.clone_from(&source);

        assert_eq!(target, [1, 2, 3]);
        assert_slots_consistent(&target);
    }

    #[test]
    fn clone_of_empty_list_allocates_nothing() {
        let list = PtrList::<u32>::new();
        let copy = list.clone();

        assert!(copy.is_empty());
        assert_eq!(copy.capacity(), 0);
    }

    #[test]
    fn equality_compares_values() {
        let a = PtrList::from([1, 2, 3]);
        let b: PtrList<i32> = vec![1, 2, 3].into();
        let c = PtrList::from([1, 2]);
        let d = PtrList::from([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a == *[1, 2, 3].as_slice());
    }

    #[test]
    fn equal_lists_hash_equally() {
        fn hash_of(list: &PtrList<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }

        let a = PtrList::from([1, 2, 3]);
        let b = a.clone();

        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn debug_output_lists_items() {
        let list = PtrList::from([1, 2, 3]);

        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn at_accepts_any_integer_width() {
        let mut list = five();

        assert_eq!(*list.at(0_u8), 4);
        assert_eq!(*list.at(1_u16), 45);
        assert_eq!(*list.at(2_u32), 23);
        assert_eq!(*list.at(3_i32), 73);
        assert_eq!(*list.at(4_i64), 77);

        *list.at_mut(0_isize) = 5;
        assert_eq!(list[0], 5);
    }

    #[test]
    #[should_panic]
    fn at_negative_index_panics() {
        let list = five();
        _ = list.at(-1_i32);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let list = five();
        _ = &list[5];
    }

    #[test]
    #[should_panic]
    fn front_of_empty_panics() {
        let list = PtrList::<u32>::new();
        _ = list.front();
    }

    #[test]
    #[should_panic]
    fn remove_at_on_empty_panics() {
        let mut list = PtrList::<u32>::new();
        _ = list.remove_at(0);
    }

    #[test]
    #[should_panic]
    fn remove_range_past_end_panics() {
        let mut list = five();
        list.remove_range(3, 3);
    }

    #[test]
    #[should_panic]
    fn move_item_out_of_bounds_panics() {
        let mut list = five();
        list.move_item(0, 5);
    }

    #[test]
    fn try_operations_leave_list_unchanged_on_error() {
        let mut list = five();

        assert_eq!(
            list.try_remove_at(5),
            Err(Error::IndexOutOfBounds { index: 5, len: 5 })
        );
        assert_eq!(
            list.try_remove_range(4, 2),
            Err(Error::RangeOutOfBounds {
                start: 4,
                count: 2,
                len: 5
            })
        );
        assert_eq!(
            list.try_remove_range(1, usize::MAX),
            Err(Error::RangeOutOfBounds {
                start: 1,
                count: usize::MAX,
                len: 5
            })
        );
        assert_eq!(
            list.try_swap(0, 9),
            Err(Error::IndexOutOfBounds { index: 9, len: 5 })
        );
        assert_eq!(
            list.try_move_item(7, 0),
            Err(Error::IndexOutOfBounds { index: 7, len: 5 })
        );
        assert_eq!(
            list.try_erase(list.end()),
            Err(Error::IndexOutOfBounds { index: 5, len: 5 })
        );

        assert_eq!(list, [4, 45, 23, 73, 77]);
        assert_slots_consistent(&list);

        let mut empty = PtrList::<i32>::new();
        assert_eq!(empty.try_remove_at(0), Err(Error::Empty));
        assert_eq!(empty.try_remove_range(0, 0), Err(Error::Empty));
    }

    #[test]
    fn erase_range_with_equal_cursors_is_noop() {
        let mut list = five();

        let cursor = list.begin() + 2;
        assert_eq!(list.erase_range(cursor, cursor), cursor);
        assert_eq!(list.len(), 5);

        let mut empty = PtrList::<i32>::new();
        assert_eq!(empty.erase_range(empty.begin(), empty.end()), empty.begin());
    }

    #[test]
    fn erase_range_rejects_reversed_and_out_of_bounds_ranges() {
        let mut list = five();

        assert_eq!(
            list.try_erase_range(list.begin() + 3, list.begin() + 1),
            Err(Error::InvalidRange { start: 3, end: 1 })
        );
        assert!(matches!(
            list.try_erase_range(list.begin(), list.end() + 1),
            Err(Error::RangeOutOfBounds { .. })
        ));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn foreign_cursor_is_rejected() {
        let mut a = five();
        let b = five();

        // Cursors compare by position only...
        assert_eq!(a.begin(), b.begin());

        // ...but cannot be used with another list.
        assert!(matches!(
            a.try_erase(b.begin()),
            Err(Error::ForeignCursor { .. })
        ));
        assert_eq!(a.len(), 5);
    }

    #[test]
    #[should_panic]
    fn value_at_with_foreign_cursor_panics() {
        let a = five();
        let b = five();

        _ = a.value_at(b.begin());
    }

    #[test]
    #[should_panic]
    fn value_at_end_panics() {
        let list = five();
        _ = list.value_at(list.end());
    }

    #[test]
    #[should_panic]
    fn cursor_past_end_panics() {
        let list = five();
        _ = list.cursor(6);
    }

    #[test]
    fn value_at_mut_modifies_item() {
        let mut list = five();
        let cursor = list.cursor(2);

        *list.value_at_mut(cursor) = 0;

        assert_eq!(list, [4, 45, 0, 73, 77]);
    }

    #[test]
    fn iterators_visit_items_in_order() {
        let mut list = five();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 45, 23, 73, 77]);
        assert_eq!(list.iter().rev().next(), Some(&77));
        assert_eq!(list.iter().len(), 5);

        for item in &mut list {
            *item *= 2;
        }
        assert_eq!(list, [8, 90, 46, 146, 154]);

        for item in list.iter_mut().rev().take(1) {
            *item = 0;
        }
        assert_eq!(list, [8, 90, 46, 146, 0]);

        let mut owned = list.into_iter();
        assert_eq!(owned.len(), 5);
        assert_eq!(owned.next(), Some(8));
        assert_eq!(owned.next_back(), Some(0));
        assert_eq!(owned.collect::<Vec<_>>(), [90, 46, 146]);
    }

    #[test]
    fn into_iter_drops_unconsumed_items() {
        let drops = Rc::new(Cell::new(0));
        let list: PtrList<_> = (0..5).map(|i| Droppable::new(i, &drops)).collect();

        let mut iter = list.into_iter();
        let first = iter.next().unwrap();
        assert_eq!(first.value, 0);
        assert_eq!(drops.get(), 0);

        drop(iter);
        assert_eq!(drops.get(), 4);

        drop(first);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn removals_drop_exactly_the_removed_items() {
        let drops = Rc::new(Cell::new(0));
        let mut list: PtrList<_> = (0..10).map(|i| Droppable::new(i, &drops)).collect();

        list.remove_range(2, 3);
        assert_eq!(drops.get(), 3);

        drop(list.remove_at(0));
        assert_eq!(drops.get(), 4);

        list.truncate(3);
        assert_eq!(drops.get(), 7);
        assert_eq!(
            list.iter().map(|item| item.value).collect::<Vec<_>>(),
            [1, 5, 6]
        );

        list.clear();
        assert_eq!(drops.get(), 10);
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn drop_releases_all_items() {
        let drops = Rc::new(Cell::new(0));

        {
            let mut list = PtrList::new();
            for i in 0..6 {
                list.push_back(Droppable::new(i, &drops));
            }
        }

        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn panicking_item_drop_leaves_list_consistent() {
        struct PanicOnDrop(bool);

        impl Drop for PanicOnDrop {
            fn drop(&mut self) {
                if self.0 && !thread::panicking() {
                    panic!("item refused to be dropped");
                }
            }
        }

        let mut list = PtrList::new();
        list.push_back(PanicOnDrop(false));
        list.push_back(PanicOnDrop(true));
        list.push_back(PanicOnDrop(false));

        let result = panic::catch_unwind(AssertUnwindSafe(|| list.truncate(1)));
        assert!(result.is_err());

        assert_eq!(list.len(), 1);
        assert_slots_consistent(&list);
    }

    #[test]
    #[should_panic]
    fn drop_non_empty_with_must_not_drop_policy_panics() {
        let mut list = PtrList::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();
        list.push_back(1);
    }

    #[test]
    fn drop_empty_with_must_not_drop_policy_is_fine() {
        let mut list = PtrList::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();
        list.push_back(1);
        _ = list.pop_back();

        drop(list);
    }

    #[test]
    fn into_iter_with_must_not_drop_policy_is_fine() {
        let mut list = PtrList::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();
        list.push_back(1);

        assert_eq!(list.into_iter().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn append_list_copies_items() {
        let mut a = PtrList::from([1, 2]);
        let b = PtrList::from([3, 4, 5]);

        a.append_list(&b);

        assert_eq!(a, [1, 2, 3, 4, 5]);
        assert_eq!(b, [3, 4, 5]);
        assert_slots_consistent(&a);
    }

    #[test]
    fn zero_sized_items_work() {
        let mut list = PtrList::new();

        for _ in 0..10 {
            list.push_back(());
        }
        list.remove_range(2, 5);

        assert_eq!(list.len(), 5);
        assert_eq!(list.iter().count(), 5);
    }

    #[test]
    fn front_and_back_mut() {
        let mut list = five();

        *list.front_mut() = 1;
        *list.back_mut() = 2;

        assert_eq!(list, [1, 45, 23, 73, 2]);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let mut list = five();

        assert_eq!(list.get(5), None);
        assert_eq!(list.get_mut(5), None);
        assert_eq!(PtrList::<u8>::new().first(), None);
        assert_eq!(PtrList::<u8>::new().last(), None);
    }
}
