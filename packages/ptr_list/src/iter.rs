use std::any::type_name;
use std::iter::FusedIterator;
use std::{fmt, slice};

use crate::{Slot, SlotArray};

/// Iterator over shared references to the items of a [`PtrList`][crate::PtrList],
/// created by [`PtrList::iter()`][crate::PtrList::iter].
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator over occupied slots. Every slot must be non-null and own its item.
    pub(crate) fn new(slots: &'a [Slot<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }

    fn resolve(slot: &Slot<T>) -> &'a T {
        let ptr = slot.expect("occupied slots are never null");

        // SAFETY: Occupied slots point to live items owned by the list, which is borrowed
        // immutably for 'a by the iterator, so nothing can release or mutate the item meanwhile.
        unsafe { ptr.as_ref() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(Self::resolve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(Self::resolve)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("remaining", &self.slots.len())
            .finish()
    }
}

// SAFETY: The iterator only hands out shared references, same as `slice::Iter<'_, T>`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: The iterator only hands out shared references, same as `slice::Iter<'_, T>`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Iterator over exclusive references to the items of a [`PtrList`][crate::PtrList],
/// created by [`PtrList::iter_mut()`][crate::PtrList::iter_mut].
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Slot<T>>,
}

impl<'a, T> IterMut<'a, T> {
    /// Creates an iterator over occupied slots. Every slot must be non-null and own its item.
    pub(crate) fn new(slots: &'a mut [Slot<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }

    fn resolve(slot: &mut Slot<T>) -> &'a mut T {
        let mut ptr = slot.expect("occupied slots are never null");

        // SAFETY: Occupied slots point to live items owned by the list, which is borrowed
        // exclusively for 'a. No two slots point to the same item and each slot is visited
        // once, so the returned exclusive references never alias.
        unsafe { ptr.as_mut() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(Self::resolve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(Self::resolve)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("remaining", &self.slots.len())
            .finish()
    }
}

// SAFETY: Same reasoning as `slice::IterMut<'_, T>` - the iterator hands out exclusive
// references, which may move to another thread if `T: Send`.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: Same reasoning as `slice::IterMut<'_, T>`.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// Owning iterator over the items of a [`PtrList`][crate::PtrList], created by
/// the [`IntoIterator`] implementation of the list.
///
/// Items not consumed by the time the iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    slots: SlotArray<T>,

    /// Slots in `front..back` are occupied. Everything else is null.
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// Takes over a slot array whose first `len` slots are occupied.
    pub(crate) fn new(slots: SlotArray<T>, len: usize) -> Self {
        Self {
            slots,
            front: 0,
            back: len,
        }
    }

    fn release(&mut self, index: usize) -> T {
        let ptr = self
            .slots
            .take(index)
            .expect("occupied slots are never null");

        // SAFETY: The slot owned this allocation, which was created from a `Box`. We just
        // nulled the slot, so this is the only remaining owner.
        *unsafe { Box::from_raw(ptr.as_ptr()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        // Cannot wrap because front < back.
        self.front = self.front.wrapping_add(1);

        Some(self.release(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // Cannot wrap because back > front >= 0.
        self.back = self.back.wrapping_sub(1);

        Some(self.release(self.back))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        // Cannot wrap because front <= back.
        self.back.wrapping_sub(self.front)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("remaining", &self.len())
            .finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop the items we did not hand out. The slot array frees itself afterwards.
        for _ in self.by_ref() {}
    }
}

// SAFETY: The iterator owns its items exclusively, so it can move between threads whenever
// the items themselves can.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: The iterator exposes no shared access to its items, same as `vec::IntoIter<T>`.
unsafe impl<T: Sync> Sync for IntoIter<T> {}
