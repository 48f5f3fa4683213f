use std::alloc::{Layout, alloc, dealloc, realloc};
use std::any::type_name;
use std::ptr::NonNull;
use std::{fmt, mem, slice};

use tracing::trace;

/// One cell of the slot array. A cell either points to an item owned by the list or is null.
///
/// `Option<NonNull<T>>` has the same size as a raw pointer, so the slot array is a plain
/// array of pointers with null represented as `None`.
pub(crate) type Slot<T> = Option<NonNull<T>>;

/// The backing array of pointer-sized slots of a `PtrList`.
///
/// This type only manages the memory of the array itself. It never allocates, drops or
/// otherwise touches the items the slots point to - that is the responsibility of the owner,
/// which knows which slots are occupied.
///
/// Growing the array reallocates it, which moves the slots (the pointer values) but never
/// the items they point to. Every slot is initialized to null when it is first allocated, so
/// the whole array can always be viewed as a slice of [`Slot<T>`].
pub(crate) struct SlotArray<T> {
    first_slot_ptr: NonNull<Slot<T>>,

    /// Number of slots allocated. When zero, `first_slot_ptr` is dangling and no memory is held.
    capacity: usize,
}

impl<T> SlotArray<T> {
    /// Creates an empty slot array that holds no memory.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            first_slot_ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    #[must_use]
    fn layout(capacity: usize) -> Layout {
        Layout::array::<Slot<T>>(capacity).expect("slot array exceeds size of virtual memory")
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the array by exactly `additional` slots. The new slots are null.
    ///
    /// Existing slot values are preserved (copied to the new allocation if the array moves).
    ///
    /// # Panics
    ///
    /// Panics if the new capacity would exceed the size of virtual memory or if the
    /// allocation fails.
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use.
    pub(crate) fn grow(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }

        let old_capacity = self.capacity;
        let new_capacity = old_capacity
            .checked_add(additional)
            .expect("slot array capacity exceeds size of virtual memory");
        let new_layout = Self::layout(new_capacity);

        let raw = if old_capacity == 0 {
            // SAFETY: The layout is non-zero-sized because `new_capacity` is at least 1
            // and slots are pointer-sized.
            unsafe { alloc(new_layout) }
        } else {
            // SAFETY: The pointer was allocated by us with the layout of `old_capacity` slots,
            // and the new size is non-zero and does not overflow `isize` (checked by `layout()`).
            unsafe {
                realloc(
                    self.first_slot_ptr.as_ptr().cast(),
                    Self::layout(old_capacity),
                    new_layout.size(),
                )
            }
        };

        // If the allocation failed, the old block is still ours and still referenced by
        // `first_slot_ptr`, so our own drop releases it during the unwind.
        self.first_slot_ptr = NonNull::new(raw.cast::<Slot<T>>()).expect(
            "we do not intend to handle allocation failure as a real possibility - OOM is panic",
        );

        for index in old_capacity..new_capacity {
            // SAFETY: The index is within the allocation we just made and the slot type is
            // `Copy`, so there is no old value that would need to be dropped.
            unsafe {
                self.first_slot_ptr.add(index).write(None);
            }
        }

        self.capacity = new_capacity;

        trace!(
            item_type = type_name::<T>(),
            old_capacity, new_capacity, "reallocated slot array"
        );
    }

    #[must_use]
    pub(crate) fn as_slice(&self) -> &[Slot<T>] {
        // SAFETY: Every slot up to `capacity` is initialized (in `grow()`), and a dangling
        // pointer is valid for a zero-length slice.
        unsafe { slice::from_raw_parts(self.first_slot_ptr.as_ptr(), self.capacity) }
    }

    #[must_use]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Slot<T>] {
        // SAFETY: Every slot up to `capacity` is initialized (in `grow()`), and a dangling
        // pointer is valid for a zero-length slice. We hold an exclusive borrow of the array.
        unsafe { slice::from_raw_parts_mut(self.first_slot_ptr.as_ptr(), self.capacity) }
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub(crate) fn get(&self, index: usize) -> Slot<T> {
        *self.as_slice().get(index).unwrap_or_else(|| {
            panic!(
                "slot {index} out of bounds in slot array of {} with capacity {}",
                type_name::<T>(),
                self.capacity
            )
        })
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub(crate) fn set(&mut self, index: usize, slot: Slot<T>) {
        *self.slot_mut(index) = slot;
    }

    /// Returns the value of the slot and leaves null in its place.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub(crate) fn take(&mut self, index: usize) -> Slot<T> {
        mem::take(self.slot_mut(index))
    }

    fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        let capacity = self.capacity;

        self.as_mut_slice().get_mut(index).unwrap_or_else(|| {
            panic!(
                "slot {index} out of bounds in slot array of {} with capacity {capacity}",
                type_name::<T>()
            )
        })
    }
}

impl<T> Default for SlotArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SlotArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotArray")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> Drop for SlotArray<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // SAFETY: The layout must match between alloc and dealloc. It does.
        unsafe {
            dealloc(
                self.first_slot_ptr.as_ptr().cast(),
                Self::layout(self.capacity),
            );
        }

        trace!(
            item_type = type_name::<T>(),
            capacity = self.capacity,
            "released slot array"
        );
    }
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use super::*;

    fn leak(value: u32) -> NonNull<u32> {
        NonNull::from(Box::leak(Box::new(value)))
    }

    fn release(slot: Slot<u32>) -> u32 {
        // SAFETY: Only called with pointers created by `leak()` above, each exactly once.
        *unsafe { Box::from_raw(slot.unwrap().as_ptr()) }
    }

    #[test]
    fn new_holds_no_memory() {
        let slots = SlotArray::<u32>::new();

        assert_eq!(slots.capacity(), 0);
        assert!(slots.as_slice().is_empty());
    }

    #[test]
    fn grow_from_empty_creates_null_slots() {
        let mut slots = SlotArray::<u32>::new();
        slots.grow(5);

        assert_eq!(slots.capacity(), 5);
        assert!(slots.as_slice().iter().all(Option::is_none));
    }

    #[test]
    fn grow_by_zero_is_noop() {
        let mut slots = SlotArray::<u32>::new();
        slots.grow(0);
        assert_eq!(slots.capacity(), 0);

        slots.grow(3);
        slots.grow(0);
        assert_eq!(slots.capacity(), 3);
    }

    #[test]
    fn grow_is_additive_and_preserves_pointers() {
        let mut slots = SlotArray::<u32>::new();
        slots.grow(2);

        let a = leak(10);
        let b = leak(20);
        slots.set(0, Some(a));
        slots.set(1, Some(b));

        slots.grow(2);
        slots.grow(100);

        assert_eq!(slots.capacity(), 104);
        assert_eq!(slots.get(0), Some(a));
        assert_eq!(slots.get(1), Some(b));
        assert!(slots.as_slice()[2..].iter().all(Option::is_none));

        // The items did not move, only the pointers to them did.
        assert_eq!(release(slots.take(0)), 10);
        assert_eq!(release(slots.take(1)), 20);
    }

    #[test]
    fn take_leaves_null() {
        let mut slots = SlotArray::<u32>::new();
        slots.grow(1);
        slots.set(0, Some(leak(7)));

        let taken = slots.take(0);
        assert!(slots.get(0).is_none());
        assert_eq!(release(taken), 7);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let mut slots = SlotArray::<u32>::new();
        slots.grow(2);

        _ = slots.get(2);
    }

    #[test]
    #[should_panic]
    fn set_on_empty_panics() {
        let mut slots = SlotArray::<u32>::new();
        slots.set(0, None);
    }

    #[test]
    fn debug_output_names_type() {
        let slots = SlotArray::<String>::new();
        let output = format!("{slots:?}");

        assert!(output.contains("SlotArray"));
        assert!(output.contains("String"));
    }
}
