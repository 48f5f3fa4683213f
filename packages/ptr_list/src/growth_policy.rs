use std::num::NonZero;

use new_zealand::nz;

/// Number of slots added by the default growth policy whenever appending a single item
/// runs out of room.
pub const DEFAULT_GROWTH_STEP: NonZero<usize> = nz!(4);

/// Governs how much capacity a [`PtrList`][crate::PtrList] adds when a single-item insertion
/// (`push_back()`, `append()`, `push_front()`, `insert()`) finds no spare slot.
///
/// Only the slot array (one pointer per slot) is reallocated on growth; the items themselves
/// live in their own allocations and never move.
///
/// Explicit [`reserve()`][crate::PtrList::reserve] and [`resize()`][crate::PtrList::resize]
/// calls are not affected by the growth policy - they grow by exactly the requested amount.
///
/// # Examples
///
/// ```
/// use ptr_list::{GrowthPolicy, PtrList};
///
/// let mut list = PtrList::builder()
///     .growth_policy(GrowthPolicy::Doubling)
///     .build();
///
/// for i in 0..100 {
///     list.push_back(i);
/// }
///
/// assert!(list.capacity() >= 100);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GrowthPolicy {
    /// Every top-up adds exactly this many slots.
    ///
    /// This bounds the unused capacity but reallocates the slot array more often than a
    /// geometric strategy when many items are appended in a row.
    FixedIncrement(NonZero<usize>),

    /// Every top-up doubles the capacity (adding at least [`DEFAULT_GROWTH_STEP`] slots).
    Doubling,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::FixedIncrement(DEFAULT_GROWTH_STEP)
    }
}

impl GrowthPolicy {
    /// How many slots to add to a slot array that currently has `current_capacity` slots.
    ///
    /// Always returns a non-zero value.
    #[must_use]
    pub(crate) fn additional_capacity(self, current_capacity: usize) -> usize {
        match self {
            Self::FixedIncrement(step) => step.get(),
            Self::Doubling => current_capacity.max(DEFAULT_GROWTH_STEP.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed_increment_of_four() {
        assert_eq!(
            GrowthPolicy::default(),
            GrowthPolicy::FixedIncrement(nz!(4))
        );
        assert_eq!(GrowthPolicy::default().additional_capacity(0), 4);
        assert_eq!(GrowthPolicy::default().additional_capacity(1000), 4);
    }

    #[test]
    fn fixed_increment_ignores_capacity() {
        let policy = GrowthPolicy::FixedIncrement(nz!(16));

        assert_eq!(policy.additional_capacity(0), 16);
        assert_eq!(policy.additional_capacity(3), 16);
        assert_eq!(policy.additional_capacity(1 << 20), 16);
    }

    #[test]
    fn doubling_adds_current_capacity() {
        let policy = GrowthPolicy::Doubling;

        assert_eq!(policy.additional_capacity(0), 4);
        assert_eq!(policy.additional_capacity(2), 4);
        assert_eq!(policy.additional_capacity(4), 4);
        assert_eq!(policy.additional_capacity(50), 50);
    }
}
