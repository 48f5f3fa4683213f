use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::{DropPolicy, GrowthPolicy, PtrList};

/// Builder for creating an instance of [`PtrList`].
///
/// You only need to use this builder if you want to customize the list configuration.
/// The default configuration used by [`PtrList::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use ptr_list::{DropPolicy, GrowthPolicy, PtrList};
///
/// let list = PtrList::<u32>::builder()
///     .growth_policy(GrowthPolicy::FixedIncrement(NonZero::new(32).unwrap()))
///     .drop_policy(DropPolicy::MayDropItems)
///     .initial_capacity(10)
///     .build();
///
/// assert!(list.is_empty());
/// assert_eq!(list.capacity(), 10);
/// ```
///
/// [1]: PtrList::new
#[must_use]
pub struct PtrListBuilder<T> {
    growth_policy: GrowthPolicy,
    drop_policy: DropPolicy,
    initial_capacity: usize,

    _item: PhantomData<T>,
}

impl<T> fmt::Debug for PtrListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PtrListBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("growth_policy", &self.growth_policy)
            .field("drop_policy", &self.drop_policy)
            .field("initial_capacity", &self.initial_capacity)
            .finish()
    }
}

impl<T> PtrListBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            growth_policy: GrowthPolicy::default(),
            drop_policy: DropPolicy::default(),
            initial_capacity: 0,
            _item: PhantomData,
        }
    }

    /// Sets the [growth policy][GrowthPolicy] used when appending or inserting a single item
    /// into a list that has no spare slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::{GrowthPolicy, PtrList};
    ///
    /// let list = PtrList::<u32>::builder()
    ///     .growth_policy(GrowthPolicy::Doubling)
    ///     .build();
    ///
    /// assert_eq!(list.growth_policy(), GrowthPolicy::Doubling);
    /// ```
    #[inline]
    pub fn growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.growth_policy = policy;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the list. This governs how
    /// to treat remaining items in the list when the list is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::{DropPolicy, PtrList};
    ///
    /// let list = PtrList::<u32>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    /// ```
    #[inline]
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Sets the number of slots allocated when the list is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::<u32>::builder().initial_capacity(16).build();
    ///
    /// assert_eq!(list.capacity(), 16);
    /// ```
    #[inline]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builds the list with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptr_list::PtrList;
    ///
    /// let list = PtrList::<u32>::builder().build();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn build(self) -> PtrList<T> {
        PtrList::new_inner(self.growth_policy, self.drop_policy, self.initial_capacity)
    }
}

#[cfg(test)]
mod tests {
    use new_zealand::nz;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(PtrListBuilder<u32>: Send, Sync, fmt::Debug);

    #[test]
    fn builder_new_creates_default_state() {
        let builder = PtrListBuilder::<u32>::new();

        assert_eq!(builder.growth_policy, GrowthPolicy::default());
        assert_eq!(builder.drop_policy, DropPolicy::default());
        assert_eq!(builder.initial_capacity, 0);
    }

    #[test]
    fn settings_can_be_overridden() {
        let builder = PtrListBuilder::<u32>::new()
            .growth_policy(GrowthPolicy::Doubling)
            .growth_policy(GrowthPolicy::FixedIncrement(nz!(8)))
            .drop_policy(DropPolicy::MustNotDropItems)
            .drop_policy(DropPolicy::MayDropItems)
            .initial_capacity(3)
            .initial_capacity(7);

        assert_eq!(builder.growth_policy, GrowthPolicy::FixedIncrement(nz!(8)));
        assert_eq!(builder.drop_policy, DropPolicy::MayDropItems);
        assert_eq!(builder.initial_capacity, 7);
    }

    #[test]
    fn build_applies_configuration() {
        let list = PtrListBuilder::<String>::new()
            .growth_policy(GrowthPolicy::Doubling)
            .drop_policy(DropPolicy::MustNotDropItems)
            .initial_capacity(12)
            .build();

        assert_eq!(list.growth_policy(), GrowthPolicy::Doubling);
        assert_eq!(list.drop_policy(), DropPolicy::MustNotDropItems);
        assert_eq!(list.capacity(), 12);
        assert!(list.is_empty());
    }

    #[test]
    fn builder_is_debug() {
        let builder = PtrListBuilder::<u64>::new().initial_capacity(5);
        let debug_output = format!("{builder:?}");

        assert!(debug_output.contains("PtrListBuilder"));
        assert!(debug_output.contains("u64"));
        assert!(debug_output.contains("initial_capacity: 5"));
    }
}
