/// Determines what happens to the items still owned by a [`PtrList`][crate::PtrList]
/// when the list itself is dropped.
///
/// By default, the list drops its items when it is dropped.
///
/// # Examples
///
/// ```
/// use ptr_list::{DropPolicy, PtrList};
///
/// let list = PtrList::<u32>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
///
/// assert_eq!(list.drop_policy(), DropPolicy::MustNotDropItems);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The list will drop its items when the list is dropped. This is the default.
    #[default]
    MayDropItems,

    /// The list will panic if it still contains items when it is dropped.
    ///
    /// This may be valuable if raw pointers to the items (see
    /// [`PtrList::element_ptr()`][crate::PtrList::element_ptr]) are held elsewhere and the
    /// owner wants proof that every item was explicitly removed before the list went away.
    MustNotDropItems,
}
