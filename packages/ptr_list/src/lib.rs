//! A growable list with stable item addresses.
//!
//! This crate provides [`PtrList`], a list that stores every item in its own heap allocation
//! and keeps an array of pointers ("slots") to the items. Inserting, removing, swapping and
//! reordering items only moves the pointers, so an item never changes its memory address while
//! it is in the list - even when the slot array itself is reallocated to make room for more.
//!
//! # Key Features
//!
//! - **Stable item addresses**: [`PtrList::element_ptr()`] returns a pointer that stays valid
//!   until that specific item is removed, regardless of what happens to other items.
//! - **Index-based access**: `list[i]`, [`PtrList::get()`] and [`PtrList::at()`] (which accepts
//!   an index of any integer type).
//! - **Positional editing**: insert anywhere, remove single items or ranges, swap and move
//!   items by index, all by shifting pointers only.
//! - **Value-based editing**: [`PtrList::remove_one()`], [`PtrList::remove_all()`],
//!   [`PtrList::contains()`], [`PtrList::index_of()`] and [`PtrList::find()`].
//! - **Cursors**: [`Cursor`] is a detached position marker that can be moved with arithmetic
//!   and resolved against the list that created it.
//! - **Deep copy**: cloning a list clones every item into a new allocation.
//! - **Configurable growth**: a [`GrowthPolicy`] decides how many slots to add when a single
//!   insertion runs out of room (4 at a time by default).
//! - **Drop policies**: a [`DropPolicy`] can require that the list is empty when dropped.
//!
//! # Examples
//!
//! ```rust
//! use ptr_list::PtrList;
//!
//! let mut list = PtrList::new();
//! list.reserve(10);
//!
//! for value in [4, 45, 23, 73, 77] {
//!     list.push_back(value);
//! }
//!
//! assert_eq!(list.len(), 5);
//! assert!(list.capacity() >= 10);
//! assert_eq!(list.iter().sum::<i32>(), 222);
//!
//! list.insert(2, 88);
//! assert_eq!(list, [4, 45, 88, 23, 73, 77]);
//! assert_eq!(list.iter().sum::<i32>(), 310);
//!
//! list.clear();
//! assert!(list.is_empty());
//! ```
//!
//! Fallible variants report broken preconditions instead of panicking:
//!
//! ```rust
//! use ptr_list::{Error, PtrList};
//!
//! let mut list = PtrList::from([1, 2, 3]);
//!
//! assert_eq!(
//!     list.try_remove_at(5),
//!     Err(Error::IndexOutOfBounds { index: 5, len: 3 })
//! );
//!
//! // The list was not modified.
//! assert_eq!(list, [1, 2, 3]);
//! ```

mod builder;
mod cursor;
mod drop_policy;
mod error;
mod growth_policy;
mod iter;
mod list_id;
mod ptr_list;
mod slots;

pub use builder::*;
pub use cursor::*;
pub use drop_policy::*;
pub use error::*;
pub use growth_policy::*;
pub use iter::*;
pub(crate) use list_id::*;
pub use ptr_list::*;
pub(crate) use slots::*;
