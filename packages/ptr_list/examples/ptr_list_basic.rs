//! Basic usage example for `PtrList`.
//!
//! This example demonstrates how items keep their memory address while the list around
//! them is edited, and how cursors and fallible operations are used.

use ptr_list::{Error, GrowthPolicy, PtrList};

fn main() {
    let mut list = PtrList::builder()
        .growth_policy(GrowthPolicy::Doubling)
        .initial_capacity(4)
        .build();

    for value in [4, 45, 23, 73, 77] {
        list.push_back(value);
    }

    println!("List: {list:?} (capacity {})", list.capacity());
    println!("Sum: {}", list.iter().sum::<i32>());

    // Remember where the item 23 lives.
    let ptr = list.element_ptr(2);

    list.insert(0, 88);
    list.move_item(3, 5);
    list.reserve(100);

    let index = list.index_of(&23).expect("23 was never removed");
    assert_eq!(list.element_ptr(index), ptr);

    println!("After editing: {list:?}, 23 is now at index {index} but still at {ptr:?}");

    // Walk the list with a cursor.
    let mut cursor = list.begin();
    while cursor != list.end() {
        println!("  [{}] = {}", cursor.position(), list.value_at(cursor));
        cursor.advance();
    }

    // Fallible variants report errors instead of panicking.
    match list.try_remove_at(100) {
        Err(Error::IndexOutOfBounds { index, len }) => {
            println!("Cannot remove index {index} from a list of length {len}");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    let copy = list.clone();
    list.clear();

    println!("Original is now empty: {}", list.is_empty());
    println!("Copy still has {} items: {copy:?}", copy.len());
}
