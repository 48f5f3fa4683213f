//! End-to-end usage scenarios of `PtrList`, separate from the main crate
//! just to prove that they do not depend on accessing any private APIs.

use ptr_list::{Cursor, Error, PtrList};

fn sum_via_cursors(list: &PtrList<i32>) -> i32 {
    let mut sum = 0;
    let mut cursor: Cursor = list.begin();

    while cursor != list.end() {
        sum += *list.value_at(cursor);
        cursor += 1;
    }

    sum
}

#[test]
fn sized_and_resized() {
    let mut list = PtrList::<i32>::with_len(5);
    assert_eq!(list.len(), 5);
    assert!(list.capacity() >= 5);

    list.resize(10);
    assert_eq!(list.len(), 10);
    assert!(list.capacity() >= 10);

    let capacity = list.capacity();
    list.reserve(10);
    assert_eq!(list.len(), 10);
    assert!(list.capacity() >= capacity + 10);

    list.resize(0);
    assert_eq!(list.len(), 0);
    assert!(list.capacity() >= capacity + 10);
}

#[test]
fn adding_items() {
    let mut list = PtrList::new();
    list.reserve(10);

    for value in [4, 45, 23, 73, 77] {
        list.push_back(value);
    }

    assert_eq!(list.len(), 5);
    assert!(list.capacity() >= 10);
    assert_eq!(list[0], 4);
    assert_eq!(list[1], 45);
    assert_eq!(list[2], 23);
    assert_eq!(list[3], 73);
    assert_eq!(list[4], 77);
    assert_eq!(list.iter().sum::<i32>(), 222);
    assert_eq!(sum_via_cursors(&list), 222);

    list.insert(2, 88);

    assert_eq!(list.len(), 6);
    assert_eq!(list[2], 88);
    assert_eq!(list[3], 23);
    assert_eq!(list.iter().sum::<i32>(), 310);
    assert_eq!(sum_via_cursors(&list), 310);

    assert!(list.contains(&88));
    assert_eq!(list.index_of(&88), Some(2));
    assert_eq!(list.find(&88), list.begin() + 2);
    assert!(!list.contains(&1000));
    assert_eq!(list.index_of(&1000), None);
    assert_eq!(list.find(&1000), list.end());

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn removing_items() {
    let mut list = PtrList::from([4, 45, 23, 73, 77]);

    assert_eq!(list.pop_back(), Some(77));
    assert_eq!(list.len(), 4);
    assert_eq!(*list.back(), 73);

    assert_eq!(list.pop_front(), Some(4));
    assert_eq!(list.len(), 3);
    assert_eq!(*list.front(), 45);

    assert_eq!(list.remove_at(1), 23);
    assert_eq!(list, [45, 73]);

    list.erase(list.begin() + 1);
    assert_eq!(list, [45]);

    list.extend([4, 23, 73, 77, 88, 99, 111]);
    list.remove_range(1, 4);
    assert_eq!(list, [45, 88, 99, 111]);

    list.clear();
    list.extend([45, 4, 88, 45, 23, 73, 77]);
    let next = list.erase_range(list.begin() + 3, list.begin() + 5);
    assert_eq!(list, [45, 4, 88, 73, 77]);
    assert_eq!(*list.value_at(next), 73);

    assert!(list.remove_one(&88));
    assert_eq!(list, [45, 4, 73, 77]);

    list.insert(1, 88);
    list.push_back(88);
    assert_eq!(list.remove_all(&88), 2);
    assert_eq!(list, [45, 4, 73, 77]);

    list.clear();
    assert!(list.is_empty());

    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.try_remove_at(0), Err(Error::Empty));
}

#[test]
fn moving_swapping_and_copying() {
    let mut list = PtrList::from([4, 45, 23, 73, 77]);

    list.move_item(3, 1);
    assert_eq!(list, [4, 73, 45, 23, 77]);

    list.swap(0, 2);
    assert_eq!(list, [45, 73, 4, 23, 77]);

    let copy = list.clone();
    assert_eq!(copy, list);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(copy, [45, 73, 4, 23, 77]);

    let mut other = PtrList::from([1]);
    other.append_list(&copy);
    assert_eq!(other, [1, 45, 73, 4, 23, 77]);
}

#[test]
fn pointers_survive_growth() {
    let mut list = PtrList::new();
    list.push_back(String::from("first"));

    let ptr = list.element_ptr(0);

    // Force the slot array to be reallocated several times.
    for index in 0..1000 {
        list.push_front(index.to_string());
    }

    assert_eq!(list.element_ptr(1000), ptr);
    assert_eq!(list[1000], "first");
}
