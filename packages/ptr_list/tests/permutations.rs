//! Property tests checking that reordering and removal operations behave like the
//! equivalent operations on a `Vec`.

use proptest::prelude::*;
use ptr_list::PtrList;

fn small_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..8, 0..40)
}

fn non_empty_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..8, 1..40)
}

proptest! {
    #[test]
    fn swap_is_self_inverse(
        values in non_empty_values(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let a = a.index(values.len());
        let b = b.index(values.len());

        let mut list = PtrList::from(values.clone());
        list.swap(a, b);
        list.swap(a, b);

        prop_assert_eq!(&list, values.as_slice());
    }

    #[test]
    fn move_item_matches_vec(
        values in non_empty_values(),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        let from = from.index(values.len());
        let to = to.index(values.len());

        let mut expected = values.clone();
        let item = expected.remove(from);
        expected.insert(to, item);

        let mut list = PtrList::from(values.clone());
        list.move_item(from, to);
        prop_assert_eq!(&list, expected.as_slice());

        // Moving back restores the original order.
        list.move_item(to, from);
        prop_assert_eq!(&list, values.as_slice());
    }

    #[test]
    fn insert_then_remove_at_is_identity(
        values in small_values(),
        at in 0_usize..50,
        value in any::<u8>(),
    ) {
        let mut list = PtrList::from(values.clone());
        list.insert(at, value);

        let index = at.min(values.len());
        prop_assert_eq!(list[index], value);
        prop_assert_eq!(list.len(), values.len() + 1);

        prop_assert_eq!(list.remove_at(index), value);
        prop_assert_eq!(&list, values.as_slice());
    }

    #[test]
    fn remove_range_matches_vec_drain(
        values in non_empty_values(),
        start in any::<prop::sample::Index>(),
        count in 0_usize..40,
    ) {
        let start = start.index(values.len());
        let count = count.min(values.len() - start);

        let mut expected = values.clone();
        expected.drain(start..start + count);

        let mut list = PtrList::from(values);
        list.remove_range(start, count);

        prop_assert_eq!(&list, expected.as_slice());
    }

    #[test]
    fn remove_all_matches_retain(values in small_values(), target in 0_u8..8) {
        let mut expected = values.clone();
        expected.retain(|value| *value != target);

        let mut list = PtrList::from(values.clone());
        let removed = list.remove_all(&target);

        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(&list, expected.as_slice());
    }

    #[test]
    fn remove_one_removes_first_match(values in small_values(), target in 0_u8..8) {
        let mut expected = values.clone();
        let position = expected.iter().position(|value| *value == target);
        if let Some(position) = position {
            expected.remove(position);
        }

        let mut list = PtrList::from(values);
        prop_assert_eq!(list.remove_one(&target), position.is_some());
        prop_assert_eq!(&list, expected.as_slice());
    }

    #[test]
    fn clone_is_independent(
        values in non_empty_values(),
        index in any::<prop::sample::Index>(),
    ) {
        let index = index.index(values.len());

        let original = PtrList::from(values.clone());
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy[index] = copy[index].wrapping_add(1);
        copy.remove_at(0);

        prop_assert_eq!(&original, values.as_slice());
    }

    #[test]
    fn element_pointers_track_items(
        values in non_empty_values(),
        ops in prop::collection::vec((0_usize..40, 0_usize..40), 0..20),
    ) {
        let mut list = PtrList::from(values);
        let pointers: Vec<_> = (0..list.len()).map(|index| list.element_ptr(index)).collect();

        for (a, b) in ops {
            let a = a % list.len();
            let b = b % list.len();

            if a % 2 == 0 {
                list.swap(a, b);
            } else {
                list.move_item(a, b);
            }
        }

        // The same set of items is still present at the same addresses, in some order.
        let mut before = pointers;
        let mut after: Vec<_> = (0..list.len()).map(|index| list.element_ptr(index)).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
