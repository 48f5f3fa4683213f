use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique list IDs.
static LIST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates an ID that no other list in this process has received.
///
/// Cursors remember the ID of the list that minted them, which lets the list reject
/// cursors that belong to some other list when dereferencing or erasing through them.
#[must_use]
pub(crate) fn generate_list_id() -> u64 {
    LIST_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = generate_list_id();
        let b = generate_list_id();
        let c = generate_list_id();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
