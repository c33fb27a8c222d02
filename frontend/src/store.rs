//! Client-visible entity collections.

/// Ordered, append-only collection backing a list view.
///
/// Entries are value copies appended optimistically; there is no
/// deduplication and a locally appended copy is never swapped for the
/// server-assigned record. A page reload rebuilds the list from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T> {
    items: Vec<T>,
}

impl<T> ListStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a copy to the end of the sequence.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = ListStore::new();
        store.append("CS101");
        store.append("CS102");
        store.append("CS103");

        let titles: Vec<_> = store.iter().copied().collect();
        assert_eq!(titles, vec!["CS101", "CS102", "CS103"]);
    }

    #[test]
    fn appending_the_same_entry_twice_keeps_both() {
        let mut store = ListStore::new();
        store.append("CS101");
        store.append("CS101");

        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|entry| *entry == "CS101"));
    }

    #[test]
    fn new_store_is_empty() {
        let store: ListStore<String> = ListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
