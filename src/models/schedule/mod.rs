//! In-memory schedule: every category mapped to its ordered entries.

use crate::models::category::Category;
use crate::models::entry::Entry;

/// Entries per category, in insertion order.
///
/// All six categories are always present; a category with nothing scheduled
/// simply holds an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    entries: [Vec<Entry>; 6],
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &[Entry] {
        &self.entries[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.entries(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.entries(category).is_empty()
    }

    /// True when no category holds any entry.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    pub fn total_entries(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// Categories in report order paired with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Entry])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.entries(category)))
    }

    /// Like [`iter`](Self::iter) but skipping empty categories.
    pub fn populated(&self) -> impl Iterator<Item = (Category, &[Entry])> + '_ {
        self.iter().filter(|(_, entries)| !entries.is_empty())
    }

    /// Append an entry to the end of its category.
    pub fn push(&mut self, entry: Entry) -> &Entry {
        let bucket = &mut self.entries[entry.category().index()];
        bucket.push(entry);
        &bucket[bucket.len() - 1]
    }

    pub fn pop(&mut self, category: Category) -> Option<Entry> {
        self.entries[category.index()].pop()
    }

    pub fn clear(&mut self, category: Category) {
        self.entries[category.index()].clear();
    }

    pub fn clear_all(&mut self) {
        self.entries.iter_mut().for_each(Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evangelization(time: &str) -> Entry {
        Entry::new(Category::Evangelization, [time, "Juscimeira", "Robson"]).unwrap()
    }

    #[test]
    fn test_new_store_has_every_category_empty() {
        let store = ScheduleStore::new();
        assert_eq!(store.iter().count(), 6);
        assert!(store.is_blank());
        assert_eq!(store.populated().count(), 0);
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut store = ScheduleStore::new();
        store.push(evangelization("01/05"));
        store.push(evangelization("02/05"));

        let times: Vec<_> = store
            .entries(Category::Evangelization)
            .iter()
            .map(|e| e.value(0).unwrap())
            .collect();
        assert_eq!(times, vec!["01/05", "02/05"]);
        assert_eq!(store.total_entries(), 2);
    }

    #[test]
    fn test_pop_takes_last() {
        let mut store = ScheduleStore::new();
        store.push(evangelization("01/05"));
        store.push(evangelization("02/05"));

        let popped = store.pop(Category::Evangelization).unwrap();
        assert_eq!(popped.value(0), Some("02/05"));
        assert_eq!(store.len(Category::Evangelization), 1);
        assert!(store.pop(Category::Youth).is_none());
    }

    #[test]
    fn test_clear_all_keeps_categories() {
        let mut store = ScheduleStore::new();
        store.push(evangelization("01/05"));
        store.clear_all();
        assert!(store.is_blank());
        assert_eq!(store.iter().count(), 6);
    }
}
