use std::collections::HashMap;

/// Occurrence counter that remembers the order in which keys were first seen,
/// so that rankings can break ties by encounter order.
#[derive(Debug, Default)]
pub(crate) struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), 1));
            }
        }
    }

    /// Entries in first-encounter order.
    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }

    /// The `limit` most frequent keys, highest count first. Equal counts keep
    /// their first-encounter order.
    pub fn into_top(self, limit: usize) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}
