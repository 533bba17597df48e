use crate::tables::FrequencyTable;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

/// Baseline table backed by the standard library `HashMap`.
pub struct StdTable<S: BuildHasher + Default = RandomState> {
    visits: HashMap<String, u64, S>,
}

impl<S: BuildHasher + Default> StdTable<S> {
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.visits.get(key).copied()
    }
}

impl<S: BuildHasher + Default> FrequencyTable for StdTable<S> {
    fn new(_size: usize) -> Self {
        StdTable {
            visits: HashMap::with_hasher(S::default()),
        }
    }

    fn insert_or_increment(&mut self, key: &str) {
        // Avoid allocating a fresh String for keys already present.
        if let Some(count) = self.visits.get_mut(key) {
            *count += 1;
            return;
        }
        self.visits.insert(key.to_owned(), 1);
    }

    fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.visits.iter().map(|(key, &count)| (key.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xxhash_rust::xxh64::Xxh64Builder;

    #[test]
    fn test_counts_match_insert_calls() {
        let mut table: StdTable<Xxh64Builder> = StdTable::new(0);
        for key in ["/a", "/b", "/a", "/a"] {
            table.insert_or_increment(key);
        }

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("/a"), Some(3));
        assert_eq!(table.get("/b"), Some(1));
        assert_eq!(table.get("/c"), None);
    }

    #[test]
    fn test_empty_table() {
        let table: StdTable = StdTable::new(0);
        assert!(table.is_empty());
        assert_eq!(table.entries().count(), 0);
    }
}
