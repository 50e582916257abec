use std::collections::HashMap;

use crate::parser::Record;

/// Fold a key for case-insensitive comparison
pub(crate) fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

/// Records of one type in file order, indexed by case-folded key
#[derive(Debug, Clone)]
pub struct Table<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Append a record. Returns `false` when its key was already present;
    /// the record is still stored but lookups keep returning the first one.
    pub fn push(&mut self, record: T) -> bool {
        let key = fold_key(record.key());
        let position = self.records.len();
        self.records.push(record);

        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, position);
        true
    }

    /// Case-insensitive exact-match lookup
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index
            .get(&fold_key(key))
            .and_then(|&idx| self.records.get(idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
