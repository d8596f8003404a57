use std::fmt::Display;
use std::sync::RwLock;

/// A record type with a primary key.
pub trait Keyed {
    type Key: PartialEq + Clone + Display;

    fn key(&self) -> Self::Key;
}

/// In-memory keyed record store.
///
/// Backed by a `Vec` rather than a map because list endpoints and positional
/// merging both depend on stable insertion order. Key uniqueness is enforced
/// by `insert` and `replace`. All access goes through one `RwLock`, so
/// concurrent handlers never observe a half-applied mutation.
pub struct MemStore<T: Keyed> {
    records: RwLock<Vec<T>>,
}

/// Why a `replace` did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceError {
    /// No record at the given key.
    Missing,
    /// The incoming record changes the key to one another record already has.
    DuplicateKey,
}

impl<T: Keyed + Clone> MemStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: RwLock::new(seed),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// First record whose key matches.
    pub fn find(&self, key: &T::Key) -> Option<T> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.key() == *key)
            .cloned()
    }

    /// Append a record. Returns `false` (store unchanged) when the key is
    /// already present.
    pub fn insert(&self, record: T) -> bool {
        let mut records = self.records.write().unwrap();
        if records.iter().any(|r| r.key() == record.key()) {
            return false;
        }
        records.push(record);
        true
    }

    /// Wholesale replace of the record at `key`, keeping its position.
    ///
    /// The incoming record may carry a different key; the change is rejected
    /// when that key already belongs to another record, so the store never
    /// holds two records with one key.
    pub fn replace(&self, key: &T::Key, record: T) -> Result<(), ReplaceError> {
        let mut records = self.records.write().unwrap();
        let index = records
            .iter()
            .position(|r| r.key() == *key)
            .ok_or(ReplaceError::Missing)?;

        if record.key() != *key && records.iter().any(|r| r.key() == record.key()) {
            return Err(ReplaceError::DuplicateKey);
        }

        records[index] = record;
        Ok(())
    }

    /// Remove the record at `key`. Returns `false` when the key does not
    /// exist.
    pub fn delete(&self, key: &T::Key) -> bool {
        let mut records = self.records.write().unwrap();
        match records.iter().position(|r| r.key() == *key) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: i64,
    }

    impl Keyed for Item {
        type Key = String;

        fn key(&self) -> String {
            self.id.clone()
        }
    }

    fn item(id: &str, value: i64) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn insert_preserves_order() {
        let store = MemStore::new(vec![item("a", 1)]);
        assert!(store.insert(item("b", 2)));
        assert!(store.insert(item("c", 3)));

        let ids: Vec<String> = store.list_all().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_rejects_duplicate_key_and_leaves_store_unchanged() {
        let store = MemStore::new(vec![item("a", 1)]);
        assert!(!store.insert(item("a", 99)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find(&"a".to_string()).unwrap().value, 1);
    }

    #[test]
    fn find_returns_first_match() {
        let store = MemStore::new(vec![item("a", 1), item("b", 2)]);
        assert_eq!(store.find(&"b".to_string()).unwrap().value, 2);
        assert!(store.find(&"z".to_string()).is_none());
    }

    #[test]
    fn replace_keeps_position() {
        let store = MemStore::new(vec![item("a", 1), item("b", 2), item("c", 3)]);
        assert_eq!(store.replace(&"b".to_string(), item("b", 20)), Ok(()));

        let all = store.list_all();
        assert_eq!(all[1], item("b", 20));
        assert_eq!(
            store.replace(&"z".to_string(), item("z", 0)),
            Err(ReplaceError::Missing)
        );
    }

    #[test]
    fn replace_rejects_key_change_onto_existing_key() {
        let store = MemStore::new(vec![item("a", 1), item("b", 2)]);
        assert_eq!(
            store.replace(&"a".to_string(), item("b", 99)),
            Err(ReplaceError::DuplicateKey)
        );
        // store untouched
        assert_eq!(store.find(&"a".to_string()).unwrap().value, 1);
        assert_eq!(store.find(&"b".to_string()).unwrap().value, 2);

        // key change onto a fresh key is a plain replace
        assert_eq!(store.replace(&"a".to_string(), item("d", 4)), Ok(()));
        assert!(store.find(&"a".to_string()).is_none());
        assert_eq!(store.list_all()[0], item("d", 4));
    }

    #[test]
    fn delete_then_find_is_none() {
        let store = MemStore::new(vec![item("a", 1), item("b", 2)]);
        assert!(store.delete(&"a".to_string()));
        assert!(store.find(&"a".to_string()).is_none());
        assert_eq!(store.len(), 1);
        assert!(!store.delete(&"a".to_string()));
    }
}
