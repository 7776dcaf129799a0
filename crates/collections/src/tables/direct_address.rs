use thiserror::Error;

/// Raised when a key misses the table's fixed key domain on insert.
///
/// Lookups and deletes treat out-of-range keys as plain misses instead.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("key {key} out of range [0, {size})")]
pub struct KeyOutOfRangeError {
    pub key: i64,
    pub size: usize,
}

/// Direct-address table over a bounded integer key domain.
///
/// Keys index the backing array directly, so every operation is O(1),
/// but valid keys must satisfy `0 <= key < size`. There is no hashing
/// and no resizing; this is the baseline the hashed tables compare to.
#[derive(Debug)]
pub struct DirectAddressTable<V> {
    slots: Vec<Option<V>>,
}

impl<V> DirectAddressTable<V> {
    /// Creates a table accepting keys in `[0, size)`.
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| None).collect(),
        }
    }

    /// Returns the size of the key domain.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Stores `value` at index `key`, returning the displaced value.
    ///
    /// Out-of-range keys are a contract violation and fail loudly.
    pub fn insert(&mut self, key: i64, value: V) -> Result<Option<V>, KeyOutOfRangeError> {
        match self.index_of(key) {
            Some(i) => Ok(self.slots[i].replace(value)),
            None => Err(KeyOutOfRangeError {
                key,
                size: self.size(),
            }),
        }
    }

    /// Looks up `key`; out-of-range keys are silently "not found".
    pub fn search(&self, key: i64) -> Option<&V> {
        self.slots.get(self.index_of(key)?)?.as_ref()
    }

    /// Clears the slot for `key` and returns what was stored there.
    /// Out-of-range deletes are no-ops.
    pub fn delete(&mut self, key: i64) -> Option<V> {
        let i = self.index_of(key)?;
        self.slots[i].take()
    }

    // [private]

    fn index_of(&self, key: i64) -> Option<usize> {
        usize::try_from(key).ok().filter(|&i| i < self.slots.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_search() {
        let mut table = DirectAddressTable::new(100);
        table.insert(5, "Alice").unwrap();
        table.insert(42, "Bob").unwrap();

        assert_eq!(table.search(5), Some(&"Alice"));
        assert_eq!(table.search(42), Some(&"Bob"));
        assert_eq!(table.search(10), None);
    }

    #[test]
    fn insert_returns_displaced_value() {
        let mut table = DirectAddressTable::new(10);
        assert_eq!(table.insert(3, "old"), Ok(None));
        assert_eq!(table.insert(3, "new"), Ok(Some("old")));
        assert_eq!(table.search(3), Some(&"new"));
    }

    #[test]
    fn delete() {
        let mut table = DirectAddressTable::new(100);
        table.insert(5, "value").unwrap();

        assert_eq!(table.delete(5), Some("value"));
        assert_eq!(table.search(5), None);
        // deleting again is a miss, not an error
        assert_eq!(table.delete(5), None);
    }

    #[test]
    fn out_of_range_keys() {
        let mut table = DirectAddressTable::new(100);

        let err = table.insert(100, "value").unwrap_err();
        assert_eq!(err, KeyOutOfRangeError { key: 100, size: 100 });
        assert!(table.insert(-1, "value").is_err());

        // search and delete stay silent out of range
        assert_eq!(table.search(100), None);
        assert_eq!(table.search(-1), None);
        assert_eq!(table.delete(100), None);
        assert_eq!(table.delete(-1), None);
    }
}
