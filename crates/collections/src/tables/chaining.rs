use std::cell::Cell;
use std::fmt;

use crate::hash_fn::{self, HashFn};

/// Default resize boundary for separate chaining.
///
/// Chains tolerate a full load factor; the table only grows once
/// every bucket holds one entry on average.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 1.0;

struct Node<V> {
    key: i64,
    value: V,
    next: Option<Box<Node<V>>>,
}

/// Hash table resolving collisions with one owned singly-linked
/// chain per bucket.
///
/// New keys are prepended, so the most recently inserted key in a
/// bucket is found fastest. Growth doubles the bucket array before
/// any insert that would push `count / size` up to the threshold and
/// redistributes every node through the regular insert path.
pub struct HashTableSeparateChaining<V> {
    buckets: Vec<Option<Box<Node<V>>>>,
    count: usize,
    hasher: HashFn,
    load_factor_threshold: f64,
    comparisons: Cell<u64>,
}

impl<V> HashTableSeparateChaining<V> {
    /// Creates a table with the division hash and the default
    /// load-factor threshold.
    pub fn new(size: usize) -> Self {
        Self::with_config(
            size,
            Box::new(hash_fn::division),
            DEFAULT_LOAD_FACTOR_THRESHOLD,
        )
    }

    /// Creates a table with an explicit hash function and threshold.
    pub fn with_config(size: usize, hasher: HashFn, load_factor_threshold: f64) -> Self {
        let size = size.max(1);
        Self {
            buckets: (0..size).map(|_| None).collect(),
            count: 0,
            hasher,
            load_factor_threshold,
            comparisons: Cell::new(0),
        }
    }

    /// Returns the number of buckets.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored entries.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Shorthand for `self.count() == 0`
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Inserts a key-value pair, returning the previous value when the
    /// key was already chained (an in-place update, `count` unchanged).
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        if (self.count + 1) as f64 / self.buckets.len() as f64 >= self.load_factor_threshold {
            self.grow();
        }

        let index = (self.hasher)(key, self.buckets.len());
        let comparisons = &self.comparisons;

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            comparisons.set(comparisons.get() + 1);
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            cursor = node.next.as_deref_mut();
        }

        // not chained yet: new node becomes the bucket head
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node { key, value, next }));
        self.count += 1;
        None
    }

    /// Looks up a key in its bucket's chain.
    pub fn search(&self, key: i64) -> Option<&V> {
        let index = (self.hasher)(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            self.note_comparison();
            if node.key == key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Unlinks a key from its chain. Returns whether a removal happened.
    pub fn delete(&mut self, key: i64) -> bool {
        let index = (self.hasher)(key, self.buckets.len());

        // walk the chain as a cursor over link slots, so unlinking the
        // head and unlinking mid-chain are the same operation
        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut().unwrap().next;
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                self.count -= 1;
                true
            }
            None => false,
        }
    }

    /// Per-bucket chain lengths for clustering analysis.
    ///
    /// The vector always matches the current bucket count, so the sum
    /// of its entries equals `count`.
    pub fn get_chain_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|head| {
                let mut length = 0;
                let mut cursor = head.as_deref();
                while let Some(node) = cursor {
                    length += 1;
                    cursor = node.next.as_deref();
                }
                length
            })
            .collect()
    }

    /// Total key comparisons since construction or the last reset.
    pub fn comparison_count(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn reset_counts(&self) {
        self.comparisons.set(0);
    }

    // [private]

    /// Doubles the bucket array and re-inserts every node through the
    /// regular insert path, which redistributes chains without any
    /// separate rehash bookkeeping.
    fn grow(&mut self) {
        let new_size = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_size).map(|_| None).collect(),
        );
        self.count = 0;

        for mut head in old {
            while let Some(mut node) = head {
                head = node.next.take();
                self.insert(node.key, node.value);
            }
        }
    }

    fn note_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

impl<V> fmt::Debug for HashTableSeparateChaining<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTableSeparateChaining")
            .field("size", &self.buckets.len())
            .field("count", &self.count)
            .field("chain_lengths", &self.get_chain_lengths())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hash_fn;

    #[test]
    fn insert_and_search() {
        let mut t = HashTableSeparateChaining::new(10);
        t.insert(10, "value1");
        t.insert(22, "value2");
        t.insert(31, "value3");

        assert_eq!(t.search(10), Some(&"value1"));
        assert_eq!(t.search(22), Some(&"value2"));
        assert_eq!(t.search(31), Some(&"value3"));
        assert_eq!(t.search(99), None);
    }

    #[test]
    fn update_existing_key_keeps_count() {
        let mut t = HashTableSeparateChaining::new(10);
        assert_eq!(t.insert(10, "value1"), None);
        assert_eq!(t.insert(10, "value2"), Some("value1"));
        assert_eq!(t.count(), 1);
        assert_eq!(t.search(10), Some(&"value2"));
    }

    #[test]
    fn collisions_share_a_bucket() {
        // size 5 keeps the chains long on purpose
        let mut t = HashTableSeparateChaining::with_config(
            5,
            Box::new(hash_fn::division),
            10.0,
        );
        let keys = [10, 15, 20, 25, 30];
        for key in keys {
            t.insert(key, key.to_string());
        }
        for key in keys {
            assert_eq!(t.search(key), Some(&key.to_string()));
        }
        // 10, 15, 20, 25, 30 mod 5 is always 0
        assert_eq!(t.get_chain_lengths()[0], 5);
    }

    #[test]
    fn delete_head_middle_and_missing() {
        let mut t = HashTableSeparateChaining::with_config(
            7,
            Box::new(hash_fn::division),
            10.0,
        );
        // one bucket, head-inserted: chain order is 21, 14, 7
        t.insert(7, "a");
        t.insert(14, "b");
        t.insert(21, "c");

        // head
        assert!(t.delete(21));
        assert_eq!(t.search(21), None);
        // middle (of the remaining 14 -> 7 chain)
        assert!(t.delete(7));
        assert_eq!(t.search(7), None);
        assert_eq!(t.search(14), Some(&"b"));
        assert_eq!(t.count(), 1);

        assert!(!t.delete(99));
        assert_eq!(t.count(), 1);
    }

    #[test]
    fn chain_lengths_track_count_and_size() {
        let mut t = HashTableSeparateChaining::new(5);
        for key in 0..10 {
            t.insert(key, key);
        }

        let lengths = t.get_chain_lengths();
        // the table resized on the way, so the distribution must
        // reflect the current size, not the construction size
        assert_eq!(lengths.len(), t.size());
        assert_eq!(lengths.iter().sum::<usize>(), 10);
        assert!(t.size() > 5);
        assert!(t.load_factor() < 1.0);
    }

    #[test]
    fn load_factor_stays_below_threshold() {
        let mut t = HashTableSeparateChaining::new(5);
        for key in 0..40 {
            t.insert(key, key);
            assert!(t.load_factor() < 1.0, "load factor {} at key {key}", t.load_factor());
        }
    }

    #[test]
    fn resize_preserves_all_entries() {
        let mut t = HashTableSeparateChaining::new(5);
        for key in 0..20 {
            t.insert(key, format!("value{key}"));
        }
        for key in 0..20 {
            assert_eq!(t.search(key), Some(&format!("value{key}")));
        }
        assert_eq!(t.count(), 20);
    }

    #[test]
    fn negative_keys() {
        let mut t = HashTableSeparateChaining::new(7);
        t.insert(-3, "neg");
        t.insert(-10, "neg2");
        assert_eq!(t.search(-3), Some(&"neg"));
        assert_eq!(t.search(-10), Some(&"neg2"));
        assert!(t.delete(-3));
        assert_eq!(t.search(-3), None);
    }

    #[test]
    fn comparison_counter() {
        let mut t = HashTableSeparateChaining::with_config(
            5,
            Box::new(hash_fn::division),
            10.0,
        );
        t.insert(5, "a");
        // walks past 5 before prepending: one comparison
        t.insert(10, "b");
        assert_eq!(t.comparison_count(), 1);

        // chain order is 10 -> 5: two comparisons to reach 5
        t.search(5);
        assert_eq!(t.comparison_count(), 3);

        t.reset_counts();
        assert_eq!(t.comparison_count(), 0);
    }

    #[test]
    fn degenerate_hash_chains_everything_in_bucket_zero() {
        let mut t = HashTableSeparateChaining::with_config(
            10,
            Box::new(hash_fn::bad_clustering),
            20.0,
        );
        for key in 0..15 {
            t.insert(key, key);
        }
        let lengths = t.get_chain_lengths();
        assert_eq!(lengths[0], 15);
        assert!(lengths[1..].iter().all(|&l| l == 0));
        for key in 0..15 {
            assert_eq!(t.search(key), Some(&key));
        }
    }
}
