use std::cell::Cell;
use std::fmt;

use thiserror::Error;

use crate::hash_fn::{self, HashFn};

/// Default resize boundary for open addressing.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Raised when an insert exhausts its probe budget.
///
/// The load-factor cap makes this unreachable for linear probing, but
/// quadratic and double-hash sequences are not guaranteed to visit
/// every slot for arbitrary table sizes, so the path stays checked.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("open-addressing table is full (size: {size})")]
pub struct TableFullError {
    pub size: usize,
}

/// Raised when a probe strategy name does not match any known strategy.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown probe type: {0:?}")]
pub struct UnknownProbeTypeError(pub String);

/// Probe sequence strategy for collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeType {
    /// `idx(i) = (h1(k) + i) mod m`
    Linear,
    /// `idx(i) = (h1(k) + i + i^2) mod m`, with `c1 = c2 = 1`
    Quadratic,
    /// `idx(i) = (h1(k) + i * h2(k)) mod m`,
    /// where `h2(k) = 1 + (k mod (m - 1))` so the step is never 0
    Double,
}

impl ProbeType {
    /// Resolves a strategy from its configuration name.
    pub fn from_name(name: &str) -> Result<Self, UnknownProbeTypeError> {
        match name {
            "linear" => Ok(Self::Linear),
            "quadratic" => Ok(Self::Quadratic),
            "double" => Ok(Self::Double),
            other => Err(UnknownProbeTypeError(other.to_string())),
        }
    }
}

/// A slot is never-used, used-then-deleted, or live.
///
/// `Tombstone` is distinct from `Empty` so a probe scan can continue
/// past deleted entries toward keys inserted later in the same chain.
#[derive(Debug)]
enum Slot<V> {
    Empty,
    Tombstone,
    Occupied { key: i64, value: V },
}

/// Hash table resolving collisions by probing within one backing array.
///
/// The table grows (doubling, full rehash) before any insert that
/// would push `count / size` up to the load-factor threshold, so the
/// load factor stays strictly below the threshold after every insert.
///
/// Probe and key-comparison counters accumulate across operations for
/// external analysis; they never affect behavior.
pub struct HashTableOpenAddressing<V> {
    slots: Vec<Slot<V>>,
    count: usize,
    hasher: HashFn,
    probe_type: ProbeType,
    load_factor_threshold: f64,
    probes: Cell<u64>,
    comparisons: Cell<u64>,
}

impl<V> HashTableOpenAddressing<V> {
    /// Creates a table with the division hash, linear probing and the
    /// default load-factor threshold.
    pub fn new(size: usize) -> Self {
        Self::with_config(
            size,
            Box::new(hash_fn::division),
            ProbeType::Linear,
            DEFAULT_LOAD_FACTOR_THRESHOLD,
        )
    }

    /// Creates a table with an explicit hash function, probe strategy
    /// and load-factor threshold.
    pub fn with_config(
        size: usize,
        hasher: HashFn,
        probe_type: ProbeType,
        load_factor_threshold: f64,
    ) -> Self {
        let size = size.max(1);
        Self {
            slots: (0..size).map(|_| Slot::Empty).collect(),
            count: 0,
            hasher,
            probe_type,
            load_factor_threshold,
            probes: Cell::new(0),
            comparisons: Cell::new(0),
        }
    }

    /// Returns the number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Shorthand for `self.count() == 0`
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.slots.len() as f64
    }

    /// Inserts a key-value pair, returning the previous value when the
    /// key was already present (an in-place update, `count` unchanged).
    pub fn insert(&mut self, key: i64, value: V) -> Result<Option<V>, TableFullError> {
        if (self.count + 1) as f64 / self.slots.len() as f64 >= self.load_factor_threshold {
            self.grow()?;
        }

        let size = self.slots.len();
        for i in 0..size {
            let index = self.probe_at(key, i);
            self.note_probe();

            match &mut self.slots[index] {
                slot @ (Slot::Empty | Slot::Tombstone) => {
                    *slot = Slot::Occupied { key, value };
                    self.count += 1;
                    return Ok(None);
                }
                Slot::Occupied { key: found, value: stored } => {
                    // not note_comparison(): the slot borrow is still held
                    self.comparisons.set(self.comparisons.get() + 1);
                    if *found == key {
                        return Ok(Some(std::mem::replace(stored, value)));
                    }
                }
            }
        }

        Err(TableFullError { size })
    }

    /// Looks up a key along its probe sequence.
    ///
    /// The scan stops at the first `Empty` slot; tombstones are
    /// skipped over, since the key may live further down the chain.
    pub fn search(&self, key: i64) -> Option<&V> {
        for i in 0..self.slots.len() {
            let index = self.probe_at(key, i);
            self.note_probe();

            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: found, value } => {
                    self.note_comparison();
                    if *found == key {
                        return Some(value);
                    }
                }
                Slot::Tombstone => self.note_comparison(),
            }
        }
        None
    }

    /// Deletes a key, leaving a tombstone in its slot.
    /// Returns whether a removal happened.
    pub fn delete(&mut self, key: i64) -> bool {
        for i in 0..self.slots.len() {
            let index = self.probe_at(key, i);
            self.note_probe();

            match &self.slots[index] {
                Slot::Empty => return false,
                Slot::Occupied { key: found, .. } => {
                    self.note_comparison();
                    if *found == key {
                        self.slots[index] = Slot::Tombstone;
                        self.count -= 1;
                        return true;
                    }
                }
                Slot::Tombstone => self.note_comparison(),
            }
        }
        false
    }

    /// Total probe steps since construction or the last reset.
    pub fn probe_count(&self) -> u64 {
        self.probes.get()
    }

    /// Total key comparisons since construction or the last reset.
    pub fn comparison_count(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn reset_counts(&self) {
        self.probes.set(0);
        self.comparisons.set(0);
    }

    // [private]

    fn probe_at(&self, key: i64, i: usize) -> usize {
        let m = self.slots.len();
        let h1 = (self.hasher)(key, m) as u128;
        let i = i as u128;
        let index = match self.probe_type {
            ProbeType::Linear => (h1 + i) % m as u128,
            ProbeType::Quadratic => (h1 + i + i * i) % m as u128,
            ProbeType::Double => {
                let h2 = if m > 1 {
                    1 + key.rem_euclid((m - 1) as i64) as u128
                } else {
                    1
                };
                (h1 + i * h2) % m as u128
            }
        };
        index as usize
    }

    /// Doubles the slot array and rehashes every live entry through
    /// the regular insert path. Tombstones are dropped on the floor.
    /// Entries fit by construction, so the rehash inserts cannot
    /// trigger a further grow.
    fn grow(&mut self) -> Result<(), TableFullError> {
        let new_size = self.slots.len() * 2;
        let old = std::mem::replace(
            &mut self.slots,
            (0..new_size).map(|_| Slot::Empty).collect(),
        );
        self.count = 0;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.insert(key, value)?;
            }
        }
        Ok(())
    }

    fn note_probe(&self) {
        self.probes.set(self.probes.get() + 1);
    }

    fn note_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

impl<V> fmt::Debug for HashTableOpenAddressing<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTableOpenAddressing")
            .field("size", &self.slots.len())
            .field("count", &self.count)
            .field("probe_type", &self.probe_type)
            .field("load_factor_threshold", &self.load_factor_threshold)
            .finish_non_exhaustive()
    }
}
