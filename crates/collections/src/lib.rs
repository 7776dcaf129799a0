//! Hash-table collision-resolution lab.
//!
//! Three table families built on a shared library of key hash
//! functions: a direct-address table for bounded integer keys, open
//! addressing with linear/quadratic/double-hash probing, and separate
//! chaining. The probing and chaining tables carry probe and
//! key-comparison counters so callers can measure how the hash
//! function and resolution strategy behave under load.

pub mod hash_fn;
pub mod tables;

pub use hash_fn::{HashFn, StrHashFn, get_hash_function, get_string_hash_function};
pub use tables::{
    DirectAddressTable, HashTableOpenAddressing, HashTableSeparateChaining, KeyOutOfRangeError,
    ProbeType, TableFullError, UnknownProbeTypeError,
};
