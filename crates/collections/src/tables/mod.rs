mod chaining;
mod direct_address;
mod open_addressing;

pub use chaining::HashTableSeparateChaining;
pub use direct_address::{DirectAddressTable, KeyOutOfRangeError};
pub use open_addressing::{
    HashTableOpenAddressing, ProbeType, TableFullError, UnknownProbeTypeError,
};
