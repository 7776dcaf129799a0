//! Guided tour of the table implementations: the bounded
//! direct-address baseline, open addressing under each probe
//! strategy, separate chaining, and a quick look at how the string
//! hash functions spread (or fail to spread) their inputs.

use collections::hash_fn;
use collections::{
    DirectAddressTable, HashTableOpenAddressing, HashTableSeparateChaining, ProbeType,
};
use log::debug;

const DEMO_KEYS: [i64; 9] = [10, 22, 31, 4, 15, 28, 17, 88, 59];

fn main() {
    env_logger::builder().init();

    demo_direct_address();
    demo_open_addressing();
    demo_separate_chaining();
    demo_string_hashes();
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn demo_direct_address() {
    banner("Direct-Address Table");

    let mut table = DirectAddressTable::new(100);
    table.insert(5, "Alice").unwrap();
    table.insert(42, "Bob").unwrap();
    table.insert(99, "Charlie").unwrap();

    println!("\nInserted key-value pairs:");
    for key in [5, 42, 99] {
        println!("  Key {key} -> {:?}", table.search(key));
    }

    println!("\nSearching for key 10: {:?}", table.search(10));
    println!("Inserting key 100: {:?}", table.insert(100, "Dave"));

    table.delete(42);
    println!("\nAfter deleting key 42: {:?}", table.search(42));
    println!();
}

fn demo_open_addressing() {
    banner("Open Addressing");

    for (label, probe_type, size) in [
        ("Linear Probing", ProbeType::Linear, 10),
        ("Quadratic Probing", ProbeType::Quadratic, 20),
        ("Double Hashing", ProbeType::Double, 20),
    ] {
        println!("\n--- {label} ---");
        let mut table = HashTableOpenAddressing::with_config(
            size,
            Box::new(hash_fn::division),
            probe_type,
            0.75,
        );

        for key in DEMO_KEYS {
            let value = format!("Value_{key}");
            debug!("inserting {key}");
            if let Err(e) = table.insert(key, value) {
                println!("  insert failed: {e}");
            }
        }

        println!("Inserted {} keys into initial size {size}", DEMO_KEYS.len());
        println!("Table size now: {}", table.size());
        println!("Load factor: {:.2}", table.load_factor());
        println!(
            "Probes: {}, comparisons: {}",
            table.probe_count(),
            table.comparison_count()
        );

        println!("Searching:");
        for key in [10, 22, 88, 99] {
            let found = if table.search(key).is_some() {
                "Found"
            } else {
                "Not found"
            };
            println!("  Key {key}: {found}");
        }
    }
    println!();
}

fn demo_separate_chaining() {
    banner("Separate Chaining");

    let mut table = HashTableSeparateChaining::new(10);
    for key in DEMO_KEYS.iter().chain(&[71]) {
        table.insert(*key, format!("Value_{key}"));
    }

    println!("\nInserted {} keys", table.count());
    println!("Load factor: {:.2}", table.load_factor());

    let lengths = table.get_chain_lengths();
    let max = lengths.iter().max().copied().unwrap_or(0);
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    println!("Chain lengths: {lengths:?}");
    println!("Average chain length: {avg:.2}");
    println!("Maximum chain length: {max}");

    println!("\nSearching:");
    for key in [10, 22, 88, 99] {
        let found = if table.search(key).is_some() {
            "Found"
        } else {
            "Not found"
        };
        println!("  Key {key}: {found}");
    }
    println!();
}

fn demo_string_hashes() {
    banner("String Hash Functions");

    let words = ["listen", "silent", "hello", "world", "hash", "table"];
    let table_size = 16;

    println!("\nBucket indices (table size {table_size}):");
    println!(
        "{:>10} {:>8} {:>12} {:>8} {:>8}",
        "word", "simple", "polynomial", "djb2", "digest"
    );
    for word in words {
        println!(
            "{:>10} {:>8} {:>12} {:>8} {:>8}",
            word,
            hash_fn::string_simple(word, table_size),
            hash_fn::string_polynomial(word, table_size),
            hash_fn::string_djb2(word, table_size),
            hash_fn::digest(word, table_size),
        );
    }
    println!("\nNote how the simple sum sends the anagrams \"listen\" and");
    println!("\"silent\" to the same bucket, while the others separate them.");

    println!("\nDegenerate clustering hash over keys 0..10:");
    let indices: Vec<usize> = (0..10).map(|k| hash_fn::bad_clustering(k, 10)).collect();
    println!("  {indices:?}  (every key lands in bucket 0)");
}
