//! Benchmark driver: times insert/search/delete batches against open
//! addressing (all three probe strategies) and separate chaining,
//! aggregates repeated runs, and profiles the hash functions
//! themselves for speed and distribution quality.
//!
//! Timings go to stdout; progress goes through the logger.

use std::time::Duration;

use collections::hash_fn::{self, HashFn};
use collections::{HashTableOpenAddressing, HashTableSeparateChaining, ProbeType};
use hashlab::{generate_test_data, stats, time};
use log::info;

const SIZES: [usize; 3] = [1_000, 5_000, 10_000];
const NUM_RUNS: usize = 5;

fn main() {
    env_logger::builder().init();

    bench_open_addressing_vs_chaining();
    bench_hash_functions();
}

struct RunTimes {
    insert: Duration,
    search: Duration,
    delete: Duration,
}

fn report(label: &str, runs: &[RunTimes]) {
    let summarize = |pick: fn(&RunTimes) -> Duration| {
        let samples: Vec<f64> = runs.iter().map(|r| pick(r).as_secs_f64() * 1e3).collect();
        (stats::mean(&samples), stats::std_dev(&samples))
    };
    let (ins_mean, ins_dev) = summarize(|r| r.insert);
    let (sea_mean, sea_dev) = summarize(|r| r.search);
    let (del_mean, del_dev) = summarize(|r| r.delete);

    println!(
        "{label:<28} insert {ins_mean:8.3} ms (±{ins_dev:.3})  \
         search {sea_mean:8.3} ms (±{sea_dev:.3})  \
         delete {del_mean:8.3} ms (±{del_dev:.3})"
    );
}

fn bench_open_addressing_vs_chaining() {
    println!("== Open addressing vs separate chaining ==");

    for size in SIZES {
        let keys = generate_test_data(size, None);
        let search_keys = &keys[..size / 2];
        let delete_keys = &keys[..size / 4];
        // start comfortably below the resize boundary
        let table_size = size * 3 / 2;
        println!("\n-- {size} keys, initial table size {table_size} --");

        for probe_type in [ProbeType::Linear, ProbeType::Quadratic, ProbeType::Double] {
            info!("open addressing, {probe_type:?}, {size} keys");
            let mut runs = Vec::with_capacity(NUM_RUNS);
            let mut counters = (0, 0);

            for _ in 0..NUM_RUNS {
                let mut table = HashTableOpenAddressing::with_config(
                    table_size,
                    Box::new(hash_fn::division),
                    probe_type,
                    0.75,
                );
                runs.push(drive(&mut table, &keys, search_keys, delete_keys));
                counters = (table.probe_count(), table.comparison_count());
            }

            report(&format!("open addressing / {probe_type:?}"), &runs);
            println!(
                "{:<28} probes {} comparisons {}",
                "", counters.0, counters.1
            );
        }

        info!("separate chaining, {size} keys");
        let mut runs = Vec::with_capacity(NUM_RUNS);
        let mut longest_chain = 0;
        for _ in 0..NUM_RUNS {
            let mut table = HashTableSeparateChaining::new(table_size);
            runs.push(drive_chained(&mut table, &keys, search_keys, delete_keys));
            longest_chain = table.get_chain_lengths().into_iter().max().unwrap_or(0);
        }
        report("separate chaining", &runs);
        println!("{:<28} longest chain {longest_chain}", "");
    }
}

fn drive(
    table: &mut HashTableOpenAddressing<i64>,
    keys: &[i64],
    search_keys: &[i64],
    delete_keys: &[i64],
) -> RunTimes {
    let (insert, _) = time(|| {
        for &key in keys {
            table
                .insert(key, key)
                .expect("bench tables stay under the load-factor cap");
        }
    });
    let (search, found) = time(|| {
        search_keys
            .iter()
            .filter(|&&key| table.search(key).is_some())
            .count()
    });
    assert_eq!(found, search_keys.len());
    let (delete, _) = time(|| {
        delete_keys
            .iter()
            .filter(|&&key| table.delete(key))
            .count()
    });
    RunTimes { insert, search, delete }
}

fn drive_chained(
    table: &mut HashTableSeparateChaining<i64>,
    keys: &[i64],
    search_keys: &[i64],
    delete_keys: &[i64],
) -> RunTimes {
    let (insert, _) = time(|| {
        for &key in keys {
            table.insert(key, key);
        }
    });
    let (search, found) = time(|| {
        search_keys
            .iter()
            .filter(|&&key| table.search(key).is_some())
            .count()
    });
    assert_eq!(found, search_keys.len());
    let (delete, _) = time(|| {
        delete_keys
            .iter()
            .filter(|&&key| table.delete(key))
            .count()
    });
    RunTimes { insert, search, delete }
}

/// How evenly a hash function fills `table_size` buckets with `keys`,
/// plus how long the hashing itself took.
struct Distribution {
    elapsed: Duration,
    collisions: usize,
    buckets_used: usize,
    max_bucket: usize,
    variance: f64,
}

fn measure(keys: &[i64], table_size: usize, hash: &HashFn) -> Distribution {
    let (elapsed, indices) = time(|| {
        keys.iter()
            .map(|&key| hash(key, table_size))
            .collect::<Vec<usize>>()
    });

    let mut bucket_counts = vec![0usize; table_size];
    for index in indices {
        bucket_counts[index] += 1;
    }

    let used: Vec<usize> = bucket_counts.into_iter().filter(|&c| c > 0).collect();
    let buckets_used = used.len();
    let collisions = keys.len() - buckets_used;
    let max_bucket = used.iter().max().copied().unwrap_or(0);
    let sizes: Vec<f64> = used.iter().map(|&c| c as f64).collect();
    let dev = stats::std_dev(&sizes);

    Distribution {
        elapsed,
        collisions,
        buckets_used,
        max_bucket,
        variance: dev * dev,
    }
}

fn bench_hash_functions() {
    println!("\n== Hash function distribution ==");

    let keys = generate_test_data(10_000, None);
    let table_size = 1_000;

    for name in ["division", "multiplication", "bad_clustering"] {
        info!("hashing 10k keys with {name}");
        let hash = hash_fn::get_hash_function(name);
        let d = measure(&keys, table_size, &hash);
        println!(
            "{name:<16} {:8.3} ms  collisions {:5}  buckets used {:4}/{table_size}  \
             max bucket {:5}  variance {:10.2}",
            d.elapsed.as_secs_f64() * 1e3,
            d.collisions,
            d.buckets_used,
            d.max_bucket,
            d.variance,
        );
    }

    println!("\n== String hash distribution ==");
    let words: Vec<String> = keys.iter().map(|k| format!("key_{k}")).collect();
    for name in ["string_simple", "string_polynomial", "string_djb2", "digest"] {
        info!("hashing 10k strings with {name}");
        let hash = hash_fn::get_string_hash_function(name);
        let (elapsed, indices) = time(|| {
            words
                .iter()
                .map(|w| hash(w, table_size))
                .collect::<Vec<usize>>()
        });

        let mut bucket_counts = vec![0usize; table_size];
        for index in indices {
            bucket_counts[index] += 1;
        }
        let buckets_used = bucket_counts.iter().filter(|&&c| c > 0).count();
        let max_bucket = bucket_counts.into_iter().max().unwrap_or(0);
        println!(
            "{name:<20} {:8.3} ms  buckets used {buckets_used:4}/{table_size}  max bucket {max_bucket:5}",
            elapsed.as_secs_f64() * 1e3,
        );
    }
}
