//! Key hash functions, good and deliberately bad ones alike,
//! used to compare how hash function design drives table behavior.
//!
//! Every function here is a pure mapping
//! `(key, table_size[, params]) -> index` with the index guaranteed
//! to be in `[0, table_size)` for any `table_size > 0`.

use sha2::{Digest, Sha256};

/// Fractional part of the golden ratio, Knuth's suggested multiplier.
pub const GOLDEN_RATIO_FRAC: f64 = 0.6180339887;

/// Default base for the polynomial rolling hash.
pub const POLYNOMIAL_BASE: u64 = 31;

/// Seed value of the djb2 hash.
pub const DJB2_SEED: u64 = 5381;

/// Pluggable integer hash, as stored by the tables.
pub type HashFn = Box<dyn Fn(i64, usize) -> usize>;

/// Pluggable string hash.
pub type StrHashFn = Box<dyn Fn(&str, usize) -> usize>;

/// Division method: `h(k) = k mod m`.
///
/// # Note
///
/// Uses floor-mod (`rem_euclid`), so negative keys still map into
/// `[0, m)`. Truncating `%` would hand back negative indices here.
pub fn division(key: i64, table_size: usize) -> usize {
    key.rem_euclid(table_size as i64) as usize
}

/// Multiplication method: `h(k) = floor(m * frac(k * A))`
/// with `A` fixed to [`GOLDEN_RATIO_FRAC`].
pub fn multiplication(key: i64, table_size: usize) -> usize {
    multiplication_with(key, table_size, GOLDEN_RATIO_FRAC)
}

/// Multiplication method with a caller-chosen multiplier `a`.
///
/// The fractional part is taken with `rem_euclid(1.0)` so negative
/// keys behave like positive ones, and the result is clamped since
/// rounding can push `frac` to exactly `1.0`.
pub fn multiplication_with(key: i64, table_size: usize, a: f64) -> usize {
    let frac = (key as f64 * a).rem_euclid(1.0);
    let index = (table_size as f64 * frac) as usize;
    index.min(table_size - 1)
}

/// Universal hashing: `h(k) = ((a*k + b) mod p) mod m`.
///
/// The caller picks `a` in `[1, p)`, `b` in `[0, p)` and a prime `p`
/// larger than the largest key. Arithmetic runs in `i128` so the
/// product cannot overflow.
pub fn universal(key: i64, table_size: usize, a: u64, b: u64, p: u64) -> usize {
    let residue = (a as i128 * key as i128 + b as i128).rem_euclid(p as i128);
    (residue % table_size as i128) as usize
}

/// Naive string hash: sum of code points mod `m`.
///
/// Kept as a bad example: anagrams and permutations all collide.
pub fn string_simple(key: &str, table_size: usize) -> usize {
    let sum = key.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64));
    (sum % table_size as u64) as usize
}

/// Polynomial rolling hash with the default base of 31.
pub fn string_polynomial(key: &str, table_size: usize) -> usize {
    string_polynomial_with_base(key, table_size, POLYNOMIAL_BASE)
}

/// Horner-style accumulation: `h = (h*base + code(c)) mod m` per character.
pub fn string_polynomial_with_base(key: &str, table_size: usize, base: u64) -> usize {
    let m = table_size as u128;
    let hash = key
        .chars()
        .fold(0u128, |h, c| (h * base as u128 + c as u128) % m);
    hash as usize
}

/// djb2: `h = ((h << 5) + h) + code(c)`, seeded at 5381.
///
/// The accumulator wraps in `u64`; the final value is reduced mod `m`.
pub fn string_djb2(key: &str, table_size: usize) -> usize {
    let mut hash = DJB2_SEED;
    for c in key.chars() {
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(c as u64);
    }
    (hash % table_size as u64) as usize
}

/// SHA-256 based hash: digest the key's bytes, fold the digest mod `m`.
///
/// Excellent distribution, much slower than the arithmetic hashes.
/// Included for the speed/quality trade-off, not for security.
pub fn digest(key: &str, table_size: usize) -> usize {
    let m = table_size as u128;
    let sum = Sha256::digest(key.as_bytes());
    let mut acc: u128 = 0;
    for byte in sum.iter() {
        acc = ((acc << 8) | u128::from(*byte)) % m;
    }
    acc as usize
}

/// Degenerate hash: `h(k) = (k * m) mod m`, which is always 0.
///
/// Every key lands in bucket 0, producing maximal clustering. This is
/// the worst case the benchmarks compare against; keep it exact.
pub fn bad_clustering(key: i64, table_size: usize) -> usize {
    (key as i128 * table_size as i128).rem_euclid(table_size as i128) as usize
}

/// Looks up an integer hash by name, falling back to [`division`]
/// for anything unrecognized.
pub fn get_hash_function(name: &str) -> HashFn {
    match name {
        "division" => Box::new(division),
        "multiplication" => Box::new(multiplication),
        "bad_clustering" => Box::new(bad_clustering),
        _ => Box::new(division),
    }
}

/// Looks up a string hash by name.
///
/// Unknown names fall back to [`string_polynomial`], the string-keyed
/// counterpart of the division default.
pub fn get_string_hash_function(name: &str) -> StrHashFn {
    match name {
        "string_simple" => Box::new(string_simple),
        "string_polynomial" => Box::new(string_polynomial),
        "string_djb2" => Box::new(string_djb2),
        "digest" => Box::new(digest),
        _ => Box::new(string_polynomial),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn division_basics() {
        assert_eq!(division(10, 7), 3);
        assert_eq!(division(22, 7), 1);
        assert_eq!(division(31, 7), 3);
    }

    #[test]
    fn division_range() {
        for key in 0..100 {
            let h = division(key, 11);
            assert!(h < 11);
        }
    }

    #[test]
    fn division_negative_keys() {
        // floor-mod: -10 mod 7 is 4, not -3
        assert_eq!(division(-10, 7), 4);
        assert_eq!(division(-1, 7), 6);
        assert_eq!(division(-7, 7), 0);
        for key in -50..0 {
            assert!(division(key, 13) < 13);
        }
    }

    #[test]
    fn multiplication_range() {
        for key in 0..50 {
            assert!(multiplication(key, 16) < 16);
        }
        for key in -50..0 {
            assert!(multiplication(key, 16) < 16);
        }
    }

    #[test]
    fn multiplication_with_custom_multiplier() {
        for key in 0..50 {
            assert!(multiplication_with(key, 8, 0.12345) < 8);
        }
    }

    #[test]
    fn universal_range() {
        let (a, b, p) = (3, 7, 101);
        for key in 0..50 {
            assert!(universal(key, 11, a, b, p) < 11);
        }
        let (a, b, p) = (5, 11, 101);
        for key in 0..50 {
            assert!(universal(key, 13, a, b, p) < 13);
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(division(42, 11), division(42, 11));
        assert_eq!(multiplication(42, 11), multiplication(42, 11));
        assert_eq!(string_djb2("hello", 11), string_djb2("hello", 11));
        assert_eq!(digest("hello", 11), digest("hello", 11));
    }

    #[test]
    fn string_hashes_in_range() {
        for word in ["hello", "world", "test", "hash", "table", ""] {
            assert!(string_simple(word, 11) < 11);
            assert!(string_polynomial(word, 11) < 11);
            assert!(string_djb2(word, 11) < 11);
            assert!(digest(word, 11) < 11);
        }
    }

    #[test]
    fn simple_hash_collides_on_anagrams() {
        assert_eq!(string_simple("listen", 97), string_simple("silent", 97));
        assert_eq!(string_simple("abc", 97), string_simple("cba", 97));
    }

    #[test]
    fn polynomial_distributes_somewhat() {
        let words = ["hello", "world", "test", "hash", "table"];
        let mut hashes: Vec<usize> = words
            .iter()
            .map(|w| string_polynomial(w, 100))
            .collect();
        hashes.sort_unstable();
        hashes.dedup();
        assert!(hashes.len() > 1);
    }

    #[test]
    fn bad_clustering_is_always_zero() {
        for key in -20..20 {
            assert_eq!(bad_clustering(key, 10), 0);
            assert_eq!(bad_clustering(key, 7), 0);
        }
    }

    #[test]
    fn registry_lookup() {
        let f = get_hash_function("multiplication");
        assert_eq!(f(42, 16), multiplication(42, 16));

        let f = get_string_hash_function("string_djb2");
        assert_eq!(f("hello", 11), string_djb2("hello", 11));
    }

    #[test]
    fn registry_falls_back() {
        let f = get_hash_function("no_such_hash");
        for key in 0..20 {
            assert_eq!(f(key, 7), division(key, 7));
        }

        let f = get_string_hash_function("no_such_hash");
        assert_eq!(f("hello", 11), string_polynomial("hello", 11));
    }
}
