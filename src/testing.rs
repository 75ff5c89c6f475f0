//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the exact (unreduced) Catalan numbers that the modular
//! generators are checked against.

#![doc(hidden)]

use crate::modular::MODULUS;

/// The first Catalan numbers, exactly as published (OEIS A000108).
pub const KNOWN_CATALAN: [u64; 20] = [
    1,
    1,
    2,
    5,
    14,
    42,
    132,
    429,
    1430,
    4862,
    16796,
    58786,
    208012,
    742900,
    2674440,
    9694845,
    35357670,
    129644790,
    477638700,
    1767263190,
];

/// Every Catalan number that fits in a `u128`, computed without reduction.
///
/// Uses `C(n+1) = C(n) · 2(2n+1) / (n+2)` with checked arithmetic and stops
/// at the first term whose intermediate product would overflow.
pub fn exact_catalan_terms() -> Vec<u128> {
    let mut terms = vec![1u128];
    let mut current = 1u128;
    let mut n = 0u128;
    while let Some(product) = current.checked_mul(2 * (2 * n + 1)) {
        current = product / (n + 2);
        terms.push(current);
        n += 1;
    }
    terms
}

/// Exact Catalan numbers reduced into `[0, MODULUS)`.
pub fn exact_catalan_reduced() -> Vec<u64> {
    exact_catalan_terms()
        .into_iter()
        .map(|c| (c % u128::from(MODULUS)) as u64)
        .collect()
}

/// The text the binary prints for `limit` with default flags.
pub fn expected_default_line(terms: &[u64]) -> String {
    let mut line = String::new();
    for value in terms.iter().skip(1) {
        line.push_str(&value.to_string());
        line.push(' ');
    }
    line.push('\n');
    line
}
