//! Runtime contracts for generated Catalan tables.
//!
//! These are debug-mode assertions. They are:
//!
//! 1. **Zero-cost in release builds** (use `debug_assert!`)
//! 2. **Early failure detection** during development and tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_base_case`          | `C(0) = 1`                                 |
//! | `check_term_reduced`       | every term in `[0, MODULUS)`               |
//! | `check_recurrence_at`      | `C(n) = Σ C(k)·C(n-1-k) mod MODULUS`       |
//! | `check_table_well_formed`  | all of the above, plus length = limit + 1  |
//!
//! `check_recurrence_at` sums the convolution in `u128` and reduces once at
//! the end. It shares no arithmetic with the generator's per-step
//! `add_mod`/`mul_mod` loop.
//!
//! # Usage
//!
//! ```ignore
//! use catalan::verify::contracts::*;
//!
//! // In debug builds, this panics if an invariant is violated
//! check_table_well_formed(limit, &terms);
//!
//! // In release builds, this is a no-op
//! ```

use crate::modular::MODULUS;

// ============================================================================
// TERM CONTRACTS
// ============================================================================

/// Check that the first term is `C(0) = 1`.
#[inline]
pub fn check_base_case(terms: &[u64]) {
    debug_assert!(
        terms.first() == Some(&1),
        "Contract violation: C(0) must be 1, got {:?}",
        terms.first()
    );
}

/// Check that a single term is reduced.
#[inline]
pub fn check_term_reduced(index: usize, value: u64) {
    debug_assert!(
        value < MODULUS,
        "Contract violation: terms[{}] = {} >= MODULUS {}",
        index,
        value,
        MODULUS
    );
}

/// Check the convolution recurrence at `index` against the terms before it.
///
/// O(index), so callers in hot loops should only use this in tests.
#[inline]
pub fn check_recurrence_at(terms: &[u64], index: usize) {
    if cfg!(debug_assertions) && index > 0 && index < terms.len() {
        let expected = convolution_unreduced(&terms[..index]);
        debug_assert_eq!(
            terms[index], expected,
            "Contract violation: recurrence fails at index {}",
            index
        );
    }
}

/// `Σ prefix[k]·prefix[n-1-k] mod MODULUS`, accumulated in `u128`.
///
/// Reduced terms are below 2^30, so each product is below 2^60 and the sum of
/// any table that fits in memory stays far below 2^128.
fn convolution_unreduced(prefix: &[u64]) -> u64 {
    let sum: u128 = prefix
        .iter()
        .zip(prefix.iter().rev())
        .map(|(&a, &b)| u128::from(a) * u128::from(b))
        .sum();
    (sum % u128::from(MODULUS)) as u64
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check every table invariant at once.
///
/// This re-runs the quadratic recurrence, so it doubles the cost of a
/// generate call in debug builds. Release builds skip it entirely.
pub fn check_table_well_formed(limit: usize, terms: &[u64]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        terms.len(),
        limit + 1,
        "Contract violation: table for limit {} has {} terms",
        limit,
        terms.len()
    );
    check_base_case(terms);
    for (index, &value) in terms.iter().enumerate() {
        check_term_reduced(index, value);
        check_recurrence_at(terms, index);
    }
}
