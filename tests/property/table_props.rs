//! Table invariants for arbitrary limits.

use crate::common::assert_table_well_formed;
use catalan::{generate, try_generate, CatalanError, CatalanTable, InvariantError, MODULUS};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Limits small enough that the quadratic recurrence stays fast in debug builds.
fn limit_strategy() -> impl Strategy<Value = usize> {
    0usize..300
}

/// A pair `(n, m)` with `n <= m`.
fn ordered_limits_strategy() -> impl Strategy<Value = (usize, usize)> {
    limit_strategy().prop_flat_map(|m| (0..=m, Just(m)))
}

// ============================================================================
// GENERATOR PROPERTIES
// ============================================================================

proptest! {
    /// Property: C(0) = 1 for every limit.
    #[test]
    fn prop_base_case(limit in limit_strategy()) {
        let table = generate(limit);
        prop_assert_eq!(table[0], 1);
        prop_assert_eq!(table.len(), limit + 1);
    }

    /// Property: every term is reduced.
    #[test]
    fn prop_terms_in_range(limit in limit_strategy()) {
        let table = generate(limit);
        for (i, &v) in table.iter().enumerate() {
            prop_assert!(v < MODULUS, "terms[{}] = {} not reduced", i, v);
        }
    }

    /// Property: the last term is the convolution of the ones before it.
    #[test]
    fn prop_recurrence_at_limit(limit in 1usize..300) {
        let table = generate(limit);
        let expected = (0..limit).fold(0u64, |acc, k| {
            (acc + (table[k] * table[limit - 1 - k]) % MODULUS) % MODULUS
        });
        prop_assert_eq!(table[limit], expected);
    }

    /// Property: a longer table starts with every shorter table.
    #[test]
    fn prop_prefix_stable((n, m) in ordered_limits_strategy()) {
        let short = generate(n);
        let long = generate(m);
        prop_assert_eq!(short.as_slice(), &long.as_slice()[..=n]);
    }

    /// Property: generation is pure.
    #[test]
    fn prop_idempotent(limit in limit_strategy()) {
        prop_assert_eq!(generate(limit), generate(limit));
    }

    /// Property: generated tables always pass validation.
    #[test]
    fn prop_generated_tables_validate(limit in limit_strategy()) {
        assert_table_well_formed(&generate(limit));
    }

    /// Property: the signed entry point agrees with `generate` for
    /// non-negative limits and rejects every negative one.
    #[test]
    fn prop_try_generate_sign(limit in -1000i64..300) {
        let result = try_generate(limit);
        if limit < 0 {
            prop_assert_eq!(result, Err(CatalanError::InvalidArgument { limit }));
        } else {
            prop_assert_eq!(result.unwrap(), generate(limit as usize));
        }
    }

    /// Property: changing any one term of a valid table is reported at
    /// exactly that index, since the prefix before it is untouched.
    #[test]
    fn prop_single_term_tamper_detected(
        (index, limit) in (1usize..120).prop_flat_map(|m| (1..=m, Just(m))),
        delta in 1u64..MODULUS,
    ) {
        let mut terms = generate(limit).into_vec();
        terms[index] = (terms[index] + delta) % MODULUS;

        match CatalanTable::from_values(terms) {
            Err(InvariantError::RecurrenceMismatch { index: found, .. }) => {
                prop_assert_eq!(found, index);
            }
            other => prop_assert!(false, "expected mismatch at {}, got {:?}", index, other),
        }
    }
}
