// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `CatalanTable::from_values`.
//!
//! Validation is the only path by which outside data becomes a table. It must
//! return Err for garbage, never panic, and accept exactly the genuine
//! prefixes of the sequence.

#![no_main]

use arbitrary::Arbitrary;
use catalan::{generate, CatalanTable};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    terms: Vec<u64>,
    /// Overwrite one term of a genuine prefix instead of using `terms` raw
    tamper: Option<(u8, u64)>,
}

fuzz_target!(|input: Input| {
    let terms = match input.tamper {
        Some((index, value)) => {
            let limit = input.terms.len().min(200);
            let mut genuine = generate(limit).into_vec();
            let index = index as usize % genuine.len();
            genuine[index] = value;
            genuine
        }
        None => input.terms,
    };
    let terms = terms.into_iter().take(256).collect::<Vec<_>>();

    // Property 1: never panics
    let result = CatalanTable::from_values(terms.clone());

    // Property 2: accepted tables are exactly the generator's output
    if let Ok(table) = result {
        assert_eq!(
            table.as_slice(),
            generate(terms.len() - 1).as_slice(),
            "accepted a table that is not a Catalan prefix"
        );
    }
});
