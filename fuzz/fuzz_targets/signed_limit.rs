// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the signed entry point.
//!
//! Every negative limit must come back as InvalidArgument. Non-negative limits
//! are folded into a small range so the quadratic generator stays fast.

#![no_main]

use catalan::{try_generate, CatalanError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|limit: i64| {
    if limit < 0 {
        assert_eq!(
            try_generate(limit),
            Err(CatalanError::InvalidArgument { limit })
        );
        return;
    }

    let limit = limit % 512;
    let table = try_generate(limit).expect("non-negative limit must succeed");
    assert_eq!(table.len() as i64, limit + 1);
    assert_eq!(table[0], 1);
});
