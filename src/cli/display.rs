// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output rendering for the catalan CLI.
//!
//! The text form is byte-for-byte the classic one: every printed value is
//! followed by a single space, including the last, then a newline. Scripts
//! that split on whitespace don't care; scripts that diff against reference
//! output do.
//!
//! `C(0)` is always computed but skipped unless asked for, so the default
//! line starts at `C(1)`.

use serde::Serialize;

use crate::modular::MODULUS;
use crate::types::CatalanTable;

/// First index printed for the given `include_zero` setting.
#[inline]
pub fn first_index(include_zero: bool) -> usize {
    if include_zero {
        0
    } else {
        1
    }
}

/// Space-terminated values on a single line.
pub fn render_text(table: &CatalanTable, include_zero: bool) -> String {
    let terms = table.terms_from(first_index(include_zero));
    // Terms are below 10^10, so 11 bytes each is enough
    let mut line = String::with_capacity(terms.len() * 11 + 1);
    for value in terms {
        line.push_str(&value.to_string());
        line.push(' ');
    }
    line.push('\n');
    line
}

/// JSON document written by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub modulus: u64,
    pub limit: usize,
    pub first_index: usize,
    pub terms: &'a [u64],
}

/// Pretty-printed JSON report followed by a newline.
pub fn render_json(table: &CatalanTable, include_zero: bool) -> serde_json::Result<String> {
    let first = first_index(include_zero);
    let report = JsonReport {
        modulus: MODULUS,
        limit: table.limit(),
        first_index: first,
        terms: table.terms_from(first),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
