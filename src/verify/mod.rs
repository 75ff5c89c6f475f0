// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validating constructors and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validation** (`validate_terms`, `check_methods_agree`) that returns an
//!    `InvariantError` for tables coming from outside the generator. Used by
//!    `CatalanTable::from_values` and the CLI's `--verify` mode.
//!
//! 2. **Runtime contracts** that panic in debug builds when a generated table
//!    breaks an invariant. Zero-cost in release, but catch bugs when tests run.

mod types;
pub mod contracts;

pub use types::*;
