// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation for Catalan tables that did not come out of the generator.
//!
//! A table built by [`crate::generate`] is correct by construction. A table
//! read back from JSON, handed over by another process, or produced by a
//! different method is not, so it goes through [`validate_terms`] first. The
//! check is the same quadratic recurrence the generator runs, applied index by
//! index, and it stops at the first violation.
//!
//! # What's Guaranteed
//!
//! | Check                | Error variant          |
//! |----------------------|------------------------|
//! | at least one term    | `EmptyTable`           |
//! | `terms[0] == 1`      | `BadBaseCase`          |
//! | `terms[i] < MODULUS` | `OutOfRange`           |
//! | recurrence at `i`    | `RecurrenceMismatch`   |

use std::fmt;

use crate::catalan::recurrence_term;
use crate::modular::MODULUS;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The table has no terms; even `limit = 0` carries `C(0)`.
    EmptyTable,
    /// `terms[0]` is not 1.
    BadBaseCase { value: u64 },
    /// A term is not reduced into `[0, MODULUS)`.
    OutOfRange { index: usize, value: u64 },
    /// `terms[index]` differs from the convolution of the terms before it.
    RecurrenceMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },
    /// A deserialized table is longer than loading will validate.
    TooLong { len: usize, max: usize },
    /// Two evaluation methods disagree on a term.
    MethodMismatch {
        index: usize,
        recurrence: u64,
        closed_form: u64,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyTable => write!(f, "table is empty"),
            InvariantError::BadBaseCase { value } => {
                write!(f, "terms[0] is {} but C(0) must be 1", value)
            }
            InvariantError::OutOfRange { index, value } => {
                write!(
                    f,
                    "terms[{}] = {} is not reduced (modulus {})",
                    index, value, MODULUS
                )
            }
            InvariantError::RecurrenceMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "terms[{}] = {} but the recurrence gives {}",
                    index, actual, expected
                )
            }
            InvariantError::TooLong { len, max } => {
                write!(f, "table has {} terms, at most {} can be loaded", len, max)
            }
            InvariantError::MethodMismatch {
                index,
                recurrence,
                closed_form,
            } => {
                write!(
                    f,
                    "methods disagree at index {}: recurrence {} != closed form {}",
                    index, recurrence, closed_form
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `terms` is a prefix of the Catalan sequence mod `MODULUS`.
///
/// O(n²) in the number of terms, the same as generating them.
pub fn validate_terms(terms: &[u64]) -> Result<(), InvariantError> {
    let Some(&first) = terms.first() else {
        return Err(InvariantError::EmptyTable);
    };
    if first != 1 {
        return Err(InvariantError::BadBaseCase { value: first });
    }

    for index in 1..terms.len() {
        let actual = terms[index];
        if actual >= MODULUS {
            return Err(InvariantError::OutOfRange {
                index,
                value: actual,
            });
        }
        let expected = recurrence_term(&terms[..index]);
        if actual != expected {
            return Err(InvariantError::RecurrenceMismatch {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Check that two independently computed tables agree term by term.
///
/// Both slices are expected to have the same length; extra terms on either
/// side are ignored.
pub fn check_methods_agree(recurrence: &[u64], closed_form: &[u64]) -> Result<(), InvariantError> {
    match recurrence
        .iter()
        .zip(closed_form)
        .position(|(a, b)| a != b)
    {
        Some(index) => Err(InvariantError::MethodMismatch {
            index,
            recurrence: recurrence[index],
            closed_form: closed_form[index],
        }),
        None => Ok(()),
    }
}
