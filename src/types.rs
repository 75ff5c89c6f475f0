// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The table of Catalan numbers and the errors around building one.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **CatalanTable**: `terms.len() = limit + 1 ∧ terms[0] = 1 ∧ ∀i. terms[i] < MODULUS`
//!   and every term satisfies the convolution recurrence over the terms before it.
//!
//! The generator establishes these by construction. Anything else goes through
//! `CatalanTable::from_values`, which runs the checks in `verify`. There is no
//! `&mut` access, so a table that exists is a table that holds.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::verify::{validate_terms, InvariantError};

// =============================================================================
// TABLE
// =============================================================================

/// Longest array `TryFrom<Vec<u64>>` and deserialization will validate.
pub const MAX_DESERIALIZED_TERMS: usize = 20_000;

/// Catalan numbers `C(0)..=C(limit)` reduced modulo [`crate::MODULUS`].
///
/// Serializes as a plain JSON array. Deserializing validates the array, so a
/// tampered file fails to load instead of producing a bad table.
///
/// Validation re-runs the O(n²) recurrence, so deserialization (and
/// `TryFrom<Vec<u64>>`) refuses arrays longer than [`MAX_DESERIALIZED_TERMS`]
/// before looking at any value. [`CatalanTable::from_values`] has no bound;
/// callers that trust the size of their input can use it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u64>", try_from = "Vec<u64>")]
pub struct CatalanTable {
    terms: Vec<u64>,
}

impl CatalanTable {
    /// Wrap terms the generator has already computed.
    pub(crate) fn from_generated(terms: Vec<u64>) -> Self {
        debug_assert!(!terms.is_empty());
        Self { terms }
    }

    /// Build a table from an externally supplied sequence.
    ///
    /// Returns the first invariant the sequence breaks. Costs O(n²).
    pub fn from_values(terms: Vec<u64>) -> Result<Self, InvariantError> {
        validate_terms(&terms)?;
        Ok(Self { terms })
    }

    /// The largest index in the table.
    #[inline]
    pub fn limit(&self) -> usize {
        self.terms.len() - 1
    }

    /// Number of terms, always `limit + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: even `limit = 0` holds `C(0)`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `C(index) mod MODULUS`, or `None` past the limit.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.terms.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.terms.iter()
    }

    /// Terms from `first` through the limit. Empty if `first > limit`.
    pub fn terms_from(&self, first: usize) -> &[u64] {
        self.terms.get(first..).unwrap_or(&[])
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.terms
    }
}

impl Index<usize> for CatalanTable {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.terms[index]
    }
}

impl<'a> IntoIterator for &'a CatalanTable {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl TryFrom<Vec<u64>> for CatalanTable {
    type Error = InvariantError;

    fn try_from(terms: Vec<u64>) -> Result<Self, Self::Error> {
        if terms.len() > MAX_DESERIALIZED_TERMS {
            return Err(InvariantError::TooLong {
                len: terms.len(),
                max: MAX_DESERIALIZED_TERMS,
            });
        }
        Self::from_values(terms)
    }
}

impl From<CatalanTable> for Vec<u64> {
    fn from(table: CatalanTable) -> Self {
        table.terms
    }
}

impl AsRef<[u64]> for CatalanTable {
    fn as_ref(&self) -> &[u64] {
        &self.terms
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Why a table could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalanError {
    /// The requested upper bound is negative.
    InvalidArgument { limit: i64 },
    /// The upper bound is outside what the chosen method can evaluate.
    LimitTooLarge { limit: u64, max: u64 },
    /// A computed or supplied table failed verification.
    Invariant(InvariantError),
}

impl fmt::Display for CatalanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalanError::InvalidArgument { limit } => {
                write!(f, "invalid argument: limit must be >= 0, got {}", limit)
            }
            CatalanError::LimitTooLarge { limit, max } => {
                write!(f, "limit {} exceeds the supported maximum {}", limit, max)
            }
            CatalanError::Invariant(err) => write!(f, "invariant violated: {}", err),
        }
    }
}

impl std::error::Error for CatalanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalanError::Invariant(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvariantError> for CatalanError {
    fn from(err: InvariantError) -> Self {
        CatalanError::Invariant(err)
    }
}
