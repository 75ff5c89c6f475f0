// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalan number generation modulo [`MODULUS`].
//!
//! # Algorithm
//!
//! The default method is the convolution recurrence:
//!
//! ```text
//! C(0) = 1
//! C(n) = Σ_{k=0}^{n-1} C(k) · C(n-1-k)      (mod MODULUS)
//! ```
//!
//! evaluated bottom-up in O(limit²). Each product is reduced before it is
//! added, and the running sum is reduced after every addition, so no
//! intermediate value leaves `[0, MODULUS)`.
//!
//! The closed-form method walks the ratio between consecutive terms instead:
//!
//! ```text
//! C(n+1) = C(n) · 2(2n+1) / (n+2)           (mod MODULUS)
//! ```
//!
//! with the division done by modular inverse. It is O(limit · log MODULUS)
//! and produces identical tables as long as every `n + 2` is invertible, i.e.
//! `limit <= MODULUS - 2`.

use tracing::{debug, instrument};

use crate::modular::{add_mod, inv_mod, mul_mod, MODULUS};
use crate::types::{CatalanError, CatalanTable};
use crate::verify::contracts::check_table_well_formed;

/// Largest limit the closed form can evaluate without dividing by zero.
pub const CLOSED_FORM_MAX_LIMIT: u64 = MODULUS - 2;

/// Largest limit whose `limit + 1` terms fit in a single allocation.
pub const MAX_LIMIT: usize = isize::MAX as usize / std::mem::size_of::<u64>() - 1;

/// How to evaluate the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Quadratic convolution recurrence.
    #[default]
    Recurrence,
    /// Ratio of consecutive terms with modular inverses.
    ClosedForm,
}

impl Method {
    /// The other method, for cross-checking.
    pub fn alternate(self) -> Self {
        match self {
            Method::Recurrence => Method::ClosedForm,
            Method::ClosedForm => Method::Recurrence,
        }
    }
}

/// The recurrence term that follows `prefix`.
///
/// `prefix` holds `C(0)..C(n-1)`; the result is `C(n) mod MODULUS`.
#[inline]
pub(crate) fn recurrence_term(prefix: &[u64]) -> u64 {
    let n = prefix.len();
    let mut sum = 0;
    for k in 0..n {
        sum = add_mod(sum, mul_mod(prefix[k], prefix[n - 1 - k]));
    }
    sum
}

/// Catalan numbers `C(0)..=C(limit)` by the convolution recurrence.
///
/// `limit = 0` yields `[1]`.
///
/// # Panics
/// Panics with a capacity overflow if `limit > MAX_LIMIT`, and aborts if the
/// allocator cannot provide the table, the same way `Vec::with_capacity` does. Use [`generate_checked`] or [`try_generate`]
/// for limits that come from outside the program.
pub fn generate(limit: usize) -> CatalanTable {
    fill_recurrence(Vec::with_capacity(limit.saturating_add(1)), limit)
}

/// Like [`generate`], but returns [`CatalanError::LimitTooLarge`] when the
/// table cannot be allocated instead of panicking.
pub fn generate_checked(limit: usize) -> Result<CatalanTable, CatalanError> {
    let terms = reserve_terms(limit)?;
    Ok(fill_recurrence(terms, limit))
}

#[instrument(level = "debug", skip(terms))]
fn fill_recurrence(mut terms: Vec<u64>, limit: usize) -> CatalanTable {
    terms.push(1);
    for _ in 1..=limit {
        let next = recurrence_term(&terms);
        terms.push(next);
    }

    check_table_well_formed(limit, &terms);
    debug!(terms = terms.len(), "recurrence table complete");
    CatalanTable::from_generated(terms)
}

/// Allocate room for `limit + 1` terms without panicking.
fn reserve_terms(limit: usize) -> Result<Vec<u64>, CatalanError> {
    let too_large = || CatalanError::LimitTooLarge {
        limit: limit as u64,
        max: MAX_LIMIT as u64,
    };
    if limit > MAX_LIMIT {
        return Err(too_large());
    }

    let mut terms = Vec::new();
    terms.try_reserve_exact(limit + 1).map_err(|_| too_large())?;
    Ok(terms)
}

/// Signed entry point that rejects negative limits.
///
/// Returns [`CatalanError::InvalidArgument`] for `limit < 0` and
/// [`CatalanError::LimitTooLarge`] if the table cannot be allocated.
pub fn try_generate(limit: i64) -> Result<CatalanTable, CatalanError> {
    let limit = checked_limit(limit)?;
    generate_checked(limit)
}

/// Catalan numbers `C(0)..=C(limit)` via the ratio of consecutive terms.
///
/// Returns [`CatalanError::LimitTooLarge`] past [`CLOSED_FORM_MAX_LIMIT`].
#[instrument(level = "debug")]
pub fn generate_closed_form(limit: usize) -> Result<CatalanTable, CatalanError> {
    if limit as u64 > CLOSED_FORM_MAX_LIMIT {
        return Err(CatalanError::LimitTooLarge {
            limit: limit as u64,
            max: CLOSED_FORM_MAX_LIMIT,
        });
    }

    let mut terms = reserve_terms(limit)?;
    terms.push(1);
    let mut current = 1;
    for n in 0..limit as u64 {
        let numerator = mul_mod(2, 2 * n + 1);
        let inverse = inv_mod(n + 2).ok_or(CatalanError::LimitTooLarge {
            limit: limit as u64,
            max: CLOSED_FORM_MAX_LIMIT,
        })?;
        current = mul_mod(mul_mod(current, numerator), inverse);
        terms.push(current);
    }

    check_table_well_formed(limit, &terms);
    debug!(terms = terms.len(), "closed-form table complete");
    Ok(CatalanTable::from_generated(terms))
}

/// Generate with an explicit method.
pub fn generate_with(method: Method, limit: usize) -> Result<CatalanTable, CatalanError> {
    match method {
        Method::Recurrence => generate_checked(limit),
        Method::ClosedForm => generate_closed_form(limit),
    }
}

/// Convert a signed limit into an index bound no larger than [`MAX_LIMIT`].
pub fn checked_limit(limit: i64) -> Result<usize, CatalanError> {
    if limit < 0 {
        return Err(CatalanError::InvalidArgument { limit });
    }
    usize::try_from(limit)
        .ok()
        .filter(|&limit| limit <= MAX_LIMIT)
        .ok_or(CatalanError::LimitTooLarge {
            limit: limit as u64,
            max: MAX_LIMIT as u64,
        })
}
