// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic modulo the fixed prime 1,000,000,007.
//!
//! Every value that leaves this module is reduced into `[0, MODULUS)`. The
//! modulus fits in 30 bits, so the product of two reduced values is below
//! 2^60 and a plain `u64` multiplication cannot overflow before reduction.

/// The prime every Catalan term is reduced against.
pub const MODULUS: u64 = 1_000_000_007;

// Product of two reduced values must fit in u64 before the `%`.
const _: () = {
    assert!((MODULUS - 1).checked_mul(MODULUS - 1).is_some());
};

/// Reduce an arbitrary `u64` into `[0, MODULUS)`.
#[inline]
pub fn reduce(value: u64) -> u64 {
    value % MODULUS
}

/// `(a + b) mod MODULUS`.
#[inline]
pub fn add_mod(a: u64, b: u64) -> u64 {
    (reduce(a) + reduce(b)) % MODULUS
}

/// `(a * b) mod MODULUS`, multiplying in `u64` after reducing both operands.
#[inline]
pub fn mul_mod(a: u64, b: u64) -> u64 {
    (reduce(a) * reduce(b)) % MODULUS
}

/// `base^exp mod MODULUS` by square-and-multiply.
pub fn pow_mod(base: u64, mut exp: u64) -> u64 {
    let mut base = reduce(base);
    let mut result = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse modulo the prime.
///
/// Uses Fermat's little theorem (`a^(p-2) = a^-1` for prime `p`). Returns
/// `None` when `a` is a multiple of the modulus, which has no inverse.
pub fn inv_mod(a: u64) -> Option<u64> {
    let a = reduce(a);
    if a == 0 {
        return None;
    }
    Some(pow_mod(a, MODULUS - 2))
}
