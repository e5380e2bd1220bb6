// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte and integer draws over an [`EntropySource`].
//!
//! Callers validate sizes and ranges before drawing; these functions trust
//! their input.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Width of the `i64` domain (`2^64`), the largest span [`draw_int`] accepts.
const FULL_SPAN: u128 = 1 << 64;

/// Draws `size` bytes of fresh entropy.
///
/// # Errors
///
/// - [`EntropyError::AllocationFailed`] if `size` bytes cannot be allocated.
/// - [`EntropyError::EntropyNotAvailable`] if the entropy source fails.
pub fn draw_bytes<E: EntropySource + ?Sized>(
    entropy: &E,
    size: usize,
) -> Result<Vec<u8>, EntropyError> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|_| EntropyError::AllocationFailed)?;
    bytes.resize(size, 0);
    entropy.fill_bytes(&mut bytes)?;

    Ok(bytes)
}

fn next_u64<E: EntropySource + ?Sized>(entropy: &E) -> Result<u64, EntropyError> {
    let mut word = [0u8; 8];
    entropy.fill_bytes(&mut word)?;

    Ok(u64::from_le_bytes(word))
}

/// Draws a value uniformly distributed in `[0, n)`.
///
/// Uses rejection sampling to avoid modulo bias: words below
/// `2^64 mod n` are discarded, which leaves a multiple of `n` candidates.
/// Fewer than half of all words are ever rejected, so the expected number
/// of draws is below two for any `n`.
///
/// # Panics
///
/// Panics in debug builds if `n` is zero.
pub fn uniform_below<E: EntropySource + ?Sized>(entropy: &E, n: u64) -> Result<u64, EntropyError> {
    debug_assert!(n > 0, "n must be non-zero");

    let threshold = n.wrapping_neg() % n;

    loop {
        let r = next_u64(entropy)?;
        if r >= threshold {
            return Ok(r % n);
        }
    }
}

/// Draws an integer uniformly distributed in `min..=max`.
///
/// Both bounds are inclusive. The span `max - min + 1` is computed in
/// 128-bit arithmetic, so the whole `i64` domain is a valid range.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the entropy source fails.
///
/// # Panics
///
/// Panics in debug builds if `min > max`.
pub fn draw_int<E: EntropySource + ?Sized>(
    entropy: &E,
    min: i64,
    max: i64,
) -> Result<i64, EntropyError> {
    debug_assert!(min <= max, "min must not exceed max");

    let span = (i128::from(max) - i128::from(min) + 1) as u128;

    let offset = if span == FULL_SPAN {
        next_u64(entropy)?
    } else {
        uniform_below(entropy, span as u64)?
    };

    // min + offset <= max, which always fits in i64.
    Ok((i128::from(min) + i128::from(offset)) as i64)
}
