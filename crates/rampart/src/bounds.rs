// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validation of untrusted sizes and ranges.
//!
//! Both checks are pure: they look only at their arguments and return the
//! validated value in a type that can no longer be out of bounds.

use serde_json::Number;

use crate::error::BoundsError;

/// Inclusive range that passed [`check_int_range`]; `min < max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// Lower bound (inclusive).
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Integral value of a JSON number.
///
/// Floats count as integral when finite with no fractional part, so `5.0`
/// yields `5`. Integral floats beyond `i128` saturate, which keeps them
/// out of every range the guard accepts.
fn integral_value(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }

    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i128)
    } else {
        None
    }
}

/// Number to echo back in a rejection: integral floats such as `5.0` are
/// shown as `5`; anything else is shown as supplied.
fn echoed(n: &Number, value: Option<i128>) -> Number {
    match value {
        Some(v) if n.is_f64() => i64::try_from(v)
            .map(Number::from)
            .or_else(|_| u64::try_from(v).map(Number::from))
            .unwrap_or_else(|_| n.clone()),
        _ => n.clone(),
    }
}

/// Validates a requested byte count against the configured ceiling.
///
/// The ceiling is inclusive.
///
/// # Errors
///
/// - [`BoundsError::InvalidSize`] if `size` is not a positive integer.
/// - [`BoundsError::SizeExceeded`] if `size > max_byte_size`.
pub fn check_byte_size(size: &Number, max_byte_size: usize) -> Result<usize, BoundsError> {
    let integral = integral_value(size);
    let value = match integral {
        Some(v) if v > 0 => v,
        _ => {
            return Err(BoundsError::InvalidSize {
                size: echoed(size, integral),
            });
        }
    };

    match usize::try_from(value) {
        Ok(v) if v <= max_byte_size => Ok(v),
        _ => Err(BoundsError::SizeExceeded {
            size: echoed(size, integral),
            max: max_byte_size,
        }),
    }
}

/// Validates a requested integer range.
///
/// Equal bounds are rejected: a range must contain at least two values.
///
/// # Errors
///
/// - [`BoundsError::NonIntegerBound`] if either bound is not integral.
/// - [`BoundsError::BoundOutOfRange`] if either bound does not fit in an `i64`.
/// - [`BoundsError::InvertedRange`] if `min >= max`.
pub fn check_int_range(min: &Number, max: &Number) -> Result<IntRange, BoundsError> {
    let (Some(min), Some(max)) = (integral_value(min), integral_value(max)) else {
        return Err(BoundsError::NonIntegerBound);
    };

    let (Ok(min), Ok(max)) = (i64::try_from(min), i64::try_from(max)) else {
        return Err(BoundsError::BoundOutOfRange);
    };

    if min >= max {
        return Err(BoundsError::InvertedRange);
    }

    Ok(IntRange { min, max })
}
