// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde::Deserialize;
use serde_json::Number;

use crate::encoding::Encoding;

/// Arguments of `random_generate_bytes`.
///
/// `size` stays an arbitrary JSON number here; the bounds guard decides
/// whether it is an acceptable byte count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ByteRequest {
    /// Requested number of bytes.
    pub size: Number,
    /// Output encoding, `hex` when omitted.
    #[serde(default)]
    pub encoding: Encoding,
}

/// Arguments of `random_generate_int`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntRequest {
    /// Lower bound (inclusive).
    pub min: Number,
    /// Upper bound (inclusive).
    pub max: Number,
}
