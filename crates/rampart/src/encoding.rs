// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

/// Text encoding for generated bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hexadecimal, two characters per byte, no separators.
    #[default]
    Hex,
    /// Standard base64 alphabet with `=` padding.
    Base64,
    /// One character per byte, `0xNN` mapped to `U+00NN` (Latin-1).
    ///
    /// Kept for compatibility. Bytes `0x80..=0xFF` become two-byte UTF-8
    /// sequences and bytes below `0x20` become control characters, so the
    /// output does not survive every text transport unchanged.
    Binary,
}

impl Encoding {
    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Binary => "binary",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `bytes` as text in the given encoding.
pub fn encode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Hex => hex::encode(bytes),
        Encoding::Base64 => STANDARD.encode(bytes),
        Encoding::Binary => bytes.iter().copied().map(char::from).collect(),
    }
}
