// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source that replays a fixed byte script.
///
/// Each `fill_bytes` call consumes the next `dest.len()` bytes of the script.
/// Once the script cannot cover a request, the call fails with
/// [`EntropyError::EntropyNotAvailable`] and nothing is consumed.
pub struct ScriptedEntropySource {
    script: Vec<u8>,
    cursor: Cell<usize>,
}

impl ScriptedEntropySource {
    /// Creates a source replaying `script` from the start.
    pub fn new(script: Vec<u8>) -> Self {
        Self {
            script,
            cursor: Cell::new(0),
        }
    }

    /// Creates a source replaying `words` as consecutive little-endian `u64`s.
    pub fn from_u64_words(words: &[u64]) -> Self {
        Self::new(words.iter().flat_map(|w| w.to_le_bytes()).collect())
    }

    /// Returns how many script bytes have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor.get()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let start = self.cursor.get();
        let end = start + dest.len();

        let chunk = self
            .script
            .get(start..end)
            .ok_or(EntropyError::EntropyNotAvailable)?;
        dest.copy_from_slice(chunk);
        self.cursor.set(end);

        Ok(())
    }
}
