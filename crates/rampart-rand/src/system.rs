// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// The operating system CSPRNG, read through `getrandom`.
///
/// Holds no state and cannot be seeded: every call asks the OS for fresh
/// entropy, so one value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Runs `fill` over `dest`, folding any backend error into
    /// [`EntropyError::EntropyNotAvailable`].
    pub(crate) fn fill_bytes_with<F>(fill: F, dest: &mut [u8]) -> Result<(), EntropyError>
    where
        F: FnOnce(&mut [u8]) -> Result<(), GetRandomError>,
    {
        if dest.is_empty() {
            return Ok(());
        }

        fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(getrandom::fill, dest)
    }
}
