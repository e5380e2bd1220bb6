// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ConfigError;

/// Default ceiling for a single `random_generate_bytes` call (1 MiB).
pub const DEFAULT_MAX_BYTE_SIZE: usize = 1_048_576;

/// Process-wide generator limits.
///
/// Built once at startup and moved into [`RandomTools`](crate::RandomTools);
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_byte_size: usize,
}

impl GeneratorConfig {
    /// Creates a configuration with an inclusive per-call byte ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxByteSize`] if `max_byte_size` is zero.
    pub fn new(max_byte_size: usize) -> Result<Self, ConfigError> {
        if max_byte_size == 0 {
            return Err(ConfigError::ZeroMaxByteSize);
        }

        Ok(Self { max_byte_size })
    }

    /// Inclusive upper bound on bytes per call.
    pub fn max_byte_size(&self) -> usize {
        self.max_byte_size
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_byte_size: DEFAULT_MAX_BYTE_SIZE,
        }
    }
}
