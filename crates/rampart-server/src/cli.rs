// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use clap::Parser;

use rampart::{ConfigError, DEFAULT_MAX_BYTE_SIZE, GeneratorConfig};

/// Command-line options of `rampart-server`.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Cryptographically secure random generation tools over stdio")]
pub struct Cli {
    /// Maximum number of bytes a single request may generate.
    #[arg(long, env = "RAMPART_MAX_BYTE_SIZE", default_value_t = DEFAULT_MAX_BYTE_SIZE)]
    pub max_byte_size: usize,

    /// Emit informational diagnostics on stderr.
    #[arg(short, long, env = "RAMPART_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Builds the process-wide generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxByteSize`] if `--max-byte-size` is zero.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        GeneratorConfig::new(self.max_byte_size)
    }
}
