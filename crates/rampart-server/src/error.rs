// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use thiserror::Error;

use rampart::ConfigError;

/// Faults that end the server process.
///
/// Per-request failures never surface here; they are answered in-band.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Reading from or writing to the transport failed.
    #[error("transport I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The startup configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A response frame could not be serialized.
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
