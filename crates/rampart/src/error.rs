// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde_json::Number;
use thiserror::Error;

use rampart_rand::EntropyError;

/// Rejections raised by the bounds guard before any entropy is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    /// Byte count is zero, negative, fractional or non-finite.
    #[error("Invalid size: {size}. Size must be a positive integer.")]
    InvalidSize {
        /// The rejected size, as supplied.
        size: Number,
    },

    /// Byte count is above the configured ceiling.
    #[error("Requested size {size} exceeds maximum allowed size of {max} bytes")]
    SizeExceeded {
        /// The rejected size, as supplied.
        size: Number,
        /// The configured ceiling.
        max: usize,
    },

    /// A range bound is not integral.
    #[error("Min and max must be integers")]
    NonIntegerBound,

    /// A range bound is integral but does not fit in an `i64`.
    #[error("Min and max must be within the signed 64-bit integer range")]
    BoundOutOfRange,

    /// `min` is not strictly less than `max`.
    #[error("Min must be less than max")]
    InvertedRange,
}

/// Invalid process configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The byte ceiling must allow at least one byte.
    #[error("Maximum byte size must be at least 1")]
    ZeroMaxByteSize,
}

/// Everything a tool call can fail with.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The request was rejected by the bounds guard.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// The entropy source failed while drawing.
    #[error("Random generation failed: {0}")]
    Generation(#[from] EntropyError),

    /// The arguments did not match the tool's input schema.
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments {
        /// Tool the arguments were meant for.
        tool: &'static str,
        /// Why deserialization failed.
        reason: String,
    },

    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
