// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Uniform result of every tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    /// The call succeeded; carries the full response text.
    Success(String),
    /// The call was rejected or failed; carries the bare error message.
    Failure(String),
}

impl ResponseEnvelope {
    /// Builds a failure envelope from any displayable error.
    pub fn failure(error: impl fmt::Display) -> Self {
        ResponseEnvelope::Failure(error.to_string())
    }

    /// Returns `true` for [`ResponseEnvelope::Failure`].
    pub fn is_error(&self) -> bool {
        matches!(self, ResponseEnvelope::Failure(_))
    }

    /// Text delivered to the caller. Failures are prefixed with `Error: `.
    pub fn text(&self) -> String {
        match self {
            ResponseEnvelope::Success(text) => text.clone(),
            ResponseEnvelope::Failure(message) => format!("Error: {message}"),
        }
    }
}
