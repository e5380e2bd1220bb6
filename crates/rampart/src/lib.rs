// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart
//!
//! Bounds-checked cryptographic random generation exposed as two named tools.
//!
//! A request travels through three stages:
//!
//! 1. **Bounds guard** ([`check_byte_size`], [`check_int_range`]): rejects
//!    untrusted sizes and ranges before any entropy is drawn.
//! 2. **Random source**: [`rampart_rand::draw_bytes`] and
//!    [`rampart_rand::draw_int`] over an [`EntropySource`].
//! 3. **Formatter** ([`encode`]): renders bytes as hex, base64 or binary text.
//!
//! [`RandomTools`] wires the stages together and turns every outcome into a
//! [`ResponseEnvelope`], so a bad request never escapes as a fault.
//!
//! ## Example
//!
//! ```rust
//! use rampart::{GeneratorConfig, RandomTools, ResponseEnvelope};
//! use rampart_rand::SystemEntropySource;
//! use serde_json::json;
//!
//! let tools = RandomTools::new(GeneratorConfig::default(), SystemEntropySource {});
//!
//! let envelope = tools.call("random_generate_int", json!({ "min": 1, "max": 6 }));
//! assert!(matches!(envelope, ResponseEnvelope::Success(_)));
//!
//! let envelope = tools.call("random_generate_int", json!({ "min": 10, "max": 10 }));
//! assert_eq!(envelope.text(), "Error: Min must be less than max");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod bounds;
mod config;
mod encoding;
mod envelope;
mod error;
mod requests;
mod tools;

pub use bounds::{IntRange, check_byte_size, check_int_range};
pub use config::{DEFAULT_MAX_BYTE_SIZE, GeneratorConfig};
pub use encoding::{Encoding, encode};
pub use envelope::ResponseEnvelope;
pub use error::{BoundsError, ConfigError, ToolError};
pub use requests::{ByteRequest, IntRequest};
pub use tools::{GENERATE_BYTES, GENERATE_INT, RandomTools, ToolDefinition};

pub use rampart_rand::EntropySource;
