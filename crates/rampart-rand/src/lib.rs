// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Cryptographically secure random generation for the Rampart tool server.
//!
//! Wraps the operating system CSPRNG behind an [`EntropySource`] trait and
//! builds two draws on top of it: fixed-length byte sequences and integers
//! uniformly distributed over an inclusive range.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`draw_bytes`]: `size` bytes of fresh entropy
//! - [`draw_int`]: an `i64` in `min..=max`, free of modulo bias
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{SystemEntropySource, draw_bytes, draw_int};
//!
//! let entropy = SystemEntropySource {};
//!
//! let bytes = draw_bytes(&entropy, 32).expect("Failed to draw bytes");
//! assert_eq!(bytes.len(), 32);
//!
//! let roll = draw_int(&entropy, 1, 6).expect("Failed to draw integer");
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod draw;
mod error;
mod support;
mod system;
mod traits;

pub use draw::{draw_bytes, draw_int, uniform_below};
pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
