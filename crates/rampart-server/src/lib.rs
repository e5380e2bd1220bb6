// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_server
//!
//! Serves the [`rampart`] tools over newline-delimited JSON-RPC 2.0 on
//! stdin/stdout, following the Model Context Protocol tool methods
//! (`initialize`, `ping`, `tools/list`, `tools/call`).
//!
//! Logs go to stderr so they never interleave with protocol frames.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cli;
mod error;
mod logging;
mod protocol;
mod server;

pub use cli::Cli;
pub use error::ServerError;
pub use logging::init_logging;
pub use protocol::{
    DEFAULT_PROTOCOL_VERSION, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use server::Server;
