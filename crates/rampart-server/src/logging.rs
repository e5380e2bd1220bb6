// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use env_logger::{Builder, Env, Target};

/// Installs the stderr logger.
///
/// The default filter is `info` when `verbose`, `warn` otherwise; `RUST_LOG`
/// takes precedence over both. Calling this more than once is a no-op.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stderr)
        .try_init();
}
