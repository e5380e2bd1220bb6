// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_fill_bytes_with_failure() {
    let mut bytes = [0u8; 32];
    let result =
        SystemEntropySource::fill_bytes_with(|_| Err(GetRandomError::UNSUPPORTED), &mut bytes);

    assert!(result.is_err());
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)))
}

#[test]
fn test_fill_bytes_with_skips_backend_for_empty_dest() {
    let mut bytes: [u8; 0] = [];
    let result =
        SystemEntropySource::fill_bytes_with(|_| Err(GetRandomError::UNSUPPORTED), &mut bytes);

    assert!(result.is_ok());
}

#[test]
fn test_fill_bytes_ok() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 32];
    let result = source.fill_bytes(&mut bytes);

    assert!(result.is_ok());
}

#[test]
fn test_fill_bytes_through_reference() {
    let source = SystemEntropySource {};
    let by_ref = &source;
    let mut bytes = [0u8; 16];

    assert!(by_ref.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_system_entropy_source_is_shareable_across_threads() {
    let source = SystemEntropySource {};

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut bytes = [0u8; 32];
                source
                    .fill_bytes(&mut bytes)
                    .expect("Failed to fill_bytes(..) from worker thread");
            });
        }
    });
}
