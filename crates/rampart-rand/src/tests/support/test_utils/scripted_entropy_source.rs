// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::ScriptedEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_scripted_entropy_source_replays_in_order() {
    let source = ScriptedEntropySource::new(vec![1, 2, 3, 4, 5]);
    let mut first = [0u8; 2];
    let mut second = [0u8; 3];

    source.fill_bytes(&mut first).expect("Failed to fill_bytes(..) (#1)");
    source.fill_bytes(&mut second).expect("Failed to fill_bytes(..) (#2)");

    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 4, 5]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_scripted_entropy_source_fails_when_exhausted() {
    let source = ScriptedEntropySource::new(vec![7, 8]);
    let mut buf = [0u8; 3];

    let result = source.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    // A failed call consumes nothing
    assert_eq!(source.remaining(), 2);
}

#[test]
fn test_scripted_entropy_source_from_u64_words_is_little_endian() {
    let source = ScriptedEntropySource::from_u64_words(&[0x0102030405060708]);
    let mut buf = [0u8; 8];

    source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
}
