// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_none_serves_and_counts() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#1)");
    mock.fill_bytes(&mut buf[..8]).expect("Failed to fill_bytes(..) (#2)");

    assert_eq!(mock.call_count(), 2);
    assert_eq!(mock.bytes_served(), 40);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.bytes_served(), 0);
}

#[test]
fn test_mock_fail_always_serves_nothing() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.bytes_served(), 0);
}

#[test]
fn test_mock_fail_at_nth_only_fails_that_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 16];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(matches!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    ));
    assert!(mock.fill_bytes(&mut buf).is_ok());

    assert_eq!(mock.bytes_served(), 48);
}

#[test]
fn test_mock_fail_after_bytes_budget() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAfterBytes(20));
    let mut buf = [0u8; 8];

    // 8 + 8 fits, a third 8 would make 24
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_err());

    // Whatever is left of the budget is still usable
    assert!(mock.fill_bytes(&mut buf[..4]).is_ok());
    assert_eq!(mock.bytes_served(), 20);
}

#[test]
fn test_mock_change_behaviour_keeps_counters() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 4];

    assert!(mock.fill_bytes(&mut buf).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut buf).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut buf).is_ok());

    assert_eq!(mock.call_count(), 3);
    assert_eq!(mock.bytes_served(), 8);
}
