// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Failure plan for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Every call succeeds with real system entropy.
    None,
    /// Every call fails.
    FailAlways,
    /// Only the Nth call fails (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
    /// Calls succeed until the total bytes served would exceed the budget.
    FailAfterBytes(usize),
}

/// System entropy with failure injection and usage accounting.
///
/// Records how many `fill_bytes` calls were made and how many bytes were
/// actually served, so tests can assert that rejected requests never touch
/// the entropy source.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
    bytes_served: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock following `behaviour`.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            calls: Cell::new(0),
            bytes_served: Cell::new(0),
        }
    }

    /// Replaces the failure plan; counters are kept.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `fill_bytes` calls, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    /// Total bytes handed out by successful calls.
    pub fn bytes_served(&self) -> usize {
        self.bytes_served.get()
    }

    /// Clears both counters.
    pub fn reset_count(&self) {
        self.calls.set(0);
        self.bytes_served.set(0);
    }

    fn should_fail(&self, call: usize, requested: usize) -> bool {
        match self.behaviour {
            MockEntropySourceBehaviour::None => false,
            MockEntropySourceBehaviour::FailAlways => true,
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) => call == n,
            MockEntropySourceBehaviour::FailAfterBytes(budget) => {
                self.bytes_served.get() + requested > budget
            }
        }
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        if self.should_fail(call, dest.len()) {
            return Err(EntropyError::EntropyNotAvailable);
        }

        self.inner.fill_bytes(dest)?;
        self.bytes_served.set(self.bytes_served.get() + dest.len());

        Ok(())
    }
}
