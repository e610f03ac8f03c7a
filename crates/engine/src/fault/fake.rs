// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording fault reporter for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use super::FaultReporter;
use crate::error::CallbackFault;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every fault it receives. Clones share the same record.
#[derive(Clone, Default)]
pub struct FakeFaultReporter {
    faults: Arc<Mutex<Vec<CallbackFault>>>,
}

impl FakeFaultReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All faults reported so far, oldest first
    pub fn faults(&self) -> Vec<CallbackFault> {
        self.faults.lock().clone()
    }
}

impl FaultReporter for FakeFaultReporter {
    fn report(&self, fault: CallbackFault) {
        self.faults.lock().push(fault);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
