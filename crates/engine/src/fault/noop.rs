// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op fault reporter

use super::FaultReporter;
use crate::error::CallbackFault;

/// Reporter that discards every fault
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFaultReporter;

impl NoOpFaultReporter {
    pub fn new() -> Self {
        Self
    }
}

impl FaultReporter for NoOpFaultReporter {
    fn report(&self, _fault: CallbackFault) {}
}
