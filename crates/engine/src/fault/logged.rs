// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fault reporter that logs through `tracing`

use super::FaultReporter;
use crate::error::CallbackFault;

/// Default reporter: one `error!` event per fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFaultReporter;

impl TracingFaultReporter {
    pub fn new() -> Self {
        Self
    }
}

impl FaultReporter for TracingFaultReporter {
    fn report(&self, fault: CallbackFault) {
        tracing::error!(
            timer = %fault.timer,
            site = %fault.site,
            message = %fault.message,
            "timer callback panicked"
        );
    }
}

#[cfg(test)]
#[path = "logged_tests.rs"]
mod tests;
