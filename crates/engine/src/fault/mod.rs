// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting of panics raised by user callbacks

mod logged;
mod noop;

pub use logged::TracingFaultReporter;
pub use noop::NoOpFaultReporter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeFaultReporter;

use crate::error::CallbackFault;

/// Sink for callback faults.
///
/// Called synchronously from inside the tick with the registry unlocked, so
/// an implementation may inspect the scheduler but must not block.
pub trait FaultReporter: Send + Sync + 'static {
    fn report(&self, fault: CallbackFault);
}
