// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Frame-driven timer engine.
//!
//! A [`Scheduler`] owns pooled timer records and advances them from a single
//! per-frame [`Scheduler::tick`] call made by the host. Timers are created
//! through the [`Schedule`] trait, either directly on the scheduler or on an
//! [`OwnerScope`] for grouped control, and chained with [`Sequence`].

mod config;
mod error;
pub mod fault;
mod item;
mod owners;
mod pool;
mod registry;
mod schedule;
mod scheduler;
mod sequence;
mod tick;

pub use config::{SchedulerConfig, DEFAULT_POOL_SIZE};
pub use error::{CallbackFault, CallbackSite, ConfigError};
pub use fault::{FaultReporter, NoOpFaultReporter, TracingFaultReporter};
pub use pool::PoolStats;
pub use schedule::{OwnerScope, Schedule};
pub use scheduler::Scheduler;
pub use sequence::Sequence;

#[cfg(any(test, feature = "test-support"))]
pub use fault::FakeFaultReporter;

pub use ft_core::{OwnerId, TimerHandle, TimerKind, TimerState};
