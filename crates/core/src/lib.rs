// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ft-core: value types shared by the frame timer engine and its drivers

pub mod clock;
pub mod id;
pub mod owner;
pub mod timer;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::SequentialIds;
pub use owner::OwnerId;
pub use timer::{TimerHandle, TimerKind, TimerState};
