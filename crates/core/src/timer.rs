// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer value types: handles, kinds and lifecycle states.
//!
//! A [`TimerHandle`] is the only thing callers ever hold for a scheduled
//! timer. The record behind it lives in the engine's pool and is recycled
//! once the timer retires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to one scheduled timer.
///
/// The handle wraps the timer's id, which is drawn from a monotonically
/// increasing counter and never reused, so a handle that outlives its timer
/// simply stops resolving. [`TimerHandle::INVALID`] is the default value and
/// is never returned by a successful scheduling call.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Handle that never resolves to a timer.
    pub const INVALID: Self = Self(0);

    /// Wrap a raw timer id.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw timer id (0 for [`TimerHandle::INVALID`]).
    pub const fn id(self) -> u64 {
        self.0
    }

    /// True for any handle other than [`TimerHandle::INVALID`].
    ///
    /// A valid handle may still refer to a timer that has already retired.
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "timer-{}", self.0)
        } else {
            f.write_str("timer-invalid")
        }
    }
}

/// Which clock drives a timer's countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Scaled delta time (host scale times the global time scale)
    #[default]
    Time,
    /// Wall-clock delta, unaffected by any time scale
    TimeUnscaled,
    /// One unit per tick
    Frame,
}

impl TimerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerKind::Time => "time",
            TimerKind::TimeUnscaled => "time_unscaled",
            TimerKind::Frame => "frame",
        }
    }
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a timer record.
///
/// Pooled records rest in `Completed`, which is why it is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Active,
    Paused,
    Cancelled,
    #[default]
    Completed,
}

impl TimerState {
    /// Anything but `Active`: the tick loop skips these without counting down.
    pub fn is_inactive(self) -> bool {
        !matches!(self, TimerState::Active)
    }

    /// Cancelled or completed: swept back into the pool by the next tick.
    pub fn is_retired(self) -> bool {
        matches!(self, TimerState::Cancelled | TimerState::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerState::Active => "active",
            TimerState::Paused => "paused",
            TimerState::Cancelled => "cancelled",
            TimerState::Completed => "completed",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
