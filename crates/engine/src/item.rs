// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pooled timer records

use ft_core::{OwnerId, TimerKind, TimerState};

pub(crate) type Callback = Box<dyn FnMut() + Send>;
pub(crate) type ProgressFn = Box<dyn FnMut(f32) + Send>;
pub(crate) type ConditionFn = Box<dyn FnMut() -> bool + Send>;

/// Active collection a record is iterated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Scheduled,
    Conditional,
    Progress,
}

impl Bucket {
    pub(crate) const ALL: [Bucket; 3] = [Bucket::Scheduled, Bucket::Conditional, Bucket::Progress];

    pub(crate) fn index(self) -> usize {
        match self {
            Bucket::Scheduled => 0,
            Bucket::Conditional => 1,
            Bucket::Progress => 2,
        }
    }
}

/// Closure a record runs besides its completion callback.
///
/// Holding either variant excludes the other, so a record is a plain
/// countdown, a condition poll, or a progress run, never two at once.
#[derive(Default)]
pub(crate) enum Hook {
    #[default]
    None,
    Condition(ConditionFn),
    Progress(ProgressFn),
}

/// Mutable timer record owned by the pool.
///
/// Callers never see these; they hold a `TimerHandle` carrying `id`.
pub(crate) struct TimerItem {
    /// 0 while the record sits in the pool
    pub id: u64,
    pub kind: TimerKind,
    pub state: TimerState,
    pub duration: f32,
    pub remaining: f32,
    pub frame_duration: u32,
    pub frame_remaining: u32,
    pub repeat: bool,
    pub repeat_count: u32,
    /// `None` repeats until cancelled
    pub max_repeats: Option<u32>,
    pub callback: Option<Callback>,
    pub hook: Hook,
    pub owner: Option<OwnerId>,
}

impl Default for TimerItem {
    fn default() -> Self {
        Self {
            id: 0,
            kind: TimerKind::Time,
            state: TimerState::Completed,
            duration: 0.0,
            remaining: 0.0,
            frame_duration: 0,
            frame_remaining: 0,
            repeat: false,
            repeat_count: 0,
            max_repeats: None,
            callback: None,
            hook: Hook::None,
            owner: None,
        }
    }
}

impl TimerItem {
    pub fn bucket(&self) -> Bucket {
        match self.hook {
            Hook::None => Bucket::Scheduled,
            Hook::Condition(_) => Bucket::Conditional,
            Hook::Progress(_) => Bucket::Progress,
        }
    }

    /// Return every field to its pooled default, dropping held closures.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the countdown by one tick. Returns true once it has run out.
    pub fn count_down(&mut self, scaled: f32, unscaled: f32) -> bool {
        match self.kind {
            TimerKind::Time => {
                self.remaining -= scaled;
                self.remaining <= 0.0
            }
            TimerKind::TimeUnscaled => {
                self.remaining -= unscaled;
                self.remaining <= 0.0
            }
            TimerKind::Frame => {
                self.frame_remaining = self.frame_remaining.saturating_sub(1);
                self.frame_remaining == 0
            }
        }
    }

    /// Bookkeeping after a completion callback has run.
    ///
    /// Returns true when the record should retire. Repeating records are
    /// re-armed in place instead: the overshoot of this cycle is carried into
    /// the next one so intervals do not drift, but the countdown never starts
    /// below zero, so a record fires at most once per tick.
    pub fn finish_cycle(&mut self) -> bool {
        if !self.repeat {
            return true;
        }

        self.repeat_count = self.repeat_count.saturating_add(1);
        if self.max_repeats.is_some_and(|max| self.repeat_count >= max) {
            return true;
        }

        self.remaining = (self.duration + self.remaining).max(0.0);
        self.frame_remaining = self.frame_duration;
        false
    }

    /// Progress of a running duration timer, clamped to `[0, 1]`.
    pub fn run_fraction(&self) -> f32 {
        if self.duration.is_infinite() {
            0.0
        } else if self.duration > 0.0 {
            ((self.duration - self.remaining) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn restart(&mut self) {
        self.state = TimerState::Active;
        self.remaining = self.duration;
        self.frame_remaining = self.frame_duration;
        self.repeat_count = 0;
    }

    /// Time left in seconds, or frames left for frame timers.
    pub fn remaining_value(&self) -> f32 {
        match self.kind {
            TimerKind::Frame => self.frame_remaining as f32,
            TimerKind::Time | TimerKind::TimeUnscaled => self.remaining,
        }
    }

    pub fn set_remaining(&mut self, value: f32) {
        let value = value.max(0.0);
        match self.kind {
            TimerKind::Frame => self.frame_remaining = value.ceil() as u32,
            TimerKind::Time | TimerKind::TimeUnscaled => self.remaining = value,
        }
    }

    /// `1 - remaining / duration`, or 1 for zero-length timers.
    pub fn progress(&self) -> f32 {
        match self.kind {
            TimerKind::Frame if self.frame_duration > 0 => {
                1.0 - self.frame_remaining as f32 / self.frame_duration as f32
            }
            TimerKind::Frame => 1.0,
            TimerKind::Time | TimerKind::TimeUnscaled if self.duration.is_infinite() => 0.0,
            TimerKind::Time | TimerKind::TimeUnscaled if self.duration > 0.0 => {
                1.0 - self.remaining / self.duration
            }
            TimerKind::Time | TimerKind::TimeUnscaled => 1.0,
        }
    }
}

/// Normalise a caller-supplied duration in seconds.
///
/// Negative and NaN durations mean "as soon as possible"; infinity is kept
/// and never elapses.
pub(crate) fn sanitize_seconds(seconds: f32) -> f32 {
    if seconds.is_nan() {
        0.0
    } else {
        seconds.max(0.0)
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
