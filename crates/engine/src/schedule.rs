// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduling entry points shared by the scheduler and owner scopes

use crate::item::Hook;
use crate::registry::TimerSpec;
use crate::Scheduler;
use ft_core::{OwnerId, TimerHandle, TimerKind};

/// Every way of creating a timer.
///
/// Implemented by [`Scheduler`] (timers without an owner) and by
/// [`OwnerScope`] (timers tagged with an owner for grouped control). All
/// methods return a fresh, valid handle; durations are in seconds, and
/// negative or NaN durations behave like zero.
pub trait Schedule {
    /// Scheduler the timers are registered with
    fn scheduler(&self) -> &Scheduler;

    /// Owner new timers are tagged with
    fn owner(&self) -> Option<OwnerId>;

    /// Fire `callback` once after `delay` seconds of scaled time.
    fn schedule<F>(&self, delay: f32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::timed(TimerKind::Time, delay, Some(Box::new(callback)));
        self.scheduler().register(spec, self.owner())
    }

    /// Fire `callback` once after `delay` seconds of unscaled time.
    fn schedule_unscaled<F>(&self, delay: f32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::timed(TimerKind::TimeUnscaled, delay, Some(Box::new(callback)));
        self.scheduler().register(spec, self.owner())
    }

    /// Fire `callback` once after `frames` ticks.
    fn schedule_frames<F>(&self, frames: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::frames(frames, Some(Box::new(callback)));
        self.scheduler().register(spec, self.owner())
    }

    /// Fire `callback` on the next tick.
    fn schedule_next_frame<F>(&self, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        self.schedule_frames(1, callback)
    }

    /// Fire `callback` every `interval` seconds of scaled time until cancelled.
    fn repeat<F>(&self, interval: f32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        self.register_repeat(TimerKind::Time, interval, None, Box::new(callback))
    }

    /// Fire `callback` `count` times, `interval` seconds apart. A `count`
    /// of 0 repeats until cancelled.
    fn repeat_times<F>(&self, interval: f32, count: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        self.register_repeat(TimerKind::Time, interval, Some(count), Box::new(callback))
    }

    fn repeat_unscaled<F>(&self, interval: f32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        self.register_repeat(TimerKind::TimeUnscaled, interval, None, Box::new(callback))
    }

    fn repeat_unscaled_times<F>(&self, interval: f32, count: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        self.register_repeat(
            TimerKind::TimeUnscaled,
            interval,
            Some(count),
            Box::new(callback),
        )
    }

    /// Fire `callback` every `frames` ticks until cancelled.
    fn repeat_frames<F>(&self, frames: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::frames(frames, Some(Box::new(callback))).repeating(None);
        self.scheduler().register(spec, self.owner())
    }

    fn repeat_frames_times<F>(&self, frames: u32, count: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::frames(frames, Some(Box::new(callback))).repeating(Some(count));
        self.scheduler().register(spec, self.owner())
    }

    /// Poll `condition` once per tick and fire `callback` the first time it
    /// returns true.
    fn wait_until<C, F>(&self, condition: C, callback: F) -> TimerHandle
    where
        C: FnMut() -> bool + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        let spec = TimerSpec::frames(1, Some(Box::new(callback)))
            .repeating(None)
            .with_hook(Hook::Condition(Box::new(condition)));
        self.scheduler().register(spec, self.owner())
    }

    /// Poll `condition` once per tick and fire `callback` the first time it
    /// returns false.
    fn wait_while<C, F>(&self, mut condition: C, callback: F) -> TimerHandle
    where
        C: FnMut() -> bool + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        self.wait_until(move || !condition(), callback)
    }

    /// Report progress in `[0, 1]` every tick for `duration` seconds of
    /// scaled time, then fire `on_complete`. The last progress value is
    /// exactly 1.0.
    fn run_for<P, F>(&self, duration: f32, on_progress: P, on_complete: F) -> TimerHandle
    where
        P: FnMut(f32) + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        self.register_run(TimerKind::Time, duration, Box::new(on_progress), Box::new(on_complete))
    }

    fn run_for_unscaled<P, F>(&self, duration: f32, on_progress: P, on_complete: F) -> TimerHandle
    where
        P: FnMut(f32) + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        self.register_run(
            TimerKind::TimeUnscaled,
            duration,
            Box::new(on_progress),
            Box::new(on_complete),
        )
    }

    #[doc(hidden)]
    fn register_repeat(
        &self,
        kind: TimerKind,
        interval: f32,
        count: Option<u32>,
        callback: Box<dyn FnMut() + Send>,
    ) -> TimerHandle {
        let spec = TimerSpec::timed(kind, interval, Some(callback)).repeating(count);
        self.scheduler().register(spec, self.owner())
    }

    #[doc(hidden)]
    fn register_run(
        &self,
        kind: TimerKind,
        duration: f32,
        on_progress: Box<dyn FnMut(f32) + Send>,
        on_complete: Box<dyn FnMut() + Send>,
    ) -> TimerHandle {
        let spec = TimerSpec::timed(kind, duration, Some(on_complete))
            .with_hook(Hook::Progress(on_progress));
        self.scheduler().register(spec, self.owner())
    }
}

impl Schedule for Scheduler {
    fn scheduler(&self) -> &Scheduler {
        self
    }

    fn owner(&self) -> Option<OwnerId> {
        None
    }
}

/// View of a scheduler that tags every new timer with one owner.
///
/// Obtained from [`Scheduler::owned_by`]; cheap to create and clone.
#[derive(Clone)]
pub struct OwnerScope {
    scheduler: Scheduler,
    owner: OwnerId,
}

impl OwnerScope {
    pub(crate) fn new(scheduler: Scheduler, owner: OwnerId) -> Self {
        Self { scheduler, owner }
    }

    pub fn id(&self) -> OwnerId {
        self.owner
    }

    pub fn cancel_all(&self) -> usize {
        self.scheduler.cancel_owner(self.owner)
    }

    pub fn pause_all(&self) -> usize {
        self.scheduler.pause_owner(self.owner)
    }

    pub fn resume_all(&self) -> usize {
        self.scheduler.resume_owner(self.owner)
    }

    /// Number of this owner's timers that are currently active
    pub fn count(&self) -> usize {
        self.scheduler.count_for(self.owner)
    }
}

impl Schedule for OwnerScope {
    fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn owner(&self) -> Option<OwnerId> {
        Some(self.owner)
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
