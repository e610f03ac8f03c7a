// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public scheduler API: handle and owner control, global settings

use crate::config::SchedulerConfig;
use crate::error::{CallbackFault, CallbackSite};
use crate::fault::{FaultReporter, TracingFaultReporter};
use crate::pool::PoolStats;
use crate::registry::{TimerRegistry, TimerSpec};
use crate::schedule::OwnerScope;
use crate::sequence::Sequence;
use ft_core::{OwnerId, TimerHandle, TimerState};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, trace};

/// Frame-driven timer scheduler.
///
/// Cloning is cheap and every clone drives the same timers, so callbacks can
/// capture a clone to reschedule or cancel from inside a tick. Unknown or
/// expired handles are never an error: control methods return `false` or
/// `0.0` for them.
#[derive(Clone)]
pub struct Scheduler {
    pub(crate) registry: Arc<Mutex<TimerRegistry>>,
    reporter: Arc<dyn FaultReporter>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Scheduler with default configuration that logs callback faults
    pub fn new() -> Self {
        Self::with_config(&SchedulerConfig::default())
    }

    pub fn with_config(config: &SchedulerConfig) -> Self {
        Self::with_reporter(config, TracingFaultReporter)
    }

    pub fn with_reporter(config: &SchedulerConfig, reporter: impl FaultReporter) -> Self {
        Self {
            registry: Arc::new(Mutex::new(TimerRegistry::new(config))),
            reporter: Arc::new(reporter),
        }
    }

    pub(crate) fn register(&self, spec: TimerSpec, owner: Option<OwnerId>) -> TimerHandle {
        let kind = spec.kind;
        let handle = self.registry.lock().insert(spec, owner);
        trace!(timer = %handle, %kind, owner = ?owner.map(|o| o.raw()), "timer scheduled");
        handle
    }

    /// Scope whose scheduling calls tag timers with `owner`
    pub fn owned_by(&self, owner: OwnerId) -> OwnerScope {
        OwnerScope::new(self.clone(), owner)
    }

    /// Start building a sequence driven by this scheduler
    pub fn sequence(&self) -> Sequence {
        Sequence::new(self.clone())
    }

    /// Run a user closure, reporting a panic instead of propagating it.
    pub(crate) fn guarded<R>(
        &self,
        timer: TimerHandle,
        site: CallbackSite,
        f: impl FnOnce() -> R,
    ) -> Option<R> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Some(value),
            Err(payload) => {
                self.reporter
                    .report(CallbackFault::from_panic(timer, site, payload.as_ref()));
                None
            }
        }
    }

    // -- handle control --

    pub fn cancel(&self, handle: TimerHandle) -> bool {
        let mut registry = self.registry.lock();
        let Some(item) = registry.get_mut(handle) else {
            return false;
        };
        item.state = TimerState::Cancelled;
        trace!(timer = %handle, "timer cancelled");
        true
    }

    /// Pause an active timer. Returns false if it is not active.
    pub fn pause(&self, handle: TimerHandle) -> bool {
        self.transition(handle, TimerState::Active, TimerState::Paused)
    }

    /// Resume a paused timer. Returns false if it is not paused.
    pub fn resume(&self, handle: TimerHandle) -> bool {
        self.transition(handle, TimerState::Paused, TimerState::Active)
    }

    fn transition(&self, handle: TimerHandle, from: TimerState, to: TimerState) -> bool {
        let mut registry = self.registry.lock();
        match registry.get_mut(handle) {
            Some(item) if item.state == from => {
                item.state = to;
                trace!(timer = %handle, %to, "timer state changed");
                true
            }
            _ => false,
        }
    }

    /// Rewind to the full duration, clear the repeat count and reactivate.
    pub fn restart(&self, handle: TimerHandle) -> bool {
        let mut registry = self.registry.lock();
        let Some(item) = registry.get_mut(handle) else {
            return false;
        };
        item.restart();
        trace!(timer = %handle, "timer restarted");
        true
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.state_of(handle) == Some(TimerState::Active)
    }

    pub fn is_paused(&self, handle: TimerHandle) -> bool {
        self.state_of(handle) == Some(TimerState::Paused)
    }

    /// True until the timer has been swept back into the pool.
    pub fn exists(&self, handle: TimerHandle) -> bool {
        self.registry.lock().get(handle).is_some()
    }

    pub fn state_of(&self, handle: TimerHandle) -> Option<TimerState> {
        self.registry.lock().get(handle).map(|item| item.state)
    }

    /// Seconds left, or frames left for frame timers. 0 if unknown.
    pub fn remaining(&self, handle: TimerHandle) -> f32 {
        self.registry
            .lock()
            .get(handle)
            .map_or(0.0, |item| item.remaining_value())
    }

    /// Overwrite the time left (frames for frame timers), clamped to >= 0.
    pub fn set_remaining(&self, handle: TimerHandle, value: f32) -> bool {
        let mut registry = self.registry.lock();
        let Some(item) = registry.get_mut(handle) else {
            return false;
        };
        item.set_remaining(value);
        true
    }

    /// `1 - remaining / duration`, 1 for zero-length timers, 0 if unknown.
    pub fn progress(&self, handle: TimerHandle) -> f32 {
        self.registry
            .lock()
            .get(handle)
            .map_or(0.0, |item| item.progress())
    }

    // -- owner control --

    /// Cancel every timer of `owner`. Returns how many were cancelled.
    pub fn cancel_owner(&self, owner: OwnerId) -> usize {
        let cancelled = self.registry.lock().for_owner(owner, |item| {
            if item.state.is_retired() {
                return false;
            }
            item.state = TimerState::Cancelled;
            true
        });
        debug!(%owner, cancelled, "owner timers cancelled");
        cancelled
    }

    pub fn pause_owner(&self, owner: OwnerId) -> usize {
        let paused = self.registry.lock().for_owner(owner, |item| {
            if item.state != TimerState::Active {
                return false;
            }
            item.state = TimerState::Paused;
            true
        });
        debug!(%owner, paused, "owner timers paused");
        paused
    }

    pub fn resume_owner(&self, owner: OwnerId) -> usize {
        let resumed = self.registry.lock().for_owner(owner, |item| {
            if item.state != TimerState::Paused {
                return false;
            }
            item.state = TimerState::Active;
            true
        });
        debug!(%owner, resumed, "owner timers resumed");
        resumed
    }

    /// Number of `owner`'s timers that are currently active
    pub fn count_for(&self, owner: OwnerId) -> usize {
        self.registry.lock().count_for(owner)
    }

    /// Number of owners with at least one live timer
    pub fn owner_count(&self) -> usize {
        self.registry.lock().owner_count()
    }

    // -- global control --

    /// Freeze every timer. Ticks become no-ops until [`Self::resume_all`].
    pub fn pause_all(&self) {
        self.set_global_paused(true);
    }

    pub fn resume_all(&self) {
        self.set_global_paused(false);
    }

    pub fn is_globally_paused(&self) -> bool {
        self.registry.lock().global_paused
    }

    pub fn set_global_paused(&self, paused: bool) {
        self.registry.lock().global_paused = paused;
        debug!(paused, "global pause changed");
    }

    pub fn time_scale(&self) -> f32 {
        self.registry.lock().time_scale
    }

    /// Set the multiplier applied to scaled timers. Negative values clamp to 0.
    pub fn set_time_scale(&self, scale: f32) {
        let scale = if scale.is_nan() { 0.0 } else { scale.max(0.0) };
        self.registry.lock().time_scale = scale;
        debug!(scale, "time scale changed");
    }

    /// Drop every timer without firing callbacks.
    ///
    /// From inside a tick the timers are cancelled and swept at its end.
    pub fn clear_all(&self) {
        self.registry.lock().clear_all();
        debug!("all timers cleared");
    }

    /// Return to the configured initial state: no timers, configured time
    /// scale, not paused, freshly seeded pool. Handles issued before the
    /// reset never resolve again.
    pub fn reset(&self) {
        if self.registry.lock().reset() {
            debug!("scheduler reset");
        } else {
            tracing::warn!("reset requested during a tick; deferred to the end of the tick");
        }
    }

    /// Registered timers, including cancelled ones not yet swept
    pub fn active_count(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.registry.lock().pool_stats()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
