// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-frame tick loop.
//!
//! The registry lock is held for the whole tick and released only around
//! user closures, which are moved out of their record while they run. That
//! lets callbacks schedule, cancel or query timers through any clone of the
//! scheduler. Structural changes are deferred until the tick finishes.

use crate::error::CallbackSite;
use crate::item::{sanitize_seconds, Bucket, Hook, TimerItem};
use crate::registry::TimerRegistry;
use crate::Scheduler;
use ft_core::{TimerHandle, TimerState};
use parking_lot::MutexGuard;
use std::mem;

type Guard<'a> = MutexGuard<'a, TimerRegistry>;

impl Scheduler {
    /// Advance every timer by one frame.
    ///
    /// `delta` is the host's scaled frame time and is further multiplied by
    /// the global time scale; `unscaled_delta` drives unscaled timers as-is.
    /// Does nothing while globally paused. A call made from inside a
    /// callback is ignored.
    pub fn tick(&self, delta: f32, unscaled_delta: f32) {
        let mut registry = self.registry.lock();
        if registry.is_ticking() {
            tracing::warn!("tick called from inside a timer callback; ignored");
            return;
        }
        if registry.global_paused {
            return;
        }

        let scaled = sanitize_seconds(delta) * registry.time_scale;
        let unscaled = sanitize_seconds(unscaled_delta);

        registry.begin_tick();
        self.tick_scheduled(&mut registry, scaled, unscaled);
        self.tick_conditional(&mut registry);
        self.tick_progress(&mut registry, scaled, unscaled);
        registry.finish_tick();
    }

    fn tick_scheduled(&self, registry: &mut Guard<'_>, scaled: f32, unscaled: f32) {
        let bucket = Bucket::Scheduled;
        for index in 0..registry.active_len(bucket) {
            let slot = registry.slot_at(bucket, index);
            let item = registry.item_mut(slot);
            if item.state.is_retired() {
                registry.mark_removal(bucket, index);
                continue;
            }
            if item.state.is_inactive() || !item.count_down(scaled, unscaled) {
                continue;
            }

            self.fire(registry, slot);

            let item = registry.item_mut(slot);
            if item.state.is_retired() {
                registry.mark_removal(bucket, index);
            } else if item.finish_cycle() {
                item.state = TimerState::Completed;
                registry.mark_removal(bucket, index);
            }
        }
    }

    fn tick_conditional(&self, registry: &mut Guard<'_>) {
        let bucket = Bucket::Conditional;
        for index in 0..registry.active_len(bucket) {
            let slot = registry.slot_at(bucket, index);
            let item = registry.item_mut(slot);
            if item.state.is_retired() {
                registry.mark_removal(bucket, index);
                continue;
            }
            if item.state.is_inactive() {
                continue;
            }
            let Hook::Condition(mut condition) = mem::take(&mut item.hook) else {
                continue;
            };
            let handle = TimerHandle::from_raw(item.id);

            let met = Guard::unlocked(registry, || {
                self.guarded(handle, CallbackSite::Condition, &mut condition)
            });

            let item = registry.item_mut(slot);
            item.hook = Hook::Condition(condition);
            match met {
                Some(false) => {}
                None => {
                    item.state = TimerState::Cancelled;
                    registry.mark_removal(bucket, index);
                }
                Some(true) => {
                    if !item.state.is_retired() {
                        self.fire(registry, slot);
                        complete(registry.item_mut(slot));
                    }
                    registry.mark_removal(bucket, index);
                }
            }
        }
    }

    fn tick_progress(&self, registry: &mut Guard<'_>, scaled: f32, unscaled: f32) {
        let bucket = Bucket::Progress;
        for index in 0..registry.active_len(bucket) {
            let slot = registry.slot_at(bucket, index);
            let item = registry.item_mut(slot);
            if item.state.is_retired() {
                registry.mark_removal(bucket, index);
                continue;
            }
            if item.state.is_inactive() {
                continue;
            }

            let finished = item.count_down(scaled, unscaled);
            let fraction = if finished { 1.0 } else { item.run_fraction() };
            let handle = TimerHandle::from_raw(item.id);
            if let Hook::Progress(mut on_progress) = mem::take(&mut item.hook) {
                Guard::unlocked(registry, || {
                    self.guarded(handle, CallbackSite::Progress, || on_progress(fraction))
                });
                registry.item_mut(slot).hook = Hook::Progress(on_progress);
            }
            if !finished {
                continue;
            }

            if !registry.item_mut(slot).state.is_retired() {
                self.fire(registry, slot);
                complete(registry.item_mut(slot));
            }
            registry.mark_removal(bucket, index);
        }
    }

    /// Invoke the completion callback of the record in `slot`, if any.
    fn fire(&self, registry: &mut Guard<'_>, slot: usize) {
        let item = registry.item_mut(slot);
        let handle = TimerHandle::from_raw(item.id);
        let Some(mut callback) = item.callback.take() else {
            return;
        };
        Guard::unlocked(registry, || {
            self.guarded(handle, CallbackSite::Complete, &mut callback)
        });
        registry.item_mut(slot).callback = Some(callback);
    }
}

/// Mark a fired one-shot as completed unless its callback cancelled it.
fn complete(item: &mut TimerItem) {
    if item.state != TimerState::Cancelled {
        item.state = TimerState::Completed;
    }
}

#[cfg(test)]
#[path = "tick_tests.rs"]
mod tests;
