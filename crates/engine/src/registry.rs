// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer registry: pooled records, active collections and indexes.
//!
//! Records live in a [`TimerPool`] and are referenced by slot index from
//! one of three active collections. While a tick is iterating, the
//! collections keep a fixed length: new timers land in `pending_add` and
//! retirements are recorded in `removals`, both applied by
//! [`TimerRegistry::finish_tick`].

use crate::config::SchedulerConfig;
use crate::item::{sanitize_seconds, Bucket, Callback, Hook, TimerItem};
use crate::owners::OwnerIndex;
use crate::pool::{PoolStats, TimerPool};
use ft_core::{OwnerId, TimerHandle, TimerKind, TimerState};
use std::collections::HashMap;

/// Everything needed to populate a pooled record.
pub(crate) struct TimerSpec {
    pub kind: TimerKind,
    pub seconds: f32,
    pub frames: u32,
    pub repeat: bool,
    pub max_repeats: Option<u32>,
    pub callback: Option<Callback>,
    pub hook: Hook,
}

impl TimerSpec {
    pub fn timed(kind: TimerKind, seconds: f32, callback: Option<Callback>) -> Self {
        Self {
            kind,
            seconds: sanitize_seconds(seconds),
            frames: 0,
            repeat: false,
            max_repeats: None,
            callback,
            hook: Hook::None,
        }
    }

    pub fn frames(frames: u32, callback: Option<Callback>) -> Self {
        Self {
            kind: TimerKind::Frame,
            frames,
            ..Self::timed(TimerKind::Frame, 0.0, callback)
        }
    }

    /// Turn into a repeating timer. A `count` of 0 repeats forever.
    pub fn repeating(mut self, count: Option<u32>) -> Self {
        self.repeat = true;
        self.max_repeats = count.filter(|&n| n > 0);
        self
    }

    pub fn with_hook(mut self, hook: Hook) -> Self {
        self.hook = hook;
        self
    }
}

pub(crate) struct TimerRegistry {
    pool: TimerPool,
    active: [Vec<usize>; 3],
    lookup: HashMap<u64, usize>,
    owners: OwnerIndex,
    pending_add: Vec<usize>,
    /// Per-bucket positions to swap-remove at the end of the tick
    removals: [Vec<usize>; 3],
    next_id: u64,
    ticking: bool,
    reset_requested: bool,
    pub time_scale: f32,
    pub global_paused: bool,
    config: SchedulerConfig,
}

impl TimerRegistry {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            pool: TimerPool::seeded(config.initial_pool_size),
            active: Default::default(),
            lookup: HashMap::new(),
            owners: OwnerIndex::default(),
            pending_add: Vec::new(),
            removals: Default::default(),
            next_id: 1,
            ticking: false,
            reset_requested: false,
            time_scale: config.time_scale.max(0.0),
            global_paused: false,
            config: config.clone(),
        }
    }

    /// Register a new timer and return its handle.
    pub fn insert(&mut self, spec: TimerSpec, owner: Option<OwnerId>) -> TimerHandle {
        let slot = self.pool.acquire();
        let id = self.next_id;
        self.next_id += 1;

        let item = &mut self.pool[slot];
        item.id = id;
        item.kind = spec.kind;
        item.state = TimerState::Active;
        item.duration = spec.seconds;
        item.remaining = spec.seconds;
        item.frame_duration = spec.frames;
        item.frame_remaining = spec.frames;
        item.repeat = spec.repeat;
        item.repeat_count = 0;
        item.max_repeats = spec.max_repeats;
        item.callback = spec.callback;
        item.hook = spec.hook;
        item.owner = owner;
        let bucket = item.bucket();

        self.lookup.insert(id, slot);
        if let Some(owner) = owner {
            self.owners.insert(owner, id);
        }
        if self.ticking {
            self.pending_add.push(slot);
        } else {
            self.active[bucket.index()].push(slot);
        }
        TimerHandle::from_raw(id)
    }

    pub fn get(&self, handle: TimerHandle) -> Option<&TimerItem> {
        self.lookup.get(&handle.id()).map(|&slot| &self.pool[slot])
    }

    pub fn get_mut(&mut self, handle: TimerHandle) -> Option<&mut TimerItem> {
        let slot = *self.lookup.get(&handle.id())?;
        Some(&mut self.pool[slot])
    }

    /// Apply `f` to every live timer of `owner`, returning how many it accepted.
    pub fn for_owner(
        &mut self,
        owner: OwnerId,
        mut f: impl FnMut(&mut TimerItem) -> bool,
    ) -> usize {
        let mut changed = 0;
        for id in self.owners.ids(owner) {
            let Some(&slot) = self.lookup.get(&id) else {
                continue;
            };
            if f(&mut self.pool[slot]) {
                changed += 1;
            }
        }
        changed
    }

    pub fn count_for(&self, owner: OwnerId) -> usize {
        self.owners
            .ids(owner)
            .filter_map(|id| self.lookup.get(&id))
            .filter(|&&slot| self.pool[slot].state == TimerState::Active)
            .count()
    }

    /// Number of registered timers, including ones awaiting the next sweep
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Retire every timer. Inside a tick this only cancels them.
    pub fn clear_all(&mut self) {
        if self.ticking {
            self.cancel_everything();
            return;
        }
        for bucket in &mut self.active {
            bucket.clear();
        }
        for slot in self.lookup.drain().map(|(_, slot)| slot) {
            self.pool.release(slot);
        }
        self.owners.clear();
        self.pending_add.clear();
    }

    /// Return to the configured initial state. Inside a tick everything is
    /// cancelled now and the reset happens once the tick finishes.
    pub fn reset(&mut self) -> bool {
        if self.ticking {
            self.cancel_everything();
            self.reset_requested = true;
            return false;
        }
        self.apply_reset();
        true
    }

    fn apply_reset(&mut self) {
        for bucket in &mut self.active {
            bucket.clear();
        }
        for removals in &mut self.removals {
            removals.clear();
        }
        self.lookup.clear();
        self.owners.clear();
        self.pending_add.clear();
        self.pool.reseed(self.config.initial_pool_size);
        self.time_scale = self.config.time_scale.max(0.0);
        self.global_paused = false;
        self.ticking = false;
        self.reset_requested = false;
    }

    fn cancel_everything(&mut self) {
        for &slot in self.lookup.values() {
            self.pool[slot].state = TimerState::Cancelled;
        }
    }

    pub fn begin_tick(&mut self) {
        for removals in &mut self.removals {
            removals.clear();
        }
        self.pending_add.clear();
        self.ticking = true;
    }

    pub fn active_len(&self, bucket: Bucket) -> usize {
        self.active[bucket.index()].len()
    }

    pub fn slot_at(&self, bucket: Bucket, index: usize) -> usize {
        self.active[bucket.index()][index]
    }

    pub fn item_mut(&mut self, slot: usize) -> &mut TimerItem {
        &mut self.pool[slot]
    }

    /// Schedule the record at `index` of `bucket` for removal.
    ///
    /// Each position may be marked at most once per tick, in ascending order.
    pub fn mark_removal(&mut self, bucket: Bucket, index: usize) {
        self.removals[bucket.index()].push(index);
    }

    /// Apply deferred removals and additions collected during the tick.
    pub fn finish_tick(&mut self) {
        self.ticking = false;

        for bucket in Bucket::ALL {
            let b = bucket.index();
            let removals = std::mem::take(&mut self.removals[b]);
            // Descending order keeps the pending positions valid under swap_remove
            for &index in removals.iter().rev() {
                let slot = self.active[b].swap_remove(index);
                self.retire(slot);
            }
            self.removals[b] = removals;
        }

        let pending = std::mem::take(&mut self.pending_add);
        for &slot in &pending {
            let bucket = self.pool[slot].bucket();
            self.active[bucket.index()].push(slot);
        }
        self.pending_add = pending;
        self.pending_add.clear();

        if self.reset_requested {
            self.apply_reset();
        }
    }

    fn retire(&mut self, slot: usize) {
        let item = &self.pool[slot];
        let id = item.id;
        let owner = item.owner;
        self.lookup.remove(&id);
        if let Some(owner) = owner {
            self.owners.remove(owner, id);
        }
        self.pool.release(slot);
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
