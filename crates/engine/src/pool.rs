// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slot arena recycling timer records

use crate::item::TimerItem;
use serde::Serialize;
use std::ops::{Index, IndexMut};

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Records created so far, live or free
    pub allocated: usize,
    /// Records waiting in the free list
    pub available: usize,
}

/// Arena of timer records addressed by stable slot index.
///
/// Records are never freed individually: retiring a timer resets its slot
/// and pushes the index onto the free list for the next acquisition.
pub(crate) struct TimerPool {
    slots: Vec<TimerItem>,
    free: Vec<usize>,
}

impl TimerPool {
    /// Create a pool pre-filled with `seed` free records.
    pub fn seeded(seed: usize) -> Self {
        let mut pool = Self {
            slots: Vec::with_capacity(seed),
            free: Vec::with_capacity(seed),
        };
        pool.reseed(seed);
        pool
    }

    /// Drop every record and start over with `seed` free ones.
    pub fn reseed(&mut self, seed: usize) {
        self.slots.clear();
        self.slots.resize_with(seed, TimerItem::default);
        self.free.clear();
        // Lowest index on top so slots are handed out in order
        self.free.extend((0..seed).rev());
    }

    /// Take a free slot, growing the arena only when the free list is empty.
    pub fn acquire(&mut self) -> usize {
        if let Some(slot) = self.free.pop() {
            return slot;
        }
        self.slots.push(TimerItem::default());
        self.slots.len() - 1
    }

    /// Reset a slot and return it to the free list.
    ///
    /// The caller must already have unlinked the slot from every collection.
    pub fn release(&mut self, slot: usize) {
        debug_assert!(!self.free.contains(&slot), "slot {slot} released twice");
        self.slots[slot].reset();
        self.free.push(slot);
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocated: self.slots.len(),
            available: self.free.len(),
        }
    }
}

impl Index<usize> for TimerPool {
    type Output = TimerItem;

    fn index(&self, slot: usize) -> &TimerItem {
        &self.slots[slot]
    }
}

impl IndexMut<usize> for TimerPool {
    fn index_mut(&mut self, slot: usize) -> &mut TimerItem {
        &mut self.slots[slot]
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
