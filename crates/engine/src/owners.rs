// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owner to timer-id index

use ft_core::OwnerId;
use std::collections::{HashMap, HashSet};

/// Maps each owner with at least one live timer to the ids of those timers.
///
/// Entries are dropped as soon as an owner's last timer retires, so memory is
/// bounded by owners that currently hold timers.
#[derive(Debug, Default)]
pub(crate) struct OwnerIndex {
    owners: HashMap<OwnerId, HashSet<u64>>,
}

impl OwnerIndex {
    pub fn insert(&mut self, owner: OwnerId, id: u64) {
        self.owners.entry(owner).or_default().insert(id);
    }

    pub fn remove(&mut self, owner: OwnerId, id: u64) {
        if let Some(ids) = self.owners.get_mut(&owner) {
            ids.remove(&id);
            if ids.is_empty() {
                self.owners.remove(&owner);
            }
        }
    }

    /// Ids of live timers for `owner`, in no particular order.
    pub fn ids(&self, owner: OwnerId) -> impl Iterator<Item = u64> + '_ {
        self.owners.get(&owner).into_iter().flatten().copied()
    }

    /// Number of owners holding at least one live timer
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn clear(&mut self) {
        self.owners.clear();
    }
}

#[cfg(test)]
#[path = "owners_tests.rs"]
mod tests;
