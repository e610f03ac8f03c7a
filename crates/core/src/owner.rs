// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owner tokens for grouped timer control.
//!
//! Timers can be tagged with an owner so that everything belonging to one
//! game object, screen or sequence can be paused, resumed, counted or
//! cancelled together. Owners compare by token only: two callers that each
//! mint an `OwnerId` are never conflated, whatever their payload.

use crate::id::SequentialIds;
use serde::Serialize;
use std::fmt;

static OWNER_IDS: SequentialIds = SequentialIds::new();

/// Opaque, process-unique owner identity.
///
/// Tokens are only created through [`OwnerId::next`], so equality is
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Mint a new owner token.
    pub fn next() -> Self {
        Self(OWNER_IDS.next())
    }

    /// Raw token value, for logging and diagnostics.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner-{}", self.0)
    }
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
