// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the timer engine

use ft_core::TimerHandle;
use std::any::Any;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where a user closure was running when it panicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackSite {
    /// Completion callback of a timer (also each repeat cycle)
    Complete,
    /// Progress callback of a `run_for` timer
    Progress,
    /// Predicate of a `wait_until`/`wait_while` timer
    Condition,
    /// Call step of a sequence
    SequenceStep,
    /// Completion callback of a sequence
    SequenceComplete,
}

impl CallbackSite {
    pub fn as_str(self) -> &'static str {
        match self {
            CallbackSite::Complete => "complete",
            CallbackSite::Progress => "progress",
            CallbackSite::Condition => "condition",
            CallbackSite::SequenceStep => "sequence_step",
            CallbackSite::SequenceComplete => "sequence_complete",
        }
    }
}

impl fmt::Display for CallbackSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user closure panicked while the engine was running it.
///
/// Faults never stop a tick; they are handed to the scheduler's
/// [`FaultReporter`](crate::FaultReporter) and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{site} callback for {timer} panicked: {message}")]
pub struct CallbackFault {
    /// [`TimerHandle::INVALID`] for sequence call steps, which have no timer
    pub timer: TimerHandle,
    pub site: CallbackSite,
    pub message: String,
}

impl CallbackFault {
    /// Build a fault from a `catch_unwind` payload.
    pub fn from_panic(timer: TimerHandle, site: CallbackSite, payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self {
            timer,
            site,
            message,
        }
    }
}

/// Errors loading a [`SchedulerConfig`](crate::SchedulerConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
