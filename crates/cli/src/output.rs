// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transcript of scenario events and its text/JSON rendering

use clap::ValueEnum;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One observable event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub frame: u64,
    /// Unscaled seconds since the run started
    pub time: f32,
    pub scenario: &'static str,
    pub message: String,
}

#[derive(Default)]
struct TranscriptState {
    frame: u64,
    time: f32,
    entries: Vec<Entry>,
}

/// Event log shared by scenario callbacks. Clones append to the same log.
#[derive(Clone, Default)]
pub struct Transcript {
    inner: Arc<Mutex<TranscriptState>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp subsequent entries with this frame and time
    pub fn set_frame(&self, frame: u64, time: f32) {
        let mut state = self.inner.lock();
        state.frame = frame;
        state.time = time;
    }

    pub fn record(&self, scenario: &'static str, message: impl Into<String>) {
        let mut state = self.inner.lock();
        let entry = Entry {
            frame: state.frame,
            time: state.time,
            scenario,
            message: message.into(),
        };
        tracing::debug!(scenario, message = %entry.message, "event");
        state.entries.push(entry);
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.inner.lock().entries.clone()
    }
}

pub fn format_entry(entry: &Entry) -> String {
    format!(
        "[frame {} t={:.2}s] {}: {}",
        entry.frame, entry.time, entry.scenario, entry.message
    )
}

/// Render a finished run to stdout.
pub fn print_transcript(entries: &[Entry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                println!("{}", format_entry(entry));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
