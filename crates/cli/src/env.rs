// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::str::FromStr;

fn parse<T: FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}

// --- Driver ---

pub fn fps() -> Option<u32> {
    parse("FT_FPS")
}

pub fn seconds() -> Option<f32> {
    parse("FT_SECONDS")
}

/// Host-level time scale applied before the scheduler's own scale
pub fn time_scale() -> Option<f32> {
    parse("FT_TIME_SCALE")
}

// --- Config file ---

pub fn config_path() -> Option<PathBuf> {
    std::env::var("FT_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Logging ---

/// Log filter directive: FT_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("FT_LOG")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|s| !s.is_empty())
}
