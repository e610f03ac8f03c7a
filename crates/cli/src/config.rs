// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver configuration: flags over environment over config file over defaults

use anyhow::{bail, Context, Result};
use ft_engine::SchedulerConfig;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FPS: u32 = 60;

/// Contents of a `--config` / `FT_CONFIG` TOML file
///
/// ```toml
/// [driver]
/// fps = 30
///
/// [scheduler]
/// time_scale = 0.5
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub driver: Overrides,
    pub scheduler: SchedulerConfig,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content)?;
        file.scheduler.validate()?;
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

/// One layer of optional driver settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub fps: Option<u32>,
    pub seconds: Option<f32>,
    pub host_time_scale: Option<f32>,
    pub realtime: Option<bool>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            fps: crate::env::fps(),
            seconds: crate::env::seconds(),
            host_time_scale: crate::env::time_scale(),
            realtime: None,
        }
    }

    /// Fill unset fields from `lower`.
    pub fn or(self, lower: Overrides) -> Self {
        Self {
            fps: self.fps.or(lower.fps),
            seconds: self.seconds.or(lower.seconds),
            host_time_scale: self.host_time_scale.or(lower.host_time_scale),
            realtime: self.realtime.or(lower.realtime),
        }
    }
}

/// Fully resolved driver settings
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub fps: u32,
    /// `None` runs the scenario for its own default length
    pub seconds: Option<f32>,
    pub host_time_scale: f32,
    pub realtime: bool,
}

impl DriverConfig {
    pub fn resolve(layers: Overrides) -> Result<Self> {
        let config = Self {
            fps: layers.fps.unwrap_or(DEFAULT_FPS),
            seconds: layers.seconds,
            host_time_scale: layers.host_time_scale.unwrap_or(1.0),
            realtime: layers.realtime.unwrap_or(false),
        };
        if config.fps == 0 {
            bail!("fps must be at least 1");
        }
        if let Some(seconds) = config.seconds {
            if !seconds.is_finite() || seconds < 0.0 {
                bail!("seconds must be finite and >= 0, got {seconds}");
            }
        }
        if !config.host_time_scale.is_finite() || config.host_time_scale < 0.0 {
            bail!(
                "time scale must be finite and >= 0, got {}",
                config.host_time_scale
            );
        }
        Ok(config)
    }

    /// Number of frames covering `seconds` at this frame rate
    pub fn frames_for(&self, seconds: f32) -> u64 {
        (f64::from(seconds) * f64::from(self.fps)).ceil() as u64
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
