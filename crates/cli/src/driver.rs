// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host frame loop driving a scheduler at a fixed frame rate

use crate::output::Transcript;
use ft_core::Clock;
use ft_engine::Scheduler;
use std::time::Duration;

/// Called before each tick with the unscaled seconds elapsed so far
pub type FrameHook = Box<dyn FnMut(&Scheduler, f32)>;

pub struct FrameDriver<C: Clock> {
    scheduler: Scheduler,
    clock: C,
    frame_time: Duration,
    host_time_scale: f32,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(scheduler: Scheduler, clock: C, fps: u32, host_time_scale: f32) -> Self {
        Self {
            scheduler,
            clock,
            frame_time: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            host_time_scale,
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Run `frames` frames.
    ///
    /// `pace` is called once per frame with the frame time and must either
    /// block for it or advance the clock by it. Deltas are measured from the
    /// clock, so a slow real-time frame produces a larger delta.
    pub fn run(
        &self,
        frames: u64,
        transcript: &Transcript,
        mut hook: Option<FrameHook>,
        mut pace: impl FnMut(Duration),
    ) {
        let start = self.clock.now();
        let mut last = start;
        for frame in 1..=frames {
            pace(self.frame_time);
            let now = self.clock.now();
            let unscaled = now.duration_since(last).as_secs_f32();
            let elapsed = now.duration_since(start).as_secs_f32();
            last = now;

            transcript.set_frame(frame, elapsed);
            if let Some(hook) = hook.as_mut() {
                hook(&self.scheduler, elapsed);
            }
            self.scheduler
                .tick(unscaled * self.host_time_scale, unscaled);
        }
        tracing::debug!(
            frames,
            remaining = self.scheduler.active_count(),
            "driver finished"
        );
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
