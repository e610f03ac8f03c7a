// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demonstration scenarios installed on a fresh scheduler

use crate::driver::FrameHook;
use crate::output::Transcript;
use clap::ValueEnum;
use ft_engine::{OwnerId, Schedule, Scheduler};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Basic,
    Repeat,
    Progress,
    Conditional,
    Owner,
    Control,
    Global,
    Sequence,
    All,
}

impl Scenario {
    /// Every runnable scenario except `all`
    pub const INDIVIDUAL: [Scenario; 8] = [
        Scenario::Basic,
        Scenario::Repeat,
        Scenario::Progress,
        Scenario::Conditional,
        Scenario::Owner,
        Scenario::Control,
        Scenario::Global,
        Scenario::Sequence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Basic => "basic",
            Scenario::Repeat => "repeat",
            Scenario::Progress => "progress",
            Scenario::Conditional => "conditional",
            Scenario::Owner => "owner",
            Scenario::Control => "control",
            Scenario::Global => "global",
            Scenario::Sequence => "sequence",
            Scenario::All => "all",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Basic => "one-shot timers in seconds, frames and next frame",
            Scenario::Repeat => "a repeating timer limited to three fires",
            Scenario::Progress => "run_for progress reporting and completion",
            Scenario::Conditional => "wait_until and wait_while on a shared counter",
            Scenario::Owner => "cancelling every timer of one owner",
            Scenario::Control => "pausing and resuming a single timer",
            Scenario::Global => "global pause, then resume from the host",
            Scenario::Sequence => "a chained sequence of calls, delays and progress",
            Scenario::All => "every scenario in turn, each on a fresh scheduler",
        }
    }

    /// Seconds to run when none are configured
    pub fn default_seconds(&self) -> f32 {
        match self {
            Scenario::Basic | Scenario::Progress | Scenario::Conditional | Scenario::Owner => 1.0,
            Scenario::Global => 1.5,
            Scenario::Repeat | Scenario::Control | Scenario::Sequence | Scenario::All => 2.0,
        }
    }

    /// Scenarios to run, in order, each on its own scheduler
    pub fn runs(&self) -> &'static [Scenario] {
        match self {
            Scenario::All => &Self::INDIVIDUAL,
            Scenario::Basic => &[Scenario::Basic],
            Scenario::Repeat => &[Scenario::Repeat],
            Scenario::Progress => &[Scenario::Progress],
            Scenario::Conditional => &[Scenario::Conditional],
            Scenario::Owner => &[Scenario::Owner],
            Scenario::Control => &[Scenario::Control],
            Scenario::Global => &[Scenario::Global],
            Scenario::Sequence => &[Scenario::Sequence],
        }
    }

    /// Register the scenario's timers. Returns a hook when the scenario
    /// needs to act from outside the scheduler between frames.
    ///
    /// `All` installs nothing; expand it with [`Scenario::runs`].
    pub fn install(&self, scheduler: &Scheduler, transcript: &Transcript) -> Option<FrameHook> {
        let name = self.as_str();
        match self {
            Scenario::Basic => basic(scheduler, transcript, name),
            Scenario::Repeat => repeat(scheduler, transcript, name),
            Scenario::Progress => progress(scheduler, transcript, name),
            Scenario::Conditional => conditional(scheduler, transcript, name),
            Scenario::Owner => owner(scheduler, transcript, name),
            Scenario::Control => control(scheduler, transcript, name),
            Scenario::Global => return Some(global(scheduler, transcript, name)),
            Scenario::Sequence => sequence(scheduler, transcript, name),
            Scenario::All => {}
        }
        None
    }
}

fn basic(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let t = transcript.clone();
    scheduler.schedule(0.5, move || t.record(name, "fired after 0.5s"));
    let t = transcript.clone();
    scheduler.schedule_frames(3, move || t.record(name, "fired after 3 frames"));
    let t = transcript.clone();
    scheduler.schedule_next_frame(move || t.record(name, "fired on the next frame"));
}

fn repeat(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let t = transcript.clone();
    let mut fires = 0;
    scheduler.repeat_times(0.5, 3, move || {
        fires += 1;
        t.record(name, format!("tick #{fires}"));
    });
}

fn progress(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let t = transcript.clone();
    let done = transcript.clone();
    scheduler.run_for(
        1.0,
        move |p| t.record(name, format!("progress {p:.2}")),
        move || done.record(name, "done"),
    );
}

fn conditional(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let counter = Arc::new(AtomicU32::new(0));

    let c = Arc::clone(&counter);
    scheduler.repeat_times(0.25, 3, move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    let c = Arc::clone(&counter);
    let t = transcript.clone();
    scheduler.wait_while(
        move || c.load(Ordering::SeqCst) < 2,
        move || t.record(name, "counter left the range below 2"),
    );

    let c = Arc::clone(&counter);
    let t = transcript.clone();
    scheduler.wait_until(
        move || c.load(Ordering::SeqCst) >= 3,
        move || t.record(name, "counter reached 3"),
    );
}

fn owner(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let first = scheduler.owned_by(OwnerId::next());
    let second = scheduler.owned_by(OwnerId::next());

    let t = transcript.clone();
    first.repeat(0.25, move || t.record(name, "first owner tick"));
    let t = transcript.clone();
    second.repeat(0.25, move || t.record(name, "second owner tick"));

    let t = transcript.clone();
    scheduler.schedule(0.5, move || {
        let cancelled = first.cancel_all();
        t.record(name, format!("cancelled {cancelled} timer(s) of the first owner"));
    });
}

fn control(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let t = transcript.clone();
    let handle = scheduler.schedule(1.0, move || t.record(name, "fired"));

    let s = scheduler.clone();
    let t = transcript.clone();
    scheduler.schedule(0.25, move || {
        s.pause(handle);
        t.record(name, format!("paused with {:.2}s left", s.remaining(handle)));
    });

    let s = scheduler.clone();
    let t = transcript.clone();
    scheduler.schedule(0.75, move || {
        s.resume(handle);
        t.record(name, format!("resumed with {:.2}s left", s.remaining(handle)));
    });
}

fn global(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) -> FrameHook {
    let t = transcript.clone();
    let mut fires = 0;
    scheduler.repeat(0.25, move || {
        fires += 1;
        t.record(name, format!("tick #{fires}"));
    });

    let s = scheduler.clone();
    let t = transcript.clone();
    scheduler.schedule(0.5, move || {
        s.pause_all();
        t.record(name, "paused everything");
    });

    // Nothing inside the scheduler runs while it is paused, so the host resumes it.
    let t = transcript.clone();
    Box::new(move |scheduler: &Scheduler, elapsed: f32| {
        if elapsed >= 1.0 && scheduler.is_globally_paused() {
            scheduler.resume_all();
            t.record(name, "host resumed everything");
        }
    })
}

fn sequence(scheduler: &Scheduler, transcript: &Transcript, name: &'static str) {
    let record = |message: &'static str| {
        let t = transcript.clone();
        move || t.record(name, message)
    };
    let t = transcript.clone();

    scheduler
        .sequence()
        .call(record("started"))
        .delay(0.5)
        .call(record("after 0.5s delay"))
        .delay_frames(2)
        .call(record("after 2 frames"))
        .run_for(0.5, move |p| t.record(name, format!("progress {p:.2}")))
        .call(record("last step"))
        .on_complete(record("complete"))
        .start();
}

#[cfg(test)]
#[path = "scenarios_tests.rs"]
mod tests;
