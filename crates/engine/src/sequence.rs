// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequences: ordered chains of delays, waits, runs and calls.
//!
//! A running sequence keeps at most one timer registered with the
//! scheduler. That timer's completion advances the sequence to the next
//! step, which registers the next timer, and so on. Call steps run inline
//! and never hold a timer.
//!
//! ```ignore
//! scheduler
//!     .sequence()
//!     .delay(1.0)
//!     .call(|| println!("one second later"))
//!     .delay_frames(2)
//!     .call(|| println!("two frames after that"))
//!     .start();
//! ```

use crate::error::CallbackSite;
use crate::schedule::Schedule;
use crate::Scheduler;
use ft_core::{OwnerId, TimerHandle};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

type StepFn = Arc<dyn Fn() + Send + Sync>;
type ConditionStep = Arc<dyn Fn() -> bool + Send + Sync>;
type ProgressStep = Arc<dyn Fn(f32) + Send + Sync>;

#[derive(Clone)]
enum Step {
    Call(StepFn),
    Delay {
        seconds: f32,
        unscaled: bool,
    },
    Frames(u32),
    WaitUntil(ConditionStep),
    RunFor {
        seconds: f32,
        unscaled: bool,
        on_progress: ProgressStep,
    },
}

#[derive(Default)]
struct SequenceState {
    steps: Vec<Step>,
    index: usize,
    handle: TimerHandle,
    running: bool,
    paused: bool,
    looping: bool,
    on_complete: Option<StepFn>,
    /// Bumped on every start and stop so stale timer callbacks are ignored
    epoch: u64,
    /// Whether the current pass registered a timer
    timed_in_pass: bool,
}

struct Shared {
    scheduler: Scheduler,
    owner: OwnerId,
    state: Mutex<SequenceState>,
}

/// Builder and controller for a chain of timed steps.
///
/// Clones control the same sequence. Every timer a sequence registers is
/// owned by [`Sequence::owner`], so it can also be managed through the
/// scheduler's owner operations.
#[derive(Clone)]
pub struct Sequence {
    shared: Arc<Shared>,
}

impl Sequence {
    pub(crate) fn new(scheduler: Scheduler) -> Self {
        Self {
            shared: Arc::new(Shared {
                scheduler,
                owner: OwnerId::next(),
                state: Mutex::new(SequenceState::default()),
            }),
        }
    }

    fn push(self, step: Step) -> Self {
        self.shared.state.lock().steps.push(step);
        self
    }

    /// Wait `seconds` of scaled time.
    pub fn delay(self, seconds: f32) -> Self {
        self.push(Step::Delay {
            seconds,
            unscaled: false,
        })
    }

    pub fn delay_unscaled(self, seconds: f32) -> Self {
        self.push(Step::Delay {
            seconds,
            unscaled: true,
        })
    }

    pub fn delay_frames(self, frames: u32) -> Self {
        self.push(Step::Frames(frames))
    }

    /// Run `f` and move straight on to the next step.
    pub fn call<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.push(Step::Call(Arc::new(f)))
    }

    /// Wait until `condition` returns true, polling once per tick.
    pub fn wait_until<C>(self, condition: C) -> Self
    where
        C: Fn() -> bool + Send + Sync + 'static,
    {
        self.push(Step::WaitUntil(Arc::new(condition)))
    }

    pub fn wait_while<C>(self, condition: C) -> Self
    where
        C: Fn() -> bool + Send + Sync + 'static,
    {
        self.wait_until(move || !condition())
    }

    /// Report progress in `[0, 1]` every tick for `seconds` of scaled time.
    pub fn run_for<P>(self, seconds: f32, on_progress: P) -> Self
    where
        P: Fn(f32) + Send + Sync + 'static,
    {
        self.push(Step::RunFor {
            seconds,
            unscaled: false,
            on_progress: Arc::new(on_progress),
        })
    }

    pub fn run_for_unscaled<P>(self, seconds: f32, on_progress: P) -> Self
    where
        P: Fn(f32) + Send + Sync + 'static,
    {
        self.push(Step::RunFor {
            seconds,
            unscaled: true,
            on_progress: Arc::new(on_progress),
        })
    }

    /// Start over from the first step after the last one instead of finishing.
    pub fn looping(self) -> Self {
        self.shared.state.lock().looping = true;
        self
    }

    /// Run `f` when a non-looping sequence finishes its last step.
    pub fn on_complete<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.shared.state.lock().on_complete = Some(Arc::new(f));
        self
    }

    /// Begin at the first step. Does nothing if already running or empty.
    pub fn start(self) -> Self {
        begin(&self.shared);
        self
    }

    /// Cancel the step in flight and rewind to the first step.
    pub fn stop(&self) {
        {
            let mut state = self.shared.state.lock();
            if !state.running {
                return;
            }
            state.running = false;
            state.paused = false;
            state.index = 0;
            state.handle = TimerHandle::INVALID;
            state.epoch += 1;
        }
        self.shared.scheduler.cancel_owner(self.shared.owner);
        debug!(owner = %self.shared.owner, "sequence stopped");
    }

    /// Pause the step in flight. Completed steps are unaffected.
    pub fn pause(&self) {
        {
            let mut state = self.shared.state.lock();
            if !state.running || state.paused {
                return;
            }
            state.paused = true;
        }
        self.shared.scheduler.pause_owner(self.shared.owner);
    }

    pub fn resume(&self) {
        {
            let mut state = self.shared.state.lock();
            if !state.running || !state.paused {
                return;
            }
            state.paused = false;
        }
        self.shared.scheduler.resume_owner(self.shared.owner);
    }

    pub fn restart(&self) {
        self.stop();
        begin(&self.shared);
    }

    /// Running and not paused
    pub fn is_running(&self) -> bool {
        let state = self.shared.state.lock();
        state.running && !state.paused
    }

    pub fn is_paused(&self) -> bool {
        self.shared.state.lock().paused
    }

    /// Index of the step in flight
    pub fn current_step(&self) -> usize {
        self.shared.state.lock().index
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.shared.state.lock().steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn owner(&self) -> OwnerId {
        self.shared.owner
    }

    /// Timer backing the step in flight, or [`TimerHandle::INVALID`]
    pub fn handle(&self) -> TimerHandle {
        self.shared.state.lock().handle
    }
}

fn begin(shared: &Arc<Shared>) {
    {
        let mut state = shared.state.lock();
        if state.running || state.steps.is_empty() {
            return;
        }
        state.running = true;
        state.paused = false;
        state.index = 0;
        state.timed_in_pass = false;
        state.epoch += 1;
    }
    debug!(owner = %shared.owner, "sequence started");
    execute(shared);
}

/// Completion of the timer backing step `index` of pass `epoch`.
fn step_done(shared: &Arc<Shared>, epoch: u64) {
    {
        let mut state = shared.state.lock();
        if state.epoch != epoch || !state.running {
            return;
        }
        state.index += 1;
        state.handle = TimerHandle::INVALID;
    }
    execute(shared);
}

/// Next-frame wake-up of a looping sequence that has no timed steps.
fn resume_pass(shared: &Arc<Shared>, epoch: u64) {
    if shared.state.lock().epoch != epoch {
        return;
    }
    execute(shared);
}

/// Run steps from the current index until one needs a timer.
fn execute(shared: &Arc<Shared>) {
    loop {
        let mut state = shared.state.lock();
        if !state.running {
            return;
        }
        let epoch = state.epoch;

        if state.index >= state.steps.len() {
            if !state.looping {
                state.running = false;
                state.handle = TimerHandle::INVALID;
                let on_complete = state.on_complete.clone();
                drop(state);
                debug!(owner = %shared.owner, "sequence complete");
                if let Some(f) = on_complete {
                    shared.scheduler.guarded(
                        TimerHandle::INVALID,
                        CallbackSite::SequenceComplete,
                        || f(),
                    );
                }
                return;
            }

            state.index = 0;
            if !std::mem::replace(&mut state.timed_in_pass, false) {
                // Only call steps: wrap on the next frame rather than spin
                let next = Arc::clone(shared);
                let handle = shared
                    .scheduler
                    .owned_by(shared.owner)
                    .schedule_next_frame(move || resume_pass(&next, epoch));
                track(shared, &mut state, handle);
                return;
            }
            continue;
        }

        let step = state.steps[state.index].clone();
        if let Step::Call(f) = step {
            drop(state);
            shared
                .scheduler
                .guarded(TimerHandle::INVALID, CallbackSite::SequenceStep, || f());
            let mut state = shared.state.lock();
            if state.epoch != epoch || !state.running {
                return;
            }
            state.index += 1;
            continue;
        }

        state.timed_in_pass = true;
        let next = Arc::clone(shared);
        let done = move || step_done(&next, epoch);
        let scope = shared.scheduler.owned_by(shared.owner);
        let handle = match step {
            Step::Delay {
                seconds,
                unscaled: false,
            } => scope.schedule(seconds, done),
            Step::Delay {
                seconds,
                unscaled: true,
            } => scope.schedule_unscaled(seconds, done),
            Step::Frames(frames) => scope.schedule_frames(frames, done),
            Step::WaitUntil(condition) => scope.wait_until(move || condition(), done),
            Step::RunFor {
                seconds,
                unscaled,
                on_progress,
            } => {
                let progress = move |t: f32| on_progress(t);
                if unscaled {
                    scope.run_for_unscaled(seconds, progress, done)
                } else {
                    scope.run_for(seconds, progress, done)
                }
            }
            Step::Call(_) => TimerHandle::INVALID,
        };
        track(shared, &mut state, handle);
        return;
    }
}

/// Record the timer in flight, pausing it if the sequence is paused.
fn track(shared: &Shared, state: &mut SequenceState, handle: TimerHandle) {
    state.handle = handle;
    if state.paused {
        shared.scheduler.pause(handle);
    }
    trace!(owner = %shared.owner, step = state.index, timer = %handle, "sequence step armed");
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
