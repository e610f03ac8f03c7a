// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Schedule;

fn stopped(scheduler: &Scheduler) -> TimerHandle {
    scheduler.schedule(1.0, || {})
}

#[test]
fn handles_are_valid_and_distinct() {
    let scheduler = Scheduler::new();
    let a = stopped(&scheduler);
    let b = stopped(&scheduler);
    assert!(a.is_valid());
    assert!(b.is_valid());
    assert_ne!(a, b);
}

#[test]
fn unknown_handle_is_silent_noop() {
    let scheduler = Scheduler::new();
    for handle in [TimerHandle::INVALID, TimerHandle::from_raw(999)] {
        assert!(!scheduler.cancel(handle));
        assert!(!scheduler.pause(handle));
        assert!(!scheduler.resume(handle));
        assert!(!scheduler.restart(handle));
        assert!(!scheduler.is_active(handle));
        assert!(!scheduler.is_paused(handle));
        assert!(!scheduler.exists(handle));
        assert!(!scheduler.set_remaining(handle, 1.0));
        assert_eq!(scheduler.remaining(handle), 0.0);
        assert_eq!(scheduler.progress(handle), 0.0);
        assert_eq!(scheduler.state_of(handle), None);
    }
}

#[test]
fn pause_and_resume_refuse_wrong_state() {
    let scheduler = Scheduler::new();
    let h = stopped(&scheduler);

    assert!(!scheduler.resume(h), "not paused");
    assert!(scheduler.pause(h));
    assert!(scheduler.is_paused(h));
    assert!(!scheduler.is_active(h));
    assert!(!scheduler.pause(h), "already paused");
    assert!(scheduler.resume(h));
    assert!(scheduler.is_active(h));
}

#[test]
fn cancelled_timer_refuses_pause() {
    let scheduler = Scheduler::new();
    let h = stopped(&scheduler);
    scheduler.cancel(h);
    assert_eq!(scheduler.state_of(h), Some(TimerState::Cancelled));
    assert!(!scheduler.pause(h));
}

#[test]
fn restart_rewinds_and_reactivates() {
    let scheduler = Scheduler::new();
    let h = scheduler.repeat_times(1.0, 2, || {});
    scheduler.tick(1.0, 1.0);
    scheduler.tick(0.5, 0.5);
    scheduler.pause(h);

    assert!(scheduler.restart(h));
    assert!(scheduler.is_active(h));
    assert_eq!(scheduler.remaining(h), 1.0);

    // Repeat count was cleared, so two more cycles are allowed
    scheduler.tick(1.0, 1.0);
    assert!(scheduler.exists(h));
    scheduler.tick(1.0, 1.0);
    assert!(!scheduler.exists(h));
}

#[test]
fn restart_revives_cancelled_timer_before_sweep() {
    let scheduler = Scheduler::new();
    let h = stopped(&scheduler);
    scheduler.cancel(h);
    scheduler.restart(h);

    scheduler.tick(0.5, 0.5);
    assert!(scheduler.is_active(h));
}

#[test]
fn set_remaining_clamps_and_overrides() {
    let scheduler = Scheduler::new();
    let h = scheduler.schedule(2.0, || {});

    assert!(scheduler.set_remaining(h, 0.5));
    assert_eq!(scheduler.remaining(h), 0.5);
    assert_eq!(scheduler.progress(h), 0.75);

    assert!(scheduler.set_remaining(h, -1.0));
    assert_eq!(scheduler.remaining(h), 0.0);
}

#[test]
fn progress_tracks_countdown() {
    let scheduler = Scheduler::new();
    let h = scheduler.schedule(2.0, || {});
    assert_eq!(scheduler.progress(h), 0.0);
    scheduler.tick(0.5, 0.5);
    assert_eq!(scheduler.progress(h), 0.25);

    let instant = scheduler.schedule(0.0, || {});
    assert_eq!(scheduler.progress(instant), 1.0);
}

#[test]
fn frame_timer_remaining_is_in_frames() {
    let scheduler = Scheduler::new();
    let h = scheduler.schedule_frames(4, || {});
    scheduler.tick(0.1, 0.1);
    assert_eq!(scheduler.remaining(h), 3.0);
    assert_eq!(scheduler.progress(h), 0.25);

    scheduler.set_remaining(h, 1.5);
    assert_eq!(scheduler.remaining(h), 2.0);
}

#[test]
fn time_scale_is_clamped() {
    let scheduler = Scheduler::new();
    assert_eq!(scheduler.time_scale(), 1.0);
    scheduler.set_time_scale(-3.0);
    assert_eq!(scheduler.time_scale(), 0.0);
    scheduler.set_time_scale(f32::NAN);
    assert_eq!(scheduler.time_scale(), 0.0);
    scheduler.set_time_scale(0.5);
    assert_eq!(scheduler.time_scale(), 0.5);
}

#[test]
fn config_time_scale_applies() {
    let config = SchedulerConfig {
        initial_pool_size: 1,
        time_scale: 0.25,
    };
    let scheduler = Scheduler::with_config(&config);
    assert_eq!(scheduler.time_scale(), 0.25);
    assert_eq!(scheduler.pool_stats().allocated, 1);
}

#[test]
fn global_pause_flag() {
    let scheduler = Scheduler::new();
    assert!(!scheduler.is_globally_paused());
    scheduler.pause_all();
    assert!(scheduler.is_globally_paused());
    scheduler.set_global_paused(false);
    assert!(!scheduler.is_globally_paused());
}

#[test]
fn owner_scope_tags_timers() {
    let scheduler = Scheduler::new();
    let owner = OwnerId::next();
    let scope = scheduler.owned_by(owner);
    scope.schedule(1.0, || {});
    scope.repeat(1.0, || {});
    scheduler.schedule(1.0, || {});

    assert_eq!(scope.id(), owner);
    assert_eq!(scope.count(), 2);
    assert_eq!(scheduler.count_for(owner), 2);
    assert_eq!(scheduler.owner_count(), 1);
    assert_eq!(scheduler.active_count(), 3);
}

#[test]
fn owner_pause_resume_counts() {
    let scheduler = Scheduler::new();
    let owner = OwnerId::next();
    let scope = scheduler.owned_by(owner);
    let a = scope.schedule(1.0, || {});
    scope.schedule(1.0, || {});
    scheduler.pause(a);

    assert_eq!(scope.count(), 1);
    assert_eq!(scope.pause_all(), 1);
    assert_eq!(scope.count(), 0);
    assert_eq!(scope.resume_all(), 2);
    assert_eq!(scope.count(), 2);
}

#[test]
fn owner_pause_freezes_only_that_owner() {
    let scheduler = Scheduler::new();
    let owner = OwnerId::next();
    let frozen = scheduler.owned_by(owner).schedule(1.0, || {});
    let free = scheduler.schedule(1.0, || {});

    scheduler.pause_owner(owner);
    scheduler.tick(0.5, 0.5);

    assert_eq!(scheduler.remaining(frozen), 1.0);
    assert_eq!(scheduler.remaining(free), 0.5);
}

#[test]
fn cancel_owner_drops_owner_entry_after_sweep() {
    let scheduler = Scheduler::new();
    let owner = OwnerId::next();
    let other = OwnerId::next();
    let scope = scheduler.owned_by(owner);
    for _ in 0..3 {
        scope.schedule(1.0, || {});
    }
    let kept = scheduler.owned_by(other).schedule(1.0, || {});

    assert_eq!(scheduler.cancel_owner(owner), 3);
    assert_eq!(scheduler.count_for(owner), 0);
    assert_eq!(scheduler.cancel_owner(owner), 0, "already cancelled");

    scheduler.tick(0.0, 0.0);
    assert_eq!(scheduler.owner_count(), 1);
    assert!(scheduler.is_active(kept));
}

#[test]
fn clear_all_outside_tick_is_immediate() {
    let scheduler = Scheduler::new();
    let h = stopped(&scheduler);
    scheduler.owned_by(OwnerId::next()).schedule(1.0, || {});

    scheduler.clear_all();

    assert!(!scheduler.exists(h));
    assert_eq!(scheduler.active_count(), 0);
    assert_eq!(scheduler.owner_count(), 0);
}

#[test]
fn reset_invalidates_old_handles() {
    let scheduler = Scheduler::new();
    let old = stopped(&scheduler);
    scheduler.set_time_scale(4.0);
    scheduler.pause_all();

    scheduler.reset();

    assert!(!scheduler.exists(old));
    assert_eq!(scheduler.time_scale(), 1.0);
    assert!(!scheduler.is_globally_paused());
    let new = stopped(&scheduler);
    assert_ne!(new, old);
    assert!(!scheduler.exists(old));
}

#[test]
fn clones_share_timers() {
    let scheduler = Scheduler::new();
    let clone = scheduler.clone();
    let h = clone.schedule(1.0, || {});
    assert!(scheduler.exists(h));
    scheduler.cancel(h);
    assert_eq!(clone.state_of(h), Some(TimerState::Cancelled));
}
