//! `ft run` transcript specs
//!
//! Simulated runs are deterministic, so transcripts are compared exactly.

use crate::prelude::*;

#[test]
fn basic_transcript() {
    cli()
        .args(&["run", "basic", "--fps", "4"])
        .passes()
        .stdout_eq(
            "\
[frame 1 t=0.25s] basic: fired on the next frame
[frame 2 t=0.50s] basic: fired after 0.5s
[frame 3 t=0.75s] basic: fired after 3 frames
",
        );
}

#[test]
fn repeat_transcript() {
    cli()
        .args(&["run", "repeat", "--fps", "4"])
        .passes()
        .stdout_eq(
            "\
[frame 2 t=0.50s] repeat: tick #1
[frame 4 t=1.00s] repeat: tick #2
[frame 6 t=1.50s] repeat: tick #3
",
        );
}

#[test]
fn progress_transcript() {
    cli()
        .args(&["run", "progress", "--fps", "4"])
        .passes()
        .stdout_eq(
            "\
[frame 1 t=0.25s] progress: progress 0.25
[frame 2 t=0.50s] progress: progress 0.50
[frame 3 t=0.75s] progress: progress 0.75
[frame 4 t=1.00s] progress: progress 1.00
[frame 4 t=1.00s] progress: done
",
        );
}

#[test]
fn global_pause_transcript() {
    cli()
        .args(&["run", "global", "--fps", "4"])
        .passes()
        .stdout_eq(
            "\
[frame 1 t=0.25s] global: tick #1
[frame 2 t=0.50s] global: tick #2
[frame 2 t=0.50s] global: paused everything
[frame 4 t=1.00s] global: host resumed everything
[frame 4 t=1.00s] global: tick #3
[frame 5 t=1.25s] global: tick #4
[frame 6 t=1.50s] global: tick #5
",
        );
}

#[test]
fn sequence_transcript() {
    cli()
        .args(&["run", "sequence", "--fps", "4"])
        .passes()
        .stdout_eq(
            "\
[frame 0 t=0.00s] sequence: started
[frame 2 t=0.50s] sequence: after 0.5s delay
[frame 4 t=1.00s] sequence: after 2 frames
[frame 5 t=1.25s] sequence: progress 0.50
[frame 6 t=1.50s] sequence: progress 1.00
[frame 6 t=1.50s] sequence: last step
[frame 6 t=1.50s] sequence: complete
",
        );
}

#[test]
fn seconds_flag_cuts_run_short() {
    cli()
        .args(&["run", "repeat", "--fps", "4", "--seconds", "0.5"])
        .passes()
        .stdout_eq("[frame 2 t=0.50s] repeat: tick #1\n");
}

#[test]
fn time_scale_slows_scaled_timers() {
    cli()
        .args(&["run", "repeat", "--fps", "4", "--time-scale", "0.5"])
        .passes()
        .stdout_eq(
            "\
[frame 4 t=1.00s] repeat: tick #1
[frame 8 t=2.00s] repeat: tick #2
",
        );
}

#[test]
fn all_runs_every_scenario_in_turn() {
    let run = cli().args(&["run", "all", "--fps", "4"]).passes();
    let stdout = run.stdout();
    for name in [
        "basic",
        "repeat",
        "progress",
        "conditional",
        "owner",
        "control",
        "global",
        "sequence",
    ] {
        assert!(
            stdout.contains(&format!("] {name}: ")),
            "missing {name} in:\n{stdout}"
        );
    }
    let basic = stdout.find("] basic: ").unwrap();
    let sequence = stdout.find("] sequence: ").unwrap();
    assert!(basic < sequence);
}

#[test]
fn json_output() {
    let run = cli()
        .args(&["run", "repeat", "--fps", "4", "-o", "json"])
        .passes();
    let entries = run.stdout_json();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0],
        serde_json::json!({"frame": 2, "time": 0.5, "scenario": "repeat", "message": "tick #1"})
    );
}

#[test]
fn clean_run_writes_nothing_to_stderr() {
    cli()
        .args(&["run", "control", "--fps", "4"])
        .passes()
        .stderr_eq("");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .args(&["run", "basic", "--fps", "4"])
        .env("FT_LOG", "debug")
        .passes()
        .stderr_has("running scenario")
        .stdout_has("basic: fired after 0.5s");
}
