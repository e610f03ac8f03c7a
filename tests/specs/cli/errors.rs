//! CLI error reporting specs

use crate::prelude::*;

#[test]
fn unknown_scenario_fails() {
    cli()
        .args(&["run", "bogus"])
        .fails()
        .stderr_has("invalid value 'bogus'");
}

#[test]
fn zero_fps_fails() {
    cli()
        .args(&["run", "basic", "--fps", "0"])
        .fails()
        .stderr_has("Error: fps must be at least 1");
}

#[test]
fn negative_time_scale_fails() {
    cli()
        .args(&["run", "basic", "--time-scale=-1"])
        .fails()
        .stderr_has("time scale must be finite and >= 0");
}

#[test]
fn missing_config_file_fails() {
    let ws = Workspace::empty();
    let missing = ws.path().join("absent.toml");
    cli()
        .args(&["run", "basic", "--config", missing.to_str().unwrap()])
        .fails()
        .stderr_has("failed to read config");
}

#[test]
fn unknown_config_key_fails() {
    let ws = Workspace::empty();
    let path = ws.file("ft.toml", "[driver]\nframes_per_second = 4\n");
    ws.ft()
        .args(&["run", "basic", "--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("invalid config")
        .stderr_has("frames_per_second");
}

#[test]
fn invalid_scheduler_section_fails() {
    let ws = Workspace::empty();
    let path = ws.file("ft.toml", "[scheduler]\ntime_scale = -2.0\n");
    ws.ft()
        .args(&["run", "basic", "--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("time_scale");
}
