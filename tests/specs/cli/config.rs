//! Configuration layering specs: flags over environment over config file

use crate::prelude::*;

#[test]
fn env_sets_fps() {
    cli()
        .args(&["run", "repeat", "--seconds", "1"])
        .env("FT_FPS", "4")
        .passes()
        .stdout_eq(
            "\
[frame 2 t=0.50s] repeat: tick #1
[frame 4 t=1.00s] repeat: tick #2
",
        );
}

#[test]
fn flag_beats_env() {
    cli()
        .args(&["run", "repeat", "--fps", "4", "--seconds", "0.5"])
        .env("FT_FPS", "2")
        .passes()
        .stdout_eq("[frame 2 t=0.50s] repeat: tick #1\n");
}

#[test]
fn config_file_driver_and_scheduler_sections() {
    let ws = Workspace::empty();
    let path = ws.file(
        "ft.toml",
        "[driver]\nfps = 4\n\n[scheduler]\ntime_scale = 0.5\n",
    );
    ws.ft()
        .args(&["run", "basic", "--config", path.to_str().unwrap()])
        .passes()
        .stdout_eq(
            "\
[frame 1 t=0.25s] basic: fired on the next frame
[frame 3 t=0.75s] basic: fired after 3 frames
[frame 4 t=1.00s] basic: fired after 0.5s
",
        );
}

#[test]
fn config_path_from_env() {
    let ws = Workspace::empty();
    let path = ws.file("ft.toml", "[driver]\nfps = 4\nseconds = 0.5\n");
    cli()
        .args(&["run", "repeat"])
        .env("FT_CONFIG", &path)
        .passes()
        .stdout_eq("[frame 2 t=0.50s] repeat: tick #1\n");
}

#[test]
fn env_beats_config_file() {
    let ws = Workspace::empty();
    let path = ws.file("ft.toml", "[driver]\nfps = 2\nseconds = 0.5\n");
    cli()
        .args(&["run", "repeat", "--config", path.to_str().unwrap()])
        .env("FT_FPS", "4")
        .passes()
        .stdout_eq("[frame 2 t=0.50s] repeat: tick #1\n");
}
