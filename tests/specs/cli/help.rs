//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn ft_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn ft_help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("scenarios");
}

#[test]
fn ft_run_help_lists_flags_and_scenarios() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--fps")
        .stdout_has("--seconds")
        .stdout_has("--time-scale")
        .stdout_has("--realtime")
        .stdout_has("--config")
        .stdout_has("sequence");
}

#[test]
fn ft_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
