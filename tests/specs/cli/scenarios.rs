//! `ft scenarios` listing specs

use crate::prelude::*;

#[test]
fn lists_every_scenario() {
    let mut run = cli().args(&["scenarios"]).passes();
    for name in [
        "basic",
        "repeat",
        "progress",
        "conditional",
        "owner",
        "control",
        "global",
        "sequence",
        "all",
    ] {
        run = run.stdout_has(name);
    }
}

#[test]
fn json_listing_has_names_and_lengths() {
    let run = cli().args(&["scenarios", "-o", "json"]).passes();
    let listing = run.stdout_json();
    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 9);
    assert_eq!(listing[0]["name"], "basic");
    assert_eq!(listing[0]["seconds"], 1.0);
    assert_eq!(listing[8]["name"], "all");
    assert!(listing[8]["seconds"].is_null());
}
