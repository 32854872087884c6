//! Runs the obograph binary against the GO slim fixture

mod common;

use common::{fixture_path, GOSLIM};
use serde_json::{json, Value};
use std::process::{Command, Output};

fn obograph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_obograph"))
        .args(args)
        .output()
        .expect("failed to run obograph")
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_children_as_json() {
    let fixture = fixture_path(GOSLIM);
    let output = obograph(&["--obo", fixture.to_str().unwrap(), "--children", "GO:0006810"]);

    assert_eq!(
        stdout_json(&output),
        json!({
            "GO:0006810": [
                "GO:0006605", "GO:0006913", "GO:0007034",
                "GO:0016192", "GO:0030705", "GO:0055085"
            ]
        })
    );
}

#[test]
fn test_parents_are_the_default() {
    let fixture = fixture_path(GOSLIM);
    let output = obograph(&["--obo", fixture.to_str().unwrap(), "GO:0006605", "GO:0051179"]);

    assert_eq!(
        stdout_json(&output),
        json!({"GO:0006605": ["GO:0006810"], "GO:0051179": ["GO:0008150"]})
    );
}

#[test]
fn test_relationships_flag() {
    let fixture = fixture_path(GOSLIM);
    let output = obograph(&["--obo", fixture.to_str().unwrap(), "--relationships"]);

    assert_eq!(stdout_json(&output), json!(["is_a", "part_of"]));
}

#[test]
fn test_predicate_flag() {
    let fixture = fixture_path(GOSLIM);
    let fixture = fixture.to_str().unwrap();

    let output = obograph(&["--obo", fixture, "--predicate", "part_of", "GO:0006605"]);
    assert_eq!(stdout_json(&output), json!({"GO:0006605": ["GO:0008104"]}));

    let output = obograph(&["--obo", fixture, "--predicate", "part_of", "--children", "GO:0008104"]);
    assert_eq!(stdout_json(&output), json!({"GO:0008104": ["GO:0006605"]}));
}

#[test]
fn test_lenient_flag_ignores_stanzas_without_id() {
    let dir = tempfile::tempdir().unwrap();
    let obo = dir.path().join("anonymous.obo");
    std::fs::write(
        &obo,
        "[Term]\nname: orphan\nis_a: GO:1\n\n[Term]\nid: GO:2\nname: two\ndef: d\nis_a: GO:1\n",
    )
    .unwrap();
    let obo = obo.to_str().unwrap();

    let strict = obograph(&["--obo", obo, "--children", "GO:1"]);
    let lenient = obograph(&["--obo", obo, "--lenient", "--children", "GO:1"]);

    assert_eq!(stdout_json(&strict), json!({"GO:1": ["GO:2"]}));
    assert_eq!(stdout_json(&lenient), stdout_json(&strict));
}

#[test]
fn test_database_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("go.db");
    let db = db.to_str().unwrap();
    let fixture = fixture_path(GOSLIM);

    let output = obograph(&["--obo", fixture.to_str().unwrap(), "--db", db, "GO:0006810"]);
    assert_eq!(stdout_json(&output), json!({"GO:0006810": ["GO:0051234"]}));

    let output = obograph(&["--db", db, "--expand", "GO:0006810"]);
    assert_eq!(
        stdout_json(&output),
        json!({"GO:0006810": ["GO:0051234", "GO:0051179", "GO:0008150"]})
    );
}

#[test]
fn test_missing_source_is_rejected() {
    let output = obograph(&["GO:0006810"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_file_reports_error() {
    let output = obograph(&["--obo", "/nonexistent/go.obo", "GO:0006810"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot open"));
}
