//! Integration tests for the CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn greenbox(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("greenbox").unwrap();
    cmd.args(["--data-dir", data.to_str().unwrap()]);
    cmd
}

fn save_file(data: &Path) -> std::path::PathBuf {
    data.join("greenbox.campaign.json")
}

fn saved_json(data: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(save_file(data)).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// chart
// ---------------------------------------------------------------------------

#[test]
fn chart_shows_every_odds_label() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .arg("chart")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Impossible")
                .and(predicate::str::contains("50/50"))
                .and(predicate::str::contains("Has To Be"))
                .and(predicate::str::contains("CF 9")),
        );
}

#[test]
fn chart_for_one_chaos_level() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["chart", "--chaos", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chaos Factor 9").and(predicate::str::contains("70")));
}

#[test]
fn chart_rejects_out_of_range_chaos() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["chart", "--chaos", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 9"));
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_records_question_and_saves() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["--seed", "7", "ask", "--odds", "likely", "Is", "the", "door", "locked?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Q: Is the door locked?")
                .and(predicate::str::contains("odds Likely, chaos 5")),
        );

    let json = saved_json(dir.path());
    let logs = json["logs"].as_array().unwrap();
    let question = logs
        .iter()
        .find(|e| e["content"] == "Q: Is the door locked?")
        .unwrap();
    assert_eq!(question["kind"], "mythic");
    assert!(
        question["details"]
            .as_str()
            .unwrap()
            .starts_with("Odds: Likely | Roll: ")
    );
}

#[test]
fn ask_rejects_blank_question() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a question"));
    assert!(!save_file(dir.path()).exists());
}

#[test]
fn ask_rejects_unknown_odds() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["ask", "--odds", "maybe", "Is it him?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid odds"));
}

#[test]
fn seeded_asks_are_reproducible() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let out = |dir: &Path| {
        greenbox(dir)
            .args(["--seed", "99", "ask", "Is anyone home?"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(out(a.path()), out(b.path()));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_logs_result() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled d20: "));

    let json = saved_json(dir.path());
    let last = json["logs"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["kind"], "system");
    assert!(last["content"].as_str().unwrap().starts_with("Rolled d20: "));
}

#[test]
fn roll_rejects_unknown_die() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid die"));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_shows_default_campaign() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Scene 1: The Call")
                .and(predicate::str::contains("Chaos Factor: 5/9"))
                .and(predicate::str::contains("Jack Robbins"))
                .and(predicate::str::contains("Find Elias Vance")),
        );
}

#[test]
fn status_recovers_from_corrupt_save() {
    let dir = TempDir::new().unwrap();
    fs::write(save_file(dir.path()), "{ definitely not json").unwrap();
    greenbox(dir.path())
        .args(["status", "--recent", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jack Robbins")
                .and(predicate::str::contains("could not be read")),
        );
}

// ---------------------------------------------------------------------------
// export / import
// ---------------------------------------------------------------------------

#[test]
fn export_writes_default_file_name() {
    let dir = TempDir::new().unwrap();
    greenbox(&dir.path().join("data"))
        .arg("export")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("greenbox-campaign.json"));

    let text = fs::read_to_string(dir.path().join("greenbox-campaign.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["chaosFactor"], 5);
    assert_eq!(json["agents"].as_array().unwrap().len(), 3);
}

#[test]
fn export_then_import_into_fresh_dir() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let file = source.path().join("out.json");

    greenbox(source.path())
        .args(["roll", "d6"])
        .assert()
        .success();
    greenbox(source.path())
        .args(["export", "--output", file.to_str().unwrap()])
        .assert()
        .success();
    greenbox(target.path())
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 agents"));

    assert_eq!(saved_json(source.path()), saved_json(target.path()));
}

#[test]
fn import_upgrades_legacy_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("old.json");
    fs::write(
        &file,
        r#"{"agents": [], "logs": [], "chaosFactor": 6, "threads": ["A", "B"], "scene": "Scene 4"}"#,
    )
    .unwrap();

    greenbox(&dir.path().join("data"))
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success();

    let json = saved_json(&dir.path().join("data"));
    assert_eq!(json["threads"][0]["id"], "t0");
    assert_eq!(json["threads"][1]["title"], "B");
    assert_eq!(json["threads"][1]["description"], "Legacy Data");
    assert_eq!(json["scene"]["title"], "Scene 4");
    assert_eq!(json["scene"]["description"], "");
    assert_eq!(json["chaosFactor"], 6);
}

#[test]
fn import_rejects_file_without_logs() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d4"])
        .assert()
        .success();
    let before = fs::read_to_string(save_file(dir.path())).unwrap();

    let file = dir.path().join("bad.json");
    fs::write(&file, r#"{"agents": []}"#).unwrap();
    greenbox(dir.path())
        .args(["import", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing `logs`"));

    assert_eq!(fs::read_to_string(save_file(dir.path())).unwrap(), before);
}

#[test]
fn import_missing_file() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["import", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_with_yes_deletes_save() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d8"])
        .assert()
        .success();
    assert!(save_file(dir.path()).exists());

    greenbox(dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset to defaults"));
    assert!(!save_file(dir.path()).exists());
}

#[test]
fn reset_declined_keeps_save() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d8"])
        .assert()
        .success();

    greenbox(dir.path())
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled"));
    assert!(save_file(dir.path()).exists());
}

#[test]
fn reset_confirmed_at_prompt() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["roll", "d8"])
        .assert()
        .success();

    greenbox(dir.path())
        .arg("reset")
        .write_stdin("yes\n")
        .assert()
        .success();
    assert!(!save_file(dir.path()).exists());
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_runs_commands_and_persists() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .args(["--seed", "3", "play"])
        .write_stdin("ask likely Is it dark inside?\nchaos +\nthread add Black van\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Oracle (Likely, chaos 5)")
                .and(predicate::str::contains("Chaos Factor: 6/9"))
                .and(predicate::str::contains("Thread added: Black van"))
                .and(predicate::str::contains("Goodbye!")),
        );

    let json = saved_json(dir.path());
    assert_eq!(json["chaosFactor"], 6);
    assert_eq!(json["threads"].as_array().unwrap().len(), 3);
}

#[test]
fn play_reports_errors_and_continues() {
    let dir = TempDir::new().unwrap();
    greenbox(dir.path())
        .arg("play")
        .write_stdin("dance\nchaos\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: dance")
                .and(predicate::str::contains("Chaos Factor: 5/9")),
        );
}
