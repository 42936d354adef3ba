// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::process::Command;

fn primes() -> Command {
    Command::new(env!("CARGO_BIN_EXE_primes"))
}

#[test]
fn test_all_strategies_report_and_log() {
    let timing = std::env::temp_dir().join(format!("primes-cli-{}-time.txt", std::process::id()));
    let _ = std::fs::remove_file(&timing);

    let output = primes()
        .args(["8", "--limit", "2000", "--runs", "2", "--strategy", "all"])
        .arg("--timing-log")
        .arg(&timing)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    for header in [
        "--SINGLE PROCESS RUN--",
        "--MANY PROCESSES RUN--",
        "--MANY THREADS RUN--",
        "--MANY TASKS RUN--",
    ] {
        assert!(stdout.contains(header), "missing {header}");
    }
    assert_eq!(stdout.matches("Found 303 primes below 2000").count(), 4);

    let log = std::fs::read_to_string(&timing).unwrap();
    assert_eq!(log.lines().count(), 4);
    assert!(log.lines().all(|line| line.starts_with("8 ")));

    std::fs::remove_file(&timing).unwrap();
}

#[test]
fn test_zero_workers_is_fatal() {
    let output = primes().args(["0", "--limit", "10"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("worker count must be at least 1"));
}

#[test]
fn test_zero_runs_is_fatal() {
    let output = primes().args(["2", "--runs", "0"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_unknown_strategy_is_fatal() {
    let output = primes().args(["2", "--strategy", "fibers"]).output().unwrap();
    assert!(!output.status.success());
}
