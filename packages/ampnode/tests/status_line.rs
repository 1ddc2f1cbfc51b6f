//! End-to-end tests for the ampnode binary: one status line on stdout, exit code 0.

use std::num::NonZero;
use std::process::Command;

fn run_ampnode() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ampnode"))
        .output()
        .expect("failed to spawn the ampnode binary")
}

#[test]
fn exits_cleanly_with_single_status_line() {
    let output = run_ampnode();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).expect("stdout must be valid UTF-8");

    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn reports_a_positive_cpu_count() {
    let output = run_ampnode();

    let stdout = String::from_utf8(output.stdout).expect("stdout must be valid UTF-8");

    let count = stdout
        .strip_prefix("Running Ampnode with ")
        .and_then(|rest| rest.strip_suffix(" CPUs.\n"))
        .expect("status line must match `Running Ampnode with <N> CPUs.`");

    let count: NonZero<usize> = count
        .parse()
        .expect("reported CPU count must be a positive decimal integer");

    assert!(count.get() >= 1);
}

#[test]
fn reported_count_matches_this_process() {
    // The test process runs on the same host with the same affinity as the spawned binary,
    // so the counts must agree.
    let output = run_ampnode();

    let stdout = String::from_utf8(output.stdout).expect("stdout must be valid UTF-8");

    let expected = format!(
        "Running Ampnode with {} CPUs.\n",
        amp_runtime::Runtime::cpu_count()
    );

    assert_eq!(stdout, expected);
}
