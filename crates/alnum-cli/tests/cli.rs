use alnum::ResultSet;
use std::process::{Command, Output};

const CONFIG_VARS: [&str; 8] = [
    "RUST_LOG",
    "ALNUM_WORKERS",
    "ALNUM_SEED",
    "ALNUM_SAMPLING",
    "ALNUM_RUNTIME",
    "ALNUM_LETTERS",
    "ALNUM_DIGITS",
    "ALNUM_FORMAT",
];

/// Runs the binary from an empty directory with no inherited configuration,
/// so neither the caller's environment nor a stray `.env` file leaks in.
fn alnum_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_alnum"));
    cmd.args(args).current_dir(dir.path());
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.envs(env.iter().copied());
    cmd.output().expect("failed to run alnum")
}

fn alnum(args: &[&str]) -> Output {
    alnum_with_env(args, &[])
}

#[test]
fn default_run_prints_ten_records() {
    let out = alnum(&[]);
    assert!(out.status.success(), "{out:?}");
    let set = ResultSet::from_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(set.len(), 10);
}

#[test]
fn seeded_runs_are_identical_across_runtimes() {
    let threads = alnum(&["--workers", "40", "--seed", "8", "--runtime", "threads"]);
    let tokio = alnum(&["--workers", "40", "--seed", "8", "--runtime", "tokio"]);
    assert!(threads.status.success() && tokio.status.success());
    assert_eq!(threads.stdout, tokio.stdout);
}

#[test]
fn logs_stay_off_stdout() {
    for runtime in ["threads", "tokio"] {
        let out = alnum_with_env(
            &["-n", "3", "--seed", "1", "--runtime", runtime],
            &[("RUST_LOG", "trace")],
        );
        assert!(out.status.success(), "{out:?}");
        assert!(!out.stderr.is_empty(), "expected log output on stderr");
        let set = ResultSet::from_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
        assert_eq!(set.len(), 3);
    }
}

#[test]
fn environment_configures_the_run() {
    let out = alnum_with_env(
        &[],
        &[
            ("ALNUM_WORKERS", "4"),
            ("ALNUM_SEED", "2"),
            ("ALNUM_FORMAT", "codes"),
        ],
    );
    assert!(out.status.success(), "{out:?}");
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 4);
}

#[test]
fn dot_env_in_working_directory_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "ALNUM_WORKERS=2\n").unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_alnum"));
    cmd.current_dir(dir.path());
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "{out:?}");
    let set = ResultSet::from_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn zero_workers_exits_non_zero_without_output() {
    let out = alnum(&["--workers", "0"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_vocabulary_exits_non_zero_without_output() {
    let out = alnum(&["--digits", ","]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
