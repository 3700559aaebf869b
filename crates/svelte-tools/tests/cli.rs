use assert_cmd::Command;
use predicates::prelude::*;

fn create_svelte_app() -> Command {
    let mut cmd = Command::cargo_bin("create-svelte-app").unwrap();
    cmd.env_remove("SVELTE_DEGIT_COMMAND")
        .env_remove("SVELTE_FETCH_TIMEOUT");
    cmd
}

#[test]
fn unknown_flag_exits_non_zero_and_names_it() {
    create_svelte_app()
        .args(["shop", "--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn invalid_bundler_value_is_rejected() {
    create_svelte_app()
        .args(["shop", "--bundler", "parcel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parcel"));
}

#[test]
fn help_lists_options_and_succeeds() {
    create_svelte_app()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bundler"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn invalid_timeout_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    create_svelte_app()
        .current_dir(dir.path())
        .env("SVELTE_FETCH_TIMEOUT", "soon")
        .args(["shop", "-b", "rollup", "-s", "-c", "none", "-u", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SVELTE_FETCH_TIMEOUT"));

    assert!(!dir.path().join("shop").exists());
}

#[cfg(unix)]
#[test]
fn fully_specified_run_needs_no_prompts() {
    let dir = tempfile::tempdir().unwrap();
    create_svelte_app()
        .current_dir(dir.path())
        .env("SVELTE_DEGIT_COMMAND", "true")
        .args(["shop", "-b", "webpack", "-s", "-c", "scss", "-u", "tailwind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm run dev"));

    assert!(dir.path().join("shop").is_dir());
}

#[cfg(unix)]
#[test]
fn non_empty_target_without_force_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("shop");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("README.md"), "keep me").unwrap();

    create_svelte_app()
        .current_dir(dir.path())
        .env("SVELTE_DEGIT_COMMAND", "true")
        .args(["shop", "-b", "rollup", "-s", "-c", "none", "-u", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(
        std::fs::read_to_string(target.join("README.md")).unwrap(),
        "keep me"
    );
}

#[cfg(unix)]
#[test]
fn failing_fetch_tool_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    create_svelte_app()
        .current_dir(dir.path())
        .env("SVELTE_DEGIT_COMMAND", "false")
        .args(["shop", "-b", "rollup", "-s", "-c", "none", "-u", "none", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch template"));
}
