use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn resto_cmd() -> Command {
    let mut cmd = Command::cargo_bin("resto").expect("Failed to find resto binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_help_lists_commands() {
    resto_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_cli_version() {
    resto_cmd().arg("--version").assert().success();
}

#[test]
fn test_cli_list_help_shows_filter_flags() {
    resto_cmd()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--open-now"))
        .stdout(predicate::str::contains("--price"))
        .stdout(predicate::str::contains("--city"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn test_cli_list_rejects_invalid_price_tier() {
    resto_cmd()
        .args(["list", "--price", "$$$$$$"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_list_rejects_unknown_city() {
    resto_cmd()
        .args(["list", "--city", "Jakarta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_list_accepts_lowercase_city_alias() {
    // Parsing succeeds; the command then fails fast because the API base
    // URL is unreachable, which is fine for an argument-parsing test.
    resto_cmd()
        .args(["--api-url", "http://127.0.0.1:1", "list", "--city", "bandung"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch the restaurant catalogue"));
}

#[test]
fn test_cli_show_requires_id() {
    resto_cmd()
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_cli_blank_api_url_is_rejected() {
    resto_cmd()
        .args(["--api-url", " ", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize the restaurant browser"));
}

#[test]
fn test_cli_unreachable_api_fails_nonfatally() {
    // A connection failure surfaces as a contextual error message, not a
    // panic or a bare backtrace.
    resto_cmd()
        .args(["--api-url", "http://127.0.0.1:1", "show", "rqdv5juczeskfw1e3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to fetch detail for restaurant 'rqdv5juczeskfw1e3'",
        ));
}
