use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("mis-console");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("vehicles"));
    Ok(())
}

#[test]
fn test_invalid_month_is_rejected_by_parser() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("mis-console");
    cmd.args(["dashboard", "--month", "2024-13"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid month"));
}

#[test]
fn test_unreachable_server_reports_connection_error() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("mis-console");
    cmd.args(["localities", "--base-url", "http://127.0.0.1:9"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: could not connect to the server"));
}

#[test]
fn test_bad_base_url_is_a_config_error() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("mis-console");
    cmd.args(["zones", "--base-url", "localhost:8000"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("base_url must start with http://"));
}
