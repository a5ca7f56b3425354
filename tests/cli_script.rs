use assert_cmd::Command;
use predicates::str::contains;

fn deterministic_config() -> serde_json::Value {
    serde_json::json!({
        "locale": "en-US",
        "default_platforms": ["Espn", "Yahoo"],
        "processing_delay_ms": 0,
        "settle_delay_ms": 0,
        "approval_rate": 1.0,
        "availability_rate": 1.0
    })
}

fn home_with_config() -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        serde_json::to_string_pretty(&deterministic_config()).unwrap(),
    )
    .unwrap();
    home
}

#[test]
fn script_mode_reserves_and_pays() {
    let home = home_with_config();
    let input = "reserve Blitz Brigade\ncodes\npay Blitz Brigade\nexit\n";

    let mut cmd = Command::cargo_bin("gotoguys_cli").unwrap();
    cmd.env("GOTOGUYS_CLI_SCRIPT", "1")
        .env("GOTOGUYS_HOME", home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Reserved \"Blitz Brigade\""))
        .stdout(contains("Payment approved"))
        .stdout(contains("Reservation for \"Blitz Brigade\" is confirmed!"));

    let codes_file = home.path().join("store").join("team_codes.json");
    let json = std::fs::read_to_string(codes_file).unwrap();
    assert!(json.contains("Blitz Brigade"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = home_with_config();

    let mut cmd = Command::cargo_bin("gotoguys_cli").unwrap();
    cmd.env("GOTOGUYS_CLI_SCRIPT", "1")
        .env("GOTOGUYS_HOME", home.path())
        .write_stdin("serch Blitz\nexit\n")
        .assert()
        .success()
        .stderr(contains("Did you mean \"search\"?"));
}

#[test]
fn pay_without_reservation_reports_the_prerequisite() {
    let home = home_with_config();

    let mut cmd = Command::cargo_bin("gotoguys_cli").unwrap();
    cmd.env("GOTOGUYS_CLI_SCRIPT", "1")
        .env("GOTOGUYS_HOME", home.path())
        .write_stdin("pay Ghost Team\nexit\n")
        .assert()
        .success()
        .stderr(contains("has no reservation to pay for"));
}
