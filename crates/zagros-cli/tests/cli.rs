use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("zagros")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("chart"));
}

#[test]
fn generate_writes_filtered_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("temperature.csv");

    Command::cargo_bin("zagros")
        .unwrap()
        .args(["generate", "--family", "temperature", "--out"])
        .arg(&out)
        .args([
            "--noise-scale",
            "0",
            "--cities",
            "hewler",
            "--start-year",
            "2000",
            "--end-year",
            "2000",
        ])
        .assert()
        .success();

    let body = std::fs::read_to_string(&out).unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Year,Month,MonthName,City,Temperature,ExtremeHeatDay,Season"
    );
    // One city, one year: 12 monthly rows after the header.
    assert_eq!(body.lines().count(), 13);
}

#[test]
fn chart_emits_spec_json() {
    Command::cargo_bin("zagros")
        .unwrap()
        .args(["chart", "--category", "water", "--indicator", "river-levels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RiverLevel"))
        .stdout(predicate::str::contains("FAO AQUASTAT"));
}

#[test]
fn sources_survives_missing_file() {
    Command::cargo_bin("zagros")
        .unwrap()
        .args([
            "sources",
            "--table",
            "forecast",
            "--path",
            "/nonexistent/forecast.csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 row(s) total"));
}
