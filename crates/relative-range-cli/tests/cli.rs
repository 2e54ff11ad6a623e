use assert_cmd::Command;
use predicates::prelude::*;

fn relrange() -> Command {
    Command::cargo_bin("relrange").unwrap()
}

#[test]
fn test_previous_months_as_dates() {
    relrange()
        .args(["previous", "2", "months", "--date", "3000-02-12", "--format", "YYYY-MM-DD"])
        .assert()
        .success()
        .stdout("2999-12-01 - 3000-01-31\n");
}

#[test]
fn test_readable_format_with_year_hiding() {
    relrange()
        .args(["next", "month", "--date", "3000-01-01", "--hide-year"])
        .assert()
        .success()
        .stdout("Feb 1 - 28\n");
}

#[test]
fn test_locale_option() {
    relrange()
        .args(["next", "month", "--date", "3000-01-01", "--locale", "nl", "--hide-year"])
        .assert()
        .success()
        .stdout("1 t/m 28 feb.\n");
}

#[test]
fn test_relative_formats() {
    relrange()
        .args(["previous", "2", "days", "--date", "3000-02-12", "--format", "R"])
        .assert()
        .success()
        .stdout("previous 2 days\n");

    relrange()
        .args(["previous", "2", "days", "--date", "3000-02-12", "--format", "RR"])
        .assert()
        .success()
        .stdout("last 2 days\n");
}

#[test]
fn test_json_output() {
    let output = relrange()
        .args(["next", "quarter", "--date", "3000-02-12", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "3000-04-01");
    assert_eq!(json["end"], "3000-06-30");
    assert_eq!(json["type"], "next");
    assert_eq!(json["measure"], "quarter");
}

#[test]
fn test_margin_option() {
    relrange()
        .args([
            "previous", "2", "days", "--date", "3000-02-12", "--margin", "0", "--format", "YYYY-MM-DD",
        ])
        .assert()
        .success()
        .stdout("3000-02-11 - 3000-02-12\n");
}

#[test]
fn test_invalid_type_fails() {
    relrange()
        .args(["foo", "month"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("foo isn't an allowed value for RelativeRange.type"));
}

#[test]
fn test_invalid_measure_fails() {
    relrange()
        .args(["previous", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RelativeRange.measure"));
}

#[test]
fn test_invalid_date_fails() {
    relrange()
        .args(["previous", "month", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_missing_measure_fails() {
    relrange().arg("previous").assert().failure();
}

#[test]
fn test_huge_margin_saturates() {
    relrange()
        .args(["previous", "week", "--margin", "2147483647", "--format", "YYYY-MM-DD"])
        .assert()
        .success();
}
