//! Process-level behavior of the `loan-decision` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const APPLICANT: &str = r#"{"Gender":"Male","Married":"Yes","Dependents":"0","Education":"Graduate","Self_Employed":"No","ApplicantIncome":5000,"CoapplicantIncome":0,"LoanAmount":100,"Loan_Amount_Term":360,"Credit_History":1.0,"Property_Area":"Urban"}"#;

fn binary() -> Command {
    let mut cmd = Command::cargo_bin("loan-decision").expect("binary builds");
    cmd.env_remove("RUST_LOG")
        .env_remove("APP_PRETTY_OUTPUT")
        .env("APP_LOG_LEVEL", "warn");
    cmd
}

#[test]
fn prints_decision_json_on_stdout() {
    let output = binary().arg(APPLICANT).output().expect("runs");

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(value["result"], "Y");
    assert_eq!(value["confidence"], 85);
    assert_eq!(value["keyFactors"][2]["impact"], "Negative");
}

#[test]
fn reads_applicant_from_stdin() {
    binary()
        .arg("-")
        .write_stdin(APPLICANT.replace("\"Credit_History\":1.0", "\"Credit_History\":0.0"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\":\"N\""))
        .stdout(predicate::str::contains("\"confidence\":65"));
}

#[test]
fn zero_loan_amount_exits_non_zero_with_empty_stdout() {
    binary()
        .arg(APPLICANT.replace("\"LoanAmount\":100", "\"LoanAmount\":0"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("application error"));
}

#[test]
fn invalid_json_exits_non_zero() {
    binary()
        .arg("{\"ApplicantIncome\": ")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed applicant input"));
}

#[test]
fn explain_writes_breakdown_to_stderr_only() {
    let output = binary()
        .args(["--explain", APPLICANT])
        .output()
        .expect("runs");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Score components"));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout stays json");
    assert_eq!(value["result"], "Y");
}

#[test]
fn strict_mode_rejects_out_of_form_values() {
    binary()
        .args(["--strict", &APPLICANT.replace("\"Married\":\"Yes\"", "\"Married\":\"Maybe\"")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Maybe"));
}

#[test]
fn insights_subcommand_prints_published_statistics() {
    binary()
        .args(["insights", "--feature", "education"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""Not Graduate":{"approved":51,"rejected":49}"#,
        ));

    binary()
        .arg("feature-importance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Other Factors"));
}
