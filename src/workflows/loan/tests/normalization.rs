use serde_json::json;

use super::common::*;
use crate::workflows::loan::normalizer::{
    normalize, DEFAULT_CREDIT_HISTORY, DEFAULT_LOAN_AMOUNT_TERM,
};
use crate::workflows::loan::DecisionError;

#[test]
fn missing_fields_receive_most_common_defaults() {
    let normalized = normalize(record(json!({
        "ApplicantIncome": 4200,
        "CoapplicantIncome": 800,
        "LoanAmount": 150
    })));

    assert_eq!(normalized.gender, "Male");
    assert_eq!(normalized.married, "Yes");
    assert_eq!(normalized.dependents, "0");
    assert_eq!(normalized.education, "Graduate");
    assert_eq!(normalized.self_employed, "No");
    assert_eq!(normalized.property_area, "");
    assert_eq!(normalized.credit_history, DEFAULT_CREDIT_HISTORY);
    assert_eq!(normalized.loan_amount_term, DEFAULT_LOAN_AMOUNT_TERM);
}

#[test]
fn explicit_nulls_are_treated_as_missing() {
    let normalized = normalize(record(applicant_with(json!({
        "Gender": null,
        "Credit_History": null,
        "Loan_Amount_Term": null
    }))));

    assert_eq!(normalized.gender, "Male");
    assert_eq!(normalized.credit_history, 1.0);
    assert_eq!(normalized.loan_amount_term, 360.0);
}

#[test]
fn absent_gender_matches_explicit_default() {
    let implicit = normalize(record(applicant_without("Gender")));
    let explicit = normalize(record(applicant_with(json!({ "Gender": "Male" }))));

    assert_eq!(implicit, explicit);
}

#[test]
fn three_plus_dependents_collapse_to_three() {
    let collapsed = normalize(record(applicant_with(json!({ "Dependents": "3+" }))));
    let plain = normalize(record(applicant_with(json!({ "Dependents": "3" }))));

    assert_eq!(collapsed.dependents, "3");
    assert_eq!(collapsed, plain);
}

#[test]
fn categorical_scalars_are_coerced_to_text() {
    let normalized = normalize(record(applicant_with(json!({
        "Dependents": 2,
        "Self_Employed": false
    }))));

    assert_eq!(normalized.dependents, "2");
    assert_eq!(normalized.self_employed, "false");
}

#[test]
fn form_keys_and_string_credit_history_are_accepted() {
    let normalized = normalize(record(json!({
        "gender": "Female",
        "married": "No",
        "dependents": "3+",
        "education": "Not Graduate",
        "selfEmployed": "Yes",
        "applicantIncome": 3000,
        "coapplicantIncome": 1500,
        "loanAmount": 120,
        "loanTerm": 180,
        "creditHistory": "0",
        "propertyArea": "Semiurban"
    })));

    assert_eq!(normalized.gender, "Female");
    assert_eq!(normalized.dependents, "3");
    assert_eq!(normalized.education, "Not Graduate");
    assert_eq!(normalized.property_area, "Semiurban");
    assert_eq!(normalized.credit_history, 0.0);
    assert_eq!(normalized.loan_amount_term, 180.0);
    assert_eq!(normalized.coapplicant_income, 1500.0);
}

#[test]
fn both_spellings_of_one_field_are_malformed_input() {
    let err = engine()
        .decide_value(applicant_with(json!({ "gender": "Female" })))
        .expect_err("a field may only be given once");

    match err {
        DecisionError::MalformedInput(source) => {
            assert!(source.to_string().contains("duplicate field `Gender`"));
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn missing_income_is_malformed_input() {
    let err = engine()
        .decide_value(applicant_without("ApplicantIncome"))
        .expect_err("income is required");

    match err {
        DecisionError::MalformedInput(source) => {
            assert!(source.to_string().contains("ApplicantIncome"));
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn textual_loan_amount_is_malformed_input() {
    let err = engine()
        .decide_value(applicant_with(json!({ "LoanAmount": "lots" })))
        .expect_err("amounts must be numeric");

    assert!(matches!(err, DecisionError::MalformedInput(_)));
}

#[test]
fn structured_categorical_value_is_malformed_input() {
    let err = engine()
        .decide_value(applicant_with(json!({ "Property_Area": ["Urban"] })))
        .expect_err("arrays are not categories");

    assert!(matches!(err, DecisionError::MalformedInput(_)));
}

#[test]
fn non_object_payload_is_malformed_input() {
    for raw in ["[1, 2, 3]", "\"Urban\"", "{not json"] {
        let err = engine().decide_json(raw).expect_err("payload must be an object");
        assert!(
            matches!(err, DecisionError::MalformedInput(_)),
            "unexpected error for {raw}: {err:?}"
        );
    }
}

#[test]
fn derived_features_sum_incomes_and_divide_by_loan() {
    let record = derived(applicant_with(json!({
        "ApplicantIncome": 3000,
        "CoapplicantIncome": 1500,
        "LoanAmount": 150
    })));

    assert_eq!(record.total_income, 4500.0);
    assert_eq!(record.income_to_debt_ratio, 30.0);
}

#[test]
fn zero_loan_amount_is_rejected() {
    let err = engine()
        .decide_value(applicant_with(json!({ "LoanAmount": 0 })))
        .expect_err("ratio undefined");

    match err {
        DecisionError::ZeroLoanAmount { total_income } => assert_eq!(total_income, 5000.0),
        other => panic!("expected zero loan amount error, got {other:?}"),
    }
}
