use serde_json::{json, Value};

use crate::workflows::loan::domain::{ApplicantRecord, DerivedRecord, EncodedRecord};
use crate::workflows::loan::features::derive_features;
use crate::workflows::loan::normalizer::normalize;
use crate::workflows::loan::DecisionEngine;

/// Urban graduate with a clean credit history and a small loan.
pub(super) fn applicant_json() -> Value {
    json!({
        "Gender": "Male",
        "Married": "Yes",
        "Dependents": "0",
        "Education": "Graduate",
        "Self_Employed": "No",
        "ApplicantIncome": 5000,
        "CoapplicantIncome": 0,
        "LoanAmount": 100,
        "Loan_Amount_Term": 360,
        "Credit_History": 1.0,
        "Property_Area": "Urban"
    })
}

pub(super) fn applicant_with(overrides: Value) -> Value {
    let mut base = applicant_json();
    if let (Some(target), Value::Object(changes)) = (base.as_object_mut(), overrides) {
        for (key, value) in changes {
            target.insert(key, value);
        }
    }
    base
}

pub(super) fn applicant_without(field: &str) -> Value {
    let mut base = applicant_json();
    if let Some(target) = base.as_object_mut() {
        target.remove(field);
    }
    base
}

pub(super) fn record(value: Value) -> ApplicantRecord {
    serde_json::from_value(value).expect("applicant deserializes")
}

pub(super) fn derived(value: Value) -> DerivedRecord {
    derive_features(normalize(record(value))).expect("features derive")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::standard()
}

/// Encoded record with every categorical code at zero and the given credit and ratio.
pub(super) fn encoded(credit_history: f64, income_to_debt_ratio: f64) -> EncodedRecord {
    EncodedRecord {
        gender: 0,
        married: 0,
        dependents: 0,
        education: 0,
        self_employed: 0,
        property_area: 0,
        credit_history,
        loan_amount_term: 360.0,
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 100.0,
        total_income: 5000.0,
        income_to_debt_ratio,
    }
}
