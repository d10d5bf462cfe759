use super::domain::{ApplicantRecord, NormalizedRecord};

pub const DEFAULT_GENDER: &str = "Male";
pub const DEFAULT_MARRIED: &str = "Yes";
pub const DEFAULT_DEPENDENTS: &str = "0";
pub const DEFAULT_EDUCATION: &str = "Graduate";
pub const DEFAULT_SELF_EMPLOYED: &str = "No";
pub const DEFAULT_CREDIT_HISTORY: f64 = 1.0;
pub const DEFAULT_LOAN_AMOUNT_TERM: f64 = 360.0;

const DEPENDENTS_OVERFLOW: &str = "3+";
const DEPENDENTS_CAP: &str = "3";

/// Fills the most common value into each missing field and collapses `3+` dependents.
///
/// `Property_Area` has no fallback; an absent area becomes the empty string and is encoded
/// like any other category.
pub fn normalize(applicant: ApplicantRecord) -> NormalizedRecord {
    let ApplicantRecord {
        gender,
        married,
        dependents,
        education,
        self_employed,
        property_area,
        credit_history,
        loan_amount_term,
        applicant_income,
        coapplicant_income,
        loan_amount,
    } = applicant;

    let mut dependents = dependents.unwrap_or_else(|| DEFAULT_DEPENDENTS.to_string());
    if dependents == DEPENDENTS_OVERFLOW {
        dependents = DEPENDENTS_CAP.to_string();
    }

    NormalizedRecord {
        gender: gender.unwrap_or_else(|| DEFAULT_GENDER.to_string()),
        married: married.unwrap_or_else(|| DEFAULT_MARRIED.to_string()),
        dependents,
        education: education.unwrap_or_else(|| DEFAULT_EDUCATION.to_string()),
        self_employed: self_employed.unwrap_or_else(|| DEFAULT_SELF_EMPLOYED.to_string()),
        property_area: property_area.unwrap_or_default(),
        credit_history: credit_history.unwrap_or(DEFAULT_CREDIT_HISTORY),
        loan_amount_term: loan_amount_term.unwrap_or(DEFAULT_LOAN_AMOUNT_TERM),
        applicant_income,
        coapplicant_income,
        loan_amount,
    }
}
