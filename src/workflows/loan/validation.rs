use super::domain::{ApplicantRecord, CategoricalColumn, NormalizedRecord};

/// Dependents choices offered by the application form, before `3+` is collapsed.
const FORM_DEPENDENTS: &[&str] = &["0", "1", "2", "3+"];

/// Violations of the loan application form rules enforced in strict mode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormViolation {
    #[error("{column} must be one of {allowed:?}, found '{found}'")]
    UnsupportedCategory {
        column: CategoricalColumn,
        found: String,
        allowed: &'static [&'static str],
    },
    #[error("{field} must be greater than zero, found {found}")]
    NotPositive { field: &'static str, found: f64 },
    #[error("{field} must not be negative, found {found}")]
    Negative { field: &'static str, found: f64 },
    #[error("Loan_Amount_Term must be a positive whole number of months, found {0}")]
    InvalidLoanTerm(f64),
    #[error("Credit_History must be 0 or 1, found {0}")]
    InvalidCreditHistory(f64),
}

/// Validates the normalized record against the application form schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks the values that normalization rewrites. Only the form's `3+` spelling is
    /// accepted for Dependents; an absent value is left to the default.
    pub fn check_submission(&self, applicant: &ApplicantRecord) -> Result<(), FormViolation> {
        match applicant.dependents.as_deref() {
            Some(found) if !FORM_DEPENDENTS.contains(&found) => {
                Err(FormViolation::UnsupportedCategory {
                    column: CategoricalColumn::Dependents,
                    found: found.to_string(),
                    allowed: FORM_DEPENDENTS,
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns the first violation in field order.
    pub fn check(&self, record: &NormalizedRecord) -> Result<(), FormViolation> {
        for column in CategoricalColumn::ALL {
            let allowed = allowed_values(column);
            let found = column.value_of(record);
            if !allowed.contains(&found) {
                return Err(FormViolation::UnsupportedCategory {
                    column,
                    found: found.to_string(),
                    allowed,
                });
            }
        }

        if !is_positive(record.applicant_income) {
            return Err(FormViolation::NotPositive {
                field: "ApplicantIncome",
                found: record.applicant_income,
            });
        }

        if record.coapplicant_income < 0.0 {
            return Err(FormViolation::Negative {
                field: "CoapplicantIncome",
                found: record.coapplicant_income,
            });
        }

        if !is_positive(record.loan_amount) {
            return Err(FormViolation::NotPositive {
                field: "LoanAmount",
                found: record.loan_amount,
            });
        }

        let term = record.loan_amount_term;
        if !is_positive(term) || term.fract() != 0.0 {
            return Err(FormViolation::InvalidLoanTerm(term));
        }

        if record.credit_history != 0.0 && record.credit_history != 1.0 {
            return Err(FormViolation::InvalidCreditHistory(record.credit_history));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn allowed_values(column: CategoricalColumn) -> &'static [&'static str] {
    match column {
        CategoricalColumn::Gender => &["Male", "Female"],
        CategoricalColumn::Married => &["Yes", "No"],
        CategoricalColumn::Dependents => &["0", "1", "2", "3"],
        CategoricalColumn::Education => &["Graduate", "Not Graduate"],
        CategoricalColumn::SelfEmployed => &["Yes", "No"],
        CategoricalColumn::PropertyArea => &["Urban", "Semiurban", "Rural"],
    }
}
