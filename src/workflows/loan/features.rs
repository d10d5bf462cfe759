use tracing::debug;

use super::domain::{DerivedRecord, NormalizedRecord};
use super::DecisionError;

/// Adds total household income and the income-to-loan ratio.
///
/// A zero loan amount leaves the ratio undefined and is rejected rather than scored.
pub fn derive_features(applicant: NormalizedRecord) -> Result<DerivedRecord, DecisionError> {
    let total_income = applicant.applicant_income + applicant.coapplicant_income;

    if applicant.loan_amount == 0.0 {
        return Err(DecisionError::ZeroLoanAmount { total_income });
    }

    let income_to_debt_ratio = total_income / applicant.loan_amount;
    debug!(total_income, income_to_debt_ratio, "derived applicant features");

    Ok(DerivedRecord {
        applicant,
        total_income,
        income_to_debt_ratio,
    })
}
