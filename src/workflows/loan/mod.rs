//! Loan approval workflow: normalization, feature derivation, categorical encoding and
//! weighted scoring of a single applicant.

pub mod domain;
pub mod encoder;
pub(crate) mod evaluation;
pub mod features;
pub mod normalizer;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, CategoricalColumn, DecisionResult, DerivedRecord, EncodedRecord, Impact,
    KeyFactor, NormalizedRecord, Verdict,
};
pub use encoder::CategoricalEncoder;
pub use evaluation::{
    DecisionEngine, EvaluationOutcome, FactorWeights, ScoreComponent, ScoreFactor, ScoringModel,
};
pub use validation::{FormValidator, FormViolation};

/// Failures that stop a decision from being produced.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("malformed applicant input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("LoanAmount is zero; income to loan ratio is undefined (total income {total_income})")]
    ZeroLoanAmount { total_income: f64 },
    #[error("{column} value '{value}' was not seen when the encoder was fitted")]
    UnseenCategory {
        column: CategoricalColumn,
        value: String,
    },
    #[error("application rejected by form validation: {0}")]
    Validation(#[from] FormViolation),
}

/// Scores one applicant with the standard model.
pub fn predict_loan_approval(raw: &str) -> Result<DecisionResult, DecisionError> {
    DecisionEngine::standard().decide_json(raw)
}
