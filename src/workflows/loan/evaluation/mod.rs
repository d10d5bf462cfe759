mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::{FactorWeights, ScoringModel};

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::domain::{ApplicantRecord, DecisionResult, EncodedRecord};
use super::encoder::CategoricalEncoder;
use super::features::derive_features;
use super::normalizer::normalize;
use super::validation::FormValidator;
use super::DecisionError;

/// Stateless engine running normalization, feature derivation, encoding and scoring.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    model: ScoringModel,
    validator: Option<FormValidator>,
}

impl DecisionEngine {
    pub fn new(model: ScoringModel) -> Self {
        Self {
            model,
            validator: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(ScoringModel::STANDARD)
    }

    /// Rejects inputs that the application form would not accept before scoring them.
    pub fn with_strict_validation(mut self) -> Self {
        self.validator = Some(FormValidator::new());
        self
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    pub fn decide(&self, applicant: ApplicantRecord) -> Result<DecisionResult, DecisionError> {
        self.evaluate(applicant).map(|outcome| outcome.decision)
    }

    pub fn decide_json(&self, raw: &str) -> Result<DecisionResult, DecisionError> {
        let applicant: ApplicantRecord = serde_json::from_str(raw)?;
        self.decide(applicant)
    }

    pub fn decide_value(&self, value: Value) -> Result<DecisionResult, DecisionError> {
        let applicant: ApplicantRecord = serde_json::from_value(value)?;
        self.decide(applicant)
    }

    pub fn evaluate(&self, applicant: ApplicantRecord) -> Result<EvaluationOutcome, DecisionError> {
        if let Some(validator) = &self.validator {
            validator.check_submission(&applicant)?;
        }
        let normalized = normalize(applicant);
        if let Some(validator) = &self.validator {
            validator.check(&normalized)?;
        }

        let derived = derive_features(normalized)?;

        // Fitted per call on this record alone; the vocabulary never outlives the decision.
        let encoder = CategoricalEncoder::fit(std::slice::from_ref(&derived));
        let encoded = encoder.transform(&derived)?;
        debug!(?encoded, "encoded applicant");

        Ok(self.score(encoded))
    }

    pub fn evaluate_json(&self, raw: &str) -> Result<EvaluationOutcome, DecisionError> {
        let applicant: ApplicantRecord = serde_json::from_str(raw)?;
        self.evaluate(applicant)
    }

    /// Scores an already encoded record.
    pub fn score(&self, record: EncodedRecord) -> EvaluationOutcome {
        let (components, score, signals) = rules::score_record(&record, &self.model);

        let verdict = policy::decide_verdict(score, &self.model);
        let confidence = policy::confidence(score, verdict);
        info!(result = %verdict, confidence, score, "loan decision computed");

        EvaluationOutcome {
            decision: DecisionResult {
                result: verdict,
                confidence,
                key_factors: policy::key_factors(&signals),
                recommendations: policy::recommendations(verdict, &signals),
            },
            score,
            components,
            record,
        }
    }
}

/// Factors that carry weight in the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreFactor {
    CreditHistory,
    IncomeToLoanRatio,
    PropertyArea,
    Education,
    SelfEmployment,
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreFactor::CreditHistory => "Credit History",
            ScoreFactor::IncomeToLoanRatio => "Income to Loan Ratio",
            ScoreFactor::PropertyArea => "Property Area",
            ScoreFactor::Education => "Education",
            ScoreFactor::SelfEmployment => "Self Employment",
        };
        f.write_str(label)
    }
}

/// Discrete contribution to the score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    /// Factor value after normalization to `[0, 1]`.
    pub signal: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Decision together with the score trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOutcome {
    pub decision: DecisionResult,
    pub score: f64,
    pub components: Vec<ScoreComponent>,
    pub record: EncodedRecord,
}
