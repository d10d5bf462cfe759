use super::super::domain::EncodedRecord;
use super::config::ScoringModel;
use super::{ScoreComponent, ScoreFactor};

/// Normalized per-factor signals that the policy reads when explaining a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreSignals {
    pub credit_history: f64,
    pub ratio_score: f64,
    pub property_score: f64,
}

pub(crate) fn score_record(
    record: &EncodedRecord,
    model: &ScoringModel,
) -> (Vec<ScoreComponent>, f64, ScoreSignals) {
    let weights = &model.weights;
    let mut components = Vec::with_capacity(5);
    let mut total_score = 0.0;

    let credit_history = record.credit_history;
    let credit_signal = if credit_history == 1.0 {
        credit_history
    } else {
        0.0
    };
    let contribution = weights.credit_history * credit_signal;
    components.push(ScoreComponent {
        factor: ScoreFactor::CreditHistory,
        signal: credit_signal,
        weight: weights.credit_history,
        contribution,
    });
    total_score += contribution;

    let ratio_score = (record.income_to_debt_ratio / model.ratio_ceiling).min(1.0);
    let contribution = weights.income_to_debt_ratio * ratio_score;
    components.push(ScoreComponent {
        factor: ScoreFactor::IncomeToLoanRatio,
        signal: ratio_score,
        weight: weights.income_to_debt_ratio,
        contribution,
    });
    total_score += contribution;

    let property_score = f64::from(record.property_area) / model.property_code_span;
    let contribution = weights.property_area * property_score;
    components.push(ScoreComponent {
        factor: ScoreFactor::PropertyArea,
        signal: property_score,
        weight: weights.property_area,
        contribution,
    });
    total_score += contribution;

    let education = record.education;
    let contribution = weights.education * f64::from(education);
    components.push(ScoreComponent {
        factor: ScoreFactor::Education,
        signal: f64::from(education),
        weight: weights.education,
        contribution,
    });
    total_score += contribution;

    let self_employed = record.self_employed;
    let self_employed_signal = if self_employed == 1 {
        model.self_employed_multiplier
    } else {
        1.0
    };
    let contribution = weights.self_employed * self_employed_signal;
    components.push(ScoreComponent {
        factor: ScoreFactor::SelfEmployment,
        signal: self_employed_signal,
        weight: weights.self_employed,
        contribution,
    });
    total_score += contribution;

    let signals = ScoreSignals {
        credit_history,
        ratio_score,
        property_score,
    };

    (components, total_score, signals)
}
