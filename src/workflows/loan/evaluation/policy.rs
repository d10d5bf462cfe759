use super::super::domain::{Impact, KeyFactor, Verdict};
use super::config::ScoringModel;
use super::rules::ScoreSignals;

const STRONG_RATIO_SCORE: f64 = 0.7;
const WEAK_RATIO_SCORE: f64 = 0.5;
const FAVORABLE_PROPERTY_SCORE: f64 = 0.5;

pub(crate) const CREDIT_HISTORY_FACTOR: &str = "Credit History";
pub(crate) const RATIO_FACTOR: &str = "Income to Loan Ratio";
pub(crate) const PROPERTY_FACTOR: &str = "Property Area";

pub(crate) const STRONG_CREDIT_NOTE: &str =
    "Your strong credit history significantly improved your chances.";
pub(crate) const ADEQUATE_INCOME_NOTE: &str = "Adequate income relative to requested loan amount.";
pub(crate) const GROW_INCOME_NOTE: &str =
    "Consider increasing your income or reducing loan amount in the future.";
pub(crate) const IMPROVE_CREDIT_NOTE: &str =
    "Consider improving your credit history before reapplying.";
pub(crate) const INSUFFICIENT_RATIO_NOTE: &str = "The income to loan ratio seems insufficient. Consider a smaller loan amount or increasing your income.";
pub(crate) const RURAL_PROPERTY_NOTE: &str = "Rural property areas may have lower approval rates. Consider property in urban or semi-urban areas.";

pub(crate) fn decide_verdict(score: f64, model: &ScoringModel) -> Verdict {
    if score >= model.approval_threshold {
        Verdict::Approved
    } else {
        Verdict::Rejected
    }
}

/// Certainty in the returned verdict, truncated to a whole percentage.
pub(crate) fn confidence(score: f64, verdict: Verdict) -> u8 {
    let certainty = match verdict {
        Verdict::Approved => score,
        Verdict::Rejected => 1.0 - score,
    };
    (certainty * 100.0).clamp(0.0, 100.0).trunc() as u8
}

pub(crate) fn key_factors(signals: &ScoreSignals) -> Vec<KeyFactor> {
    let credit = if signals.credit_history == 1.0 {
        Impact::StrongPositive
    } else {
        Impact::StrongNegative
    };

    let ratio = if signals.ratio_score >= STRONG_RATIO_SCORE {
        Impact::Positive
    } else if signals.ratio_score < WEAK_RATIO_SCORE {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    let property = if signals.property_score >= FAVORABLE_PROPERTY_SCORE {
        Impact::Positive
    } else if signals.property_score == 0.0 {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    [
        (CREDIT_HISTORY_FACTOR, credit),
        (RATIO_FACTOR, ratio),
        (PROPERTY_FACTOR, property),
    ]
    .into_iter()
    .map(|(name, impact)| KeyFactor {
        name: name.to_string(),
        impact,
    })
    .collect()
}

pub(crate) fn recommendations(verdict: Verdict, signals: &ScoreSignals) -> Vec<String> {
    let mut notes = Vec::new();

    match verdict {
        Verdict::Approved => {
            if signals.credit_history == 1.0 {
                notes.push(STRONG_CREDIT_NOTE);
            }
            if signals.ratio_score >= STRONG_RATIO_SCORE {
                notes.push(ADEQUATE_INCOME_NOTE);
            } else {
                notes.push(GROW_INCOME_NOTE);
            }
        }
        Verdict::Rejected => {
            if signals.credit_history != 1.0 {
                notes.push(IMPROVE_CREDIT_NOTE);
            }
            if signals.ratio_score < WEAK_RATIO_SCORE {
                notes.push(INSUFFICIENT_RATIO_NOTE);
            }
            if signals.property_score == 0.0 {
                notes.push(RURAL_PROPERTY_NOTE);
            }
        }
    }

    notes.into_iter().map(str::to_string).collect()
}
