use serde::Serialize;

/// Relative importance of each scored factor. The weights sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorWeights {
    pub credit_history: f64,
    pub income_to_debt_ratio: f64,
    pub property_area: f64,
    pub education: f64,
    pub self_employed: f64,
}

/// Fixed rubric applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringModel {
    pub weights: FactorWeights,
    /// Minimum score for approval, inclusive.
    pub approval_threshold: f64,
    /// Income-to-loan ratio at which the ratio factor saturates.
    pub ratio_ceiling: f64,
    /// Highest property-area code; divides the code into `[0, 1]`.
    pub property_code_span: f64,
    pub self_employed_multiplier: f64,
}

impl ScoringModel {
    pub const STANDARD: ScoringModel = ScoringModel {
        weights: FactorWeights {
            credit_history: 0.5,
            income_to_debt_ratio: 0.3,
            property_area: 0.1,
            education: 0.05,
            self_employed: 0.05,
        },
        approval_threshold: 0.6,
        ratio_ceiling: 5.0,
        property_code_span: 2.0,
        self_employed_multiplier: 0.8,
    };
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::STANDARD
    }
}
