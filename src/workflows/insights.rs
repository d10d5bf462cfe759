//! Hand-authored portfolio statistics published alongside the predictor.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovalSplit {
    pub approved: u32,
    pub rejected: u32,
}

/// Approval split per segment, serialized as a JSON object keyed by segment in published order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalBreakdown(Vec<(&'static str, ApprovalSplit)>);

impl ApprovalBreakdown {
    pub fn segments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(segment, _)| *segment)
    }

    pub fn get(&self, segment: &str) -> Option<ApprovalSplit> {
        self.0
            .iter()
            .find(|(name, _)| *name == segment)
            .map(|(_, split)| *split)
    }
}

impl Serialize for ApprovalBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (segment, split) in &self.0 {
            map.serialize_entry(segment, split)?;
        }
        map.end()
    }
}

/// Features with a published approval breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum InsightFeature {
    CreditHistory,
    PropertyArea,
    Education,
}

impl InsightFeature {
    pub fn approval_stats(self) -> ApprovalBreakdown {
        let rows: &[(&'static str, u32, u32)] = match self {
            InsightFeature::CreditHistory => &[("good", 80, 20), ("poor", 30, 70)],
            InsightFeature::PropertyArea => {
                &[("Urban", 70, 30), ("Semiurban", 65, 35), ("Rural", 45, 55)]
            }
            InsightFeature::Education => &[("Graduate", 72, 28), ("Not Graduate", 51, 49)],
        };

        ApprovalBreakdown(
            rows.iter()
                .map(|&(segment, approved, rejected)| {
                    (segment, ApprovalSplit { approved, rejected })
                })
                .collect(),
        )
    }
}

/// Headline counts use snake_case keys; the breakdowns keep their camelCase feature names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioInsights {
    pub approved_count: u32,
    pub rejected_count: u32,
    pub approval_rate: f64,
    #[serde(rename = "creditHistory")]
    pub credit_history: ApprovalBreakdown,
    #[serde(rename = "propertyArea")]
    pub property_area: ApprovalBreakdown,
}

impl PortfolioInsights {
    pub fn published() -> Self {
        Self {
            approved_count: 320,
            rejected_count: 182,
            approval_rate: 63.7,
            credit_history: InsightFeature::CreditHistory.approval_stats(),
            property_area: InsightFeature::PropertyArea.approval_stats(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureImportance {
    pub name: &'static str,
    pub importance: u8,
}

/// Published share of influence per feature, in percent.
pub fn feature_importance() -> Vec<FeatureImportance> {
    [
        ("Credit History", 38),
        ("Income to Debt Ratio", 26),
        ("Property Area", 12),
        ("Education", 10),
        ("Other Factors", 14),
    ]
    .into_iter()
    .map(|(name, importance)| FeatureImportance { name, importance })
    .collect()
}
