use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw applicant submission as received from the caller.
///
/// Categorical slots accept strings, numbers or booleans and keep their textual form; the
/// numeric slots that have defaults also accept numeric strings. The three amounts are required
/// JSON numbers. Both the canonical dataset column names and the web form's camelCase keys are
/// recognised, but each field may appear under only one of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicantRecord {
    #[serde(
        rename = "Gender",
        alias = "gender",
        default,
        deserialize_with = "categorical"
    )]
    pub gender: Option<String>,
    #[serde(
        rename = "Married",
        alias = "married",
        default,
        deserialize_with = "categorical"
    )]
    pub married: Option<String>,
    #[serde(
        rename = "Dependents",
        alias = "dependents",
        default,
        deserialize_with = "categorical"
    )]
    pub dependents: Option<String>,
    #[serde(
        rename = "Education",
        alias = "education",
        default,
        deserialize_with = "categorical"
    )]
    pub education: Option<String>,
    #[serde(
        rename = "Self_Employed",
        alias = "selfEmployed",
        default,
        deserialize_with = "categorical"
    )]
    pub self_employed: Option<String>,
    #[serde(
        rename = "Property_Area",
        alias = "propertyArea",
        default,
        deserialize_with = "categorical"
    )]
    pub property_area: Option<String>,
    #[serde(
        rename = "Credit_History",
        alias = "creditHistory",
        default,
        deserialize_with = "lenient_float"
    )]
    pub credit_history: Option<f64>,
    #[serde(
        rename = "Loan_Amount_Term",
        alias = "loanTerm",
        default,
        deserialize_with = "lenient_float"
    )]
    pub loan_amount_term: Option<f64>,
    #[serde(rename = "ApplicantIncome", alias = "applicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome", alias = "coapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount", alias = "loanAmount")]
    pub loan_amount: f64,
}

fn categorical<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a categorical scalar, found {other}"
        ))),
    }
}

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("{number} is not representable"))),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{text}' is not a number"))),
        Some(Value::Bool(flag)) => Ok(Some(if flag { 1.0 } else { 0.0 })),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a number, found {other}"
        ))),
    }
}

/// Applicant with every defaultable field filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub gender: String,
    pub married: String,
    pub dependents: String,
    pub education: String,
    pub self_employed: String,
    pub property_area: String,
    pub credit_history: f64,
    pub loan_amount_term: f64,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
}

/// Normalized applicant plus the two derived financial features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    pub applicant: NormalizedRecord,
    pub total_income: f64,
    pub income_to_debt_ratio: f64,
}

/// Derived applicant with categorical columns replaced by ordinal codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRecord {
    pub gender: u32,
    pub married: u32,
    pub dependents: u32,
    pub education: u32,
    pub self_employed: u32,
    pub property_area: u32,
    pub credit_history: f64,
    pub loan_amount_term: f64,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub total_income: f64,
    pub income_to_debt_ratio: f64,
}

/// The six categorical columns, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CategoricalColumn {
    Gender,
    Married,
    Dependents,
    Education,
    SelfEmployed,
    PropertyArea,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 6] = [
        CategoricalColumn::Gender,
        CategoricalColumn::Married,
        CategoricalColumn::Dependents,
        CategoricalColumn::Education,
        CategoricalColumn::SelfEmployed,
        CategoricalColumn::PropertyArea,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            CategoricalColumn::Gender => "Gender",
            CategoricalColumn::Married => "Married",
            CategoricalColumn::Dependents => "Dependents",
            CategoricalColumn::Education => "Education",
            CategoricalColumn::SelfEmployed => "Self_Employed",
            CategoricalColumn::PropertyArea => "Property_Area",
        }
    }

    pub fn value_of(self, record: &NormalizedRecord) -> &str {
        match self {
            CategoricalColumn::Gender => &record.gender,
            CategoricalColumn::Married => &record.married,
            CategoricalColumn::Dependents => &record.dependents,
            CategoricalColumn::Education => &record.education,
            CategoricalColumn::SelfEmployed => &record.self_employed,
            CategoricalColumn::PropertyArea => &record.property_area,
        }
    }
}

impl fmt::Display for CategoricalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Approval flag serialized as the dataset's `Y`/`N` loan status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Y")]
    Approved,
    #[serde(rename = "N")]
    Rejected,
}

impl Verdict {
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "Y",
            Verdict::Rejected => "N",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Verdict::Approved => "loan approved",
            Verdict::Rejected => "loan rejected",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction and strength of a factor's influence on the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "Strong Positive")]
    StrongPositive,
    #[serde(rename = "Strong Negative")]
    StrongNegative,
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::StrongPositive => "Strong Positive",
            Impact::StrongNegative => "Strong Negative",
            Impact::Positive => "Positive",
            Impact::Negative => "Negative",
            Impact::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub name: String,
    pub impact: Impact,
}

/// Decision payload returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub result: Verdict,
    pub confidence: u8,
    pub key_factors: Vec<KeyFactor>,
    pub recommendations: Vec<String>,
}
