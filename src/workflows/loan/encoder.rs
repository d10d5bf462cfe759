use std::collections::{BTreeMap, BTreeSet};

use super::domain::{CategoricalColumn, DerivedRecord, EncodedRecord};
use super::DecisionError;

/// Per-column label encoder fitted on a batch of derived records.
///
/// Each column's distinct values are sorted lexicographically and numbered from zero. The
/// vocabulary is local to the batch it was fitted on, so a single-record batch maps every
/// categorical value to `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalEncoder {
    vocabularies: BTreeMap<CategoricalColumn, Vec<String>>,
}

impl CategoricalEncoder {
    pub fn fit(batch: &[DerivedRecord]) -> Self {
        let vocabularies = CategoricalColumn::ALL
            .into_iter()
            .map(|column| {
                let distinct: BTreeSet<&str> = batch
                    .iter()
                    .map(|record| column.value_of(&record.applicant))
                    .collect();
                let labels = distinct.into_iter().map(str::to_string).collect();
                (column, labels)
            })
            .collect();

        Self { vocabularies }
    }

    /// Sorted labels learned for `column`.
    pub fn classes(&self, column: CategoricalColumn) -> &[String] {
        self.vocabularies
            .get(&column)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn code(&self, column: CategoricalColumn, value: &str) -> Result<u32, DecisionError> {
        self.classes(column)
            .binary_search_by(|label| label.as_str().cmp(value))
            .map(|index| index as u32)
            .map_err(|_| DecisionError::UnseenCategory {
                column,
                value: value.to_string(),
            })
    }

    pub fn transform(&self, record: &DerivedRecord) -> Result<EncodedRecord, DecisionError> {
        let applicant = &record.applicant;
        let code = |column: CategoricalColumn| self.code(column, column.value_of(applicant));

        Ok(EncodedRecord {
            gender: code(CategoricalColumn::Gender)?,
            married: code(CategoricalColumn::Married)?,
            dependents: code(CategoricalColumn::Dependents)?,
            education: code(CategoricalColumn::Education)?,
            self_employed: code(CategoricalColumn::SelfEmployed)?,
            property_area: code(CategoricalColumn::PropertyArea)?,
            credit_history: applicant.credit_history,
            loan_amount_term: applicant.loan_amount_term,
            applicant_income: applicant.applicant_income,
            coapplicant_income: applicant.coapplicant_income,
            loan_amount: applicant.loan_amount,
            total_income: record.total_income,
            income_to_debt_ratio: record.income_to_debt_ratio,
        })
    }

    /// Fits on `batch` and encodes every record of it.
    pub fn fit_transform(batch: &[DerivedRecord]) -> Result<Vec<EncodedRecord>, DecisionError> {
        let encoder = Self::fit(batch);
        batch.iter().map(|record| encoder.transform(record)).collect()
    }
}
