//! Explicit input contract between the form and the classifier.
//!
//! The artifact declares its columns in training order together with how each is encoded.
//! [`FeatureSchema::check_profile_layout`] runs once at load time so a model trained on a
//! different layout is rejected up front instead of producing meaningless verdicts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::PredictionError;
use crate::profile::{FieldKind, ProfileField};

/// Raw value of one column before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Category(&'static str),
    Number(f64),
}

/// Ordered `(column, value)` cells handed to a predictor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRow {
    cells: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRow {
    pub fn from_cells(cells: impl IntoIterator<Item = (&'static str, FeatureValue)>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(column, _)| *column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FeatureValue)> {
        self.cells.iter()
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }
}

/// How a single column turns into model inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "encoding", rename_all = "snake_case")]
pub enum ColumnEncoding {
    /// One input per category, 1.0 for the matching category.
    OneHot { categories: Vec<String> },
    /// One input, `(x - mean) / std`.
    Standard { mean: f32, std: f32 },
}

impl ColumnEncoding {
    fn width(&self) -> usize {
        match self {
            ColumnEncoding::OneHot { categories } => categories.len(),
            ColumnEncoding::Standard { .. } => 1,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ColumnEncoding::OneHot { .. } => "categorical",
            ColumnEncoding::Standard { .. } => "numeric",
        }
    }
}

/// One declared model column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(flatten)]
    pub encoding: ColumnEncoding,
}

/// Ordered column list the classifier was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<ColumnSpec>,
}

/// Mismatch between the artifact's declared columns and the collected profile.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("column {index} is `{found}`, expected `{expected}`")]
    ColumnName {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("column `{column}` is encoded as {found} but the form provides {expected} values")]
    EncodingKind {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("column `{column}` has no category for {missing:?}")]
    MissingCategories { column: String, missing: Vec<String> },
    #[error("column `{column}` lists category `{category}` twice")]
    DuplicateCategory { column: String, category: String },
    #[error("column `{column}` has a non-positive or non-finite scale")]
    InvalidScale { column: String },
}

impl FeatureSchema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Number of model inputs after encoding.
    pub fn encoded_len(&self) -> usize {
        self.columns.iter().map(|column| column.encoding.width()).sum()
    }

    /// Confirm the schema lines up with [`ProfileField::ALL`] column for column.
    ///
    /// Categorical columns must cover every option the form offers; extra categories are allowed.
    pub fn check_profile_layout(&self) -> Result<(), SchemaError> {
        if self.columns.len() != ProfileField::COUNT {
            return Err(SchemaError::ColumnCount {
                expected: ProfileField::COUNT,
                found: self.columns.len(),
            });
        }
        for (index, (field, spec)) in ProfileField::ALL.iter().zip(&self.columns).enumerate() {
            if spec.name != field.column() {
                return Err(SchemaError::ColumnName {
                    index,
                    expected: field.column(),
                    found: spec.name.clone(),
                });
            }
            match (field.kind(), &spec.encoding) {
                (FieldKind::Choice(options), ColumnEncoding::OneHot { categories }) => {
                    let mut seen = BTreeSet::new();
                    if let Some(dup) = categories.iter().find(|c| !seen.insert(c.as_str())) {
                        return Err(SchemaError::DuplicateCategory {
                            column: spec.name.clone(),
                            category: dup.clone(),
                        });
                    }
                    let missing: Vec<String> = options
                        .iter()
                        .filter(|option| !seen.contains(**option))
                        .map(|option| option.to_string())
                        .collect();
                    if !missing.is_empty() {
                        return Err(SchemaError::MissingCategories {
                            column: spec.name.clone(),
                            missing,
                        });
                    }
                }
                (FieldKind::Choice(_), other) => {
                    return Err(SchemaError::EncodingKind {
                        column: spec.name.clone(),
                        expected: "categorical",
                        found: other.kind_name(),
                    });
                }
                (_, ColumnEncoding::Standard { mean, std }) => {
                    if !mean.is_finite() || !std.is_finite() || *std <= 0.0 {
                        return Err(SchemaError::InvalidScale {
                            column: spec.name.clone(),
                        });
                    }
                }
                (_, other) => {
                    return Err(SchemaError::EncodingKind {
                        column: spec.name.clone(),
                        expected: "numeric",
                        found: other.kind_name(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Encode a row into the flat input vector the classifier consumes.
    pub fn encode(&self, row: &FeatureRow) -> Result<Vec<f32>, PredictionError> {
        if row.len() != self.columns.len() {
            return Err(PredictionError::RowLength {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        let mut encoded = Vec::with_capacity(self.encoded_len());
        for (index, (spec, (column, value))) in self.columns.iter().zip(row.iter()).enumerate() {
            if spec.name != *column {
                return Err(PredictionError::ColumnName {
                    index,
                    expected: spec.name.clone(),
                    found: column.to_string(),
                });
            }
            match (&spec.encoding, value) {
                (ColumnEncoding::OneHot { categories }, FeatureValue::Category(label)) => {
                    let hot = categories
                        .iter()
                        .position(|category| category == label)
                        .ok_or_else(|| PredictionError::UnknownCategory {
                            column: spec.name.clone(),
                            value: label.to_string(),
                        })?;
                    encoded.extend((0..categories.len()).map(|i| if i == hot { 1.0 } else { 0.0 }));
                }
                (ColumnEncoding::Standard { mean, std }, FeatureValue::Number(x)) => {
                    if !x.is_finite() {
                        return Err(PredictionError::NonFinite {
                            column: spec.name.clone(),
                        });
                    }
                    encoded.push((*x as f32 - mean) / std.max(1e-6));
                }
                (encoding, _) => {
                    return Err(PredictionError::ValueKind {
                        column: spec.name.clone(),
                        expected: encoding.kind_name(),
                    });
                }
            }
        }
        Ok(encoded)
    }
}

impl FeatureSchema {
    /// Schema matching the form layout with neutral numeric scaling.
    ///
    /// Categories follow the form's option order; numeric columns pass through unscaled.
    pub fn profile_layout() -> Self {
        Self::new(
            ProfileField::ALL
                .into_iter()
                .map(|field| ColumnSpec {
                    name: field.column().to_string(),
                    encoding: match field.kind() {
                        FieldKind::Choice(options) => ColumnEncoding::OneHot {
                            categories: options.iter().map(|o| o.to_string()).collect(),
                        },
                        _ => ColumnEncoding::Standard {
                            mean: 0.0,
                            std: 1.0,
                        },
                    },
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CustomerProfile;

    #[test]
    fn profile_layout_passes_its_own_check() {
        let schema = FeatureSchema::profile_layout();
        schema.check_profile_layout().unwrap();
        assert_eq!(schema.encoded_len(), 45);
    }

    #[test]
    fn swapped_columns_fail_fast() {
        let mut schema = FeatureSchema::profile_layout();
        schema.columns.swap(0, 1);
        let err = schema.check_profile_layout().unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnName {
                index: 0,
                expected: "gender",
                found: "SeniorCitizen".into(),
            }
        );
    }

    #[test]
    fn missing_category_is_reported_by_name() {
        let mut schema = FeatureSchema::profile_layout();
        schema.columns[14].encoding = ColumnEncoding::OneHot {
            categories: vec!["Month-to-month".into(), "One year".into()],
        };
        let err = schema.check_profile_layout().unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingCategories {
                column: "Contract".into(),
                missing: vec!["Two year".into()],
            }
        );
    }

    #[test]
    fn numeric_column_encoded_as_one_hot_is_rejected() {
        let mut schema = FeatureSchema::profile_layout();
        schema.columns[4].encoding = ColumnEncoding::OneHot {
            categories: vec!["12".into()],
        };
        assert!(matches!(
            schema.check_profile_layout(),
            Err(SchemaError::EncodingKind { expected: "numeric", .. })
        ));
    }

    #[test]
    fn truncated_schema_reports_count() {
        let mut schema = FeatureSchema::profile_layout();
        schema.columns.pop();
        assert_eq!(
            schema.check_profile_layout(),
            Err(SchemaError::ColumnCount {
                expected: 19,
                found: 18
            })
        );
    }

    #[test]
    fn encode_one_hot_and_standardize() {
        let mut schema = FeatureSchema::profile_layout();
        schema.columns[4].encoding = ColumnEncoding::Standard {
            mean: 10.0,
            std: 2.0,
        };
        let row = CustomerProfile::default().to_row();
        let encoded = schema.encode(&row).unwrap();
        assert_eq!(encoded.len(), 45);
        // gender=Male
        assert_eq!(&encoded[0..2], &[1.0, 0.0]);
        // tenure=12 -> (12 - 10) / 2
        assert_eq!(encoded[7], 1.0);
    }

    #[test]
    fn encode_rejects_short_rows() {
        let schema = FeatureSchema::profile_layout();
        let row = FeatureRow::from_cells([("gender", FeatureValue::Category("Male"))]);
        assert_eq!(
            schema.encode(&row),
            Err(PredictionError::RowLength {
                expected: 19,
                found: 1
            })
        );
    }

    #[test]
    fn encode_rejects_unknown_category() {
        let schema = FeatureSchema::profile_layout();
        let mut cells: Vec<_> = CustomerProfile::default().to_row().iter().cloned().collect();
        cells[0].1 = FeatureValue::Category("Other");
        let err = schema.encode(&FeatureRow::from_cells(cells)).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownCategory { .. }));
    }
}
