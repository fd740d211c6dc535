//! Wide-to-long reshaping
//!
//! Survey exports are wide: up to 14 `pertanyaan {i}` / `label {i}` column
//! pairs per respondent row. Training and prediction both operate on long
//! tables with one row per (respondent, question) observation.

use crate::dataset::excel::WideTable;
use crate::error::{ServiceError, ServiceResult};

/// Highest recognized question/label column index
pub const MAX_QUESTION_COLUMNS: usize = 14;

/// One labeled training observation
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRecord {
    pub text: String,
    pub label: i64,
}

/// One unlabeled prediction observation, tagged with its source column
#[derive(Debug, Clone, PartialEq)]
pub struct PredictRecord {
    pub text: String,
    pub source_question: String,
}

/// Reshape for training: for each recognized `pertanyaan {i}` / `label {i}`
/// pair (ascending i, row order within each pair), emit one record per
/// non-empty text cell with a numeric label. Non-numeric or missing labels
/// drop the row; retained labels truncate to integer.
pub fn reshape_for_training(table: &WideTable) -> ServiceResult<Vec<TrainRecord>> {
    let mut records = Vec::new();
    let mut saw_pair = false;

    for i in 1..=MAX_QUESTION_COLUMNS {
        let text_col = format!("pertanyaan {i}");
        let label_col = format!("label {i}");

        let (text_idx, label_idx) = match (
            table.column_index(&text_col),
            table.column_index(&label_col),
        ) {
            (Some(t), Some(l)) => (t, l),
            _ => continue,
        };
        saw_pair = true;

        for row in 0..table.n_rows() {
            let Some(text) = table.cell(row, text_idx).as_text() else {
                continue;
            };
            let Some(label) = table.cell(row, label_idx).as_number() else {
                continue;
            };
            records.push(TrainRecord {
                text,
                label: label as i64,
            });
        }
    }

    if !saw_pair {
        return Err(ServiceError::Schema(
            "No valid 'pertanyaan X' and 'label X' column pairs found.".to_string(),
        ));
    }
    if records.is_empty() {
        return Err(ServiceError::Data(
            "No valid numeric labels (0 or 1) found after cleaning the label columns.".to_string(),
        ));
    }

    Ok(records)
}

/// Reshape for prediction: for each recognized `pertanyaan {i}` column,
/// emit one record per non-empty cell, tagged with the source column name.
pub fn reshape_for_prediction(table: &WideTable) -> ServiceResult<Vec<PredictRecord>> {
    let mut records = Vec::new();
    let mut saw_column = false;

    for i in 1..=MAX_QUESTION_COLUMNS {
        let text_col = format!("pertanyaan {i}");
        let Some(text_idx) = table.column_index(&text_col) else {
            continue;
        };
        saw_column = true;

        for row in 0..table.n_rows() {
            if let Some(text) = table.cell(row, text_idx).as_text() {
                records.push(PredictRecord {
                    text,
                    source_question: text_col.clone(),
                });
            }
        }
    }

    if !saw_column {
        return Err(ServiceError::Schema(
            "No 'pertanyaan X' columns found or all are empty.".to_string(),
        ));
    }
    if records.is_empty() {
        return Err(ServiceError::Data("No text data found to analyze.".to_string()));
    }

    Ok(records)
}
