//! Spreadsheet ingestion
//!
//! Decoding uploaded workbooks and reshaping wide survey tables into long
//! (text, label) / (text, source question) observations.

mod excel;
mod reshaper;

pub use excel::{parse_workbook, CellValue, WideTable};
pub use reshaper::{
    reshape_for_prediction, reshape_for_training, PredictRecord, TrainRecord,
    MAX_QUESTION_COLUMNS,
};
