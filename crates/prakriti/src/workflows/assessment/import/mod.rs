mod parser;

use super::answers::AnswerSheet;
use super::bank::QuestionBank;
use super::domain::{AssessmentError, ResponseLevel};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Response { line: u64, value: String },
    Assessment { line: u64, source: AssessmentError },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Response { line, value } => write!(
                f,
                "line {}: '{}' is not a response (expected yes, somewhat, or no)",
                line, value
            ),
            AnswerImportError::Assessment { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Response { .. } => None,
            AnswerImportError::Assessment { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads answer sheets from CSV with `question_id,characteristic_index,response`
/// columns. Rows with an empty response are skipped; later rows overwrite
/// earlier ones for the same characteristic.
pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        bank: &QuestionBank,
    ) -> Result<AnswerSheet, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, bank)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        bank: &QuestionBank,
    ) -> Result<AnswerSheet, AnswerImportError> {
        let mut sheet = AnswerSheet::new();

        for row in parser::parse_rows(reader)? {
            let level =
                ResponseLevel::parse(&row.response).ok_or_else(|| AnswerImportError::Response {
                    line: row.line,
                    value: row.response.clone(),
                })?;

            let dosha = bank
                .dosha_for(row.question_id, row.characteristic_index)
                .map_err(|source| AnswerImportError::Assessment {
                    line: row.line,
                    source,
                })?;

            sheet.record(
                row.question_id,
                row.characteristic_index,
                level,
                dosha,
            );
        }

        Ok(sheet)
    }
}
