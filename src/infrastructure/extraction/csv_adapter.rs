use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{CellValue, Column, DataTable, Document, ExtractedContent, FileKind};

#[derive(Default)]
pub struct CsvAdapter;

impl CsvAdapter {
    pub fn new() -> Self {
        Self
    }

    fn parse(data: &[u8]) -> Result<DataTable, ExtractError> {
        let mut reader = csv::Reader::from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| malformed(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record.map_err(|e| malformed(e.to_string()))?;
            for (i, raw) in raw_columns.iter_mut().enumerate() {
                raw.push(record.get(i).unwrap_or_default().to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::new(name, infer_cells(&raw)))
            .collect();

        Ok(DataTable::new(columns))
    }
}

#[async_trait]
impl ContentExtractor for CsvAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.kind != FileKind::Csv {
            return Err(ExtractError::UnsupportedFileType(
                document.kind.as_str().to_string(),
            ));
        }

        let table = Self::parse(data)?;
        tracing::debug!(
            columns = table.columns().len(),
            rows = table.row_count(),
            "CSV parsed"
        );
        Ok(ExtractedContent::Table(table))
    }
}

fn malformed(reason: String) -> ExtractError {
    ExtractError::Malformed {
        kind: "csv",
        reason,
    }
}

/// Schema inference over a column of raw strings: all-numeric becomes
/// numbers, all-boolean becomes booleans, otherwise text. Empty cells are
/// null either way.
fn infer_cells(raw: &[String]) -> Vec<CellValue> {
    let non_empty: Vec<&String> = raw.iter().filter(|s| !s.trim().is_empty()).collect();

    let all_numbers =
        !non_empty.is_empty() && non_empty.iter().all(|s| s.trim().parse::<f64>().is_ok());
    let all_bools = !non_empty.is_empty()
        && non_empty
            .iter()
            .all(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "false"));

    raw.iter()
        .map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Null
            } else if all_numbers {
                CellValue::Number(trimmed.parse().unwrap_or(f64::NAN))
            } else if all_bools {
                CellValue::Bool(trimmed.eq_ignore_ascii_case("true"))
            } else {
                CellValue::Text(s.clone())
            }
        })
        .collect()
}
