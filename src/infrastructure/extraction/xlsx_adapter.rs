use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, Xlsx};

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{CellValue, Column, DataTable, Document, ExtractedContent, FileKind};

#[derive(Default)]
pub struct XlsxAdapter;

impl XlsxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn parse(data: &[u8]) -> Result<DataTable, ExtractError> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(data)).map_err(|e| malformed(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let first_sheet = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| malformed("workbook contains no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&first_sheet)
            .map_err(|e| malformed(e.to_string()))?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Ok(DataTable::default());
        };

        let names: Vec<String> = header_row
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Data::Empty => format!("column_{i}"),
                other => other.to_string(),
            })
            .collect();

        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();

        for row in rows {
            for (i, column) in columns.iter_mut().enumerate() {
                let cell = row.get(i).unwrap_or(&Data::Empty);
                column.values.push(convert_cell(cell));
            }
        }

        Ok(DataTable::new(columns))
    }
}

#[async_trait]
impl ContentExtractor for XlsxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.kind != FileKind::Xlsx {
            return Err(ExtractError::UnsupportedFileType(
                document.kind.as_str().to_string(),
            ));
        }

        let table = Self::parse(data)?;
        tracing::debug!(
            columns = table.columns().len(),
            rows = table.row_count(),
            "XLSX parsed"
        );
        Ok(ExtractedContent::Table(table))
    }
}

fn malformed(reason: String) -> ExtractError {
    ExtractError::Malformed {
        kind: "xlsx",
        reason,
    }
}

/// Cell types come from the workbook itself; anything exotic (dates,
/// durations, cell errors) degrades to its text form.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
