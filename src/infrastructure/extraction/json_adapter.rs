use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{CellValue, Column, DataTable, Document, ExtractedContent, FileKind};

#[derive(Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Accepts the two shapes tabular JSON readers conventionally accept:
    /// a top-level array of record objects, or a top-level object mapping
    /// column names to arrays of values. Column order follows the source
    /// document (serde_json's preserve_order keeps object key order).
    fn parse(data: &[u8]) -> Result<DataTable, ExtractError> {
        let value: Value =
            serde_json::from_slice(data).map_err(|e| malformed(e.to_string()))?;

        match value {
            Value::Array(records) => Self::from_records(&records),
            Value::Object(map) if map.values().all(Value::is_array) => {
                let columns = map
                    .into_iter()
                    .map(|(name, cells)| {
                        let values = cells
                            .as_array()
                            .map(|a| a.iter().map(convert_value).collect())
                            .unwrap_or_default();
                        Column::new(name, values)
                    })
                    .collect();
                Ok(DataTable::new(columns))
            }
            _ => Err(malformed(
                "expected an array of records or an object of columns".to_string(),
            )),
        }
    }

    fn from_records(records: &[Value]) -> Result<DataTable, ExtractError> {
        let mut names: Vec<String> = Vec::new();
        for record in records {
            let obj = record
                .as_object()
                .ok_or_else(|| malformed("array elements must be objects".to_string()))?;
            for key in obj.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }

        let columns = names
            .into_iter()
            .map(|name| {
                let values = records
                    .iter()
                    .map(|r| {
                        r.get(&name)
                            .map(convert_value)
                            .unwrap_or(CellValue::Null)
                    })
                    .collect();
                Column::new(name, values)
            })
            .collect();

        Ok(DataTable::new(columns))
    }
}

#[async_trait]
impl ContentExtractor for JsonAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.kind != FileKind::Json {
            return Err(ExtractError::UnsupportedFileType(
                document.kind.as_str().to_string(),
            ));
        }

        let table = Self::parse(data)?;
        tracing::debug!(
            columns = table.columns().len(),
            rows = table.row_count(),
            "JSON parsed"
        );
        Ok(ExtractedContent::Table(table))
    }
}

fn malformed(reason: String) -> ExtractError {
    ExtractError::Malformed {
        kind: "json",
        reason,
    }
}

fn convert_value(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::Text(n.to_string())),
        Value::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
