use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{Document, ExtractedContent, FileKind};

use super::{CsvAdapter, JsonAdapter, PdfAdapter, PlainTextAdapter, XlsxAdapter};

/// Dispatches extraction to the adapter registered for the document's kind.
pub struct CompositeExtractor {
    adapters: HashMap<FileKind, Arc<dyn ContentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(FileKind, Arc<dyn ContentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// One adapter per supported format.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            (FileKind::Csv, Arc::new(CsvAdapter::new()) as Arc<dyn ContentExtractor>),
            (FileKind::Xlsx, Arc::new(XlsxAdapter::new())),
            (FileKind::Json, Arc::new(JsonAdapter::new())),
            (FileKind::Pdf, Arc::new(PdfAdapter::new())),
            (FileKind::Txt, Arc::new(PlainTextAdapter)),
        ])
    }
}

#[async_trait]
impl ContentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        let adapter = self.adapters.get(&document.kind).ok_or_else(|| {
            ExtractError::UnsupportedFileType(document.kind.as_str().to_string())
        })?;

        adapter.extract(data, document).await
    }
}
