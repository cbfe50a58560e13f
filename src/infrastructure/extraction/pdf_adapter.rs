use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{Document, ExtractedContent, FileKind};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts the text layer of a PDF, pages concatenated in page order.
/// Parsing runs on the blocking pool under a timeout; any parse failure is
/// tagged into the extracted content instead of failing the request.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_text_blocking(data: &[u8]) -> Result<String, String> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ContentExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.kind != FileKind::Pdf {
            return Err(ExtractError::UnsupportedFileType(
                document.kind.as_str().to_string(),
            ));
        }

        let owned = data.to_vec();
        let outcome = match tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_text_blocking(&owned)),
        )
        .await
        {
            Err(_) => Err("PDF extraction timed out".to_string()),
            Ok(joined) => {
                joined.map_err(|e| ExtractError::TaskFailed(e.to_string()))?
            }
        };

        match outcome {
            Ok(text) => {
                tracing::info!(chars = text.len(), "PDF text extraction complete");
                Ok(ExtractedContent::Text(text))
            }
            Err(reason) => {
                tracing::warn!(%reason, "PDF text extraction failed, continuing with tagged failure");
                Ok(ExtractedContent::Failed { reason })
            }
        }
    }
}
