use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    BlobStore, BlobStoreError, ContentExtractor, ExtractError, RenderError, ReportInput,
    ReportRenderer, ResponseSynthesizer, SynthesisError,
};
use crate::domain::{
    sanitize_filename, Document, FileKind, ReportId, StoragePath, CHART_FILENAME, REPORT_FILENAME,
};

/// Orchestrates one upload-and-preview request: validate, persist the
/// upload, extract, flatten, synthesize, render, persist the artifacts.
/// Every step is sequential; the first failure short-circuits the rest.
pub struct PreviewService<E, S, R>
where
    E: ContentExtractor,
    S: ResponseSynthesizer,
    R: ReportRenderer,
{
    extractor: Arc<E>,
    synthesizer: Arc<S>,
    renderer: Arc<R>,
    upload_store: Arc<dyn BlobStore>,
    output_store: Arc<dyn BlobStore>,
    allowed_extensions: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOutcome {
    pub report_id: ReportId,
    pub preview_url: String,
    pub chart_produced: bool,
}

impl<E, S, R> PreviewService<E, S, R>
where
    E: ContentExtractor,
    S: ResponseSynthesizer,
    R: ReportRenderer,
{
    pub fn new(
        extractor: Arc<E>,
        synthesizer: Arc<S>,
        renderer: Arc<R>,
        upload_store: Arc<dyn BlobStore>,
        output_store: Arc<dyn BlobStore>,
        allowed_extensions: HashSet<String>,
    ) -> Self {
        Self {
            extractor,
            synthesizer,
            renderer,
            upload_store,
            output_store,
            allowed_extensions,
        }
    }

    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn preview(
        &self,
        filename: &str,
        data: &[u8],
        prompt: &str,
    ) -> Result<PreviewOutcome, PreviewError> {
        let kind = self.validate_extension(filename)?;

        let safe_name = sanitize_filename(filename);
        let document = Document::new(safe_name, kind, data.len() as u64);
        let upload_path = StoragePath::for_upload(&document.id, &document.filename);
        self.upload_store
            .put(&upload_path, Bytes::copy_from_slice(data))
            .await?;
        tracing::debug!(path = %upload_path, bytes = document.size_bytes, "Upload persisted");

        let content = self.extractor.extract(data, &document).await?;
        let flattened = content.flattened();

        let response = self
            .synthesizer
            .synthesize(prompt, std::slice::from_ref(&flattened))
            .await?;

        let input = ReportInput {
            prompt: prompt.to_string(),
            extracted_text: flattened,
            response,
            table: content.table().cloned(),
            extraction_note: content.extraction_note(),
        };
        let rendered = self.renderer.render(input).await?;

        let report_id = ReportId::new();
        self.output_store
            .put(
                &StoragePath::for_artifact(&report_id, REPORT_FILENAME),
                rendered.document.into(),
            )
            .await?;

        let chart_produced = rendered.chart.is_some();
        if let Some(chart) = rendered.chart {
            self.output_store
                .put(
                    &StoragePath::for_artifact(&report_id, CHART_FILENAME),
                    chart.into(),
                )
                .await?;
        }

        tracing::info!(report_id = %report_id.as_uuid(), chart_produced, "Report rendered");

        Ok(PreviewOutcome {
            report_id,
            preview_url: format!("/artifacts/{}/{}", report_id.as_uuid(), REPORT_FILENAME),
            chart_produced,
        })
    }

    fn validate_extension(&self, filename: &str) -> Result<FileKind, PreviewError> {
        let extension = FileKind::extension_of(filename)
            .ok_or_else(|| PreviewError::UnsupportedFileType(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(PreviewError::UnsupportedFileType(extension));
        }

        FileKind::from_extension(&extension)
            .ok_or(PreviewError::UnsupportedFileType(extension))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("error reading file: {0}")]
    Extraction(#[from] ExtractError),
    #[error("response synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("report rendering: {0}")]
    Rendering(#[from] RenderError),
    #[error("storage: {0}")]
    Storage(#[from] BlobStoreError),
}

impl PreviewError {
    /// Client input errors get a 400-class response; the rest are server
    /// failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType(_) | Self::Extraction(_)
        )
    }
}
