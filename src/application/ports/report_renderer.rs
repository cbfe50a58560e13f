use async_trait::async_trait;

use crate::domain::DataTable;

/// Everything a renderer needs to assemble one report.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub prompt: String,
    pub extracted_text: String,
    pub response: String,
    pub table: Option<DataTable>,
    pub extraction_note: Option<String>,
}

/// Rendered artifacts as bytes; the caller decides where they live.
#[derive(Debug)]
pub struct RenderedReport {
    pub document: Vec<u8>,
    pub chart: Option<Vec<u8>>,
}

#[async_trait]
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, input: ReportInput) -> Result<RenderedReport, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document assembly failed: {0}")]
    Document(String),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("render task failed: {0}")]
    TaskFailed(String),
}
