use super::table::DataTable;

/// Normalized result of extracting an uploaded document. Exactly one
/// representational mode applies per request: structured formats yield a
/// table, text formats yield the full text, and a PDF whose text layer
/// could not be read yields a tagged failure that the pipeline carries
/// forward instead of aborting the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedContent {
    Table(DataTable),
    Text(String),
    Failed { reason: String },
}

impl ExtractedContent {
    pub fn table(&self) -> Option<&DataTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Single display string fed to synthesis and rendering.
    pub fn flattened(&self) -> String {
        match self {
            Self::Table(table) => table.to_display_string(),
            Self::Text(text) => text.clone(),
            Self::Failed { reason } => format!("Error extracting text from PDF: {reason}"),
        }
    }

    /// Structured note for the renderer when extraction did not complete.
    pub fn extraction_note(&self) -> Option<String> {
        match self {
            Self::Failed { reason } => Some(format!("Text extraction failed: {reason}")),
            _ => None,
        }
    }
}
