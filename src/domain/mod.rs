mod content;
mod document;
mod report;
mod storage_path;
mod table;

pub use content::ExtractedContent;
pub use document::{Document, DocumentId, FileKind};
pub use report::{ReportId, CHART_FILENAME, REPORT_FILENAME};
pub use storage_path::{sanitize_filename, StoragePath};
pub use table::{CellValue, Column, DataTable};
