use std::fmt;

use super::document::DocumentId;
use super::report::ReportId;

/// Blob key of the form `<uuid>/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_upload(document_id: &DocumentId, filename: &str) -> Self {
        Self(format!("{}/{}", document_id.as_uuid(), filename))
    }

    pub fn for_artifact(report_id: &ReportId, filename: &str) -> Self {
        Self(format!("{}/{}", report_id.as_uuid(), filename))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce an uploaded filename to a safe, storage-friendly name: path
/// components are stripped and anything outside `[A-Za-z0-9._-]` becomes an
/// underscore. An empty or dot-only result falls back to "upload".
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
