use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{Document, ExtractedContent, FileKind};

pub struct PlainTextAdapter;

#[async_trait]
impl ContentExtractor for PlainTextAdapter {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.kind != FileKind::Txt {
            return Err(ExtractError::UnsupportedFileType(
                document.kind.as_str().to_string(),
            ));
        }

        String::from_utf8(data.to_vec())
            .map(ExtractedContent::Text)
            .map_err(|e| ExtractError::Malformed {
                kind: "txt",
                reason: e.to_string(),
            })
    }
}
