use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::application::ports::{BlobStoreError, ContentExtractor, ReportRenderer, ResponseSynthesizer};
use crate::domain::{ReportId, StoragePath, CHART_FILENAME, REPORT_FILENAME};
use crate::presentation::state::AppState;

use super::preview::ErrorResponse;

/// Serves generated artifacts by report id. Only the two fixed artifact
/// names are addressable; everything else is a 404 without touching disk.
#[tracing::instrument(skip(state))]
pub async fn artifact_handler<E, S, R>(
    State(state): State<AppState<E, S, R>>,
    Path((report_id, filename)): Path<(String, String)>,
) -> impl IntoResponse
where
    E: ContentExtractor + 'static,
    S: ResponseSynthesizer + 'static,
    R: ReportRenderer + 'static,
{
    let Ok(id) = Uuid::parse_str(&report_id) else {
        return not_found();
    };
    if filename != REPORT_FILENAME && filename != CHART_FILENAME {
        return not_found();
    }

    let path = StoragePath::for_artifact(&ReportId::from_uuid(id), &filename);
    match state.output_store.fetch(&path).await {
        Ok(bytes) => {
            let content_type = if filename.ends_with(".pdf") {
                "application/pdf"
            } else {
                "image/png"
            };
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(BlobStoreError::NotFound(_)) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, path = %path, "Artifact fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "artifact not found".to_string(),
        }),
    )
        .into_response()
}
