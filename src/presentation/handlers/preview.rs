use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{ContentExtractor, ReportRenderer, ResponseSynthesizer};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct PreviewResponse {
    pub report_id: String,
    pub preview_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn preview_handler<E, S, R>(
    State(state): State<AppState<E, S, R>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: ContentExtractor + 'static,
    S: ResponseSynthesizer + 'static,
    R: ReportRenderer + 'static,
{
    let mut file: Option<(String, Bytes)> = None;
    let mut prompt = String::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.name().map(str::to_string).as_deref() {
                Some("file") => {
                    let filename = field.file_name().unwrap_or("unknown").to_string();
                    match field.bytes().await {
                        Ok(data) => {
                            tracing::debug!(filename = %filename, bytes = data.len(), "File field received");
                            file = Some((filename, data));
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to read file bytes");
                            return (
                                StatusCode::BAD_REQUEST,
                                Json(ErrorResponse {
                                    error: format!("Failed to read file: {}", e),
                                }),
                            )
                                .into_response();
                        }
                    }
                }
                Some("prompt") => match field.text().await {
                    Ok(text) => prompt = text,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read prompt field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read prompt: {}", e),
                            }),
                        )
                            .into_response();
                    }
                },
                _ => {}
            },
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, data)) = file else {
        tracing::warn!("Preview request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    match state.preview_service.preview(&filename, &data, &prompt).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(PreviewResponse {
                report_id: outcome.report_id.as_uuid().to_string(),
                preview_url: outcome.preview_url,
            }),
        )
            .into_response(),
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, filename = %filename, "Preview rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Preview failed");
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
