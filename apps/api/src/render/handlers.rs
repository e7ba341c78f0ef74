//! Axum route handler for resume downloads.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::errors::AppError;
use crate::render::DOCX_CONTENT_TYPE;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub filename: String,
}

/// GET /api/v1/resumes/download?filename=
///
/// Serves a previously rendered `.docx` from the output directory as
/// an attachment. Only bare filenames are accepted — anything that
/// could escape the output directory is rejected outright.
pub async fn handle_download(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<Response, AppError> {
    let filename = params.filename;
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '"'])
        || filename.chars().any(char::is_control)
    {
        return Err(AppError::Validation("invalid filename".to_string()));
    }

    let path = state.config.output_dir.join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("Resume file {filename} not found")))?;

    let headers = [
        (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
