//! Axum route handler for the upload-and-score endpoint.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::scoring::ats::AtsExplanation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub filename: String,
    /// Character count of the extracted text.
    pub full_length: usize,
    pub ats_score: u32,
    pub explanation: AtsExplanation,
}

/// POST /api/v1/resumes/score
///
/// Accepts a `.pdf` or `.docx` upload (multipart field `file`) with an
/// optional `jd` text field, extracts the text, and scores it against
/// the JD. Extraction is best-effort: an unsupported or unreadable
/// file scores as empty text rather than failing the request.
pub async fn handle_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    let mut filename = String::new();
    let mut payload: Option<Bytes> = None;
    let mut jd = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        // copy the name out before consuming the field body
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                filename = field.file_name().unwrap_or_default().to_string();
                payload = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
                );
            }
            Some("jd") => {
                jd = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read jd field: {e}")))?;
            }
            _ => {}
        }
    }

    let payload = payload.ok_or_else(|| {
        AppError::Validation("multipart field 'file' is required".to_string())
    })?;

    // Spool to a temp file so the extractors can sniff by extension,
    // exactly as they would for a file on disk.
    let suffix = upload_suffix(&filename);
    let text = tokio::task::spawn_blocking(move || -> Result<String, anyhow::Error> {
        let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile()?;
        tmp.write_all(&payload)?;
        Ok(extract_text(tmp.path()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
    .map_err(AppError::Internal)?;

    let jd_to_use = jd.trim();
    let report = state.ats_scorer.score(&text, jd_to_use).await?;

    info!(
        "scored upload '{}' ({} chars extracted): {}",
        filename,
        text.chars().count(),
        report.score
    );

    Ok(Json(ScoreResponse {
        filename,
        full_length: text.chars().count(),
        ats_score: report.score,
        explanation: report.explanation,
    }))
}

fn upload_suffix(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        ".pdf"
    } else if lower.ends_with(".docx") {
        ".docx"
    } else {
        ""
    }
}
