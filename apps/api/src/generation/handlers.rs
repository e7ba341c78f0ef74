//! Axum route handler for the Generation API.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::cleaner::clean_text;
use crate::generation::fallback::generate_local_resume;
use crate::generation::generator::{generate_resume, GenerateRequest};
use crate::render::docx::save_resume_docx;
use crate::scoring::ats::AtsExplanation;
use crate::state::AppState;
use crate::structure::{structure, Block};

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ats_score: u32,
    pub explanation: AtsExplanation,
    /// Filename accepted by the download endpoint.
    pub resume_file: String,
    pub resume_text: String,
    /// Structured form of `resume_text`, one renderable unit per block.
    pub blocks: Vec<Block>,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/resumes/generate
///
/// Full pipeline: model generation (offline fallback on failure) →
/// clean → ATS score against the JD → structure → render to `.docx`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.validate()?;

    let raw_text = match generate_resume(&state.llm, &request).await {
        Ok(text) => text,
        Err(err) => {
            warn!("model generation failed, using offline fallback: {err}");
            generate_local_resume(&request)
        }
    };

    let cleaned = clean_text(&raw_text);
    let report = state.ats_scorer.score(&cleaned, &request.jd).await?;
    let blocks = structure(&cleaned);

    let output_dir = state.config.output_dir.clone();
    let name = request.name.clone();
    let render_blocks = blocks.clone();
    let resume_file =
        tokio::task::spawn_blocking(move || save_resume_docx(&output_dir, &name, &render_blocks))
            .await
            .map_err(|err| AppError::Internal(anyhow::anyhow!("render task failed: {err}")))?
            .map_err(|err| AppError::Render(format!("failed to save resume: {err:#}")))?;

    info!(
        "generated resume for role '{}': score {}, file {resume_file}",
        request.role, report.score
    );

    Ok(Json(GenerateResponse {
        ats_score: report.score,
        explanation: report.explanation,
        resume_file,
        resume_text: cleaned,
        blocks,
        generated_at: Utc::now(),
    }))
}
