//! Axum route handler for the structure-preview endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::structure::{structure, Block};

#[derive(Debug, Deserialize)]
pub struct StructureRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct StructureResponse {
    pub blocks: Vec<Block>,
}

/// POST /api/v1/resumes/structure
///
/// Runs the structuring engine over arbitrary resume text and returns
/// the block sequence. Lets a frontend preview the rendered layout
/// without generating or uploading anything.
pub async fn handle_structure(
    Json(request): Json<StructureRequest>,
) -> Result<Json<StructureResponse>, AppError> {
    let blocks = structure(&request.resume_text);
    Ok(Json(StructureResponse { blocks }))
}
