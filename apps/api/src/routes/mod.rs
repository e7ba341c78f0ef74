pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::structure::handlers as structure;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route("/api/v1/resumes/score", post(scoring::handle_score))
        .route(
            "/api/v1/resumes/structure",
            post(structure::handle_structure),
        )
        .route("/api/v1/resumes/download", get(render::handle_download))
        .with_state(state)
}
