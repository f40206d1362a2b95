use axum::{extract::State, Json};
use serde::Deserialize;

use crate::cv::tailor::{self, CvView};
use crate::errors::AppError;
use crate::models::cv::SavedAnalysis;
use crate::state::AppState;
use crate::storage::SAVED_ANALYSIS_KEY;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub cv_text: String,
    /// Latent extension point — accepted, forwarded, unused by current flows.
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: String,
}

/// POST /api/v1/cv/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<CvView>, AppError> {
    let view = tailor::run_analyze(
        &state.cv,
        state.gateway.as_ref(),
        &req.cv_text,
        req.job_description.as_deref(),
    )
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/cv/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CvView>, AppError> {
    let view =
        tailor::run_generate_letter(&state.cv, state.gateway.as_ref(), &req.job_description)
            .await?;
    Ok(Json(view))
}

/// POST /api/v1/cv/analysis/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<CvView>, AppError> {
    let view = tailor::run_save(&state.cv, &state.storage).await?;
    Ok(Json(view))
}

/// GET /api/v1/cv/analysis/saved
pub async fn handle_get_saved(
    State(state): State<AppState>,
) -> Result<Json<SavedAnalysis>, AppError> {
    state
        .storage
        .read_json::<SavedAnalysis>(SAVED_ANALYSIS_KEY)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No saved analysis".to_string()))
}

/// POST /api/v1/cv/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<CvView> {
    let mut session = state.cv.lock().await;
    session.reset();
    Json(session.view())
}
