use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::coach;
use crate::interview::session::InterviewView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

/// GET /api/v1/interview
pub async fn handle_get_session(State(state): State<AppState>) -> Json<InterviewView> {
    Json(state.interview.lock().await.view())
}

/// POST /api/v1/interview/start — also restarts a completed session.
pub async fn handle_start(
    State(state): State<AppState>,
) -> Result<Json<InterviewView>, AppError> {
    let profile = state.profile.read().await.clone();
    let view = coach::run_start(&state.interview, state.gateway.as_ref(), &profile).await?;
    Ok(Json(view))
}

/// POST /api/v1/interview/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<InterviewView>, AppError> {
    let profile = state.profile.read().await.clone();
    let view =
        coach::run_answer(&state.interview, state.gateway.as_ref(), &profile, &req.text).await?;
    Ok(Json(view))
}
