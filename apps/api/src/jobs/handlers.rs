use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::search::{self, JobSearchView};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub field: Option<String>,
    pub search_term: Option<String>,
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<JobSearchView>, AppError> {
    let base = state.profile.read().await.clone();
    let effective =
        search::search_profile(&base, req.field.as_deref(), req.search_term.as_deref());
    let view = search::run_search(&state.jobs, state.gateway.as_ref(), &effective).await?;
    Ok(Json(view))
}

/// GET /api/v1/jobs — last results without issuing a new search.
pub async fn handle_get_results(State(state): State<AppState>) -> Json<JobSearchView> {
    Json(state.jobs.lock().await.view())
}
