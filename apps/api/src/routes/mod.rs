pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cv::handlers as cv_handlers;
use crate::dashboard;
use crate::interview::handlers as interview_handlers;
use crate::jobs::handlers as jobs_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile + navigation gate
        .route("/api/v1/meta", get(profile_handlers::handle_meta))
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile)
                .put(profile_handlers::handle_update_profile),
        )
        .route("/api/v1/navigate", get(profile_handlers::handle_navigate))
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        // Job search
        .route("/api/v1/jobs", get(jobs_handlers::handle_get_results))
        .route("/api/v1/jobs/search", post(jobs_handlers::handle_search))
        // CV tailor
        .route("/api/v1/cv/analyze", post(cv_handlers::handle_analyze))
        .route(
            "/api/v1/cv/cover-letter",
            post(cv_handlers::handle_cover_letter),
        )
        .route("/api/v1/cv/analysis/save", post(cv_handlers::handle_save))
        .route(
            "/api/v1/cv/analysis/saved",
            get(cv_handlers::handle_get_saved),
        )
        .route("/api/v1/cv/reset", post(cv_handlers::handle_reset))
        // Interview coach
        .route(
            "/api/v1/interview",
            get(interview_handlers::handle_get_session),
        )
        .route(
            "/api/v1/interview/start",
            post(interview_handlers::handle_start),
        )
        .route(
            "/api/v1/interview/answer",
            post(interview_handlers::handle_answer),
        )
        .with_state(state)
}
