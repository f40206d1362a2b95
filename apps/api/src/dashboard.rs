//! Dashboard summary — composes the profile and stored progress into the
//! greeting, checklist, and roadmap the dashboard page renders.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::interview::session::Phase;
use crate::models::cv::SavedAnalysis;
use crate::models::profile::UserProfile;
use crate::nav::Page;
use crate::state::AppState;
use crate::storage::SAVED_ANALYSIS_KEY;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub first_name: String,
    pub field: String,
    pub visa_type: String,
    pub checklist: Checklist,
    pub roadmap: Vec<SuggestionItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub cv_optimized: bool,
    pub preferences_set: bool,
    pub first_mock_interview: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub target: Option<Page>,
}

fn roadmap() -> Vec<SuggestionItem> {
    vec![
        SuggestionItem {
            title: "Polish your CV for the French market",
            description: "French recruiters value precise formatting and bilingual nuances. \
                          Let's optimize yours.",
            action: "Optimize CV",
            target: Some(Page::CvTailor),
        },
        SuggestionItem {
            title: "Practice a mock interview",
            description: "Four questions tailored to your field and visa situation, \
                          with cultural feedback at the end.",
            action: "Start Practice Session",
            target: Some(Page::InterviewCoach),
        },
        SuggestionItem {
            title: "Visa Rule Update (Oct 2024)",
            description: "Clarification on APS extension timelines for non-EU Master graduates.",
            action: "Check Guide",
            target: None,
        },
    ]
}

pub fn build_summary(
    profile: &UserProfile,
    has_saved_analysis: bool,
    interview_completed: bool,
) -> DashboardSummary {
    DashboardSummary {
        first_name: profile.first_name().to_string(),
        field: profile.field.clone(),
        visa_type: profile.visa_type.clone(),
        checklist: Checklist {
            cv_optimized: has_saved_analysis,
            preferences_set: !profile.preferences.trim().is_empty(),
            first_mock_interview: interview_completed,
        },
        roadmap: roadmap(),
    }
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let profile = state.profile.read().await.clone();
    let has_saved_analysis = state
        .storage
        .read_json::<SavedAnalysis>(SAVED_ANALYSIS_KEY)
        .is_some();
    let interview_completed = state.interview.lock().await.phase() == Phase::Complete;
    Json(build_summary(&profile, has_saved_analysis, interview_completed))
}
