use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::profile::{UserProfile, FIELDS, LANGUAGE_LEVELS, VISA_TYPES};
use crate::nav::{self, Page};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub is_complete: bool,
    pub is_form_valid: bool,
}

impl ProfileView {
    fn of(profile: UserProfile) -> Self {
        let is_complete = profile.is_complete();
        let is_form_valid = profile.is_form_valid();
        Self {
            profile,
            is_complete,
            is_form_valid,
        }
    }
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileView> {
    let profile = state.profile.read().await.clone();
    Json(ProfileView::of(profile))
}

/// PUT /api/v1/profile — the single write channel for profile mutations;
/// persists on every change.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(updated): Json<UserProfile>,
) -> Json<ProfileView> {
    let mut profile = state.profile.write().await;
    *profile = updated.clone();
    state.profile_store.save(&profile);
    Json(ProfileView::of(updated))
}

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub to: Page,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub requested: Page,
    pub resolved: Page,
    pub profile_complete: bool,
}

/// GET /api/v1/navigate?to=<page> — navigation-gate resolution.
pub async fn handle_navigate(
    State(state): State<AppState>,
    Query(query): Query<NavigateQuery>,
) -> Json<NavigateResponse> {
    let profile = state.profile.read().await;
    let resolved = nav::resolve(query.to, &profile);
    Json(NavigateResponse {
        requested: query.to,
        resolved,
        profile_complete: profile.is_complete(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub fields: &'static [&'static str],
    pub visa_types: &'static [&'static str],
    pub language_levels: &'static [&'static str],
}

/// GET /api/v1/meta — the option lists the profile and search forms offer.
pub async fn handle_meta() -> Json<MetaResponse> {
    Json(MetaResponse {
        fields: FIELDS,
        visa_types: VISA_TYPES,
        language_levels: LANGUAGE_LEVELS,
    })
}
