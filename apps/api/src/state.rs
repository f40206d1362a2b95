use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::cv::tailor::CvTailorSession;
use crate::gateway::ModelGateway;
use crate::interview::session::InterviewSession;
use crate::jobs::search::JobSearchSession;
use crate::models::profile::UserProfile;
use crate::profile::store::ProfileStore;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The profile is owned here and passed down read-mostly; mutation funnels
/// exclusively through the profile handlers. The gateway is injected as a
/// trait object so tests swap in a stub without network access.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub profile_store: ProfileStore,
    pub profile: Arc<RwLock<UserProfile>>,
    pub gateway: Arc<dyn ModelGateway>,
    pub jobs: Arc<Mutex<JobSearchSession>>,
    pub cv: Arc<Mutex<CvTailorSession>>,
    pub interview: Arc<Mutex<InterviewSession>>,
}
