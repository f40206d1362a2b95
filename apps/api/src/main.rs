mod config;
mod cv;
mod dashboard;
mod errors;
mod gateway;
mod interview;
mod jobs;
mod llm_client;
mod models;
mod nav;
mod profile;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::tailor::CvTailorSession;
use crate::gateway::{GeminiGateway, ModelGateway};
use crate::interview::session::InterviewSession;
use crate::jobs::search::JobSearchSession;
use crate::llm_client::GeminiClient;
use crate::profile::store::ProfileStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Open durable local storage and load the persisted profile
    let storage = Storage::open(&config.data_dir)?;
    let profile_store = ProfileStore::new(storage.clone());
    let user_profile = profile_store.load();
    info!(
        "Profile loaded (complete: {})",
        user_profile.is_complete()
    );

    // Initialize the model gateway
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    let gateway: Arc<dyn ModelGateway> = Arc::new(GeminiGateway::new(llm));
    info!("Model gateway initialized");

    // Build app state
    let state = AppState {
        config: config.clone(),
        storage,
        profile_store,
        profile: Arc::new(RwLock::new(user_profile)),
        gateway,
        jobs: Arc::new(Mutex::new(JobSearchSession::default())),
        cv: Arc::new(Mutex::new(CvTailorSession::default())),
        interview: Arc::new(Mutex::new(InterviewSession::default())),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
