//! CV tailoring flow: analyze → save snapshot / generate cover letter.
//!
//! Linear rather than a full state machine — each action is independently
//! re-triggerable, gated on what exists so far: a cover letter needs a
//! successful analysis plus a job description, saving needs an analysis.
//! A new analysis clears any previously generated letter.
//!
//! Like the interview session, provider calls run against sequence-stamped
//! tickets so a completion superseded by a newer analyze or reset is
//! discarded instead of clobbering state.

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::errors::AppError;
use crate::gateway::{GatewayError, ModelGateway};
use crate::models::cv::{CvAnalysis, SavedAnalysis};
use crate::storage::{Storage, SAVED_ANALYSIS_KEY};

/// How long the "saved" indicator stays lit before reverting to idle.
pub const SAVED_INDICATOR_RESET: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    Idle,
    Saved,
}

/// Ticket for an in-flight analysis.
#[derive(Debug)]
pub struct AnalyzeTicket {
    pub seq: u64,
}

/// Ticket for an in-flight cover-letter generation, carrying the inputs the
/// gateway call needs.
#[derive(Debug)]
pub struct LetterTicket {
    pub seq: u64,
    pub cv_text: String,
    pub analysis: CvAnalysis,
}

/// Snapshot returned to the client after every transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvView {
    pub cv_text: String,
    pub analysis: Option<CvAnalysis>,
    pub cover_letter: Option<String>,
    pub save_status: SaveStatus,
    pub pending: bool,
}

#[derive(Debug, Default)]
pub struct CvTailorSession {
    cv_text: String,
    analysis: Option<CvAnalysis>,
    cover_letter: Option<String>,
    pending: bool,
    saved_at: Option<Instant>,
    seq: u64,
}

impl CvTailorSession {
    pub fn analysis(&self) -> Option<&CvAnalysis> {
        self.analysis.as_ref()
    }

    /// The transient saved indicator: lit for a fixed window after a save.
    pub fn save_status(&self) -> SaveStatus {
        match self.saved_at {
            Some(at) if at.elapsed() < SAVED_INDICATOR_RESET => SaveStatus::Saved,
            _ => SaveStatus::Idle,
        }
    }

    pub fn view(&self) -> CvView {
        CvView {
            cv_text: self.cv_text.clone(),
            analysis: self.analysis.clone(),
            cover_letter: self.cover_letter.clone(),
            save_status: self.save_status(),
            pending: self.pending,
        }
    }

    /// Accepts CV text and reserves the analysis call. Clears any previous
    /// cover letter and saved indicator; the prior analysis stays until a new
    /// one actually succeeds.
    pub fn begin_analyze(&mut self, cv_text: &str) -> Result<AnalyzeTicket, AppError> {
        if self.pending {
            return Err(AppError::RequestInFlight);
        }
        if cv_text.trim().is_empty() {
            return Err(AppError::Validation("CV text is required".to_string()));
        }
        self.cv_text = cv_text.to_string();
        self.cover_letter = None;
        self.saved_at = None;
        self.pending = true;
        self.seq += 1;
        Ok(AnalyzeTicket { seq: self.seq })
    }

    /// Applies an analysis outcome; failures leave the prior analysis intact.
    pub fn finish_analyze(
        &mut self,
        seq: u64,
        outcome: Result<CvAnalysis, GatewayError>,
    ) -> Result<(), AppError> {
        if seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Flips the saved indicator and returns the snapshot to persist.
    pub fn mark_saved(&mut self) -> Result<SavedAnalysis, AppError> {
        let analysis = self.analysis.clone().ok_or_else(|| {
            AppError::Validation("Run a CV analysis before saving".to_string())
        })?;
        self.saved_at = Some(Instant::now());
        Ok(SavedAnalysis {
            analysis,
            saved_at: chrono::Utc::now(),
        })
    }

    /// Reserves a cover-letter generation. Requires a prior successful
    /// analysis and a non-empty job description.
    pub fn begin_letter(&mut self, job_description: &str) -> Result<LetterTicket, AppError> {
        if self.pending {
            return Err(AppError::RequestInFlight);
        }
        let analysis = self.analysis.clone().ok_or_else(|| {
            AppError::Validation(
                "Run a CV analysis before generating a cover letter".to_string(),
            )
        })?;
        if job_description.trim().is_empty() {
            return Err(AppError::Validation("Job description is required".to_string()));
        }
        self.pending = true;
        self.seq += 1;
        Ok(LetterTicket {
            seq: self.seq,
            cv_text: self.cv_text.clone(),
            analysis,
        })
    }

    /// Applies a cover-letter outcome; failures keep any prior letter.
    pub fn finish_letter(
        &mut self,
        seq: u64,
        outcome: Result<String, GatewayError>,
    ) -> Result<(), AppError> {
        if seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(letter) => {
                self.cover_letter = Some(letter);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Discards the session and invalidates any in-flight call, so a stale
    /// completion cannot resurrect discarded state.
    pub fn reset(&mut self) {
        self.cv_text.clear();
        self.analysis = None;
        self.cover_letter = None;
        self.saved_at = None;
        self.pending = false;
        self.seq += 1;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flows
// ────────────────────────────────────────────────────────────────────────────

pub async fn run_analyze(
    session: &Mutex<CvTailorSession>,
    gateway: &dyn ModelGateway,
    cv_text: &str,
    job_description: Option<&str>,
) -> Result<CvView, AppError> {
    let ticket = session.lock().await.begin_analyze(cv_text)?;
    let outcome = gateway.analyze_cv(cv_text, job_description).await;

    let mut session = session.lock().await;
    session.finish_analyze(ticket.seq, outcome)?;
    Ok(session.view())
}

pub async fn run_generate_letter(
    session: &Mutex<CvTailorSession>,
    gateway: &dyn ModelGateway,
    job_description: &str,
) -> Result<CvView, AppError> {
    let ticket = session.lock().await.begin_letter(job_description)?;
    let outcome = gateway
        .generate_cover_letter(&ticket.cv_text, &ticket.analysis, job_description)
        .await;

    let mut session = session.lock().await;
    session.finish_letter(ticket.seq, outcome)?;
    Ok(session.view())
}

/// Persists the current analysis as a timestamped snapshot and lights the
/// saved indicator.
pub async fn run_save(
    session: &Mutex<CvTailorSession>,
    storage: &Storage,
) -> Result<CvView, AppError> {
    let mut session = session.lock().await;
    let snapshot = session.mark_saved()?;
    storage.write_json(SAVED_ANALYSIS_KEY, &snapshot);
    Ok(session.view())
}
