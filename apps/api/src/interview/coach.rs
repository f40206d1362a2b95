//! Drives the interview session against the model gateway.
//!
//! The session lock is never held across a provider await: a transition
//! reserves a ticket, the call runs unlocked, and the outcome is applied only
//! if the ticket is still current.

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::gateway::ModelGateway;
use crate::interview::session::{InterviewSession, InterviewView, NextAction};
use crate::models::profile::UserProfile;

/// Starts (or restarts) the session and fetches the first question with an
/// empty history.
pub async fn run_start(
    session: &Mutex<InterviewSession>,
    gateway: &dyn ModelGateway,
    profile: &UserProfile,
) -> Result<InterviewView, AppError> {
    let ticket = session.lock().await.begin_start()?;
    let outcome = gateway.interview_question(profile, &[]).await;

    let mut session = session.lock().await;
    session.finish_start(ticket, outcome)?;
    Ok(session.view())
}

/// Submits one answer. Depending on the turn count this fetches either the
/// next question or — on the 4th answer — the session feedback.
pub async fn run_answer(
    session: &Mutex<InterviewSession>,
    gateway: &dyn ModelGateway,
    profile: &UserProfile,
    text: &str,
) -> Result<InterviewView, AppError> {
    let ticket = session.lock().await.begin_answer(text)?;

    match ticket.action {
        NextAction::Question { history } => {
            let outcome = gateway.interview_question(profile, &history).await;
            let mut session = session.lock().await;
            session.finish_question(ticket.seq, outcome)?;
            Ok(session.view())
        }
        NextAction::Feedback { history } => {
            let outcome = gateway.interview_feedback(&history).await;
            let mut session = session.lock().await;
            session.finish_feedback(ticket.seq, outcome)?;
            Ok(session.view())
        }
    }
}
