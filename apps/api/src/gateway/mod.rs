//! Model Gateway — the typed boundary between the feature flows and the
//! external intelligence provider.
//!
//! One operation per feature, each a single stateless round trip: the full
//! conversational context is supplied by the caller on every call, so the
//! gateway holds no session state. `AppState` carries the gateway as
//! `Arc<dyn ModelGateway>`, so tests substitute a stub without network access.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::cv::CvAnalysis;
use crate::models::interview::{InterviewFeedback, TranscriptTurn};
use crate::models::profile::UserProfile;
use crate::models::search::SearchResult;

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The underlying provider call failed (transport, non-2xx, malformed
    /// response envelope). Never retried automatically.
    #[error("model provider call failed: {0}")]
    Provider(#[from] LlmError),

    /// The provider answered, but the payload did not satisfy the CV-analysis
    /// schema. Fatal to that call; no partial analysis is returned.
    #[error("Failed to analyze CV content.")]
    CvAnalysisFailed(#[source] LlmError),
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Web-grounded job matching for a profile. Returns the report text and
    /// any grounding sources; provider errors propagate untouched.
    async fn match_jobs(&self, profile: &UserProfile) -> Result<SearchResult, GatewayError>;

    /// Schema-constrained CV analysis. The optional job description is a
    /// latent extension point, accepted but unused by current flows.
    /// A payload failing the schema surfaces as `CvAnalysisFailed`.
    async fn analyze_cv(
        &self,
        cv_text: &str,
        job_description: Option<&str>,
    ) -> Result<CvAnalysis, GatewayError>;

    /// Free-text "Lettre de Motivation" generation. Empty provider content
    /// yields a fixed fallback string, never an error.
    async fn generate_cover_letter(
        &self,
        cv_text: &str,
        analysis: &CvAnalysis,
        job_description: &str,
    ) -> Result<String, GatewayError>;

    /// Next interview question given the full prior transcript. Empty
    /// provider content yields a fixed fallback question.
    async fn interview_question(
        &self,
        profile: &UserProfile,
        history: &[TranscriptTurn],
    ) -> Result<String, GatewayError>;

    /// Structured feedback over a finished transcript. A payload failing the
    /// schema is absorbed into `None` ("feedback unavailable"), never an
    /// error; transport failures still propagate.
    async fn interview_feedback(
        &self,
        history: &[TranscriptTurn],
    ) -> Result<Option<InterviewFeedback>, GatewayError>;
}

#[cfg(test)]
pub mod stub {
    //! Scripted in-process gateway for controller tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// What a scripted operation should do on its next call.
    #[derive(Debug, Clone)]
    pub enum Scripted<T> {
        Succeed(T),
        FailProvider,
        FailSchema,
    }

    impl<T: Clone> Scripted<T> {
        fn outcome(&self) -> Result<T, GatewayError> {
            match self {
                Scripted::Succeed(value) => Ok(value.clone()),
                Scripted::FailProvider => Err(GatewayError::Provider(LlmError::Api {
                    status: 503,
                    message: "stubbed provider outage".to_string(),
                })),
                Scripted::FailSchema => Err(GatewayError::CvAnalysisFailed(LlmError::EmptyContent)),
            }
        }
    }

    /// A `ModelGateway` with per-operation scripted outcomes and call
    /// counters, for asserting what the controllers actually invoked.
    pub struct StubGateway {
        pub jobs: Mutex<Scripted<SearchResult>>,
        pub analysis: Mutex<Scripted<CvAnalysis>>,
        pub letter: Mutex<Scripted<String>>,
        pub question: Mutex<Scripted<String>>,
        pub feedback: Mutex<Scripted<Option<InterviewFeedback>>>,
        pub jobs_calls: AtomicUsize,
        pub analysis_calls: AtomicUsize,
        pub letter_calls: AtomicUsize,
        pub question_calls: AtomicUsize,
        pub feedback_calls: AtomicUsize,
    }

    impl Default for StubGateway {
        fn default() -> Self {
            Self {
                jobs: Mutex::new(Scripted::Succeed(SearchResult {
                    text: "**Junior Backend Engineer** — Paris".to_string(),
                    sources: vec![],
                })),
                analysis: Mutex::new(Scripted::Succeed(CvAnalysis {
                    formatting_score: 82,
                    content_suggestions: vec!["Add quantified achievements".to_string()],
                    cultural_tips: vec!["Use formal vous tone".to_string()],
                    reformatted_cv: "# Jane Doe\n...".to_string(),
                })),
                letter: Mutex::new(Scripted::Succeed("Madame, Monsieur,".to_string())),
                question: Mutex::new(Scripted::Succeed(
                    "Why do you want to work in France?".to_string(),
                )),
                feedback: Mutex::new(Scripted::Succeed(Some(InterviewFeedback {
                    strengths: vec!["Concrete examples".to_string()],
                    weaknesses: vec!["Rambling openers".to_string()],
                    cultural_nuance: "Keep the vous register.".to_string(),
                }))),
                jobs_calls: AtomicUsize::new(0),
                analysis_calls: AtomicUsize::new(0),
                letter_calls: AtomicUsize::new(0),
                question_calls: AtomicUsize::new(0),
                feedback_calls: AtomicUsize::new(0),
            }
        }
    }

    impl StubGateway {
        pub fn script_analysis(&self, scripted: Scripted<CvAnalysis>) {
            *self.analysis.lock().unwrap() = scripted;
        }

        pub fn script_jobs(&self, scripted: Scripted<SearchResult>) {
            *self.jobs.lock().unwrap() = scripted;
        }

        pub fn script_question(&self, scripted: Scripted<String>) {
            *self.question.lock().unwrap() = scripted;
        }

        pub fn script_feedback(&self, scripted: Scripted<Option<InterviewFeedback>>) {
            *self.feedback.lock().unwrap() = scripted;
        }
    }

    #[async_trait]
    impl ModelGateway for StubGateway {
        async fn match_jobs(&self, _profile: &UserProfile) -> Result<SearchResult, GatewayError> {
            self.jobs_calls.fetch_add(1, Ordering::SeqCst);
            self.jobs.lock().unwrap().outcome()
        }

        async fn analyze_cv(
            &self,
            _cv_text: &str,
            _job_description: Option<&str>,
        ) -> Result<CvAnalysis, GatewayError> {
            self.analysis_calls.fetch_add(1, Ordering::SeqCst);
            self.analysis.lock().unwrap().outcome()
        }

        async fn generate_cover_letter(
            &self,
            _cv_text: &str,
            _analysis: &CvAnalysis,
            _job_description: &str,
        ) -> Result<String, GatewayError> {
            self.letter_calls.fetch_add(1, Ordering::SeqCst);
            self.letter.lock().unwrap().outcome()
        }

        async fn interview_question(
            &self,
            _profile: &UserProfile,
            _history: &[TranscriptTurn],
        ) -> Result<String, GatewayError> {
            self.question_calls.fetch_add(1, Ordering::SeqCst);
            self.question.lock().unwrap().outcome()
        }

        async fn interview_feedback(
            &self,
            _history: &[TranscriptTurn],
        ) -> Result<Option<InterviewFeedback>, GatewayError> {
            self.feedback_calls.fetch_add(1, Ordering::SeqCst);
            self.feedback.lock().unwrap().outcome()
        }
    }
}
