//! Gemini-backed implementation of the model gateway.
//!
//! Prompt construction and response normalization live here; the wire calls
//! themselves go through `llm_client`. Search and interview turns use the
//! flash model, CV analysis and letters the pro model.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::gateway::prompts::{
    COVER_LETTER_FALLBACK, COVER_LETTER_PROMPT_TEMPLATE, CV_ANALYZE_PROMPT_TEMPLATE,
    DEFAULT_SOURCE_TITLE, INTERVIEW_FEEDBACK_PROMPT_TEMPLATE, INTERVIEW_QUESTION_FALLBACK,
    INTERVIEW_QUESTION_PROMPT_TEMPLATE, JOB_MATCH_PROMPT_TEMPLATE, NO_POSTINGS_FALLBACK,
};
use crate::gateway::{GatewayError, ModelGateway};
use crate::llm_client::{GeminiClient, LlmError, FLASH_MODEL, PRO_MODEL};
use crate::models::cv::CvAnalysis;
use crate::models::interview::{InterviewFeedback, TranscriptTurn};
use crate::models::profile::UserProfile;
use crate::models::search::SearchResult;

pub struct GeminiGateway {
    llm: GeminiClient,
}

impl GeminiGateway {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn match_jobs(&self, profile: &UserProfile) -> Result<SearchResult, GatewayError> {
        let prompt = build_job_match_prompt(profile);
        let response = self.llm.generate_grounded(FLASH_MODEL, &prompt).await?;

        let text = response
            .text()
            .unwrap_or_else(|| NO_POSTINGS_FALLBACK.to_string());
        let sources = response.grounding_sources(DEFAULT_SOURCE_TITLE);
        info!("Job match returned {} grounding sources", sources.len());

        Ok(SearchResult { text, sources })
    }

    async fn analyze_cv(
        &self,
        cv_text: &str,
        job_description: Option<&str>,
    ) -> Result<CvAnalysis, GatewayError> {
        let prompt = build_cv_analyze_prompt(cv_text, job_description);
        self.llm
            .generate_json::<CvAnalysis>(PRO_MODEL, &prompt, cv_analysis_schema())
            .await
            .map_err(|e| match e {
                LlmError::Parse(_) | LlmError::EmptyContent => GatewayError::CvAnalysisFailed(e),
                other => GatewayError::Provider(other),
            })
    }

    async fn generate_cover_letter(
        &self,
        cv_text: &str,
        analysis: &CvAnalysis,
        job_description: &str,
    ) -> Result<String, GatewayError> {
        let prompt = build_cover_letter_prompt(cv_text, analysis, job_description);
        let response = self.llm.generate(PRO_MODEL, &prompt).await?;
        Ok(response
            .text()
            .unwrap_or_else(|| COVER_LETTER_FALLBACK.to_string()))
    }

    async fn interview_question(
        &self,
        profile: &UserProfile,
        history: &[TranscriptTurn],
    ) -> Result<String, GatewayError> {
        let prompt = build_interview_question_prompt(profile, history);
        let response = self.llm.generate(FLASH_MODEL, &prompt).await?;
        Ok(response
            .text()
            .unwrap_or_else(|| INTERVIEW_QUESTION_FALLBACK.to_string()))
    }

    async fn interview_feedback(
        &self,
        history: &[TranscriptTurn],
    ) -> Result<Option<InterviewFeedback>, GatewayError> {
        let prompt = build_interview_feedback_prompt(history);
        match self
            .llm
            .generate_json::<InterviewFeedback>(FLASH_MODEL, &prompt, interview_feedback_schema())
            .await
        {
            Ok(feedback) => Ok(Some(feedback)),
            // Schema/parse failures mean "feedback unavailable", not an error
            Err(LlmError::Parse(_)) | Err(LlmError::EmptyContent) => Ok(None),
            Err(other) => Err(GatewayError::Provider(other)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

fn build_job_match_prompt(profile: &UserProfile) -> String {
    JOB_MATCH_PROMPT_TEMPLATE
        .replace("{field}", &profile.field)
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{visa_type}", &profile.visa_type)
        .replace("{language_level}", &profile.language_level)
        .replace("{preferences}", &profile.preferences)
}

fn build_cv_analyze_prompt(cv_text: &str, job_description: Option<&str>) -> String {
    let jd_context = match job_description {
        Some(jd) if !jd.trim().is_empty() => format!("Context: Applying for {jd}"),
        _ => String::new(),
    };
    CV_ANALYZE_PROMPT_TEMPLATE
        .replace("{jd_context}", &jd_context)
        .replace("{cv_text}", cv_text)
}

fn build_cover_letter_prompt(
    cv_text: &str,
    analysis: &CvAnalysis,
    job_description: &str,
) -> String {
    let analysis_json =
        serde_json::to_string(analysis).unwrap_or_else(|_| "{}".to_string());
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{cv_text}", cv_text)
        .replace("{analysis_json}", &analysis_json)
        .replace("{job_description}", job_description)
        .replace("{formatting_score}", &analysis.formatting_score.to_string())
}

fn build_interview_question_prompt(profile: &UserProfile, history: &[TranscriptTurn]) -> String {
    let profile_json = serde_json::to_string(profile).unwrap_or_else(|_| "{}".to_string());
    let history_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    INTERVIEW_QUESTION_PROMPT_TEMPLATE
        .replace("{field}", &profile.field)
        .replace("{profile_json}", &profile_json)
        .replace("{history_json}", &history_json)
        .replace("{visa_type}", &profile.visa_type)
}

fn build_interview_feedback_prompt(history: &[TranscriptTurn]) -> String {
    let history_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    INTERVIEW_FEEDBACK_PROMPT_TEMPLATE.replace("{history_json}", &history_json)
}

// ────────────────────────────────────────────────────────────────────────────
// Response schemas
// ────────────────────────────────────────────────────────────────────────────

fn cv_analysis_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "formattingScore": { "type": "INTEGER" },
            "contentSuggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "culturalTips": { "type": "ARRAY", "items": { "type": "STRING" } },
            "reformattedCV": { "type": "STRING" }
        },
        "required": ["formattingScore", "contentSuggestions", "culturalTips", "reformattedCV"]
    })
}

fn interview_feedback_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "culturalNuance": { "type": "STRING" }
        },
        "required": ["strengths", "weaknesses", "culturalNuance"]
    })
}
