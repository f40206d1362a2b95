//! Job-search flow: one grounded `match_jobs` call at a time, results
//! replaced atomically on completion. A completion for a superseded query is
//! discarded, and a failed search keeps the prior results visible.

use serde::Serialize;
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::gateway::{GatewayError, ModelGateway};
use crate::models::profile::UserProfile;
use crate::models::search::SearchResult;

/// One grounding source as rendered: title, link, and the derived hostname.
#[derive(Debug, Clone, Serialize)]
pub struct SourceView {
    pub title: String,
    pub uri: String,
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultView {
    pub text: String,
    pub sources: Vec<SourceView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchView {
    pub result: Option<SearchResultView>,
    pub pending: bool,
}

#[derive(Debug)]
pub struct SearchTicket {
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct JobSearchSession {
    result: Option<SearchResult>,
    pending: bool,
    seq: u64,
}

impl JobSearchSession {
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> JobSearchView {
        JobSearchView {
            result: self.result.as_ref().map(|r| SearchResultView {
                text: r.text.clone(),
                sources: r
                    .sources
                    .iter()
                    .map(|s| SourceView {
                        title: s.title.clone(),
                        uri: s.uri.clone(),
                        hostname: s.hostname(),
                    })
                    .collect(),
            }),
            pending: self.pending,
        }
    }

    pub fn begin_search(&mut self) -> Result<SearchTicket, AppError> {
        if self.pending {
            return Err(AppError::RequestInFlight);
        }
        self.pending = true;
        self.seq += 1;
        Ok(SearchTicket { seq: self.seq })
    }

    /// Applies a search outcome: results replace the previous ones wholesale;
    /// failures and superseded completions leave them untouched.
    pub fn finish_search(
        &mut self,
        seq: u64,
        outcome: Result<SearchResult, GatewayError>,
    ) -> Result<(), AppError> {
        if seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// The profile actually sent to the matcher: the stored profile with the
/// page's field selection and search keywords layered on top.
pub fn search_profile(
    base: &UserProfile,
    field: Option<&str>,
    search_term: Option<&str>,
) -> UserProfile {
    let mut profile = base.clone();
    if let Some(field) = field {
        profile.field = field.to_string();
    }
    profile.preferences = search_term.unwrap_or_default().to_string();
    profile
}

pub async fn run_search(
    session: &Mutex<JobSearchSession>,
    gateway: &dyn ModelGateway,
    profile: &UserProfile,
) -> Result<JobSearchView, AppError> {
    let ticket = session.lock().await.begin_search()?;
    let outcome = gateway.match_jobs(profile).await;

    let mut session = session.lock().await;
    session.finish_search(ticket.seq, outcome)?;
    Ok(session.view())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::gateway::stub::{Scripted, StubGateway};
    use crate::models::search::GroundingSource;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Sarah Chen".to_string(),
            field: "Software Engineering".to_string(),
            preferences: "Paris".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_profile_layers_overrides() {
        let effective = search_profile(&profile(), Some("Data Science"), Some("CDI Paris"));
        assert_eq!(effective.field, "Data Science");
        assert_eq!(effective.preferences, "CDI Paris");
        assert_eq!(effective.name, "Sarah Chen");
    }

    #[test]
    fn test_search_profile_defaults_to_stored_field_and_empty_term() {
        let effective = search_profile(&profile(), None, None);
        assert_eq!(effective.field, "Software Engineering");
        assert_eq!(effective.preferences, "");
    }

    #[tokio::test]
    async fn test_search_replaces_results() {
        let session = Mutex::new(JobSearchSession::default());
        let gateway = StubGateway::default();

        let view = run_search(&session, &gateway, &profile()).await.unwrap();
        assert!(view.result.unwrap().text.contains("Junior Backend Engineer"));

        gateway.script_jobs(Scripted::Succeed(SearchResult {
            text: "**Data Analyst** — Lyon".to_string(),
            sources: vec![],
        }));
        let view = run_search(&session, &gateway, &profile()).await.unwrap();
        assert_eq!(view.result.unwrap().text, "**Data Analyst** — Lyon");
        assert_eq!(gateway.jobs_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_prior_results() {
        let session = Mutex::new(JobSearchSession::default());
        let gateway = StubGateway::default();

        run_search(&session, &gateway, &profile()).await.unwrap();
        gateway.script_jobs(Scripted::FailProvider);
        let result = run_search(&session, &gateway, &profile()).await;
        assert!(matches!(
            result,
            Err(AppError::Gateway(GatewayError::Provider(_)))
        ));

        let view = session.lock().await.view();
        assert!(view.result.unwrap().text.contains("Junior Backend Engineer"));
        assert!(!view.pending);
    }

    #[tokio::test]
    async fn test_zero_sources_render_as_empty_list() {
        let session = Mutex::new(JobSearchSession::default());
        let gateway = StubGateway::default();
        gateway.script_jobs(Scripted::Succeed(SearchResult {
            text: "Nothing matched this week.".to_string(),
            sources: vec![],
        }));

        let view = run_search(&session, &gateway, &profile()).await.unwrap();
        let result = view.result.unwrap();
        assert!(result.sources.is_empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sources"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_source_views_carry_hostnames() {
        let session = Mutex::new(JobSearchSession::default());
        let gateway = StubGateway::default();
        gateway.script_jobs(Scripted::Succeed(SearchResult {
            text: "report".to_string(),
            sources: vec![GroundingSource {
                title: "Backend role".to_string(),
                uri: "https://www.apec.fr/offre/9".to_string(),
            }],
        }));

        let view = run_search(&session, &gateway, &profile()).await.unwrap();
        let sources = view.result.unwrap().sources;
        assert_eq!(sources[0].hostname.as_deref(), Some("www.apec.fr"));
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let session = Mutex::new(JobSearchSession::default());

        let ticket = session.lock().await.begin_search().unwrap();
        let late = session.lock().await.finish_search(
            ticket.seq + 1,
            Ok(SearchResult {
                text: "late".to_string(),
                sources: vec![],
            }),
        );
        assert!(matches!(late, Err(AppError::Superseded)));
        assert!(session.lock().await.result().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_search_is_rejected() {
        let session = Mutex::new(JobSearchSession::default());
        let _ticket = session.lock().await.begin_search().unwrap();
        assert!(matches!(
            session.lock().await.begin_search(),
            Err(AppError::RequestInFlight)
        ));
    }
}
