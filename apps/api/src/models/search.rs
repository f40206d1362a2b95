use serde::{Deserialize, Serialize};

/// A citation attached to a web-grounded search response — where the
/// provider sourced a claim. The URI must be an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl GroundingSource {
    /// Hostname of the source URI, for compact display next to the title.
    /// `None` if the URI does not parse as an absolute URL.
    pub fn hostname(&self) -> Option<String> {
        reqwest::Url::parse(&self.uri)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

/// Result of one job-match query: a free-form Markdown report plus the
/// grounding sources it was built from. Recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}
