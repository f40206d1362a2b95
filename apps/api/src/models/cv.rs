use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured CV analysis returned by the provider.
///
/// Field names double as the provider's response-schema property names, so
/// this struct is the single source of truth for that contract:
/// 3–5 content suggestions expected, score on the French "CV professionnel"
/// scale of 0–100, and a reformatted Markdown rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysis {
    pub formatting_score: u32,
    pub content_suggestions: Vec<String>,
    pub cultural_tips: Vec<String>,
    #[serde(rename = "reformattedCV")]
    pub reformatted_cv: String,
}

/// A saved analysis snapshot as written to durable storage — the analysis
/// itself plus the moment it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    #[serde(flatten)]
    pub analysis: CvAnalysis,
    pub saved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> CvAnalysis {
        CvAnalysis {
            formatting_score: 82,
            content_suggestions: vec!["Add quantified achievements".to_string()],
            cultural_tips: vec!["Use formal vous tone".to_string()],
            reformatted_cv: "# Jane Doe\n...".to_string(),
        }
    }

    #[test]
    fn test_analysis_requires_all_four_fields() {
        let missing_score = serde_json::json!({
            "contentSuggestions": [],
            "culturalTips": [],
            "reformattedCV": ""
        });
        assert!(serde_json::from_value::<CvAnalysis>(missing_score).is_err());
    }

    #[test]
    fn test_analysis_camel_case_wire_shape() {
        let json = serde_json::to_value(sample_analysis()).unwrap();
        assert_eq!(json["formattingScore"], 82);
        assert!(json.get("reformattedCV").is_some());
    }

    #[test]
    fn test_saved_analysis_flattens_with_timestamp() {
        let saved = SavedAnalysis {
            analysis: sample_analysis(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_value(&saved).unwrap();
        // Flattened: analysis fields and savedAt live side by side.
        assert_eq!(json["formattingScore"], 82);
        assert!(json.get("savedAt").is_some());
        let recovered: SavedAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(recovered.analysis, sample_analysis());
    }
}
