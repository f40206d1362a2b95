use serde::{Deserialize, Serialize};

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "AI")]
    Ai,
    User,
}

/// One turn of the mock-interview transcript. Turns are append-only for the
/// lifetime of a session and discarded on restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptTurn {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Ai,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }
}

/// Structured feedback produced once per completed session. Field names
/// double as the provider's response-schema property names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFeedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub cultural_nuance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_wire_names() {
        let turn = TranscriptTurn::ai("Tell me about yourself.");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["speaker"], "AI");

        let turn = TranscriptTurn::user("I studied at Sorbonne.");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["speaker"], "User");
    }

    #[test]
    fn test_feedback_requires_all_three_fields() {
        let missing_nuance = serde_json::json!({
            "strengths": ["clear answers"],
            "weaknesses": []
        });
        assert!(serde_json::from_value::<InterviewFeedback>(missing_nuance).is_err());
    }

    #[test]
    fn test_feedback_camel_case_wire_shape() {
        let feedback = InterviewFeedback {
            strengths: vec!["Concrete examples".to_string()],
            weaknesses: vec!["Too informal".to_string()],
            cultural_nuance: "Prefer vous until invited otherwise.".to_string(),
        };
        let json = serde_json::to_value(&feedback).unwrap();
        assert!(json.get("culturalNuance").is_some());
    }
}
