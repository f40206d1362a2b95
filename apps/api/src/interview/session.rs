//! Interview coach session — the mock-interview state machine.
//!
//! Phases: Idle → InProgress → AwaitingFeedback (after the 4th answer) →
//! Complete. Complete is terminal for the session; starting again discards
//! the transcript and feedback.
//!
//! Transitions are split into `begin_*` / `finish_*` pairs so no lock is held
//! across the provider round trip. `begin_*` hands out a sequence-stamped
//! ticket; a `finish_*` whose ticket is no longer current is discarded
//! instead of overwriting newer state.

use serde::Serialize;

use crate::errors::AppError;
use crate::gateway::GatewayError;
use crate::models::interview::{InterviewFeedback, Speaker, TranscriptTurn};

/// Closing AI message appended once feedback has been fetched.
pub const CLOSING_MESSAGE: &str =
    "Thank you for these responses. I've prepared a feedback report for you above.";

/// A session ends after this many user answers.
pub const USER_TURNS_PER_SESSION: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    InProgress,
    AwaitingFeedback,
    Complete,
}

/// Ticket for an in-flight first-question fetch.
#[derive(Debug)]
pub struct StartTicket {
    pub seq: u64,
}

/// Ticket for an in-flight answer: carries the provider call to make and the
/// transcript snapshot to make it with.
#[derive(Debug)]
pub struct AnswerTicket {
    pub seq: u64,
    pub action: NextAction,
}

#[derive(Debug)]
pub enum NextAction {
    Question { history: Vec<TranscriptTurn> },
    Feedback { history: Vec<TranscriptTurn> },
}

/// Snapshot returned to the client after every transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewView {
    pub phase: Phase,
    pub transcript: Vec<TranscriptTurn>,
    pub feedback: Option<InterviewFeedback>,
    pub pending: bool,
    pub user_turns: usize,
}

#[derive(Debug, Default)]
pub struct InterviewSession {
    phase: Phase,
    transcript: Vec<TranscriptTurn>,
    feedback: Option<InterviewFeedback>,
    pending: bool,
    seq: u64,
}

impl InterviewSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn user_turns(&self) -> usize {
        self.transcript
            .iter()
            .filter(|t| t.speaker == Speaker::User)
            .count()
    }

    pub fn view(&self) -> InterviewView {
        InterviewView {
            phase: self.phase,
            transcript: self.transcript.clone(),
            feedback: self.feedback.clone(),
            pending: self.pending,
            user_turns: self.user_turns(),
        }
    }

    /// Starts (or restarts) a session: discards any prior transcript and
    /// feedback and reserves the first-question fetch.
    pub fn begin_start(&mut self) -> Result<StartTicket, AppError> {
        if self.pending {
            return Err(AppError::RequestInFlight);
        }
        self.transcript.clear();
        self.feedback = None;
        self.phase = Phase::InProgress;
        self.pending = true;
        self.seq += 1;
        Ok(StartTicket { seq: self.seq })
    }

    /// Applies the first-question outcome. A failure returns the session to
    /// Idle so start can simply be pressed again.
    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        outcome: Result<String, GatewayError>,
    ) -> Result<(), AppError> {
        if ticket.seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(question) => {
                self.transcript.push(TranscriptTurn::ai(question));
                Ok(())
            }
            Err(e) => {
                self.phase = Phase::Idle;
                Err(e.into())
            }
        }
    }

    /// Accepts a user answer and reserves the follow-up provider call: the
    /// next question, or — on the 4th answer — the one feedback fetch.
    ///
    /// Rejected when the text is empty, a call is outstanding, or the session
    /// is not in progress.
    pub fn begin_answer(&mut self, text: &str) -> Result<AnswerTicket, AppError> {
        if self.pending {
            return Err(AppError::RequestInFlight);
        }
        match self.phase {
            Phase::InProgress => {}
            Phase::Idle => {
                return Err(AppError::Validation(
                    "Start the interview before answering".to_string(),
                ))
            }
            Phase::AwaitingFeedback => return Err(AppError::RequestInFlight),
            Phase::Complete => {
                return Err(AppError::Validation(
                    "The session is complete — restart to practice again".to_string(),
                ))
            }
        }
        if text.trim().is_empty() {
            return Err(AppError::Validation("Answer text is required".to_string()));
        }

        self.transcript.push(TranscriptTurn::user(text));
        self.pending = true;
        self.seq += 1;

        let history = self.transcript.clone();
        let action = if self.user_turns() >= USER_TURNS_PER_SESSION {
            self.phase = Phase::AwaitingFeedback;
            NextAction::Feedback { history }
        } else {
            NextAction::Question { history }
        };
        Ok(AnswerTicket {
            seq: self.seq,
            action,
        })
    }

    /// Applies a next-question outcome. On failure the just-submitted answer
    /// is rolled back so prior state stays intact and it can be resubmitted.
    pub fn finish_question(
        &mut self,
        seq: u64,
        outcome: Result<String, GatewayError>,
    ) -> Result<(), AppError> {
        if seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(question) => {
                self.transcript.push(TranscriptTurn::ai(question));
                Ok(())
            }
            Err(e) => {
                self.transcript.pop();
                Err(e.into())
            }
        }
    }

    /// Applies the feedback outcome. `None` means "feedback unavailable" —
    /// the session still completes, with the closing message appended.
    /// A provider failure rolls back the 4th answer.
    pub fn finish_feedback(
        &mut self,
        seq: u64,
        outcome: Result<Option<InterviewFeedback>, GatewayError>,
    ) -> Result<(), AppError> {
        if seq != self.seq {
            return Err(AppError::Superseded);
        }
        self.pending = false;
        match outcome {
            Ok(feedback) => {
                self.feedback = feedback;
                self.transcript.push(TranscriptTurn::ai(CLOSING_MESSAGE));
                self.phase = Phase::Complete;
                Ok(())
            }
            Err(e) => {
                self.transcript.pop();
                self.phase = Phase::InProgress;
                Err(e.into())
            }
        }
    }
}
