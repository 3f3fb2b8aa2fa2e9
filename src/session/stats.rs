use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Accepting answers
    Active,
    /// All questions answered, transcript delivered
    Completed,
    /// Left early, no transcript delivered
    Exited,
}

/// Point-in-time view of a session, used for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,

    pub domain_id: String,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// 0-based index of the current question
    pub question_index: usize,

    /// Fixed question count for the session
    pub total_questions: usize,

    /// (question_index + 1) / total_questions, within [0, 1]
    pub progress: f64,

    /// Whether the next question is being prepared
    pub awaiting_next: bool,

    /// Microphone toggle (display only)
    pub recording: bool,

    pub phase: SessionPhase,

    /// Number of messages exchanged so far
    pub message_count: usize,
}

impl SessionSnapshot {
    /// 1-based question number for display ("Question 2/5")
    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }
}

/// Fraction of the interview reached, clamped to [0, 1]
pub fn progress(question_index: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 1.0;
    }
    ((question_index + 1) as f64 / total_questions as f64).clamp(0.0, 1.0)
}
