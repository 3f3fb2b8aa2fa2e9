use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "interview-<uuid>")
    pub session_id: String,

    /// Number of questions asked before the session completes
    /// Default: 5
    pub total_questions: usize,

    /// Simulated "thinking time" before the next question appears
    /// Default: 1.5 seconds
    pub answer_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            total_questions: 5,
            answer_delay: Duration::from_millis(1500),
        }
    }
}
