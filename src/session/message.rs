use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interviewer,
    Candidate,
}

/// One turn in the interview exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Position-derived identifier, increasing within a session
    pub id: u64,

    pub role: Role,

    /// Question text or the candidate's trimmed answer
    pub content: String,

    /// When the message was created (display only)
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn interviewer(id: u64, content: impl Into<String>) -> Self {
        Self::new(id, Role::Interviewer, content)
    }

    pub fn candidate(id: u64, content: impl Into<String>) -> Self {
        Self::new(id, Role::Candidate, content)
    }

    fn new(id: u64, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Whether a transcript alternates interviewer/candidate, interviewer first
pub fn is_alternating(messages: &[Message]) -> bool {
    messages.iter().enumerate().all(|(i, m)| {
        let expected = if i % 2 == 0 {
            Role::Interviewer
        } else {
            Role::Candidate
        };
        m.role == expected
    })
}
