//! Interview session management
//!
//! This module provides the `InterviewSession` controller that manages:
//! - The ordered question/answer transcript
//! - The current question pointer and progress
//! - Draft input, typing and recording flags
//! - The cancellable delay before each next question
//! - Delivery of the finished transcript to a `CompletionSink`

mod config;
mod message;
mod session;
mod sink;
mod stats;

pub use config::SessionConfig;
pub use message::{is_alternating, Message, Role};
pub use session::{InterviewSession, SubmitOutcome};
pub use sink::{ChannelSink, CompletionSink, SessionOutcome};
pub use stats::{progress, SessionPhase, SessionSnapshot};
