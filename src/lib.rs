pub mod config;
pub mod domain;
pub mod questions;
pub mod report;
pub mod router;
pub mod session;
pub mod terminal;

pub use config::Config;
pub use domain::Domain;
pub use questions::{QuestionProvider, StaticQuestionBank};
pub use report::{InterviewReport, RandomScorer, Scorer};
pub use router::{Router, Screen, ScreenEvent, TransitionError};
pub use session::{
    ChannelSink, CompletionSink, InterviewSession, Message, Role, SessionConfig, SessionOutcome,
    SessionSnapshot, SubmitOutcome,
};
pub use terminal::{InterviewResult, RunOptions, Terminal};
