//! Question lookup
//!
//! The session controller asks a [`QuestionProvider`] for the prompt at a
//! given position. [`StaticQuestionBank`] serves the built-in per-domain
//! tables; a generated or remote source can implement the same trait.

mod bank;

pub use bank::StaticQuestionBank;

/// Maps (domain, position) to prompt text
///
/// Implementations must return a non-empty string for every index and
/// every domain identifier, falling back rather than failing.
pub trait QuestionProvider: Send + Sync {
    fn question_for(&self, domain_id: &str, index: usize) -> String;
}
