use super::config::SessionConfig;
use super::message::Message;
use super::sink::CompletionSink;
use super::stats::{self, SessionPhase, SessionSnapshot};
use crate::domain::Domain;
use crate::questions::QuestionProvider;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Result of handing an answer to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Answer recorded, next question scheduled
    Accepted,
    /// Empty or whitespace-only text, nothing changed
    Ignored,
    /// The next question is still being prepared
    Busy,
    /// The session already completed or was exited
    Closed,
}

/// Mutable state guarded by the session mutex
struct SessionState {
    messages: Vec<Message>,
    question_index: usize,
    draft: String,
    awaiting_next: bool,
    recording: bool,
    phase: SessionPhase,
    last_message_id: u64,
}

impl SessionState {
    fn next_message_id(&mut self) -> u64 {
        self.last_message_id += 1;
        self.last_message_id
    }
}

/// A fixed-length question/answer exchange for one domain
///
/// Each accepted answer schedules the next question after a simulated
/// delay. Once the last answer is in, the transcript goes to the
/// [`CompletionSink`]. Exiting or dropping the session cancels the
/// pending question.
pub struct InterviewSession {
    /// Session configuration
    config: SessionConfig,

    /// Domain the questions are drawn from
    domain: Domain,

    /// Prompt lookup
    questions: Arc<dyn QuestionProvider>,

    /// Receives the transcript or the early exit
    sink: Arc<dyn CompletionSink>,

    /// When the session started
    started_at: chrono::DateTime<chrono::Utc>,

    state: Arc<Mutex<SessionState>>,

    /// Cancelled on exit or drop so a pending question never lands
    cancel: CancellationToken,

    /// Handle for the task preparing the next question
    pending_task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl InterviewSession {
    /// Create a session and post the first question
    pub fn new(
        config: SessionConfig,
        domain: Domain,
        questions: Arc<dyn QuestionProvider>,
        sink: Arc<dyn CompletionSink>,
    ) -> Self {
        info!(
            "Creating interview session: {} (domain={}, questions={})",
            config.session_id, domain.id, config.total_questions
        );

        if config.total_questions == 0 {
            warn!("Session {} configured with zero questions", config.session_id);
        }

        let first = Message::interviewer(1, questions.question_for(&domain.id, 0));

        let state = SessionState {
            messages: vec![first],
            question_index: 0,
            draft: String::new(),
            awaiting_next: false,
            recording: false,
            phase: SessionPhase::Active,
            last_message_id: 1,
        };

        Self {
            config,
            domain,
            questions,
            sink,
            started_at: Utc::now(),
            state: Arc::new(Mutex::new(state)),
            cancel: CancellationToken::new(),
            pending_task_handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn total_questions(&self) -> usize {
        self.config.total_questions
    }

    /// Submit an answer
    pub async fn submit(&self, answer: &str) -> SubmitOutcome {
        let answer = answer.trim();
        if answer.is_empty() {
            debug!("Ignoring empty answer");
            return SubmitOutcome::Ignored;
        }

        let mut state = self.state.lock().await;

        if state.phase != SessionPhase::Active {
            debug!("Session {} is closed, answer dropped", self.config.session_id);
            return SubmitOutcome::Closed;
        }

        if state.awaiting_next {
            debug!("Next question pending, answer rejected");
            return SubmitOutcome::Busy;
        }

        let id = state.next_message_id();
        state.messages.push(Message::candidate(id, answer));
        state.draft.clear();
        state.awaiting_next = true;

        info!(
            "Answer {}/{} accepted for session {}",
            state.question_index + 1,
            self.config.total_questions,
            self.config.session_id
        );

        let task = self.spawn_next_question();

        {
            let mut handle = self.pending_task_handle.lock().await;
            *handle = Some(task);
        }

        SubmitOutcome::Accepted
    }

    /// Submit whatever is currently in the draft
    pub async fn send_draft(&self) -> SubmitOutcome {
        let draft = {
            let state = self.state.lock().await;
            state.draft.clone()
        };
        self.submit(&draft).await
    }

    /// Replace the unsent draft
    pub async fn set_draft(&self, text: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.draft = text.into();
    }

    pub async fn draft(&self) -> String {
        self.state.lock().await.draft.clone()
    }

    /// Flip the microphone flag, returning the new value
    pub async fn toggle_recording(&self) -> bool {
        let mut state = self.state.lock().await;
        state.recording = !state.recording;
        debug!("Recording toggled: {}", state.recording);
        state.recording
    }

    /// Leave the interview before completion
    ///
    /// Returns false if the session had already completed or exited.
    pub async fn exit(&self) -> bool {
        self.cancel.cancel();

        {
            let mut state = self.state.lock().await;
            if state.phase != SessionPhase::Active {
                return false;
            }
            state.phase = SessionPhase::Exited;
            state.awaiting_next = false;
        }

        info!("Session {} exited early", self.config.session_id);
        self.sink.on_back();
        true
    }

    /// Wait for the pending question task, if any, to finish
    pub async fn settle(&self) {
        let task = {
            let mut handle = self.pending_task_handle.lock().await;
            handle.take()
        };

        if let Some(task) = task {
            if let Err(e) = task.await {
                error!("Question task panicked: {}", e);
            }
        }
    }

    /// Copy of the messages exchanged so far
    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.messages.clone()
    }

    pub async fn question_index(&self) -> usize {
        self.state.lock().await.question_index
    }

    pub async fn is_awaiting_next(&self) -> bool {
        self.state.lock().await.awaiting_next
    }

    pub async fn phase(&self) -> SessionPhase {
        self.state.lock().await.phase
    }

    pub async fn progress(&self) -> f64 {
        let index = self.question_index().await;
        stats::progress(index, self.config.total_questions)
    }

    /// Current session view for rendering
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;

        SessionSnapshot {
            session_id: self.config.session_id.clone(),
            domain_id: self.domain.id.clone(),
            started_at: self.started_at,
            question_index: state.question_index,
            total_questions: self.config.total_questions,
            progress: stats::progress(state.question_index, self.config.total_questions),
            awaiting_next: state.awaiting_next,
            recording: state.recording,
            phase: state.phase,
            message_count: state.messages.len(),
        }
    }

    /// Spawn the delayed step that posts the next question or completes
    fn spawn_next_question(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let questions = Arc::clone(&self.questions);
        let sink = Arc::clone(&self.sink);
        let cancel = self.cancel.clone();
        let delay = self.config.answer_delay;
        let total_questions = self.config.total_questions;
        let domain_id = self.domain.id.clone();
        let session_id = self.config.session_id.clone();

        // Measured from submission, not from when the task is first polled
        let deadline = tokio::time::Instant::now() + delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Pending question cancelled for session {}", session_id);
                    return;
                }
                _ = tokio::time::sleep_until(deadline) => {}
            }

            let mut guard = state.lock().await;

            // exit() may have won the lock after the timer fired
            if cancel.is_cancelled() || guard.phase != SessionPhase::Active {
                debug!("Session {} closed, dropping next question", session_id);
                return;
            }

            let next_index = guard.question_index + 1;

            if next_index >= total_questions {
                guard.awaiting_next = false;
                guard.phase = SessionPhase::Completed;
                let transcript = guard.messages.clone();
                drop(guard);

                info!(
                    "Session {} complete ({} messages)",
                    session_id,
                    transcript.len()
                );
                sink.on_complete(transcript);
                return;
            }

            let text = questions.question_for(&domain_id, next_index);
            let id = guard.next_message_id();
            guard.messages.push(Message::interviewer(id, text));
            guard.question_index = next_index;
            guard.awaiting_next = false;

            debug!(
                "Session {} advanced to question {}/{}",
                session_id,
                next_index + 1,
                total_questions
            );
        })
    }
}

impl Drop for InterviewSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
