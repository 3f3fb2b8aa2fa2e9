// Integration tests for the interview session controller
//
// Time is paused so the simulated "thinking" delay elapses instantly
// once the runtime is idle.

use mock_interview::domain;
use mock_interview::questions::{QuestionProvider, StaticQuestionBank};
use mock_interview::session::{
    is_alternating, ChannelSink, CompletionSink, InterviewSession, Message, Role, SessionConfig,
    SessionOutcome, SessionPhase, SubmitOutcome,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sink that records every callback
#[derive(Default)]
struct RecordingSink {
    completions: Mutex<Vec<Vec<Message>>>,
    backs: Mutex<usize>,
}

impl CompletionSink for RecordingSink {
    fn on_complete(&self, transcript: Vec<Message>) {
        self.completions.lock().unwrap().push(transcript);
    }

    fn on_back(&self) {
        *self.backs.lock().unwrap() += 1;
    }
}

fn start(domain_id: &str, sink: Arc<RecordingSink>) -> InterviewSession {
    let domain = domain::find(domain_id).expect("domain exists");
    InterviewSession::new(
        SessionConfig::default(),
        domain,
        Arc::new(StaticQuestionBank::new()),
        sink,
    )
}

#[tokio::test(start_paused = true)]
async fn test_session_starts_with_first_question() {
    let session = start("cloud", Arc::new(RecordingSink::default()));

    let messages = session.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Interviewer);
    assert_eq!(
        messages[0].content,
        StaticQuestionBank::new().question_for("cloud", 0)
    );
    assert_eq!(session.question_index().await, 0);
    assert!(!session.is_awaiting_next().await);
}

#[tokio::test(start_paused = true)]
async fn test_empty_answers_are_ignored() {
    let session = start("hr", Arc::new(RecordingSink::default()));

    for blank in ["", "   ", "\n\t "] {
        assert_eq!(session.submit(blank).await, SubmitOutcome::Ignored);
    }

    assert_eq!(session.messages().await.len(), 1);
    assert_eq!(session.question_index().await, 0);
    assert!(!session.is_awaiting_next().await);
}

#[tokio::test(start_paused = true)]
async fn test_answer_is_trimmed_and_draft_cleared() {
    let session = start("hr", Arc::new(RecordingSink::default()));

    session.set_draft("  I like teams  ").await;
    assert_eq!(session.send_draft().await, SubmitOutcome::Accepted);
    assert_eq!(session.draft().await, "");
    assert!(session.is_awaiting_next().await);

    let messages = session.messages().await;
    assert_eq!(messages[1].role, Role::Candidate);
    assert_eq!(messages[1].content, "I like teams");
}

#[tokio::test(start_paused = true)]
async fn test_submission_rejected_while_awaiting_next() {
    let session = start("design", Arc::new(RecordingSink::default()));

    assert_eq!(session.submit("first").await, SubmitOutcome::Accepted);
    assert_eq!(session.submit("second").await, SubmitOutcome::Busy);
    assert_eq!(session.messages().await.len(), 2);

    session.settle().await;

    assert!(!session.is_awaiting_next().await);
    assert_eq!(session.question_index().await, 1);
    assert_eq!(session.submit("second").await, SubmitOutcome::Accepted);
}

#[tokio::test(start_paused = true)]
async fn test_next_question_waits_for_delay() {
    let session = start("product", Arc::new(RecordingSink::default()));

    session.submit("I like building things").await;

    tokio::time::advance(Duration::from_millis(1000)).await;
    assert_eq!(session.messages().await.len(), 2);
    assert!(session.is_awaiting_next().await);

    tokio::time::advance(Duration::from_millis(600)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(session.messages().await.len(), 3);
    assert!(!session.is_awaiting_next().await);
}

#[tokio::test(start_paused = true)]
async fn test_next_question_not_posted_before_delay() {
    let config = SessionConfig {
        answer_delay: Duration::from_millis(3000),
        ..SessionConfig::default()
    };
    let session = InterviewSession::new(
        config,
        domain::find("hr").unwrap(),
        Arc::new(StaticQuestionBank::new()),
        Arc::new(RecordingSink::default()),
    );

    session.submit("answer").await;

    tokio::time::advance(Duration::from_millis(2900)).await;
    tokio::task::yield_now().await;
    assert_eq!(session.messages().await.len(), 2);

    tokio::time::advance(Duration::from_millis(100)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(session.messages().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_question_index_advances_by_one() {
    let sink = Arc::new(RecordingSink::default());
    let session = start("security", sink.clone());

    for expected in 1..5 {
        session.submit("answer").await;
        session.settle().await;
        assert_eq!(session.question_index().await, expected);
        let progress = session.progress().await;
        assert!((0.0..=1.0).contains(&progress));
    }

    // Final answer completes without moving past the last question
    session.submit("last answer").await;
    session.settle().await;
    assert_eq!(session.question_index().await, 4);
    assert_eq!(session.phase().await, SessionPhase::Completed);
    assert!((session.progress().await - 1.0).abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn test_software_scenario_completes_once_with_ten_messages() {
    let sink = Arc::new(RecordingSink::default());
    let session = start("software", sink.clone());

    let answers = [
        "I am a backend engineer...",
        "REST uses resources...",
        "I'd use consistent hashing...",
        "A race condition in...",
        "Code review and tests",
    ];

    for answer in answers {
        assert_eq!(session.submit(answer).await, SubmitOutcome::Accepted);
        session.settle().await;
    }

    let completions = sink.completions.lock().unwrap().clone();
    assert_eq!(completions.len(), 1);

    let transcript = &completions[0];
    assert_eq!(transcript.len(), 10);
    assert!(is_alternating(transcript));

    let bank = StaticQuestionBank::new();
    assert_eq!(transcript[8].content, bank.question_for("software", 4));
    assert_eq!(transcript[9].content, "Code review and tests");
    for (i, answer) in answers.iter().enumerate() {
        assert_eq!(transcript[2 * i].content, bank.question_for("software", i));
        assert_eq!(transcript[2 * i + 1].content, *answer);
    }

    // Ids strictly increase with position
    assert!(transcript.windows(2).all(|w| w[0].id < w[1].id));

    // Closed sessions accept nothing and never complete twice
    assert_eq!(session.submit("one more").await, SubmitOutcome::Closed);
    assert!(!session.exit().await);
    assert_eq!(sink.completions.lock().unwrap().len(), 1);
    assert_eq!(*sink.backs.lock().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_exit_mid_delay_discards_pending_question() {
    let sink = Arc::new(RecordingSink::default());
    let session = start("analytics", sink.clone());

    session.submit("answer one").await;
    tokio::time::advance(Duration::from_millis(500)).await;

    assert!(session.exit().await);
    session.settle().await;
    tokio::time::advance(Duration::from_secs(10)).await;

    assert_eq!(session.messages().await.len(), 2);
    assert_eq!(session.phase().await, SessionPhase::Exited);
    assert!(!session.is_awaiting_next().await);
    assert!(sink.completions.lock().unwrap().is_empty());
    assert_eq!(*sink.backs.lock().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_exit_before_final_question_never_completes() {
    let sink = Arc::new(RecordingSink::default());
    let session = start("hr", sink.clone());

    for _ in 0..4 {
        session.submit("answer").await;
        session.settle().await;
    }
    session.submit("final answer").await;
    session.exit().await;
    session.settle().await;

    assert!(sink.completions.lock().unwrap().is_empty());
    assert_eq!(session.messages().await.len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_cancels_pending_question() {
    let sink = Arc::new(RecordingSink::default());
    let session = start("hr", sink.clone());

    for _ in 0..4 {
        session.submit("answer").await;
        session.settle().await;
    }
    session.submit("final answer").await;
    drop(session);

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(sink.completions.lock().unwrap().is_empty());
    assert_eq!(*sink.backs.lock().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_channel_sink_delivers_outcome() {
    let (sink, mut rx) = ChannelSink::new();
    let config = SessionConfig {
        total_questions: 2,
        ..SessionConfig::default()
    };
    let session = InterviewSession::new(
        config,
        domain::find("data-science").unwrap(),
        Arc::new(StaticQuestionBank::new()),
        Arc::new(sink),
    );

    session.submit("stats").await;
    session.settle().await;
    session.submit("models").await;
    session.settle().await;

    match rx.recv().await {
        Some(SessionOutcome::Completed(transcript)) => assert_eq!(transcript.len(), 4),
        other => panic!("expected completion, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_reflects_state() {
    let session = start("cloud", Arc::new(RecordingSink::default()));

    assert!(session.toggle_recording().await);
    session.submit("AWS mostly").await;

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.domain_id, "cloud");
    assert_eq!(snapshot.question_number(), 1);
    assert_eq!(snapshot.total_questions, 5);
    assert!(snapshot.awaiting_next);
    assert!(snapshot.recording);
    assert_eq!(snapshot.message_count, 2);
    assert_eq!(snapshot.phase, SessionPhase::Active);
    assert!((snapshot.progress - 0.2).abs() < 1e-9);

    assert!(!session.toggle_recording().await);
}
